//! Medication fixtures for creating in-memory test data.

use entity::medication;

/// Default test medication name.
pub const DEFAULT_NAME: &str = "Test-Medication";

/// Default medication weight in grams.
pub const DEFAULT_WEIGHT: i32 = 100;

/// Default medication code.
pub const DEFAULT_CODE: &str = "MED_TEST";

/// Creates a medication entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test-Medication"`
/// - weight: `100`
/// - code: `"MED_TEST"`
/// - image_url: `None`
pub fn entity() -> medication::Model {
    entity_builder().build()
}

/// Creates a medication entity builder for customization.
pub fn entity_builder() -> MedicationEntityBuilder {
    MedicationEntityBuilder::default()
}

/// Builder for creating customized medication entity models.
pub struct MedicationEntityBuilder {
    id: i32,
    name: String,
    weight: i32,
    code: String,
    image_url: Option<String>,
}

impl Default for MedicationEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            weight: DEFAULT_WEIGHT,
            code: DEFAULT_CODE.to_string(),
            image_url: None,
        }
    }
}

impl MedicationEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    /// Builds the medication entity model.
    pub fn build(self) -> medication::Model {
        medication::Model {
            id: self.id,
            name: self.name,
            weight: self.weight,
            code: self.code,
            image_url: self.image_url,
        }
    }
}
