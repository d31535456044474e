use super::*;

/// Tests adding a medication to the catalog.
///
/// Expected: Ok with every attribute persisted
#[tokio::test]
async fn creates_medication() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MedicationRepository::new(db);
    let medication = repo.create(create_param("MED_1")).await?;

    assert_eq!(medication.name, "Paracetamol-500");
    assert_eq!(medication.weight, 50);
    assert_eq!(medication.code, "MED_1");
    assert_eq!(medication.image_url.as_deref(), Some("paracetamol.jpg"));

    Ok(())
}

/// Tests adding a medication whose code is already in the catalog.
///
/// Expected: Err(MedicationError::DuplicateCode)
#[tokio::test]
async fn rejects_duplicate_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::medication::MedicationFactory::new(db)
        .code("MED_1")
        .build()
        .await?;

    let repo = MedicationRepository::new(db);
    let result = repo.create(create_param("MED_1")).await;

    assert!(matches!(
        result,
        Err(AppError::MedicationErr(MedicationError::DuplicateCode(ref code))) if code == "MED_1"
    ));

    Ok(())
}
