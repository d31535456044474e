use super::*;

/// Tests looking up a medication by ID and by code.
///
/// Expected: Ok(Some) for existing keys
#[tokio::test]
async fn finds_medication_by_id_and_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::medication::MedicationFactory::new(db)
        .code("MED_FIND")
        .build()
        .await?;

    let repo = MedicationRepository::new(db);

    let by_id = repo.find_by_id(created.id).await?;
    assert_eq!(by_id.map(|m| m.code), Some("MED_FIND".to_string()));

    let by_code = repo.find_by_code("MED_FIND").await?;
    assert_eq!(by_code.map(|m| m.id), Some(created.id));

    Ok(())
}

/// Tests looking up medications that do not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_medication() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MedicationRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());
    assert!(repo.find_by_code("MED_NONE").await?.is_none());

    Ok(())
}
