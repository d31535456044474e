use super::*;

/// Tests recording a medication as loaded on a drone.
///
/// Expected: Ok with record linking both IDs
#[tokio::test]
async fn creates_loading_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::create_drone(db).await?;
    let medication = factory::medication::create_medication(db).await?;

    let repo = DroneMedicationRepository::new(db);
    let record = repo.create(drone.id, medication.id).await?;

    assert_eq!(record.drone_id, drone.id);
    assert_eq!(record.medication_id, medication.id);
    assert_eq!(repo.get_medications_by_drone(drone.id).await?.len(), 1);

    Ok(())
}

/// Tests recording a load for a drone that does not exist.
///
/// Verifies the foreign key rejects orphan records.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_unknown_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let medication = factory::medication::create_medication(db).await?;

    let repo = DroneMedicationRepository::new(db);
    let result = repo.create(999, medication.id).await;

    assert!(result.is_err());

    Ok(())
}
