use super::*;

/// Tests finding an existing drone by ID.
///
/// Expected: Ok(Some) with matching drone
#[tokio::test]
async fn finds_existing_drone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::drone::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    let drone = repo.find_by_id(created.id).await?;

    assert!(drone.is_some());
    assert_eq!(drone.unwrap().serial_number, created.serial_number);

    Ok(())
}

/// Tests finding a drone that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_drone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    let drone = repo.find_by_id(999).await?;

    assert!(drone.is_none());

    Ok(())
}

/// Tests reading a drone whose stored state is not a known lifecycle state.
///
/// Verifies that corrupt rows surface as an internal error instead of being coerced.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::drone::DroneFactory::new(db)
        .state("FLYING")
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let result = repo.find_by_id(created.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
