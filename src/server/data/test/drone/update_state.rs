use super::*;

/// Tests persisting a new lifecycle state.
///
/// Expected: Ok with updated drone, stored row reflects the new state
#[tokio::test]
async fn updates_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::drone::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    let drone = repo.update_state(created.id, DroneState::Loading).await?;

    assert_eq!(drone.state, DroneState::Loading);

    let stored = entity::prelude::Drone::find_by_id(created.id).one(db).await?;
    assert_eq!(stored.unwrap().state, "LOADING");

    Ok(())
}

/// Tests updating the state of a drone that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_drone() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DroneRepository::new(db);
    let result = repo.update_state(999, DroneState::Loading).await;

    assert!(matches!(
        result,
        Err(AppError::DbErr(DbErr::RecordNotFound(_)))
    ));

    Ok(())
}
