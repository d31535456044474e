use super::*;

/// Tests persisting a new battery level.
///
/// Verifies that only the battery column changes.
///
/// Expected: Ok with updated battery, state untouched
#[tokio::test]
async fn updates_battery_level() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::drone::DroneFactory::new(db)
        .state("LOADED")
        .build()
        .await?;

    let repo = DroneRepository::new(db);
    let drone = repo.update_battery(created.id, 42).await?;

    assert_eq!(drone.battery_capacity, 42);
    assert_eq!(drone.state, DroneState::Loaded);

    Ok(())
}
