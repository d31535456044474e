use super::*;

/// Tests starting delivery on a LOADED drone.
///
/// Expected: Ok with DELIVERING drone
#[tokio::test]
async fn starts_delivery_from_loaded() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLockRegistry::new();
    let events = EventService::new();

    let (drone, _) = factory::helpers::create_loaded_drone(db, 100).await?;

    let service = DroneService::new(db, &locks, &events);
    let updated = service.start_delivery(drone.id).await?;

    assert_eq!(updated.state, DroneState::Delivering);
    assert_eq!(stored_state(db, drone.id).await?, "DELIVERING");

    Ok(())
}

/// Tests starting delivery from every state other than LOADED.
///
/// Expected: Err(DroneError::InvalidStateTransition), state unchanged
#[tokio::test]
async fn rejects_start_delivery_from_other_states() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLockRegistry::new();
    let events = EventService::new();
    let service = DroneService::new(db, &locks, &events);

    for state in DroneState::ALL
        .into_iter()
        .filter(|state| *state != DroneState::Loaded)
    {
        let drone = factory::drone::DroneFactory::new(db)
            .state(state.as_str())
            .build()
            .await?;

        let result = service.start_delivery(drone.id).await;

        assert!(matches!(
            result,
            Err(AppError::DroneErr(DroneError::InvalidStateTransition { from, to: DroneState::Delivering, .. })) if from == state
        ));
        assert_eq!(stored_state(db, drone.id).await?, state.as_str());
    }

    Ok(())
}

/// Tests completing delivery on a DELIVERING drone.
///
/// Expected: Ok with DELIVERED drone
#[tokio::test]
async fn completes_delivery_from_delivering() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLockRegistry::new();
    let events = EventService::new();

    let drone = factory::drone::DroneFactory::new(db)
        .state("DELIVERING")
        .build()
        .await?;

    let service = DroneService::new(db, &locks, &events);
    let updated = service.complete_delivery(drone.id).await?;

    assert_eq!(updated.state, DroneState::Delivered);

    Ok(())
}

/// Tests completing delivery on an IDLE drone.
///
/// Expected: Err(DroneError::InvalidStateTransition { from: IDLE, to: DELIVERED })
#[tokio::test]
async fn rejects_complete_delivery_on_idle_drone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLockRegistry::new();
    let events = EventService::new();

    let drone = factory::drone::create_drone(db).await?;

    let service = DroneService::new(db, &locks, &events);
    let result = service.complete_delivery(drone.id).await;

    assert!(matches!(
        result,
        Err(AppError::DroneErr(DroneError::InvalidStateTransition {
            from: DroneState::Idle,
            to: DroneState::Delivered,
            ..
        }))
    ));
    assert_eq!(stored_state(db, drone.id).await?, "IDLE");

    Ok(())
}

/// Tests a transition on a drone that does not exist.
///
/// Expected: Err(DroneError::NotFound)
#[tokio::test]
async fn rejects_unknown_drone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLockRegistry::new();
    let events = EventService::new();

    let service = DroneService::new(db, &locks, &events);

    assert!(matches!(
        service.start_delivery(42).await,
        Err(AppError::DroneErr(DroneError::NotFound(42)))
    ));

    Ok(())
}
