use super::*;

/// Tests an explicit transition along a legal edge.
///
/// Expected: Ok with drone in the target state
#[tokio::test]
async fn applies_legal_transition() -> Result<(), AppError> {
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
    let updated = service.update_state(drone.id, DroneState::Delivering).await?;

    assert_eq!(updated.state, DroneState::Delivering);
    assert_eq!(stored_state(db, drone.id).await?, "DELIVERING");

    Ok(())
}

/// Tests that the loading states cannot be set explicitly.
///
/// Verifies an idle drone can be neither moved to LOADING nor LOADED by hand, so it can
/// never start a delivery without a loading record.
///
/// Expected: Err(DroneError::InvalidStateTransition) for both, drone still IDLE with no
/// records, and start_delivery rejected
#[tokio::test]
async fn rejects_loading_states_as_explicit_targets() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLockRegistry::new();
    let events = EventService::new();

    let drone = factory::drone::create_drone(db).await?;
    let loading = factory::drone::DroneFactory::new(db)
        .state("LOADING")
        .build()
        .await?;

    let service = DroneService::new(db, &locks, &events);

    let to_loading = service.update_state(drone.id, DroneState::Loading).await;
    assert!(matches!(
        to_loading,
        Err(AppError::DroneErr(DroneError::InvalidStateTransition {
            from: DroneState::Idle,
            to: DroneState::Loading,
            ..
        }))
    ));

    let to_loaded = service.update_state(loading.id, DroneState::Loaded).await;
    assert!(matches!(
        to_loaded,
        Err(AppError::DroneErr(DroneError::InvalidStateTransition {
            from: DroneState::Loading,
            to: DroneState::Loaded,
            ..
        }))
    ));

    assert_eq!(stored_state(db, drone.id).await?, "IDLE");
    assert_eq!(stored_state(db, loading.id).await?, "LOADING");
    assert_eq!(entity::prelude::DroneMedication::find().count(db).await?, 0);
    assert!(service.start_delivery(drone.id).await.is_err());

    Ok(())
}

/// Tests an explicit loading-state target for an unknown drone.
///
/// Expected: Err(DroneError::NotFound)
#[tokio::test]
async fn reports_unknown_drone_for_loading_target() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLockRegistry::new();
    let events = EventService::new();

    let service = DroneService::new(db, &locks, &events);
    let result = service.update_state(999, DroneState::Loaded).await;

    assert!(matches!(
        result,
        Err(AppError::DroneErr(DroneError::NotFound(999)))
    ));

    Ok(())
}

/// Tests an explicit transition that skips a state.
///
/// Expected: Err(DroneError::InvalidStateTransition), state unchanged
#[tokio::test]
async fn rejects_skipping_states() -> Result<(), AppError> {
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
    let result = service.update_state(drone.id, DroneState::Delivering).await;

    assert!(matches!(
        result,
        Err(AppError::DroneErr(DroneError::InvalidStateTransition {
            from: DroneState::Idle,
            to: DroneState::Delivering,
            ..
        }))
    ));
    assert_eq!(stored_state(db, drone.id).await?, "IDLE");

    Ok(())
}

/// Tests transitioning a drone to the state it is already in.
///
/// Expected: Err(DroneError::InvalidStateTransition)
#[tokio::test]
async fn rejects_self_transition() -> Result<(), AppError> {
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
    let result = service.update_state(drone.id, DroneState::Idle).await;

    assert!(matches!(
        result,
        Err(AppError::DroneErr(DroneError::InvalidStateTransition { .. }))
    ));

    Ok(())
}
