use super::*;

/// Tests returning a DELIVERED drone to base.
///
/// Verifies the drone passes through RETURNING and ends IDLE in one call.
///
/// Expected: Ok with IDLE drone and two transition events
#[tokio::test]
async fn returns_delivered_drone_to_idle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLockRegistry::new();
    let events = EventService::new();
    let mut receiver = events.subscribe();

    let drone = factory::drone::DroneFactory::new(db)
        .state("DELIVERED")
        .build()
        .await?;

    let service = DroneService::new(db, &locks, &events);
    let updated = service.return_to_base(drone.id).await?;

    assert_eq!(updated.state, DroneState::Idle);
    assert_eq!(stored_state(db, drone.id).await?, "IDLE");

    assert_eq!(
        receiver.try_recv().unwrap(),
        DroneEvent::StateChanged {
            drone_id: drone.id,
            from: DroneState::Delivered,
            to: DroneState::Returning,
        }
    );
    assert_eq!(
        receiver.try_recv().unwrap(),
        DroneEvent::StateChanged {
            drone_id: drone.id,
            from: DroneState::Returning,
            to: DroneState::Idle,
        }
    );

    Ok(())
}

/// Tests returning to base from any state other than DELIVERED.
///
/// Expected: Err(DroneError::InvalidStateTransition), state unchanged
#[tokio::test]
async fn rejects_return_from_other_states() -> Result<(), AppError> {
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
        .filter(|state| *state != DroneState::Delivered)
    {
        let drone = factory::drone::DroneFactory::new(db)
            .state(state.as_str())
            .build()
            .await?;

        let result = service.return_to_base(drone.id).await;

        assert!(matches!(
            result,
            Err(AppError::DroneErr(DroneError::InvalidStateTransition { .. }))
        ));
        assert_eq!(stored_state(db, drone.id).await?, state.as_str());
    }

    Ok(())
}

/// Tests a full delivery cycle from registration back to IDLE.
///
/// Expected: Ok at every step, drone ends IDLE with its load still recorded
#[tokio::test]
async fn completes_full_delivery_cycle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLockRegistry::new();
    let events = EventService::new();

    let drone = factory::drone::create_drone(db).await?;
    let medication = factory::medication::create_medication(db).await?;

    let service = DroneService::new(db, &locks, &events);
    service.load_medication(drone.id, medication.id).await?;
    service.start_delivery(drone.id).await?;
    service.complete_delivery(drone.id).await?;
    let drone = service.return_to_base(drone.id).await?;

    assert_eq!(drone.state, DroneState::Idle);
    assert_eq!(entity::prelude::DroneMedication::find().count(db).await?, 1);

    Ok(())
}
