use super::*;

/// Tests loading a medication onto an idle drone.
///
/// Verifies the drone ends LOADED, one record is written, and the loaded event carries
/// the new total.
///
/// Expected: Ok with LOADED drone and total weight 50
#[tokio::test]
async fn loads_medication_onto_idle_drone() -> Result<(), AppError> {
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
        .weight_limit(300)
        .battery_capacity(80)
        .build()
        .await?;
    let medication = factory::medication::create_medication_with_weight(db, 50).await?;

    let service = DroneService::new(db, &locks, &events);
    let record = service.load_medication(drone.id, medication.id).await?;

    assert_eq!(record.drone.state, DroneState::Loaded);
    assert_eq!(record.medication.id, medication.id);
    assert_eq!(stored_state(db, drone.id).await?, "LOADED");
    assert_eq!(entity::prelude::DroneMedication::find().count(db).await?, 1);

    assert_eq!(
        receiver.try_recv().unwrap(),
        DroneEvent::StateChanged {
            drone_id: drone.id,
            from: DroneState::Idle,
            to: DroneState::Loading,
        }
    );
    assert_eq!(
        receiver.try_recv().unwrap(),
        DroneEvent::StateChanged {
            drone_id: drone.id,
            from: DroneState::Loading,
            to: DroneState::Loaded,
        }
    );
    assert_eq!(
        receiver.try_recv().unwrap(),
        DroneEvent::MedicationLoaded {
            drone_id: drone.id,
            medication_id: medication.id,
            total_weight: 50,
        }
    );

    Ok(())
}

/// Tests loading a drone that is already LOADING.
///
/// Verifies the IDLE → LOADING step is skipped and the drone still ends LOADED.
///
/// Expected: Ok with LOADED drone
#[tokio::test]
async fn loads_medication_onto_loading_drone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLockRegistry::new();
    let events = EventService::new();

    let drone = factory::drone::DroneFactory::new(db)
        .state("LOADING")
        .build()
        .await?;
    let medication = factory::medication::create_medication(db).await?;

    let service = DroneService::new(db, &locks, &events);
    let record = service.load_medication(drone.id, medication.id).await?;

    assert_eq!(record.drone.state, DroneState::Loaded);

    Ok(())
}

/// Tests a second load that would exceed the weight limit.
///
/// SN1 (300 g, 80 %) carries MED1 (50 g) and is LOADED; loading MED2 (260 g) must be
/// rejected as overweight even though the drone is no longer loadable.
///
/// Expected: Err(DroneError::Overweight), state stays LOADED, total stays 50
#[tokio::test]
async fn rejects_overweight_second_load() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLockRegistry::new();
    let events = EventService::new();

    let drone = factory::drone::DroneFactory::new(db)
        .serial_number("SN1")
        .weight_limit(300)
        .battery_capacity(80)
        .build()
        .await?;
    let med1 = factory::medication::MedicationFactory::new(db)
        .code("MED1")
        .weight(50)
        .build()
        .await?;
    let med2 = factory::medication::MedicationFactory::new(db)
        .code("MED2")
        .weight(260)
        .build()
        .await?;

    let service = DroneService::new(db, &locks, &events);
    service.load_medication(drone.id, med1.id).await?;
    let result = service.load_medication(drone.id, med2.id).await;

    assert_eq!(
        result.unwrap_err().to_string(),
        DroneError::Overweight {
            drone_id: drone.id,
            current: 50,
            requested: 260,
            limit: 300,
        }
        .to_string()
    );
    assert_eq!(stored_state(db, drone.id).await?, "LOADED");
    assert_eq!(entity::prelude::DroneMedication::find().count(db).await?, 1);

    Ok(())
}

/// Tests loading a drone whose battery is below the threshold.
///
/// Expected: Err(DroneError::BatteryTooLow) regardless of weight, nothing written
#[tokio::test]
async fn rejects_low_battery() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = DroneLockRegistry::new();
    let events = EventService::new();

    let drone = factory::drone::DroneFactory::new(db)
        .battery_capacity(20)
        .build()
        .await?;
    let medication = factory::medication::create_medication_with_weight(db, 10).await?;

    let service = DroneService::new(db, &locks, &events);
    let result = service.load_medication(drone.id, medication.id).await;

    assert!(matches!(
        result,
        Err(AppError::DroneErr(DroneError::BatteryTooLow { battery: 20, .. }))
    ));
    assert_eq!(stored_state(db, drone.id).await?, "IDLE");
    assert_eq!(entity::prelude::DroneMedication::find().count(db).await?, 0);

    Ok(())
}

/// Tests loading a drone that is out delivering.
///
/// Expected: Err(DroneError::NotAvailable), nothing written
#[tokio::test]
async fn rejects_drone_not_available() -> Result<(), AppError> {
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
    let medication = factory::medication::create_medication(db).await?;

    let service = DroneService::new(db, &locks, &events);
    let result = service.load_medication(drone.id, medication.id).await;

    assert!(matches!(
        result,
        Err(AppError::DroneErr(DroneError::NotAvailable {
            state: DroneState::Delivering,
            ..
        }))
    ));
    assert_eq!(entity::prelude::DroneMedication::find().count(db).await?, 0);

    Ok(())
}

/// Tests loading with unknown drone or medication IDs.
///
/// Expected: Err(NotFound) for each, nothing written
#[tokio::test]
async fn rejects_unknown_drone_or_medication() -> Result<(), AppError> {
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

    assert!(matches!(
        service.load_medication(999, medication.id).await,
        Err(AppError::DroneErr(DroneError::NotFound(999)))
    ));
    assert!(matches!(
        service.load_medication(drone.id, 999).await,
        Err(AppError::MedicationErr(MedicationError::NotFound(999)))
    ));
    assert_eq!(stored_state(db, drone.id).await?, "IDLE");
    assert_eq!(entity::prelude::DroneMedication::find().count(db).await?, 0);

    Ok(())
}
