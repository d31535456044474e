use super::*;

/// Tests filtering drones by lifecycle state.
///
/// Verifies that only drones in the requested state are returned, ordered by ID.
///
/// Expected: Ok with the two IDLE drones
#[tokio::test]
async fn returns_only_drones_in_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::drone::create_drone(db).await?;
    factory::drone::DroneFactory::new(db)
        .state("DELIVERING")
        .build()
        .await?;
    let second = factory::drone::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    let idle = repo.get_by_state(DroneState::Idle).await?;

    let ids: Vec<i32> = idle.iter().map(|drone| drone.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests filtering by a state no drone is in.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_when_no_drone_matches() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::drone::create_drone(db).await?;

    let repo = DroneRepository::new(db);
    let returning = repo.get_by_state(DroneState::Returning).await?;

    assert!(returning.is_empty());
    assert_eq!(repo.get_all().await?.len(), 1);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
