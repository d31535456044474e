use super::*;

/// Tests reading recent samples newest first.
///
/// Verifies ordering by timestamp, the limit, and that other drones' samples are
/// excluded.
///
/// Expected: Ok with the two newest samples for the drone
#[tokio::test]
async fn returns_newest_samples_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_drone_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let drone = factory::drone::create_drone(db).await?;
    let other_drone = factory::drone::create_drone(db).await?;
    let now = Utc::now();

    factory::battery_history::create_battery_sample(db, drone.id, 90, now - Duration::minutes(2))
        .await?;
    factory::battery_history::create_battery_sample(db, drone.id, 70, now).await?;
    factory::battery_history::create_battery_sample(db, other_drone.id, 10, now).await?;
    factory::battery_history::create_battery_sample(db, drone.id, 80, now - Duration::minutes(1))
        .await?;

    let repo = BatteryHistoryRepository::new(db);
    let entries = repo.get_recent_by_drone(drone.id, 2).await?;

    let levels: Vec<i32> = entries.iter().map(|e| e.battery_level).collect();
    assert_eq!(levels, vec![70, 80]);

    Ok(())
}
