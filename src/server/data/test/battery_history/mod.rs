use crate::server::data::battery_history::BatteryHistoryRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_recent_by_drone;
