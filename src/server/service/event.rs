//! In-process domain event publication.
//!
//! Lifecycle operations publish `DroneEvent`s on the `drone-events` topic through a
//! tokio broadcast channel. Publication is fire-and-forget: having no subscribers is
//! not an error, and a lagging subscriber only loses its own backlog.

use serde::Serialize;
use tokio::sync::broadcast;

use crate::model::drone::{DroneModel, DroneState};

/// Topic name attached to every published event.
pub const DRONE_EVENTS_TOPIC: &str = "drone-events";

/// Capacity of the broadcast buffer per subscriber.
const EVENT_BUFFER_SIZE: usize = 256;

/// Domain events emitted by the lifecycle service.
///
/// Serialized with an `eventType` tag so listeners can dispatch on the JSON payload.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "eventType", rename_all_fields = "camelCase")]
pub enum DroneEvent {
    #[serde(rename = "DroneRegisteredEvent")]
    DroneRegistered {
        drone_id: i32,
        serial_number: String,
        model: DroneModel,
        weight_limit: i32,
        battery_capacity: i32,
        state: DroneState,
    },
    #[serde(rename = "MedicationLoadedEvent")]
    MedicationLoaded {
        drone_id: i32,
        medication_id: i32,
        total_weight: i32,
    },
    #[serde(rename = "DroneStateChangedEvent")]
    StateChanged {
        drone_id: i32,
        from: DroneState,
        to: DroneState,
    },
}

/// Publisher handle for the `drone-events` topic.
///
/// Cloning shares the underlying channel.
#[derive(Clone)]
pub struct EventService {
    sender: broadcast::Sender<DroneEvent>,
}

impl EventService {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { sender }
    }

    /// Publishes an event to all current subscribers.
    ///
    /// Never fails; an event published with no subscribers is dropped.
    pub fn publish(&self, event: DroneEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("No subscribers on {}; event dropped", DRONE_EVENTS_TOPIC);
        }
    }

    /// Subscribes to events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<DroneEvent> {
        self.sender.subscribe()
    }

    /// Spawns a listener that logs every event as JSON until the channel closes.
    pub fn spawn_logger(&self) -> tokio::task::JoinHandle<()> {
        let mut receiver = self.subscribe();

        tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => match serde_json::to_string(&event) {
                        Ok(payload) => {
                            tracing::info!(topic = DRONE_EVENTS_TOPIC, "{}", payload)
                        }
                        Err(e) => tracing::error!("Failed to serialize event: {}", e),
                    },
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("Event logger lagged, skipped {} events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}

impl Default for EventService {
    fn default() -> Self {
        Self::new()
    }
}
