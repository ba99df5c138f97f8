use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

use crate::broker::Broker;
use crate::broker::message::Message;
use crate::config::ProducerSettings;
use crate::utils::error::BrokerError;

/// Base text every payload starts from.
pub const BASE_TEXT: &str = "Hello";

/// Highest dot count in the cycling suffix; after three dots the next tick
/// wraps back to a single dot, never to zero.
pub const DOT_CYCLE_MAX: u32 = 3;

/// Builds the payload sent on each tick.
///
/// Holds two counters, both private to the instance: `dots` cycles
/// 1, 2, 3, 1, 2, 3, ... and controls the dot suffix; `count` increments
/// forever and is appended as decimal text. The counters advance together
/// but are otherwise independent.
#[derive(Debug, Default)]
pub struct Producer {
    dots: u32,
    count: u64,
}

impl Producer {
    /// Creates a producer with both counters at zero; the first tick
    /// produces `Hello.1`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the counters and returns the payload for this tick.
    ///
    /// The dot count compares against the cycle maximum before stepping, so
    /// the observed sequence is 1,2,3,1,2,3,... and never returns to zero.
    pub fn next_payload(&mut self) -> String {
        self.dots = if self.dots >= DOT_CYCLE_MAX {
            1
        } else {
            self.dots + 1
        };
        self.count += 1;

        let mut payload = String::from(BASE_TEXT);
        for _ in 0..self.dots {
            payload.push('.');
        }
        payload.push_str(&self.count.to_string());
        payload
    }
}

/// Publishes one payload per scheduled tick until the queue closes.
///
/// Waits `initial_delay_ms`, then ticks every `period_ms`. Ticks are
/// serialized on this task; if a tick overruns, the next one is delayed
/// rather than fired in a burst. A publish failure spoils that tick only —
/// the loop keeps ticking — except `QueueClosed`, which ends the loop since
/// no later publish can succeed.
pub async fn run(broker: Arc<Mutex<Broker>>, queue: String, settings: ProducerSettings) {
    let mut producer = Producer::new();

    time::sleep(Duration::from_millis(settings.initial_delay_ms)).await;
    let mut ticker = time::interval(Duration::from_millis(settings.period_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let payload = producer.next_payload();
        let msg = Message::new(&queue, payload.clone());
        match broker.lock().unwrap().publish(msg) {
            Ok(()) => info!("[x] Sent '{}'", payload),
            Err(e @ BrokerError::QueueClosed(_)) => {
                error!("Failed to send '{}': {}", payload, e);
                break;
            }
            Err(e) => error!("Failed to send '{}': {}", payload, e),
        }
    }
}
