use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time;
use tracing::{error, info, warn};

use crate::broker::message::Message;
use crate::config::ConsumerSettings;
use crate::utils::error::ProcessingError;

/// Processes delivered payloads with simulated latency and simulated
/// random failure.
///
/// Carries no state between messages apart from its RNG; a failure on one
/// message has no effect on how the next is handled.
#[derive(Debug)]
pub struct Consumer {
    work_delay: Duration,
    failure_probability: f64,
    rng: StdRng,
}

impl Consumer {
    /// Creates a consumer with an OS-seeded RNG.
    pub fn new(settings: &ConsumerSettings) -> Self {
        Self::with_rng(settings, StdRng::from_os_rng())
    }

    /// Creates a consumer with a caller-supplied RNG, deterministic when
    /// seeded.
    pub fn with_rng(settings: &ConsumerSettings, rng: StdRng) -> Self {
        Self {
            work_delay: Duration::from_millis(settings.work_delay_ms),
            failure_probability: settings.failure_probability,
            rng,
        }
    }

    /// Draws a fresh uniform number in [0, 1) and compares it to the
    /// failure probability. Independent across calls.
    pub fn roll_failure(&mut self) -> bool {
        self.rng.random::<f64>() < self.failure_probability
    }

    /// Processes one payload.
    ///
    /// Sleeps for the simulated work duration (blocking this delivery, not
    /// the process), then either logs success and returns `Ok`, or logs the
    /// failure and propagates it tagged with the payload. The error is not
    /// caught here; the surrounding delivery loop decides the message's
    /// fate. Exactly one of the two signals is emitted per invocation.
    pub async fn handle(&mut self, payload: &str) -> Result<(), ProcessingError> {
        time::sleep(self.work_delay).await;

        if self.roll_failure() {
            error!("[x] Received exception '{}'", payload);
            return Err(ProcessingError {
                payload: payload.to_string(),
            });
        }

        info!("[x] Received '{}'", payload);
        Ok(())
    }
}

/// Counts of deliveries seen by a delivery loop.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryStats {
    pub processed: u64,
    pub failed: u64,
}

/// Serial delivery loop: one handler invocation at a time, each message
/// processed fully before the next is taken.
///
/// A failed delivery is logged and dropped — no requeue, no dead-letter.
/// Returns the processed/failed counts once the queue closes.
pub async fn run(mut consumer: Consumer, mut deliveries: UnboundedReceiver<Message>) -> DeliveryStats {
    let mut stats = DeliveryStats::default();

    while let Some(msg) = deliveries.recv().await {
        match consumer.handle(&msg.payload).await {
            Ok(()) => stats.processed += 1,
            Err(e) => {
                stats.failed += 1;
                warn!("Dropping failed delivery: {}", e);
            }
        }
    }

    stats
}
