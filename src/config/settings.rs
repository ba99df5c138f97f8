use serde::Deserialize;

/// Top-level configuration settings for the application.
///
/// Includes settings for the queue, both roles, and which roles are active.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub queue: QueueSettings,
    pub producer: ProducerSettings,
    pub consumer: ConsumerSettings,
    pub roles: RoleSettings,
}

/// Configuration settings for the queue.
///
/// Defines the name of the queue both roles rendezvous on. Producer and
/// consumer must agree on it for delivery to occur.
#[derive(Debug, Deserialize, Clone)]
pub struct QueueSettings {
    pub name: String,
}

/// Configuration settings for the producer.
///
/// Controls the publish schedule: the delay before the first tick and the
/// period between ticks.
#[derive(Debug, Deserialize, Clone)]
pub struct ProducerSettings {
    pub initial_delay_ms: u64,
    pub period_ms: u64,
}

/// Configuration settings for the consumer.
///
/// Controls the simulated work duration per message and the probability of
/// a simulated processing failure.
#[derive(Debug, Deserialize, Clone)]
pub struct ConsumerSettings {
    pub work_delay_ms: u64,
    pub failure_probability: f64,
}

/// Which roles this process instance performs. Both default to off; a
/// process with neither role still declares the queue and then idles.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct RoleSettings {
    pub sender: bool,
    pub receiver: bool,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub queue: Option<PartialQueueSettings>,
    pub producer: Option<PartialProducerSettings>,
    pub consumer: Option<PartialConsumerSettings>,
    pub roles: Option<PartialRoleSettings>,
}

/// Partial queue settings.
///
/// Used when loading queue configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialQueueSettings {
    pub name: Option<String>,
}

/// Partial producer settings.
///
/// Used for producer configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialProducerSettings {
    pub initial_delay_ms: Option<u64>,
    pub period_ms: Option<u64>,
}

/// Partial consumer settings.
///
/// Used for consumer configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialConsumerSettings {
    pub work_delay_ms: Option<u64>,
    pub failure_probability: Option<f64>,
}

/// Partial role settings.
///
/// Used for role configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialRoleSettings {
    pub sender: Option<bool>,
    pub receiver: Option<bool>,
}

/// Provides default values for `Settings`.
///
/// Ensures the application has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            queue: QueueSettings {
                name: "hello".to_string(),
            },
            producer: ProducerSettings {
                initial_delay_ms: 500,
                period_ms: 1000,
            },
            consumer: ConsumerSettings {
                work_delay_ms: 100,
                failure_probability: 0.2,
            },
            roles: RoleSettings::default(),
        }
    }
}
