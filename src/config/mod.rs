mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{
    ConsumerSettings, ProducerSettings, QueueSettings, RoleSettings, Settings,
};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct containing the queue, producer, consumer and
/// role configurations
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        queue: QueueSettings {
            name: partial
                .queue
                .as_ref()
                .and_then(|q| q.name.clone())
                .unwrap_or(default.queue.name),
        },
        producer: ProducerSettings {
            initial_delay_ms: partial
                .producer
                .as_ref()
                .and_then(|p| p.initial_delay_ms)
                .unwrap_or(default.producer.initial_delay_ms),
            period_ms: partial
                .producer
                .as_ref()
                .and_then(|p| p.period_ms)
                .unwrap_or(default.producer.period_ms),
        },
        consumer: ConsumerSettings {
            work_delay_ms: partial
                .consumer
                .as_ref()
                .and_then(|c| c.work_delay_ms)
                .unwrap_or(default.consumer.work_delay_ms),
            failure_probability: partial
                .consumer
                .as_ref()
                .and_then(|c| c.failure_probability)
                .unwrap_or(default.consumer.failure_probability),
        },
        roles: RoleSettings {
            sender: partial
                .roles
                .as_ref()
                .and_then(|r| r.sender)
                .unwrap_or(default.roles.sender),
            receiver: partial
                .roles
                .as_ref()
                .and_then(|r| r.receiver)
                .unwrap_or(default.roles.receiver),
        },
    })
}
