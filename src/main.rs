//! CLI for HelloMQ
//!
//! Declares the queue, then activates the producer and/or consumer roles
//! selected on the command line (or in config) and runs until ctrl-c.

use std::error::Error;
use std::sync::{Arc, Mutex};

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use hellomq::broker::Broker;
use hellomq::config::{Settings, load_config};
use hellomq::utils::logging;
use hellomq::{consumer, producer};

#[derive(Parser)]
#[command(
    name = "hellomq",
    about = "Producer/consumer demo over an in-memory message queue"
)]
struct Cli {
    /// Role to activate; repeatable. Overrides the configured roles when given.
    #[arg(long = "role", value_enum)]
    roles: Vec<Role>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Role {
    /// Publish a greeting to the queue once per period
    Sender,
    /// Receive greetings from the queue and process them
    Receiver,
}

#[tokio::main]
async fn main() {
    logging::init("info");

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("hellomq failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    let (sender, receiver) = resolve_roles(&cli, &config);

    let broker = Arc::new(Mutex::new(Broker::new()));
    // The queue exists whatever the roles; redeclaration elsewhere is a no-op.
    broker.lock().unwrap().declare_queue(&config.queue.name);

    if receiver {
        let deliveries = broker
            .lock()
            .unwrap()
            .attach_consumer(&config.queue.name)?;
        let consumer = consumer::Consumer::new(&config.consumer);
        tokio::spawn(async move {
            let stats = consumer::run(consumer, deliveries).await;
            info!(
                "Consumer finished: {} processed, {} failed",
                stats.processed, stats.failed
            );
        });
    }

    if sender {
        tokio::spawn(producer::run(
            broker.clone(),
            config.queue.name.clone(),
            config.producer.clone(),
        ));
    }

    if !sender && !receiver {
        info!(
            "No role selected; queue '{}' declared, idling until shutdown",
            config.queue.name
        );
    }

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received. Exiting gracefully.");

    Ok(())
}

fn resolve_roles(cli: &Cli, config: &Settings) -> (bool, bool) {
    if cli.roles.is_empty() {
        (config.roles.sender, config.roles.receiver)
    } else {
        (
            cli.roles.contains(&Role::Sender),
            cli.roles.contains(&Role::Receiver),
        )
    }
}
