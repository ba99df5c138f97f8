//! # HelloMQ
//!
//! `hellomq` is a minimalist producer/consumer demo built around an in-memory
//! message queue. A producer publishes a short greeting payload on a fixed
//! cadence; a consumer receives it, simulates some work, and occasionally
//! fails on purpose. Which roles a process runs is decided once at startup.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `broker`: The in-process queue rendezvous that routes published messages to a consumer.
//! - `producer`: Builds the greeting payloads and publishes one per scheduled tick.
//! - `consumer`: Receives payloads, simulates processing latency and random failure.
//! - `config`: Handles loading and merging the runtime configuration.
//! - `utils`: Contains shared utilities, such as error types and logging setup.

pub mod broker;
pub mod config;
pub mod consumer;
pub mod producer;
pub mod utils;

#[cfg(test)]
mod tests;
