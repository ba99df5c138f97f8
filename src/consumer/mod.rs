//! The `consumer` module receives payloads from the queue and processes
//! them one at a time.
//!
//! Processing is simulated: a fixed sleep stands in for I/O-bound work, and
//! a fresh random draw per message decides whether the handler fails. The
//! `run` delivery loop owns the ack decision for failed messages.

pub mod receiver;

pub use receiver::{Consumer, DeliveryStats, run};
