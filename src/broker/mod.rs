//! The `broker` module is the in-process rendezvous between producers and
//! consumers.
//!
//! It provides the `Broker` struct, which owns the named queues, routes
//! published messages into them, and hands the receiving end of a queue to
//! at most one consumer.

pub mod engine;
pub mod message;
pub mod queue;

pub use engine::Broker;

#[cfg(test)]
mod tests;
