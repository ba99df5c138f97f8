//! The `error` module defines the custom error types used within the
//! `hellomq` application.
//!
//! This module centralizes error handling, providing a consistent way to
//! represent and propagate errors throughout the system.

use thiserror::Error;

/// Errors raised by the broker when routing messages or attaching consumers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrokerError {
    /// The addressed queue was never declared.
    #[error("queue '{0}' has not been declared")]
    UnknownQueue(String),

    /// The queue's consumer end has been dropped; nothing can receive.
    #[error("queue '{0}' is closed")]
    QueueClosed(String),

    /// The queue's receiving end was already claimed by another consumer.
    #[error("queue '{0}' already has a consumer attached")]
    ConsumerAttached(String),
}

/// The consumer's single failure kind: a processing failure raised for a
/// randomly selected message, tagged with the payload it was processing.
///
/// It is raised after the failure has been logged and is propagated, not
/// caught, by the handler; the delivery loop decides what happens to the
/// message afterwards.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("processing failed for message '{payload}'")]
pub struct ProcessingError {
    pub payload: String,
}
