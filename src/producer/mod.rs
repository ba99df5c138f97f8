//! The `producer` module builds the greeting payloads and publishes one per
//! scheduled tick.
//!
//! It provides the `Producer` struct, which holds the two private counters
//! behind the payload text, and the `run` loop that drives it on a timer
//! against the broker.

pub mod sender;

pub use sender::{Producer, run};
