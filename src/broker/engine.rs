use std::collections::HashMap;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::broker::message::Message;
use crate::broker::queue::Queue;
use crate::utils::error::BrokerError;

/// Represents the broker that manages the named queues.
/// It allows queues to be declared, messages to be published into them, and
/// a consumer to attach to a queue's receiving end.
/// The broker maintains a mapping of queue names to queues and routes each
/// published message into the channel of the queue it is addressed to.
/// The `Broker` struct is the rendezvous point of the pipeline: producers
/// and consumers never hold references to each other, only to the broker.
#[derive(Debug, Default)]
pub struct Broker {
    queues: HashMap<String, Queue>,
}

impl Broker {
    /// Creates a new instance of the Broker
    /// Initializes an empty set of queues
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
        }
    }

    /// Declares a queue with the given name. Idempotent: the first call
    /// creates the queue, repeated calls leave the existing queue (and its
    /// channel, including any buffered messages) untouched.
    pub fn declare_queue(&mut self, name: &str) {
        if !self.queues.contains_key(name) {
            self.queues.insert(name.to_string(), Queue::new(name));
            info!("Declared queue '{}'", name);
        } else {
            debug!("Queue '{}' already declared", name);
        }
    }

    /// Publishes a message into the queue it is addressed to.
    ///
    /// Fails with `UnknownQueue` if the queue was never declared, and with
    /// `QueueClosed` if the consumer end of the queue has been dropped.
    /// A queue without an attached consumer accepts and buffers messages.
    pub fn publish(&self, msg: Message) -> Result<(), BrokerError> {
        let queue = self
            .queues
            .get(&msg.queue)
            .ok_or_else(|| BrokerError::UnknownQueue(msg.queue.clone()))?;

        queue
            .sender()
            .send(msg)
            .map_err(|e| BrokerError::QueueClosed(e.0.queue))
    }

    /// Attaches a consumer to the named queue, handing out its single
    /// receiving end.
    ///
    /// Fails with `UnknownQueue` if the queue was never declared, and with
    /// `ConsumerAttached` if the receiving end was already claimed. A queue
    /// is point-to-point, not a fanout topic.
    pub fn attach_consumer(
        &mut self,
        name: &str,
    ) -> Result<UnboundedReceiver<Message>, BrokerError> {
        let queue = self
            .queues
            .get_mut(name)
            .ok_or_else(|| BrokerError::UnknownQueue(name.to_string()))?;

        queue
            .take_receiver()
            .ok_or_else(|| BrokerError::ConsumerAttached(name.to_string()))
    }

    /// Returns whether a queue with the given name has been declared.
    pub fn has_queue(&self, name: &str) -> bool {
        self.queues.contains_key(name)
    }
}
