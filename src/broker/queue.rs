use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::broker::message::Message;

/// Represents a named queue in the broker.
///
/// A queue is a point-to-point channel: any number of publishers may send
/// into it, but its receiving end can be taken by at most one consumer.
/// Messages published before a consumer attaches buffer inside the channel
/// and are delivered once it does.
///
/// The `Queue` struct is created once per name by the broker and lives for
/// the rest of the process; redeclaring a name reuses the same channel.
#[derive(Debug)]
pub struct Queue {
    pub name: String,
    sender: UnboundedSender<Message>,
    receiver: Option<UnboundedReceiver<Message>>,
}

impl Queue {
    /// Creates a new queue with the given name and a fresh channel,
    /// with the receiving end still unclaimed.
    pub fn new(name: &str) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            name: name.to_string(),
            sender,
            receiver: Some(receiver),
        }
    }

    /// Returns the sending end of the queue's channel.
    pub fn sender(&self) -> &UnboundedSender<Message> {
        &self.sender
    }

    /// Takes the receiving end of the queue's channel.
    /// Returns `None` if a consumer has already claimed it.
    pub fn take_receiver(&mut self) -> Option<UnboundedReceiver<Message>> {
        self.receiver.take()
    }
}
