use super::Broker;
use super::message::Message;
use super::queue::Queue;
use crate::utils::error::BrokerError;

#[test]
fn test_queue_new() {
    let queue = Queue::new("test_queue");
    assert_eq!(queue.name, "test_queue");
}

#[test]
fn test_queue_receiver_taken_once() {
    let mut queue = Queue::new("test_queue");
    assert!(queue.take_receiver().is_some());
    assert!(queue.take_receiver().is_none());
}

#[test]
fn test_broker_new() {
    let broker = Broker::default();
    assert!(!broker.has_queue("hello"));
}

#[test]
fn test_declare_queue() {
    let mut broker = Broker::new();
    broker.declare_queue("hello");
    assert!(broker.has_queue("hello"));
}

#[test]
fn test_declare_queue_is_idempotent() {
    let mut broker = Broker::new();
    broker.declare_queue("hello");
    broker.publish(Message::new("hello", "before".to_string())).unwrap();

    // Redeclaring must keep the same channel: the buffered message survives
    // and both publishes land on the one receiver.
    broker.declare_queue("hello");
    broker.publish(Message::new("hello", "after".to_string())).unwrap();

    let mut rx = broker.attach_consumer("hello").unwrap();
    assert_eq!(rx.try_recv().unwrap().payload, "before");
    assert_eq!(rx.try_recv().unwrap().payload, "after");
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_publish_to_undeclared_queue() {
    let broker = Broker::new();
    let err = broker
        .publish(Message::new("nowhere", "hello".to_string()))
        .unwrap_err();
    assert_eq!(err, BrokerError::UnknownQueue("nowhere".to_string()));
}

#[test]
fn test_publish_buffers_until_consumer_attaches() {
    let mut broker = Broker::new();
    broker.declare_queue("hello");
    broker.publish(Message::new("hello", "Hello.1".to_string())).unwrap();
    broker.publish(Message::new("hello", "Hello..2".to_string())).unwrap();

    let mut rx = broker.attach_consumer("hello").unwrap();
    assert_eq!(rx.try_recv().unwrap().payload, "Hello.1");
    assert_eq!(rx.try_recv().unwrap().payload, "Hello..2");
}

#[test]
fn test_attach_consumer_to_undeclared_queue() {
    let mut broker = Broker::new();
    let err = broker.attach_consumer("nowhere").unwrap_err();
    assert_eq!(err, BrokerError::UnknownQueue("nowhere".to_string()));
}

#[test]
fn test_attach_consumer_twice() {
    let mut broker = Broker::new();
    broker.declare_queue("hello");
    let _rx = broker.attach_consumer("hello").unwrap();
    let err = broker.attach_consumer("hello").unwrap_err();
    assert_eq!(err, BrokerError::ConsumerAttached("hello".to_string()));
}

#[test]
fn test_publish_after_consumer_dropped() {
    let mut broker = Broker::new();
    broker.declare_queue("hello");
    let rx = broker.attach_consumer("hello").unwrap();
    drop(rx);

    let err = broker
        .publish(Message::new("hello", "hello".to_string()))
        .unwrap_err();
    assert_eq!(err, BrokerError::QueueClosed("hello".to_string()));
}

#[test]
fn test_message_carries_queue_and_payload() {
    let msg = Message::new("hello", "Hello.1".to_string());
    assert_eq!(msg.queue, "hello");
    assert_eq!(msg.payload, "Hello.1");
    assert!(msg.timestamp > 0);
}
