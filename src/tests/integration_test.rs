use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::Instant;

use crate::broker::Broker;
use crate::config::{ConsumerSettings, ProducerSettings};
use crate::consumer::Consumer;
use crate::producer;

fn producer_settings() -> ProducerSettings {
    ProducerSettings {
        initial_delay_ms: 500,
        period_ms: 1000,
    }
}

#[tokio::test(start_paused = true)]
async fn integration_producer_schedule_and_payloads() {
    let broker = Arc::new(Mutex::new(Broker::new()));
    broker.lock().unwrap().declare_queue("hello");
    let mut rx = broker.lock().unwrap().attach_consumer("hello").unwrap();

    let start = Instant::now();
    tokio::spawn(producer::run(
        broker.clone(),
        "hello".to_string(),
        producer_settings(),
    ));

    // First publish lands after the initial delay, later ones once per period.
    let first = rx.recv().await.unwrap();
    assert_eq!(first.payload, "Hello.1");
    assert_eq!(start.elapsed(), Duration::from_millis(500));

    let second = rx.recv().await.unwrap();
    assert_eq!(second.payload, "Hello..2");
    assert_eq!(start.elapsed(), Duration::from_millis(1500));

    assert_eq!(rx.recv().await.unwrap().payload, "Hello...3");
    assert_eq!(rx.recv().await.unwrap().payload, "Hello.4");
}

#[tokio::test(start_paused = true)]
async fn integration_pipeline_end_to_end() {
    let broker = Arc::new(Mutex::new(Broker::new()));
    broker.lock().unwrap().declare_queue("hello");
    let mut rx = broker.lock().unwrap().attach_consumer("hello").unwrap();

    tokio::spawn(producer::run(
        broker.clone(),
        "hello".to_string(),
        producer_settings(),
    ));

    let settings = ConsumerSettings {
        work_delay_ms: 100,
        failure_probability: 0.0,
    };
    let mut consumer = Consumer::with_rng(&settings, StdRng::seed_from_u64(9));

    for expected in ["Hello.1", "Hello..2", "Hello...3", "Hello.4"] {
        let msg = rx.recv().await.unwrap();
        assert_eq!(msg.payload, expected);
        consumer.handle(&msg.payload).await.unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn integration_sender_only_leaves_messages_buffered() {
    let broker = Arc::new(Mutex::new(Broker::new()));
    broker.lock().unwrap().declare_queue("hello");

    // Sender role only: no consumer is ever attached while it publishes.
    tokio::spawn(producer::run(
        broker.clone(),
        "hello".to_string(),
        producer_settings(),
    ));

    tokio::time::sleep(Duration::from_millis(3600)).await;

    // Everything published so far is still sitting in the queue, untouched.
    let mut rx = broker.lock().unwrap().attach_consumer("hello").unwrap();
    assert_eq!(rx.try_recv().unwrap().payload, "Hello.1");
    assert_eq!(rx.try_recv().unwrap().payload, "Hello..2");
    assert_eq!(rx.try_recv().unwrap().payload, "Hello...3");
    assert_eq!(rx.try_recv().unwrap().payload, "Hello.4");
    assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
}

#[tokio::test(start_paused = true)]
async fn integration_receiver_only_sees_no_deliveries() {
    let broker = Arc::new(Mutex::new(Broker::new()));
    broker.lock().unwrap().declare_queue("hello");

    // Receiver role only: nothing ever publishes.
    let mut rx = broker.lock().unwrap().attach_consumer("hello").unwrap();

    tokio::time::sleep(Duration::from_millis(3600)).await;
    assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
}
