// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use serde_json::json;
use tintlog::Entry;
use tintlog::Error;
use tintlog::Transport;
use tintlog::Trap;
use tintlog::console::Buffer;
use tokio::sync::Barrier;

#[derive(Debug, Clone, Default)]
struct Collect(Arc<Mutex<Vec<String>>>);

impl Trap for Collect {
    fn trap(&self, err: &Error) {
        self.0.lock().unwrap().push(err.to_string());
    }
}

/// Records what it received, after an optional delay.
#[derive(Debug, Clone, Default)]
struct Recorder {
    seen: Arc<Mutex<Vec<Value>>>,
    delay: Option<Duration>,
}

#[async_trait]
impl Transport for Recorder {
    async fn log(&self, level: &str, entry: &Entry) -> Result<(), Error> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let record = json!({"level": level, "entry": entry});
        self.seen.lock().unwrap().push(record);
        Ok(())
    }

    fn name(&self) -> &str {
        "recorder"
    }
}

#[derive(Debug)]
struct Rendezvous(Arc<Barrier>);

#[async_trait]
impl Transport for Rendezvous {
    async fn log(&self, _: &str, _: &Entry) -> Result<(), Error> {
        self.0.wait().await;
        Ok(())
    }
}

#[derive(Debug)]
struct Rejecting;

#[async_trait]
impl Transport for Rejecting {
    async fn log(&self, _: &str, _: &Entry) -> Result<(), Error> {
        tokio::task::yield_now().await;
        Err(Error::new("rejected").with_context("status", 503))
    }
}

#[tokio::test]
async fn test_transport_receives_normalized_entry() {
    let recorder = Recorder::default();
    let mut logger = tintlog::builder().console(Buffer::default()).build();
    logger.add_transport(recorder.clone());
    assert_eq!(logger.transport_count(), 1);

    logger.notice(("deployed", json!({"version": "1.2.0"}))).await;
    logger.http(json!({"status": 200})).await;
    logger.debug(()).await;

    let seen = recorder.seen.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            json!({"level": "notice", "entry": {"message": "deployed", "data": {"version": "1.2.0"}}}),
            json!({"level": "http", "entry": {"status": 200}}),
            json!({"level": "debug", "entry": null}),
        ]
    );
}

#[tokio::test]
async fn test_console_is_written_before_transports() {
    let buffer = Buffer::default();
    let observed = Arc::new(Mutex::new(Vec::new()));

    let lines = buffer.clone();
    let sink = observed.clone();
    let logger = tintlog::builder()
        .console(buffer.clone())
        .transport_fn(move |_, _| {
            sink.lock().unwrap().push(lines.lines().len());
            Ok(())
        })
        .build();

    logger.info("first").await;
    logger.info("second").await;
    assert_eq!(*observed.lock().unwrap(), vec![1, 2]);
}

#[tokio::test]
async fn test_transports_run_concurrently() {
    let barrier = Arc::new(Barrier::new(2));
    let logger = tintlog::builder()
        .console(Buffer::default())
        .transport(Rendezvous(barrier.clone()))
        .transport(Rendezvous(barrier))
        .build();

    // sequential delivery would never get both transports past the barrier
    let record = tokio::time::timeout(Duration::from_secs(5), logger.info("together"))
        .await
        .expect("transports should be invoked concurrently");
    assert!(record.is_emitted());
}

#[tokio::test]
async fn test_slow_transport_does_not_block_other_emissions() {
    let slow = Recorder {
        delay: Some(Duration::from_millis(200)),
        ..Recorder::default()
    };
    let buffer = Buffer::default();
    let logger = Arc::new(
        tintlog::builder()
            .console(buffer.clone())
            .transport(slow.clone())
            .build(),
    );

    let first = tokio::spawn({
        let logger = logger.clone();
        async move { logger.info("first").await }
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(buffer.lines().len(), 1);
    assert!(!first.is_finished());

    // the same logger takes a second emission while the first fan-out is pending
    let second = tokio::spawn({
        let logger = logger.clone();
        async move { logger.info("second").await }
    });
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert_eq!(buffer.lines().len(), 2);
    assert!(!first.is_finished());
    assert!(slow.seen.lock().unwrap().is_empty());

    first.await.unwrap();
    second.await.unwrap();
    assert_eq!(slow.seen.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_async_rejection_is_trapped() {
    let trap = Collect::default();
    let recorder = Recorder::default();
    let logger = tintlog::builder()
        .console(Buffer::default())
        .trap(trap.clone())
        .transport(Rejecting)
        .transport(recorder.clone())
        .build();

    let record = logger.crit("meltdown").await;
    assert!(record.is_emitted());
    assert_eq!(recorder.seen.lock().unwrap().len(), 1);

    let errors = trap.0.lock().unwrap().clone();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("Rejecting"), "{}", errors[0]);
    assert!(errors[0].contains("status: 503"), "{}", errors[0]);
}
