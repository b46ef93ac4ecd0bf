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

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use futures::future::join_all;

use crate::Entry;
use crate::Error;
use crate::transport::Transport;

/// The ordered transports of one logger.
#[derive(Debug, Default)]
pub(crate) struct Transports {
    transports: Vec<Box<dyn Transport>>,
}

impl Transports {
    /// Append a transport. Duplicates are kept.
    pub(crate) fn push(&mut self, transport: Box<dyn Transport>) {
        self.transports.push(transport);
    }

    pub(crate) fn len(&self) -> usize {
        self.transports.len()
    }

    /// Invoke every transport with the same emission, concurrently.
    ///
    /// Returns one outcome per transport in registration order. A failing or panicking transport
    /// yields an `Err` outcome carrying the transport's name; it never stops the others.
    pub(crate) async fn fan_out(&self, level: &str, entry: &Entry) -> Vec<Result<(), Error>> {
        let calls = self
            .transports
            .iter()
            .enumerate()
            .map(|(index, transport)| async move {
                let result = match AssertUnwindSafe(transport.log(level, entry))
                    .catch_unwind()
                    .await
                {
                    Ok(result) => result,
                    Err(panic) => Err(Error::new("transport panicked")
                        .with_context("panic", panic_message(&*panic))),
                };

                result.map_err(|err| {
                    Error::new("failed to deliver log to transport")
                        .with_context("transport", transport.name())
                        .with_context("index", index)
                        .with_context("level", level)
                        .with_source(err)
                })
            });

        join_all(calls).await
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::transport::from_fn;

    fn counting(counter: &Arc<AtomicUsize>, fail: bool) -> Box<dyn Transport> {
        let counter = counter.clone();
        Box::new(from_fn(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            if fail {
                Err(Error::new("always fails"))
            } else {
                Ok(())
            }
        }))
    }

    #[tokio::test]
    async fn test_failure_is_isolated() {
        let ok = Arc::new(AtomicUsize::new(0));
        let bad = Arc::new(AtomicUsize::new(0));

        let mut transports = Transports::default();
        transports.push(counting(&bad, true));
        transports.push(counting(&ok, false));

        let outcomes = transports.fan_out("info", &Entry::text("hello")).await;
        assert_eq!(outcomes.len(), 2);
        let err = outcomes[0].as_ref().unwrap_err();
        assert_eq!(err.context("transport"), Some("fn"));
        assert_eq!(err.context("index"), Some("0"));
        assert_eq!(err.context("level"), Some("info"));
        assert!(outcomes[1].is_ok());

        assert_eq!(bad.load(Ordering::SeqCst), 1);
        assert_eq!(ok.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_panic_is_captured() {
        let ok = Arc::new(AtomicUsize::new(0));

        let mut transports = Transports::default();
        transports.push(Box::new(
            from_fn(|_, _| panic!("transport exploded")).named("exploding"),
        ));
        transports.push(counting(&ok, false));

        let outcomes = transports.fan_out("error", &Entry::empty()).await;
        let err = outcomes[0].as_ref().unwrap_err();
        assert_eq!(err.context("transport"), Some("exploding"));
        assert!(err.to_string().contains("transport exploded"));
        assert_eq!(ok.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_duplicates_are_invoked_each_time() {
        let counter = Arc::new(AtomicUsize::new(0));

        let mut transports = Transports::default();
        transports.push(counting(&counter, false));
        transports.push(counting(&counter, false));
        assert_eq!(transports.len(), 2);

        transports.fan_out("info", &Entry::empty()).await;
        transports.fan_out("info", &Entry::empty()).await;
        assert_eq!(counter.load(Ordering::SeqCst), 4);
    }
}
