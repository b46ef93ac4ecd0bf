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

use std::collections::BTreeSet;

use jiff::Timestamp;

pub use self::builder::Builder;
pub use self::builder::LoggerConfig;
pub use self::builder::builder;
pub use self::builder::create_logger;
pub use self::dynamic::DynLogger;
pub use self::dynamic::LevelHandle;
use crate::Console;
use crate::Entry;
use crate::Error;
use crate::LevelRegistry;
use crate::LogRecord;
use crate::Transport;
use crate::Trap;
use crate::layout::Layout;
use crate::layout::LayoutContext;
use crate::level;
use crate::transport::Transports;

mod builder;
mod dynamic;

/// A logger that colors level tags, writes one line per emission to its console and fans the
/// emission out to its transports.
///
/// Every emission returns a [`LogRecord`] and never fails: console and transport errors go to the
/// configured [`Trap`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// # futures::executor::block_on(async {
/// let logger = tintlog::builder().name("api").build();
///
/// logger.info("listening").await;
/// logger.info(("listening", json!({"port": 8080}))).await;
/// logger.warn(json!({"retries": 3})).await;
/// logger.log("audit", "custom levels render too").await;
/// # });
/// ```
#[derive(Debug)]
pub struct Logger {
    name: Option<String>,
    debug_mode: bool,
    debug_levels: BTreeSet<String>,
    no_color: bool,
    registry: LevelRegistry,
    layout: Layout,
    console: Box<dyn Console>,
    trap: Box<dyn Trap>,
    transports: Transports,
}

macro_rules! level_methods {
    ($($(#[$meta:meta])* $method:ident => $level:path;)*) => {
        $(
            $(#[$meta])*
            pub async fn $method(&self, entry: impl Into<Entry>) -> LogRecord {
                self.log($level, entry).await
            }
        )*
    };
}

impl Default for Logger {
    fn default() -> Self {
        Builder::default().build()
    }
}

impl Logger {
    /// Create a new [builder][Builder].
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// The configured display name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether debug-gated levels are emitted.
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// The merged level table of this logger.
    pub fn levels(&self) -> &LevelRegistry {
        &self.registry
    }

    /// Whether `level` is suppressed when debug mode is off.
    pub fn is_debug_gated(&self, level: &str) -> bool {
        level == level::DEBUG || self.debug_levels.contains(level)
    }

    /// Whether an emission at `level` would reach the console and transports.
    pub fn is_enabled(&self, level: &str) -> bool {
        level != level::IGNORE && (self.debug_mode || !self.is_debug_gated(level))
    }

    /// Register a transport. Transports are kept in order and never removed.
    pub fn add_transport(&mut self, transport: impl Into<Box<dyn Transport>>) {
        self.transports.push(transport.into());
    }

    /// The number of registered transports.
    pub fn transport_count(&self) -> usize {
        self.transports.len()
    }

    /// Emit `entry` at `level`.
    ///
    /// Any level name is accepted. Names missing from the level table render as plain uppercase
    /// text. The line is written to the console first; transports run after it, concurrently,
    /// and the returned future completes when all of them have finished.
    ///
    /// `ignore` and suppressed debug-gated levels return immediately with a record that is not
    /// [emitted](LogRecord::is_emitted).
    pub async fn log(&self, level: &str, entry: impl Into<Entry>) -> LogRecord {
        let entry = entry.into();
        if !self.is_enabled(level) {
            return LogRecord::new(level, entry, false);
        }

        self.write_line(level, &entry);
        let outcomes = self.transports.fan_out(level, &entry).await;
        self.report(outcomes);

        LogRecord::new(level, entry, true)
    }

    /// Emit `entry` at `level` without ever waiting.
    ///
    /// The console write is synchronous. Transports get a single poll: those that are not done
    /// by then are dropped and reported to the trap.
    #[cfg(feature = "bridge-log")]
    pub(crate) fn log_now(&self, level: &str, entry: Entry) -> LogRecord {
        use futures::FutureExt;

        if !self.is_enabled(level) {
            return LogRecord::new(level, entry, false);
        }

        self.write_line(level, &entry);
        match self.transports.fan_out(level, &entry).now_or_never() {
            Some(outcomes) => self.report(outcomes),
            None => self.trap.trap(
                &Error::new("transports did not complete without waiting, delivery abandoned")
                    .with_context("level", level)
                    .with_context("transports", self.transports.len()),
            ),
        }

        LogRecord::new(level, entry, true)
    }

    fn write_line(&self, level: &str, entry: &Entry) {
        let mut line = self.render_at(level, entry.message(), Timestamp::now());
        if let Some(data) = entry.data() {
            line.push(' ');
            line.push_str(&data.to_string());
        }
        if let Err(err) = self.console.write(&line) {
            let err = Error::new("failed to write log line to console")
                .with_context("level", level)
                .with_source(err);
            self.trap.trap(&err);
        }
    }

    fn report(&self, outcomes: Vec<Result<(), Error>>) {
        for err in outcomes.into_iter().filter_map(Result::err) {
            self.trap.trap(&err);
        }
    }

    level_methods! {
        /// Emit at `info`.
        info => level::INFO;
        /// Emit at `debug`. Suppressed while debug mode is off.
        debug => level::DEBUG;
        /// Emit at `error`.
        error => level::ERROR;
        /// Emit at `http`.
        http => level::HTTP;
        /// Emit at `notice`.
        notice => level::NOTICE;
        /// Emit at `warn`.
        warn => level::WARN;
        /// Emit at `crit`.
        crit => level::CRIT;
        /// Emit at `danger`.
        danger => level::DANGER;
        /// Do nothing.
        ///
        /// Never writes to the console and never invokes transports. Useful where a branch needs
        /// a logging call but nothing is worth saying.
        ignore => level::IGNORE;
    }

    /// Preview the line an emission at `level` would produce now, without payload.
    pub fn get_string(&self, level: &str, message: Option<&str>) -> String {
        self.render_at(level, message, Timestamp::now())
    }

    /// Render the line for `level` and `message` as of `time`.
    pub fn render_at(&self, level: &str, message: Option<&str>, time: Timestamp) -> String {
        let tag = self.registry.paint(level, self.no_color);
        self.layout.format(&LayoutContext {
            level: &tag,
            message,
            time,
            name: self.name.as_deref(),
        })
    }

    /// Flush the console.
    pub fn flush(&self) {
        if let Err(err) = self.console.flush() {
            self.trap.trap(&Error::new("failed to flush console").with_source(err));
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::tz::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::console::Buffer;
    use crate::layout::TextLayout;

    fn time() -> Timestamp {
        "2024-08-10T13:05:09Z".parse().unwrap()
    }

    fn plain(builder: Builder) -> (Logger, Buffer) {
        let buffer = Buffer::default();
        let logger = builder
            .no_color()
            .layout(TextLayout::default().timezone(TimeZone::UTC))
            .console(buffer.clone())
            .build();
        (logger, buffer)
    }

    #[test]
    fn test_render_at() {
        let (logger, _) = plain(Logger::builder().name("api"));
        assert_eq!(
            logger.render_at("info", Some("hello"), time()),
            "13:05:09 UTC | api | INFO: hello"
        );
        assert_eq!(
            logger.render_at("myLevel", None, time()),
            "13:05:09 UTC | api | MYLEVEL"
        );
    }

    #[test]
    fn test_custom_format_receives_parts() {
        let buffer = Buffer::default();
        let logger = Logger::builder()
            .name("svc")
            .no_color()
            .console(buffer.clone())
            .format(|ctx| {
                format!(
                    "{}|{}|{}|{}",
                    ctx.name.unwrap_or("-"),
                    ctx.level,
                    ctx.message.unwrap_or("-"),
                    ctx.time.as_second()
                )
            })
            .build();
        assert_eq!(
            logger.render_at("warn", Some("careful"), time()),
            "svc|WARN|careful|1723295109"
        );
        assert_eq!(logger.render_at("warn", None, time()), "svc|WARN|-|1723295109");
    }

    #[tokio::test]
    async fn test_payload_follows_line() {
        let (logger, buffer) = plain(Logger::builder());
        logger.info(("up", json!({"port": 80}))).await;
        logger.info(json!({"a": 1})).await;

        let lines = buffer.lines();
        assert!(lines[0].ends_with(" | INFO: up {\"port\":80}"), "{}", lines[0]);
        assert!(lines[1].ends_with(" | INFO {\"a\":1}"), "{}", lines[1]);
    }

    #[tokio::test]
    async fn test_convenience_methods_use_own_level() {
        let (logger, buffer) = plain(Logger::builder());
        let records = vec![
            logger.info("m").await,
            logger.debug("m").await,
            logger.error("m").await,
            logger.http("m").await,
            logger.notice("m").await,
            logger.warn("m").await,
            logger.crit("m").await,
            logger.danger("m").await,
        ];

        let lines = buffer.lines();
        for (record, line) in records.iter().zip(lines.iter()) {
            let tag = format!("| {}: m", record.level().to_uppercase());
            assert!(line.ends_with(&tag), "{line} should end with {tag}");
        }
        assert_eq!(
            records.iter().map(LogRecord::level).collect::<Vec<_>>(),
            vec!["info", "debug", "error", "http", "notice", "warn", "crit", "danger"]
        );
    }

    #[tokio::test]
    async fn test_debug_levels_gate() {
        let (logger, buffer) = plain(Logger::builder().debug_mode(false).debug_level("verbose"));
        assert!(!logger.debug("hidden").await.is_emitted());
        assert!(!logger.log("verbose", "hidden").await.is_emitted());
        assert!(logger.info("shown").await.is_emitted());
        assert_eq!(buffer.lines().len(), 1);
    }

    #[cfg(feature = "bridge-log")]
    #[test]
    fn test_log_now_abandons_pending_transports() {
        use std::sync::Arc;
        use std::sync::Mutex;
        use std::sync::atomic::AtomicUsize;
        use std::sync::atomic::Ordering;

        #[derive(Debug)]
        struct Stalled;

        #[async_trait::async_trait]
        impl Transport for Stalled {
            async fn log(&self, _: &str, _: &Entry) -> Result<(), Error> {
                futures::future::pending().await
            }
        }

        #[derive(Debug, Clone, Default)]
        struct Collect(Arc<Mutex<Vec<String>>>);

        impl Trap for Collect {
            fn trap(&self, err: &Error) {
                self.0.lock().unwrap().push(err.to_string());
            }
        }

        let trap = Collect::default();
        let delivered = Arc::new(AtomicUsize::new(0));
        let counter = delivered.clone();
        let (logger, buffer) = plain(
            Logger::builder()
                .trap(trap.clone())
                .transport(Stalled)
                .transport_fn(move |_, _| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }),
        );

        let record = logger.log_now("info", Entry::text("right away"));
        assert!(record.is_emitted());
        assert!(buffer.lines()[0].ends_with(" | INFO: right away"));

        let errors = trap.0.lock().unwrap().clone();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("delivery abandoned"), "{}", errors[0]);
        assert!(errors[0].contains("transports: 2"), "{}", errors[0]);

        let (logger, _) = plain(Logger::builder().debug_mode(false));
        assert!(!logger.log_now("debug", Entry::text("hidden")).is_emitted());
    }

    #[tokio::test]
    async fn test_ignore_is_noop_in_debug_mode() {
        let (logger, buffer) = plain(Logger::builder().debug_mode(true));
        let record = logger.ignore(("x", json!(1))).await;
        assert!(!record.is_emitted());
        assert_eq!(record.level(), "ignore");
        assert_eq!(record.message(), Some("x"));
        assert!(logger.log("ignore", "x").await.entry().message().is_some());
        assert!(buffer.lines().is_empty());
    }
}
