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
use std::ops::Deref;
use std::ops::DerefMut;

use super::Logger;
use crate::Entry;
use crate::LogRecord;
use crate::level;

/// A [`Logger`] that can also emit at custom levels by name.
///
/// The table of custom level names is taken from the logger's merged level table once, at
/// construction. Built-in levels keep their dedicated methods, which are reachable through
/// `Deref` together with the rest of the [`Logger`] API.
///
/// # Examples
///
/// ```
/// # futures::executor::block_on(async {
/// let logger = tintlog::builder().custom_level("audit", "#8E44AD").build_dyn();
///
/// logger.call("audit", "user signed in").await;
/// if let Some(audit) = logger.level("audit") {
///     audit.log("user signed out").await;
/// }
/// logger.info("built-in levels work as usual").await;
///
/// assert!(logger.call("nope", "unknown levels are refused").await.is_none());
/// # });
/// ```
#[derive(Debug)]
pub struct DynLogger {
    logger: Logger,
    custom: BTreeSet<String>,
}

/// A level bound to a logger, emitting like the dedicated method would.
#[derive(Debug, Clone, Copy)]
pub struct LevelHandle<'a> {
    logger: &'a Logger,
    level: &'a str,
}

impl<'a> LevelHandle<'a> {
    /// The level name.
    pub fn name(&self) -> &'a str {
        self.level
    }

    /// Emit `entry` at this level.
    pub async fn log(&self, entry: impl Into<Entry>) -> LogRecord {
        self.logger.log(self.level, entry).await
    }
}

impl DynLogger {
    /// Wrap `logger`, indexing its custom levels.
    pub fn new(logger: Logger) -> Self {
        let custom = logger
            .levels()
            .custom_names()
            .map(str::to_string)
            .collect();
        Self { logger, custom }
    }

    /// The custom level names, in name order.
    pub fn custom_levels(&self) -> impl Iterator<Item = &str> {
        self.custom.iter().map(String::as_str)
    }

    /// Look up a level by name.
    ///
    /// Custom levels and built-in levels are found; anything else is `None`.
    pub fn level<'a>(&'a self, name: &'a str) -> Option<LevelHandle<'a>> {
        if let Some(custom) = self.custom.get(name) {
            return Some(LevelHandle {
                logger: &self.logger,
                level: custom,
            });
        }
        level::is_builtin(name).then_some(LevelHandle {
            logger: &self.logger,
            level: name,
        })
    }

    /// Emit `entry` at the level called `name`.
    ///
    /// Returns `None` without emitting if no level has that name.
    pub async fn call(&self, name: &str, entry: impl Into<Entry>) -> Option<LogRecord> {
        let handle = self.level(name)?;
        Some(handle.log(entry).await)
    }

    /// Unwrap the inner [`Logger`].
    pub fn into_inner(self) -> Logger {
        self.logger
    }
}

impl Deref for DynLogger {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        &self.logger
    }
}

impl DerefMut for DynLogger {
    fn deref_mut(&mut self) -> &mut Logger {
        &mut self.logger
    }
}

impl From<Logger> for DynLogger {
    fn from(logger: Logger) -> Self {
        DynLogger::new(logger)
    }
}

#[cfg(test)]
mod tests {
    use jiff::tz::TimeZone;

    use super::*;
    use crate::console::Buffer;
    use crate::layout::TextLayout;

    #[tokio::test]
    async fn test_custom_level_by_name() {
        let buffer = Buffer::default();
        let logger = Logger::builder()
            .custom_level("myLevel", "#123456")
            .layout(TextLayout::default().timezone(TimeZone::UTC))
            .no_color()
            .console(buffer.clone())
            .build_dyn();

        assert_eq!(logger.custom_levels().collect::<Vec<_>>(), vec!["myLevel"]);

        let record = logger.call("myLevel", "hello").await.unwrap();
        assert_eq!(record.level(), "myLevel");
        assert!(record.is_emitted());
        assert!(buffer.lines()[0].ends_with("| MYLEVEL: hello"));
    }

    #[tokio::test]
    async fn test_builtin_and_unknown_names() {
        let buffer = Buffer::default();
        let logger = DynLogger::from(Logger::builder().console(buffer.clone()).build());

        assert_eq!(logger.level("warn").map(|h| h.name()), Some("warn"));
        assert!(logger.level("myLevel").is_none());
        assert!(logger.call("myLevel", "dropped").await.is_none());
        assert!(logger.call("notice", "kept").await.is_some());
        assert_eq!(buffer.lines().len(), 1);
    }

    #[tokio::test]
    async fn test_suppression_applies_to_custom_levels() {
        let buffer = Buffer::default();
        let logger = Logger::builder()
            .custom_level("trace", "magenta")
            .debug_level("trace")
            .debug_mode(false)
            .console(buffer.clone())
            .build_dyn();

        let record = logger.call("trace", "hidden").await.unwrap();
        assert!(!record.is_emitted());
        assert!(buffer.lines().is_empty());
    }
}
