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

//! Forward records of the `log` crate to a [`Logger`].

use crate::Entry;
use crate::Logger;
use crate::level::DEBUG;
use crate::level::ERROR;
use crate::level::INFO;
use crate::level::WARN;

/// `trace` has no level of its own and is folded into `debug`.
fn level_name(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => ERROR,
        log::Level::Warn => WARN,
        log::Level::Info => INFO,
        log::Level::Debug | log::Level::Trace => DEBUG,
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.is_enabled(level_name(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        if !log::Log::enabled(self, record.metadata()) {
            return;
        }

        let level = level_name(record.level());
        self.log_now(level, Entry::text(record.args().to_string()));
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

impl Logger {
    /// Set up the log crate global logger with this [`Logger`].
    ///
    /// Records of the `log` crate are emitted at `error`, `warn`, `info` or `debug`, with `trace`
    /// records emitted at `debug`. A `log` macro never waits: the line is written right away and
    /// transports that cannot finish without waiting are dropped and reported to the trap.
    ///
    /// This function will set the global maximum log level to `Trace`. To override this, call
    /// [`log::set_max_level`] after this function.
    ///
    /// # Errors
    ///
    /// Return an error if the log crate global logger has already been set.
    ///
    /// # Examples
    ///
    /// ```
    /// if let Err(err) = tintlog::builder().name("app").build().apply() {
    ///     eprintln!("failed to setup log crate: {err}");
    /// }
    /// log::info!("forwarded to tintlog");
    /// ```
    pub fn apply(self) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(())
    }
}
