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

//! Tintlog is a small leveled logger: colored level tags, optional structured payloads, and
//! pluggable transports that receive a copy of every emission.
//!
//! # Overview
//!
//! Each [`Logger`] owns its level table, its console and its transports. There is no global
//! state: build as many loggers as you need. Built-in levels are `info`, `debug`, `error`,
//! `http`, `notice`, `warn`, `crit`, `danger` and `ignore`; any other name can be added with a
//! color of its own.
//!
//! Lines look like:
//!
//! ```text
//! 13:05:09 UTC+2 | api | INFO: listening {"port":8080}
//! ```
//!
//! # Examples
//!
//! Simple setup with the default stdout console:
//!
//! ```
//! # futures::executor::block_on(async {
//! let logger = tintlog::builder().name("api").build();
//!
//! logger.info("This is an info message.").await;
//! # });
//! ```
//!
//! Custom levels, quiet debug output, and a transport:
//!
//! ```
//! use serde_json::json;
//!
//! # futures::executor::block_on(async {
//! let logger = tintlog::builder()
//!     .debug_mode(false)
//!     .custom_level("audit", "#8E44AD")
//!     .transport_fn(|level, entry| {
//!         // ship `level` and `entry` somewhere
//!         # let _ = (level, entry);
//!         Ok(())
//!     })
//!     .build_dyn();
//!
//! logger.debug("suppressed").await;
//! logger.call("audit", ("user signed in", json!({"id": 7}))).await;
//! # });
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod color;
pub mod console;
pub mod layout;
pub mod level;
pub mod transport;
pub mod trap;

pub use color::is_valid_hex_color;
pub use console::Console;
pub use entry::Entry;
pub use entry::LogRecord;
pub use error::Error;
pub use level::LevelRegistry;
pub use transport::Transport;
pub use trap::Trap;

mod entry;
mod error;
mod logger;
pub use logger::*;

#[cfg(feature = "bridge-log")]
mod bridge;

mod time;
pub use time::TimestampFormat;
pub use time::default_timestamp_format;
