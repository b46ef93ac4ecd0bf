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

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;

use super::DynLogger;
use super::Logger;
use crate::Console;
use crate::Entry;
use crate::Error;
use crate::LevelRegistry;
use crate::Transport;
use crate::Trap;
use crate::console::Stdout;
use crate::layout::CustomLayout;
use crate::layout::Layout;
use crate::layout::LayoutContext;
use crate::transport::Transports;
use crate::trap::DefaultTrap;

/// Create a new [builder][Builder] with default settings.
///
/// ```rust
/// let logger = tintlog::builder()
///     .name("api")
///     .debug_mode(false)
///     .custom_level("audit", "#8E44AD")
///     .build();
/// ```
pub fn builder() -> Builder {
    Builder::default()
}

/// Create a [`DynLogger`] from a plain configuration.
///
/// ```rust
/// use tintlog::LoggerConfig;
///
/// let config: LoggerConfig =
///     serde_json::from_str(r##"{"name": "api", "customLogLevels": {"audit": "#8E44AD"}}"##)
///         .unwrap();
/// let logger = tintlog::create_logger(config);
/// assert!(logger.level("audit").is_some());
/// ```
pub fn create_logger(config: LoggerConfig) -> DynLogger {
    builder().config(config).build_dyn()
}

/// The serializable part of a logger's configuration.
///
/// Every field is optional when deserializing. Both `snake_case` and `camelCase` keys are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Display name put on every line.
    pub name: Option<String>,
    /// Whether debug-gated levels are emitted. Default to `true`.
    #[serde(alias = "debugMode")]
    pub debug_mode: bool,
    /// Levels gated like `debug`, in addition to `debug` itself.
    #[serde(alias = "debugLevels")]
    pub debug_levels: BTreeSet<String>,
    /// Level colors laid over the defaults. Hex codes (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`)
    /// or color names.
    #[serde(alias = "customLogLevels")]
    pub custom_log_levels: BTreeMap<String, String>,
    /// Render every level tag without color.
    #[serde(alias = "noColor")]
    pub no_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: None,
            debug_mode: true,
            debug_levels: BTreeSet::new(),
            custom_log_levels: BTreeMap::new(),
            no_color: false,
        }
    }
}

/// A builder for configuring a [`Logger`]. See also [`builder`] for a fluent API.
///
/// Configuration is fixed once [`Builder::build`] returns; only transports can be added later.
///
/// ## Examples
///
/// ```rust
/// use jiff::tz::TimeZone;
/// use tintlog::console::Stderr;
/// use tintlog::layout::TextLayout;
///
/// let logger = tintlog::Builder::default()
///     .name("worker")
///     .debug_level("trace")
///     .layout(TextLayout::default().timezone(TimeZone::UTC))
///     .console(Stderr::default())
///     .build();
/// ```
#[must_use = "call `build` to construct the logger"]
#[derive(Debug)]
pub struct Builder {
    config: LoggerConfig,
    layout: Layout,
    console: Box<dyn Console>,
    trap: Box<dyn Trap>,
    transports: Transports,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            config: LoggerConfig::default(),
            layout: Layout::default(),
            console: Box::new(Stdout::default()),
            trap: Box::new(DefaultTrap::default()),
            transports: Transports::default(),
        }
    }
}

impl Builder {
    /// Replace the whole serializable configuration.
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Enable or disable debug-gated levels. Default to enabled.
    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.config.debug_mode = enabled;
        self
    }

    /// Gate one more level like `debug`.
    pub fn debug_level(mut self, level: impl Into<String>) -> Self {
        self.config.debug_levels.insert(level.into());
        self
    }

    /// Set the color of a level, adding the level if it is new.
    pub fn custom_level(mut self, level: impl Into<String>, color: impl Into<String>) -> Self {
        self.config
            .custom_log_levels
            .insert(level.into(), color.into());
        self
    }

    /// Set the colors of several levels at once.
    pub fn custom_levels<I, K, V>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.config.custom_log_levels.extend(
            levels
                .into_iter()
                .map(|(level, color)| (level.into(), color.into())),
        );
        self
    }

    /// Disable colored level tags.
    pub fn no_color(mut self) -> Self {
        self.config.no_color = true;
        self
    }

    /// Set the [`Layout`] composing each line.
    pub fn layout(mut self, layout: impl Into<Layout>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Replace line composition with a function. Shorthand for a [`CustomLayout`].
    pub fn format(
        self,
        format: impl Fn(&LayoutContext) -> String + Send + Sync + 'static,
    ) -> Self {
        self.layout(CustomLayout::new(format))
    }

    /// Set the [`Console`] receiving each line. Default to stdout.
    pub fn console(mut self, console: impl Into<Box<dyn Console>>) -> Self {
        self.console = console.into();
        self
    }

    /// Set the [`Trap`] receiving the logger's own diagnostics. Default to stderr.
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Register a [`Transport`].
    pub fn transport(mut self, transport: impl Into<Box<dyn Transport>>) -> Self {
        self.transports.push(transport.into());
        self
    }

    /// Register a synchronous function as a transport.
    pub fn transport_fn(
        self,
        f: impl Fn(&str, &Entry) -> Result<(), Error> + Send + Sync + 'static,
    ) -> Self {
        self.transport(crate::transport::from_fn(f))
    }

    /// Construct the [`Logger`].
    ///
    /// Levels whose color cannot be resolved are reported to the trap and render as plain text.
    pub fn build(self) -> Logger {
        let registry = LevelRegistry::new(self.config.custom_log_levels);
        for warning in registry.diagnostics() {
            self.trap.trap(&warning);
        }

        Logger {
            name: self.config.name,
            debug_mode: self.config.debug_mode,
            debug_levels: self.config.debug_levels,
            no_color: self.config.no_color,
            registry,
            layout: self.layout,
            console: self.console,
            trap: self.trap,
            transports: self.transports,
        }
    }

    /// Construct the [`Logger`] wrapped in a [`DynLogger`].
    pub fn build_dyn(self) -> DynLogger {
        DynLogger::new(self.build())
    }
}
