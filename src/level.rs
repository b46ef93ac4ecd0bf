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

//! Level names and their colors.

use std::collections::BTreeMap;

use colored::ColoredString;

use crate::Error;
use crate::color::LevelStyle;

pub const INFO: &str = "info";
pub const DEBUG: &str = "debug";
pub const ERROR: &str = "error";
pub const HTTP: &str = "http";
pub const NOTICE: &str = "notice";
pub const WARN: &str = "warn";
pub const CRIT: &str = "crit";
pub const IGNORE: &str = "ignore";
pub const DANGER: &str = "danger";

/// The built-in levels and their default colors.
pub const DEFAULT_LEVELS: [(&str, &str); 9] = [
    (INFO, "#2ECC71"),
    (DEBUG, "#3498DB"),
    (ERROR, "#E74C3C"),
    (HTTP, "#9B59B6"),
    (NOTICE, "#1ABC9C"),
    (WARN, "#F1C40F"),
    (CRIT, "#C0392B"),
    (IGNORE, "#95A5A6"),
    (DANGER, "#E67E22"),
];

/// Whether `name` is one of the built-in levels that have a dedicated method on
/// [`Logger`](crate::Logger).
pub fn is_builtin(name: &str) -> bool {
    DEFAULT_LEVELS.iter().any(|(builtin, _)| *builtin == name)
}

#[derive(Debug, Clone)]
struct LevelEntry {
    color: String,
    style: LevelStyle,
}

impl LevelEntry {
    fn new(color: String) -> Self {
        let style = LevelStyle::resolve(&color);
        Self { color, style }
    }
}

/// The merged table of level names to color specifiers owned by one logger.
///
/// Built from [`DEFAULT_LEVELS`] with custom entries laid over it: a custom entry replaces the
/// default of the same name and otherwise adds a new level. Specifiers are not validated here;
/// an unrecognized one just renders its level as plain text.
#[derive(Debug, Clone)]
pub struct LevelRegistry {
    levels: BTreeMap<String, LevelEntry>,
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new(std::iter::empty::<(String, String)>())
    }
}

impl LevelRegistry {
    /// Merge `custom` over the default levels.
    pub fn new<I, K, V>(custom: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut levels = DEFAULT_LEVELS
            .iter()
            .map(|(name, color)| (name.to_string(), LevelEntry::new(color.to_string())))
            .collect::<BTreeMap<_, _>>();
        for (name, color) in custom {
            levels.insert(name.into(), LevelEntry::new(color.into()));
        }
        Self { levels }
    }

    /// Whether `name` is a known level.
    pub fn contains(&self, name: &str) -> bool {
        self.levels.contains_key(name)
    }

    /// The color specifier configured for `name`.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.levels.get(name).map(|entry| entry.color.as_str())
    }

    /// The resolved style for `name`. Unknown levels are plain.
    pub fn style(&self, name: &str) -> LevelStyle {
        self.levels
            .get(name)
            .map_or(LevelStyle::Plain, |entry| entry.style)
    }

    /// Render the uppercase tag of `name`.
    pub fn paint(&self, name: &str, no_color: bool) -> ColoredString {
        if no_color {
            LevelStyle::Plain.paint(name)
        } else {
            self.style(name).paint(name)
        }
    }

    /// Iterate `(name, color)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.levels
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.color.as_str()))
    }

    /// Iterate the names of levels that are not built in.
    pub fn custom_names(&self) -> impl Iterator<Item = &str> {
        self.levels
            .keys()
            .map(String::as_str)
            .filter(|name| !is_builtin(name))
    }

    /// Warnings about levels whose color could not be resolved.
    ///
    /// One warning per offending level, followed by a single suggestion if there was any.
    pub fn diagnostics(&self) -> Vec<Error> {
        let mut warnings = self
            .levels
            .iter()
            .filter(|(_, entry)| entry.style.is_plain())
            .map(|(name, entry)| {
                Error::new("invalid color for log level, falling back to plain text")
                    .with_context("level", name)
                    .with_context("color", &entry.color)
                    .with_context("fallback", name.to_uppercase())
            })
            .collect::<Vec<_>>();

        if !warnings.is_empty() {
            warnings.push(Error::new(
                "use a valid hex color code such as \"#FF5733\", or a named color such as \"red\"",
            ));
        }
        warnings
    }
}
