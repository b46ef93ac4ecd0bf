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

//! Resolve level color specifiers into renderable styles.

use colored::Color;
use colored::ColoredString;
use colored::Colorize;

/// Check whether `spec` is a hex color: `#` followed by 3, 4, 6, or 8 hex digits.
///
/// # Examples
///
/// ```
/// use tintlog::is_valid_hex_color;
///
/// assert!(is_valid_hex_color("#1E90FF"));
/// assert!(is_valid_hex_color("#fff"));
/// assert!(!is_valid_hex_color("1E90FF"));
/// assert!(!is_valid_hex_color("#12345"));
/// ```
pub fn is_valid_hex_color(spec: &str) -> bool {
    let Some(digits) = spec.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 4 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// How a level tag is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelStyle {
    /// A true color parsed from a hex specifier.
    Hex(Color),
    /// A named terminal color.
    Named(Color),
    /// No color at all.
    Plain,
}

impl LevelStyle {
    /// Resolve a color specifier.
    ///
    /// Hex codes win over names. Anything unrecognized resolves to [`LevelStyle::Plain`] so a bad
    /// specifier only costs the color, never the log line.
    pub fn resolve(spec: &str) -> LevelStyle {
        if let Some(color) = parse_hex_color(spec) {
            return LevelStyle::Hex(color);
        }
        if let Some(color) = named_color(spec) {
            return LevelStyle::Named(color);
        }
        LevelStyle::Plain
    }

    /// Whether this style renders without color.
    pub fn is_plain(&self) -> bool {
        matches!(self, LevelStyle::Plain)
    }

    /// Render `level` as an uppercase tag in this style.
    pub fn paint(self, level: &str) -> ColoredString {
        let tag = ColoredString::from(level.to_uppercase());
        match self {
            LevelStyle::Hex(color) | LevelStyle::Named(color) => tag.color(color),
            LevelStyle::Plain => tag,
        }
    }
}

fn parse_hex_color(spec: &str) -> Option<Color> {
    if !is_valid_hex_color(spec) {
        return None;
    }

    // alpha digits, if any, are ignored: terminals have no notion of them
    let digits = &spec[1..];
    let (r, g, b) = match digits.len() {
        3 | 4 => {
            let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
            (nibble(0).ok()?, nibble(1).ok()?, nibble(2).ok()?)
        }
        _ => {
            let byte = |i: usize| u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16);
            (byte(0).ok()?, byte(1).ok()?, byte(2).ok()?)
        }
    };
    Some(Color::TrueColor { r, g, b })
}

/// Look up a named color.
///
/// The names `colored` knows (`red`, `purple`, `bright blue`, ...) are tried first. Otherwise
/// case, `_`, `-` and spaces are ignored, bright variants may be spelled either `brightRed` or
/// `redBright`, and `gray`/`grey` stand for bright black.
fn named_color(name: &str) -> Option<Color> {
    if let Ok(color) = name.parse::<Color>() {
        return Some(color);
    }

    let name = name
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect::<String>();

    let base = name
        .strip_prefix("bright")
        .or_else(|| name.strip_suffix("bright"));
    match base {
        Some("") => None,
        Some(base) => format!("bright {base}").parse().ok(),
        None if matches!(name.as_str(), "gray" | "grey") => Some(Color::BrightBlack),
        None => name.parse().ok(),
    }
}
