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

use jiff::tz::TimeZone;

use crate::layout::Layout;
use crate::layout::LayoutContext;
use crate::time::TimestampFormat;
use crate::time::default_timestamp_format;

/// A layout that formats the line as `<time> | <name> | <LEVEL>: <message>`.
///
/// Output format:
///
/// ```text
/// 22:44:57 UTC+8 | api | INFO: Hello info!
/// 22:44:57 UTC+8 | WARN: Hello from an unnamed logger
/// 22:44:57 UTC+8 | api | DEBUG
/// ```
///
/// The name segment is left out when the logger has no name, and the message segment when the
/// emission carried only a payload.
///
/// You can customize the timezone of the timestamp by setting the `timezone` with a [`TimeZone`]
/// instance. Otherwise, the system timezone is used.
///
/// # Examples
///
/// ```
/// use jiff::tz::TimeZone;
/// use tintlog::layout::TextLayout;
///
/// let layout = TextLayout::default().timezone(TimeZone::UTC);
/// ```
#[derive(Debug, Clone)]
pub struct TextLayout {
    timezone: TimeZone,
    timestamp_format: Option<TimestampFormat>,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            timezone: TimeZone::system(),
            timestamp_format: None,
        }
    }
}

impl TextLayout {
    /// Set the timezone for timestamps.
    ///
    /// Defaults to the system timezone if not set.
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = tz;
        self
    }

    /// Set a user-defined timestamp format function.
    ///
    /// Default to a 24-hour wall-clock time with a short offset, such as `13:05:09 UTC+2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintlog::layout::TextLayout;
    ///
    /// let layout = TextLayout::default()
    ///     .timestamp_format(|ts, tz| ts.to_zoned(tz.clone()).strftime("%FT%T%:z").to_string());
    /// ```
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    pub(crate) fn format(&self, ctx: &LayoutContext) -> String {
        let format = self.timestamp_format.unwrap_or(default_timestamp_format);
        let mut line = format(ctx.time, &self.timezone);

        if let Some(name) = ctx.name {
            line.push_str(" | ");
            line.push_str(name);
        }
        line.push_str(" | ");
        line.push_str(&ctx.level.to_string());
        if let Some(message) = ctx.message {
            line.push_str(": ");
            line.push_str(message);
        }
        line
    }
}

impl From<TextLayout> for Layout {
    fn from(layout: TextLayout) -> Self {
        Layout::Text(layout)
    }
}
