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

use jiff::Timestamp;
use jiff::tz::Offset;
use jiff::tz::TimeZone;

/// A function rendering the time segment of a log line.
pub type TimestampFormat = fn(Timestamp, &TimeZone) -> String;

/// Render `ts` as a 24-hour wall-clock time with a short offset suffix.
///
/// ```text
/// 13:05:09 UTC
/// 15:05:09 UTC+2
/// 18:35:09 UTC+5:30
/// ```
pub fn default_timestamp_format(ts: Timestamp, tz: &TimeZone) -> String {
    let zoned = ts.to_zoned(tz.clone());
    format!(
        "{} {}",
        zoned.strftime("%H:%M:%S"),
        short_offset(zoned.offset())
    )
}

fn short_offset(offset: Offset) -> String {
    let seconds = offset.seconds();
    if seconds == 0 {
        return "UTC".to_string();
    }

    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.unsigned_abs();
    let (hours, minutes) = (seconds / 3600, seconds % 3600 / 60);
    if minutes == 0 {
        format!("UTC{sign}{hours}")
    } else {
        format!("UTC{sign}{hours}:{minutes:02}")
    }
}
