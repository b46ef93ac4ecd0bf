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

//! The arguments of an emission and the record handed back to the caller.

use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeStruct;
use serde_json::Value;

/// What a caller asked to log: a message with an optional structured payload, a payload alone, or
/// nothing at all.
///
/// Conversions decide the variant, so call sites rarely name it:
///
/// ```
/// use serde_json::json;
/// use tintlog::Entry;
///
/// assert_eq!(Entry::from("started").message(), Some("started"));
/// assert_eq!(Entry::from(("started", json!({"port": 80}))).data(), Some(&json!({"port": 80})));
///
/// // a structured value takes the payload slot and leaves no message
/// let entry = Entry::from(json!({"a": 1}));
/// assert_eq!(entry.message(), None);
/// assert_eq!(entry.data(), Some(&json!({"a": 1})));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    /// A text message and an optional payload.
    Text {
        /// The message.
        message: String,
        /// The payload.
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
    },
    /// A payload without a message.
    Data(Value),
    /// No arguments.
    #[default]
    Empty,
}

impl Entry {
    /// A message without payload.
    pub fn text(message: impl Into<String>) -> Self {
        Entry::Text {
            message: message.into(),
            data: None,
        }
    }

    /// A payload without message.
    pub fn payload(data: impl Into<Value>) -> Self {
        Entry::Data(data.into())
    }

    /// No message and no payload.
    pub fn empty() -> Self {
        Entry::Empty
    }

    /// Attach a payload.
    ///
    /// On a payload-only entry this replaces the payload.
    pub fn with_data(self, data: impl Into<Value>) -> Self {
        match self {
            Entry::Text { message, .. } => Entry::Text {
                message,
                data: Some(data.into()),
            },
            Entry::Data(_) | Entry::Empty => Entry::Data(data.into()),
        }
    }

    /// The message text, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Entry::Text { message, .. } => Some(message),
            Entry::Data(_) | Entry::Empty => None,
        }
    }

    /// The structured payload, if any.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Entry::Text { data, .. } => data.as_ref(),
            Entry::Data(data) => Some(data),
            Entry::Empty => None,
        }
    }
}

impl From<&str> for Entry {
    fn from(message: &str) -> Self {
        Entry::text(message)
    }
}

impl From<String> for Entry {
    fn from(message: String) -> Self {
        Entry::text(message)
    }
}

impl From<&String> for Entry {
    fn from(message: &String) -> Self {
        Entry::text(message.as_str())
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        // text is text no matter how it arrived
        match value {
            Value::String(message) => Entry::text(message),
            value => Entry::Data(value),
        }
    }
}

impl<S: Into<String>> From<(S, Value)> for Entry {
    fn from((message, data): (S, Value)) -> Self {
        Entry::Text {
            message: message.into(),
            data: Some(data),
        }
    }
}

impl From<()> for Entry {
    fn from(_: ()) -> Self {
        Entry::Empty
    }
}

/// What an emission call saw, handed back to the caller.
///
/// The record is informational only. It carries the inputs unchanged whether or not anything was
/// written; [`LogRecord::is_emitted`] tells the two apart.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    level: String,
    entry: Entry,
    emitted: bool,
}

impl LogRecord {
    pub(crate) fn new(level: impl Into<String>, entry: Entry, emitted: bool) -> Self {
        Self {
            level: level.into(),
            entry,
            emitted,
        }
    }

    /// The level name.
    pub fn level(&self) -> &str {
        &self.level
    }

    /// The normalized arguments.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// The message text, if any.
    pub fn message(&self) -> Option<&str> {
        self.entry.message()
    }

    /// The structured payload, if any.
    pub fn data(&self) -> Option<&Value> {
        self.entry.data()
    }

    /// Whether the record reached the console and the transports.
    ///
    /// False for `ignore` and for debug-gated levels while debug output is off.
    pub fn is_emitted(&self) -> bool {
        self.emitted
    }

    /// Consume the record, returning its arguments.
    pub fn into_entry(self) -> Entry {
        self.entry
    }
}

impl Serialize for LogRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut record = serializer.serialize_struct("LogRecord", 3)?;
        record.serialize_field("level", &self.level)?;
        record.serialize_field("message", &self.message())?;
        record.serialize_field("data", &self.data())?;
        record.end()
    }
}
