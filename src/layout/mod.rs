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

//! Layouts compose the console line of an emission.

use colored::ColoredString;
use jiff::Timestamp;

pub use self::custom::CustomLayout;
pub use self::text::TextLayout;

mod custom;
mod text;

/// Everything a layout may put on a line.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    /// The uppercase level tag, already colored.
    pub level: &'a ColoredString,
    /// The message, absent for payload-only emissions.
    pub message: Option<&'a str>,
    /// The emission time.
    pub time: Timestamp,
    /// The configured logger name.
    pub name: Option<&'a str>,
}

/// A layout for formatting the console line.
#[derive(Debug)]
pub enum Layout {
    Text(TextLayout),
    Custom(CustomLayout),
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Text(TextLayout::default())
    }
}

impl Layout {
    pub(crate) fn format(&self, ctx: &LayoutContext) -> String {
        match self {
            Layout::Text(layout) => layout.format(ctx),
            Layout::Custom(layout) => layout.format(ctx),
        }
    }
}
