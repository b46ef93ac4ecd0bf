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

use std::fmt::Debug;
use std::fmt::Formatter;

use crate::layout::Layout;
use crate::layout::LayoutContext;

type FormatFunction = dyn Fn(&LayoutContext) -> String + Send + Sync + 'static;

/// A layout that you can pass the custom layout function.
///
/// The function fully replaces the default composition. It receives the colored level tag, the
/// raw message, the emission time and the logger name, and its result is written verbatim. For
/// example:
///
/// ```rust
/// use tintlog::layout::CustomLayout;
/// use tintlog::layout::LayoutContext;
///
/// let layout = CustomLayout::new(|ctx: &LayoutContext| {
///     format!("[{}] {}", ctx.level, ctx.message.unwrap_or_default())
/// });
/// ```
pub struct CustomLayout {
    f: Box<FormatFunction>,
}

impl Debug for CustomLayout {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "CustomLayout {{ ... }}")
    }
}

impl CustomLayout {
    pub fn new(layout: impl Fn(&LayoutContext) -> String + Send + Sync + 'static) -> Self {
        CustomLayout {
            f: Box::new(layout),
        }
    }

    pub(crate) fn format(&self, ctx: &LayoutContext) -> String {
        (self.f)(ctx)
    }
}

impl From<CustomLayout> for Layout {
    fn from(layout: CustomLayout) -> Self {
        Layout::Custom(layout)
    }
}
