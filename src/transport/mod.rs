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

//! Deliver copies of every emission to external sinks.
//!
//! A transport sees the level name and the normalized [`Entry`] of each emission that reaches the
//! console. Failures are reported to the logger's [`Trap`](crate::Trap) and never reach the caller.

use std::borrow::Cow;
use std::fmt;

use async_trait::async_trait;

use crate::Entry;
use crate::Error;

pub(crate) use self::fanout::Transports;

mod fanout;

/// An external sink for emissions: a file, a network service, a queue.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use tintlog::Entry;
/// use tintlog::Error;
/// use tintlog::Transport;
///
/// #[derive(Debug)]
/// struct Webhook {
///     url: String,
/// }
///
/// #[async_trait]
/// impl Transport for Webhook {
///     async fn log(&self, level: &str, entry: &Entry) -> Result<(), Error> {
///         let body = serde_json::json!({"level": level, "entry": entry});
///         // send `body` to `self.url` ...
///         # let _ = (body, &self.url);
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync + 'static {
    /// Deliver one emission.
    async fn log(&self, level: &str, entry: &Entry) -> Result<(), Error>;

    /// A name to reference this transport by in diagnostics.
    ///
    /// Default to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<T: Transport> From<T> for Box<dyn Transport> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

type TransportFunction = dyn Fn(&str, &Entry) -> Result<(), Error> + Send + Sync + 'static;

/// Create a synchronous [`Transport`] from a function.
///
/// ```rust
/// use tintlog::transport;
///
/// let transport = transport::from_fn(|level, entry| {
///     eprintln!("{level}: {:?}", entry.message());
///     Ok(())
/// })
/// .named("stderr-echo");
/// ```
pub fn from_fn(
    f: impl Fn(&str, &Entry) -> Result<(), Error> + Send + Sync + 'static,
) -> FnTransport {
    FnTransport {
        name: Cow::Borrowed("fn"),
        f: Box::new(f),
    }
}

/// A transport backed by a synchronous function. See [`from_fn`].
pub struct FnTransport {
    name: Cow<'static, str>,
    f: Box<TransportFunction>,
}

impl fmt::Debug for FnTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnTransport {{ name: {:?}, ... }}", self.name)
    }
}

impl FnTransport {
    /// Set the name used in diagnostics.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }
}

#[async_trait]
impl Transport for FnTransport {
    async fn log(&self, level: &str, entry: &Entry) -> Result<(), Error> {
        (self.f)(level, entry)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
