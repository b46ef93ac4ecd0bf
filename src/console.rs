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

//! Local destinations for the formatted line.
//!
//! The console write happens before any transport runs and is the authoritative local record of
//! an emission.

use std::fmt;
use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::Error;

/// A local sink that receives one line per emission.
pub trait Console: fmt::Debug + Send + Sync + 'static {
    /// Write one line. The line carries no trailing newline.
    fn write(&self, line: &str) -> Result<(), Error>;

    /// Flush any buffered lines.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<T: Console> From<T> for Box<dyn Console> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A console that prints lines to stdout.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stdout {}

impl Console for Stdout {
    fn write(&self, line: &str) -> Result<(), Error> {
        writeln!(std::io::stdout().lock(), "{line}").map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stdout().flush().map_err(Error::from_io_error)
    }
}

/// A console that prints lines to stderr.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Stderr {}

impl Console for Stderr {
    fn write(&self, line: &str) -> Result<(), Error> {
        writeln!(std::io::stderr().lock(), "{line}").map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stderr().flush().map_err(Error::from_io_error)
    }
}

/// A console that keeps lines in memory.
///
/// Clones share the same buffer, so a clone can be handed to the logger while the original is
/// kept for reading.
///
/// # Examples
///
/// ```
/// use tintlog::console::Buffer;
///
/// let buffer = Buffer::default();
/// let logger = tintlog::builder().console(buffer.clone()).no_color().build();
/// # let _ = logger;
/// assert!(buffer.lines().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Buffer {
    /// A snapshot of the captured lines.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Console for Buffer {
    fn write(&self, line: &str) -> Result<(), Error> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_is_shared_between_clones() {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        writer.write("one").unwrap();
        writer.write("two").unwrap();
        assert_eq!(buffer.lines(), vec!["one", "two"]);
        assert_eq!(buffer.take(), vec!["one", "two"]);
        assert!(buffer.lines().is_empty());
    }
}
