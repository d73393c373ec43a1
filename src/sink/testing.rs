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

use std::sync::Arc;
use std::sync::Mutex;

use crate::sink::Sink;

/// A sink that captures rendered records in memory so tests can assert on
/// them.
///
/// Cloning shares the underlying capture buffer: hand one clone to the
/// logger and keep the other for assertions.
///
/// # Examples
///
/// ```
/// use longo::Logger;
/// use longo::sink::Testing;
///
/// let sink = Testing::new();
/// let logger = Logger::new("test");
/// logger.set_output(sink.clone());
/// logger.info("hello");
/// assert_eq!(sink.records().len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Testing {
    captured: Arc<Mutex<Vec<u8>>>,
}

impl Testing {
    /// Creates an empty capture sink.
    pub fn new() -> Testing {
        Testing::default()
    }

    /// Returns everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let captured = self.captured.lock().unwrap_or_else(|err| err.into_inner());
        String::from_utf8_lossy(&captured).into_owned()
    }

    /// Returns the captured records split into lines.
    pub fn records(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Sink for Testing {
    fn write(&self, bytes: &[u8]) -> anyhow::Result<()> {
        let mut captured = self.captured.lock().unwrap_or_else(|err| err.into_inner());
        captured.extend_from_slice(bytes);
        Ok(())
    }
}
