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

//! Sinks that accept rendered log bytes.

use std::fmt;

mod stdio;
mod testing;

pub use self::stdio::Stderr;
pub use self::stdio::Stdout;
pub use self::testing::Testing;

/// A destination that accepts rendered log bytes.
///
/// Implementors receive one fully rendered record per call; partial records
/// are never handed to a sink.
pub trait Sink: fmt::Debug + Send + Sync + 'static {
    /// Writes one rendered record.
    fn write(&self, bytes: &[u8]) -> anyhow::Result<()>;

    /// Flushes any buffered bytes.
    fn flush(&self) {}

    /// Whether this sink renders ANSI colors. Terminal sinks return true.
    fn supports_color(&self) -> bool {
        false
    }
}
