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

//! Size-rotated log files.
//!
//! # Example
//!
//! ```no_run
//! use longo::Logger;
//! use longo::rotate::RotatingFile;
//! use longo::rotate::MB;
//!
//! let file = RotatingFile::builder()
//!     .filename("app.log")
//!     .max_backups(5)
//!     .max_size(10 * MB)
//!     .build("logs")
//!     .unwrap();
//!
//! let logger = Logger::new("app").with_file(file);
//! logger.info("this record also lands in logs/app.log");
//! ```

mod monitor;
mod rotating;

pub use self::rotating::RotatingFile;
pub use self::rotating::RotatingFileBuilder;

/// One kibibyte, for rotation size thresholds.
pub const KB: u64 = 1 << 10;
/// One mebibyte, for rotation size thresholds.
pub const MB: u64 = 1 << 20;
/// One gibibyte, for rotation size thresholds.
pub const GB: u64 = 1 << 30;
/// One tebibyte, for rotation size thresholds.
pub const TB: u64 = 1 << 40;
