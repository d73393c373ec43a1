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

//! Longo is a leveled, templated logger with an interactive console sink and
//! an optional size-rotated file sink.
//!
//! # Overview
//!
//! Records pass a per-logger severity threshold, are rendered through a
//! `${tag}` format template, and land on the console and/or a rotating file.
//! The file sink keeps a bounded number of numbered backups and rotates both
//! synchronously on oversized writes and from a periodic background check.
//!
//! # Examples
//!
//! Logging on the process-wide default logger:
//!
//! ```
//! use longo::Level;
//!
//! longo::set_level(Level::Info);
//! longo::info("service started");
//! longo::infof(format_args!("listening on port {}", 8080));
//! ```
//!
//! A named logger with a rotating file sink:
//!
//! ```no_run
//! use longo::Logger;
//! use longo::rotate::MB;
//! use longo::rotate::RotatingFile;
//!
//! let file = RotatingFile::builder()
//!     .filename("app.log")
//!     .max_backups(5)
//!     .max_size(10 * MB)
//!     .build("logs")
//!     .unwrap();
//!
//! let logger = Logger::new("app").with_file(file);
//! logger.warn("disk almost full");
//! ```

pub mod rotate;
pub mod sink;

mod color;
mod global;
mod level;
mod logger;
mod template;

pub use color::LevelColor;
pub use global::console_output;
pub use global::debug;
pub use global::debugf;
pub use global::debugj;
pub use global::default_logger;
pub use global::disable_color;
pub use global::enable_color;
pub use global::error;
pub use global::errorf;
pub use global::errorj;
pub use global::fatal;
pub use global::fatalf;
pub use global::fatalj;
pub use global::info;
pub use global::infof;
pub use global::infoj;
pub use global::level;
pub use global::prefix;
pub use global::print;
pub use global::printf;
pub use global::printj;
pub use global::set_fatal_hook;
pub use global::set_format;
pub use global::set_level;
pub use global::set_output;
pub use global::set_prefix;
pub use global::warn;
pub use global::warnf;
pub use global::warnj;
pub use level::Level;
pub use logger::DEFAULT_FORMAT;
pub use logger::FatalHook;
pub use logger::Json;
pub use logger::Logger;
pub use template::Template;
