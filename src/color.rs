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

//! Color utilities.

use colored::Color;
use colored::ColoredString;
use colored::Colorize;

use crate::Level;

/// Colors for different log levels.
///
/// `fatal` is a background color so fatal records stand out from ordinary
/// errors.
#[derive(Debug, Clone)]
pub struct LevelColor {
    /// Color for debug level logs.
    pub debug: Color,
    /// Color for info level logs.
    pub info: Color,
    /// Color for warning level logs.
    pub warn: Color,
    /// Color for error level logs.
    pub error: Color,
    /// Background color for fatal level logs.
    pub fatal: Color,
}

impl Default for LevelColor {
    fn default() -> Self {
        Self {
            debug: Color::Blue,
            info: Color::Green,
            warn: Color::Yellow,
            error: Color::Red,
            fatal: Color::Red,
        }
    }
}

impl LevelColor {
    /// Colorize the log level label.
    pub fn colorize(&self, no_color: bool, level: Level) -> String {
        if no_color {
            return level.as_str().to_string();
        }

        let label = ColoredString::from(level.as_str());
        let label = match level {
            Level::Debug => label.color(self.debug),
            Level::Info => label.color(self.info),
            Level::Warn => label.color(self.warn),
            Level::Error => label.color(self.error),
            Level::Fatal => label.on_color(self.fatal),
            Level::Off => label,
        };
        label.to_string()
    }
}
