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

//! The process-wide default logger and the free functions that mirror the
//! [`Logger`] API on it.

use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use crate::Level;
use crate::Logger;
use crate::logger::FatalHook;
use crate::logger::Json;
use crate::sink::Sink;

static CONSOLE_OUTPUT: AtomicBool = AtomicBool::new(true);

static GLOBAL: LazyLock<Logger> = LazyLock::new(|| Logger::new("-"));

/// Enables or disables console output for every logger in the process.
///
/// File sinks are unaffected.
pub fn console_output(enabled: bool) {
    CONSOLE_OUTPUT.store(enabled, Ordering::Relaxed);
}

pub(crate) fn console_enabled() -> bool {
    CONSOLE_OUTPUT.load(Ordering::Relaxed)
}

/// Returns the process-wide default logger (prefix `-`).
pub fn default_logger() -> &'static Logger {
    &GLOBAL
}

/// Returns the default logger's prefix.
pub fn prefix() -> String {
    GLOBAL.prefix()
}

/// Sets the default logger's prefix.
pub fn set_prefix(prefix: impl Into<String>) {
    GLOBAL.set_prefix(prefix);
}

/// Returns the default logger's severity threshold.
pub fn level() -> Level {
    GLOBAL.level()
}

/// Sets the default logger's severity threshold.
pub fn set_level(level: Level) {
    GLOBAL.set_level(level);
}

/// Sets the default logger's line format.
pub fn set_format(format: &str) {
    GLOBAL.set_format(format);
}

/// Enables colorized severity labels on the default logger.
pub fn enable_color() {
    GLOBAL.enable_color();
}

/// Disables colorized severity labels on the default logger.
pub fn disable_color() {
    GLOBAL.disable_color();
}

/// Replaces the default logger's console sink.
pub fn set_output(sink: impl Sink) {
    GLOBAL.set_output(sink);
}

/// Replaces the default logger's fatal hook.
pub fn set_fatal_hook(hook: FatalHook) {
    GLOBAL.set_fatal_hook(hook);
}

/// Logs a message at `Debug` severity on the default logger.
#[track_caller]
pub fn debug(message: impl fmt::Display) {
    GLOBAL.debug(message);
}

/// Logs preformatted arguments at `Debug` severity on the default logger.
#[track_caller]
pub fn debugf(args: fmt::Arguments) {
    GLOBAL.debugf(args);
}

/// Logs a JSON map at `Debug` severity on the default logger.
#[track_caller]
pub fn debugj(json: &Json) {
    GLOBAL.debugj(json);
}

/// Logs a message at `Info` severity on the default logger.
#[track_caller]
pub fn info(message: impl fmt::Display) {
    GLOBAL.info(message);
}

/// Logs preformatted arguments at `Info` severity on the default logger.
#[track_caller]
pub fn infof(args: fmt::Arguments) {
    GLOBAL.infof(args);
}

/// Logs a JSON map at `Info` severity on the default logger.
#[track_caller]
pub fn infoj(json: &Json) {
    GLOBAL.infoj(json);
}

/// Logs a message at `Warn` severity on the default logger.
#[track_caller]
pub fn warn(message: impl fmt::Display) {
    GLOBAL.warn(message);
}

/// Logs preformatted arguments at `Warn` severity on the default logger.
#[track_caller]
pub fn warnf(args: fmt::Arguments) {
    GLOBAL.warnf(args);
}

/// Logs a JSON map at `Warn` severity on the default logger.
#[track_caller]
pub fn warnj(json: &Json) {
    GLOBAL.warnj(json);
}

/// Logs a message at `Error` severity on the default logger.
#[track_caller]
pub fn error(message: impl fmt::Display) {
    GLOBAL.error(message);
}

/// Logs preformatted arguments at `Error` severity on the default logger.
#[track_caller]
pub fn errorf(args: fmt::Arguments) {
    GLOBAL.errorf(args);
}

/// Logs a JSON map at `Error` severity on the default logger.
#[track_caller]
pub fn errorj(json: &Json) {
    GLOBAL.errorj(json);
}

/// Logs a message at `Fatal` severity on the default logger, then
/// **terminates the process** with a non-zero status. See [`Logger::fatal`].
#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    GLOBAL.fatal(message)
}

/// Logs preformatted arguments at `Fatal` severity on the default logger,
/// then **terminates the process** with a non-zero status. See
/// [`Logger::fatal`].
#[track_caller]
pub fn fatalf(args: fmt::Arguments) -> ! {
    GLOBAL.fatalf(args)
}

/// Logs a JSON map at `Fatal` severity on the default logger, then
/// **terminates the process** with a non-zero status. See [`Logger::fatal`].
#[track_caller]
pub fn fatalj(json: &Json) -> ! {
    GLOBAL.fatalj(json)
}

/// Writes a message straight to the default logger's console sink.
pub fn print(message: impl fmt::Display) {
    GLOBAL.print(message);
}

/// Writes preformatted arguments straight to the default logger's console
/// sink.
pub fn printf(args: fmt::Arguments) {
    GLOBAL.printf(args);
}

/// Writes a JSON map straight to the default logger's console sink.
pub fn printj(json: &Json) {
    GLOBAL.printj(json);
}
