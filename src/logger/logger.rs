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

use std::backtrace::Backtrace;
use std::fmt;
use std::io;
use std::io::Write;
use std::panic::Location;
use std::path::Path;
use std::sync::Mutex;
use std::sync::MutexGuard;

use jiff::Zoned;

use crate::Level;
use crate::color::LevelColor;
use crate::global;
use crate::logger::Json;
use crate::logger::Message;
use crate::logger::fatal;
use crate::logger::fatal::FatalHook;
use crate::rotate::RotatingFile;
use crate::sink::Sink;
use crate::sink::Stdout;
use crate::template::Template;

/// The default line format.
pub const DEFAULT_FORMAT: &str =
    "${prefix}|${time_custom}|${level}|${short_file}:${line} ${message}\n";

const TIME_CUSTOM: &str = "%Y-%m-%dT%H:%M:%S.%6f";
const TIME_RFC3339: &str = "%Y-%m-%dT%H:%M:%S%:z";

// Backtraces appended to fatal records are capped at 4 KiB.
const BACKTRACE_LIMIT: usize = 4 << 10;

/// A named logger that renders leveled records through a template and hands
/// them to a console sink and, optionally, a size-rotated file sink.
///
/// Logging never returns an error to the caller: render and sink failures
/// are swallowed, trading delivery guarantees for non-invasiveness.
///
/// # Examples
///
/// ```
/// use longo::Level;
/// use longo::Logger;
///
/// let logger = Logger::new("api");
/// logger.set_level(Level::Info);
/// logger.info("listening");
/// logger.debugf(format_args!("ignored below the {} threshold", "INFO"));
/// ```
#[derive(Debug)]
pub struct Logger {
    state: Mutex<State>,
    file: Option<RotatingFile>,
}

#[derive(Debug)]
struct State {
    prefix: String,
    level: Level,
    template: Template,
    colors: LevelColor,
    color_enabled: bool,
    console: Box<dyn Sink>,
    pool: BufferPool,
    fatal_hook: FatalHook,
}

impl Logger {
    /// Creates a logger with the given prefix, a `Debug` threshold, the
    /// [`DEFAULT_FORMAT`] template, and a colorized stdout console sink.
    pub fn new(prefix: impl Into<String>) -> Logger {
        Logger {
            state: Mutex::new(State {
                prefix: prefix.into(),
                level: Level::Debug,
                template: Template::compile(DEFAULT_FORMAT),
                colors: LevelColor::default(),
                color_enabled: true,
                console: Box::new(Stdout::default()),
                pool: BufferPool::default(),
                fatal_hook: fatal::exit_process,
            }),
            file: None,
        }
    }

    /// Attaches a size-rotated file sink. File output is always rendered
    /// without colors.
    #[must_use]
    pub fn with_file(mut self, file: RotatingFile) -> Logger {
        self.file = Some(file);
        self
    }

    /// Returns the prefix identifying this logger in rendered lines.
    pub fn prefix(&self) -> String {
        self.state().prefix.clone()
    }

    /// Sets the prefix.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.state().prefix = prefix.into();
    }

    /// Returns the current severity threshold.
    pub fn level(&self) -> Level {
        self.state().level
    }

    /// Sets the severity threshold. Takes effect on the next call.
    pub fn set_level(&self, level: Level) {
        self.state().level = level;
    }

    /// Compiles and installs a new line format.
    pub fn set_format(&self, format: &str) {
        self.state().template = Template::compile(format);
    }

    /// Enables colorized severity labels on the console sink.
    pub fn enable_color(&self) {
        self.state().color_enabled = true;
    }

    /// Disables colorized severity labels.
    pub fn disable_color(&self) {
        self.state().color_enabled = false;
    }

    /// Replaces the console sink.
    pub fn set_output(&self, sink: impl Sink) {
        self.state().console = Box::new(sink);
    }

    /// Replaces the action taken after a fatal record is emitted.
    ///
    /// Intended for tests that need to observe [`Logger::fatal`] without the
    /// process exiting.
    pub fn set_fatal_hook(&self, hook: FatalHook) {
        self.state().fatal_hook = hook;
    }

    /// Logs a message at `Debug` severity.
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, Location::caller(), Message::Plain(&message));
    }

    /// Logs preformatted arguments at `Debug` severity.
    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments) {
        self.log(Level::Debug, Location::caller(), Message::Format(args));
    }

    /// Logs a JSON map at `Debug` severity.
    #[track_caller]
    pub fn debugj(&self, json: &Json) {
        self.log(Level::Debug, Location::caller(), Message::Structured(json));
    }

    /// Logs a message at `Info` severity.
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, Location::caller(), Message::Plain(&message));
    }

    /// Logs preformatted arguments at `Info` severity.
    #[track_caller]
    pub fn infof(&self, args: fmt::Arguments) {
        self.log(Level::Info, Location::caller(), Message::Format(args));
    }

    /// Logs a JSON map at `Info` severity.
    #[track_caller]
    pub fn infoj(&self, json: &Json) {
        self.log(Level::Info, Location::caller(), Message::Structured(json));
    }

    /// Logs a message at `Warn` severity.
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(Level::Warn, Location::caller(), Message::Plain(&message));
    }

    /// Logs preformatted arguments at `Warn` severity.
    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments) {
        self.log(Level::Warn, Location::caller(), Message::Format(args));
    }

    /// Logs a JSON map at `Warn` severity.
    #[track_caller]
    pub fn warnj(&self, json: &Json) {
        self.log(Level::Warn, Location::caller(), Message::Structured(json));
    }

    /// Logs a message at `Error` severity.
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, Location::caller(), Message::Plain(&message));
    }

    /// Logs preformatted arguments at `Error` severity.
    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments) {
        self.log(Level::Error, Location::caller(), Message::Format(args));
    }

    /// Logs a JSON map at `Error` severity.
    #[track_caller]
    pub fn errorj(&self, json: &Json) {
        self.log(Level::Error, Location::caller(), Message::Structured(json));
    }

    /// Logs a message at `Fatal` severity, with a backtrace appended, then
    /// **terminates the process** with a non-zero status.
    ///
    /// This never returns. The terminal action runs through the configured
    /// fatal hook; see [`Logger::set_fatal_hook`].
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.log(Level::Fatal, Location::caller(), Message::Plain(&message));
        let hook = self.state().fatal_hook;
        hook()
    }

    /// Logs preformatted arguments at `Fatal` severity, then **terminates
    /// the process** with a non-zero status. See [`Logger::fatal`].
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments) -> ! {
        self.log(Level::Fatal, Location::caller(), Message::Format(args));
        let hook = self.state().fatal_hook;
        hook()
    }

    /// Logs a JSON map at `Fatal` severity, then **terminates the process**
    /// with a non-zero status. See [`Logger::fatal`].
    #[track_caller]
    pub fn fatalj(&self, json: &Json) -> ! {
        self.log(Level::Fatal, Location::caller(), Message::Structured(json));
        let hook = self.state().fatal_hook;
        hook()
    }

    /// Writes a message straight to the console sink, bypassing threshold
    /// and template.
    pub fn print(&self, message: impl fmt::Display) {
        let state = self.state();
        let _ = state.console.write(format!("{message}\n").as_bytes());
    }

    /// Writes preformatted arguments straight to the console sink.
    pub fn printf(&self, args: fmt::Arguments) {
        let state = self.state();
        let _ = state.console.write(format!("{args}\n").as_bytes());
    }

    /// Writes a JSON map straight to the console sink.
    pub fn printj(&self, json: &Json) {
        let body = Message::Structured(json).compose();
        let state = self.state();
        let _ = state.console.write(format!("{body}\n").as_bytes());
    }

    /// Flushes the attached sinks.
    pub fn flush(&self) {
        self.state().console.flush();
        if let Some(file) = &self.file {
            file.flush();
        }
    }

    // Lock poisoning would only propagate a panic from an unrelated caller;
    // the state itself stays consistent, so recover the guard.
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|err| err.into_inner())
    }

    /// The per-call emit path. Holds the instance lock across render and
    /// write so concurrent calls never interleave partial output.
    fn log(&self, level: Level, location: &Location<'_>, message: Message<'_>) {
        let mut state = self.state();
        if level < state.level {
            return;
        }

        let mut body = message.compose();
        if level == Level::Fatal {
            push_backtrace(&mut body);
        }

        let mut buf = state.pool.acquire();

        if global::console_enabled() {
            let colored = state.color_enabled && state.console.supports_color();
            if state
                .render(&mut buf, level, location, &body, colored)
                .is_ok()
            {
                let _ = state.console.write(&buf);
            }
        }

        if let Some(file) = &self.file {
            buf.clear();
            if state.render(&mut buf, level, location, &body, false).is_ok() {
                let _ = Sink::write(file, &buf);
            }
        }

        state.pool.release(buf);
    }
}

impl State {
    fn render(
        &self,
        buf: &mut Vec<u8>,
        level: Level,
        location: &Location<'_>,
        body: &str,
        colored: bool,
    ) -> io::Result<()> {
        self.template.render(buf, |buf, tag| {
            match tag {
                "time_custom" => write!(buf, "{}", Zoned::now().strftime(TIME_CUSTOM))?,
                "time_rfc3339" => write!(buf, "{}", Zoned::now().strftime(TIME_RFC3339))?,
                "level" => {
                    let label = self.colors.colorize(!colored, level);
                    buf.extend_from_slice(label.as_bytes());
                }
                "prefix" => buf.extend_from_slice(self.prefix.as_bytes()),
                "long_file" => buf.extend_from_slice(location.file().as_bytes()),
                "short_file" => {
                    let file = location.file();
                    let base = Path::new(file)
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| file.to_string());
                    buf.extend_from_slice(base.as_bytes());
                }
                "line" => write!(buf, "{}", location.line())?,
                "message" => buf.extend_from_slice(body.as_bytes()),
                _ => return Ok(false),
            }
            Ok(true)
        })
    }
}

fn push_backtrace(body: &mut String) {
    let backtrace = Backtrace::force_capture().to_string();
    let mut end = backtrace.len().min(BACKTRACE_LIMIT);
    while !backtrace.is_char_boundary(end) {
        end -= 1;
    }
    body.push('\n');
    body.push_str(&backtrace[..end]);
}

/// A free list of render buffers, reused across calls.
#[derive(Debug, Default)]
struct BufferPool {
    buffers: Vec<Vec<u8>>,
}

impl BufferPool {
    fn acquire(&mut self) -> Vec<u8> {
        let mut buf = self
            .buffers
            .pop()
            .unwrap_or_else(|| Vec::with_capacity(256));
        buf.clear();
        buf
    }

    fn release(&mut self, buf: Vec<u8>) {
        self.buffers.push(buf);
    }
}
