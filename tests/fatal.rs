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

use std::panic;
use std::panic::AssertUnwindSafe;

use longo::Level;
use longo::Logger;
use longo::sink::Testing;

fn intercepted() -> ! {
    panic!("fatal hook fired");
}

#[test]
fn test_fatal_emits_before_terminating() {
    let sink = Testing::new();
    let logger = Logger::new("api");
    logger.set_output(sink.clone());
    logger.set_fatal_hook(intercepted);

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        logger.fatal("unrecoverable");
    }));
    assert!(result.is_err(), "the fatal hook must run");

    let contents = sink.contents();
    assert!(contents.contains("FATAL"));
    assert!(contents.contains("unrecoverable"));
}

#[test]
fn test_fatal_appends_backtrace() {
    let sink = Testing::new();
    let logger = Logger::new("api");
    logger.set_output(sink.clone());
    logger.set_format("${message}\n");
    logger.set_fatal_hook(intercepted);

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        logger.fatalf(format_args!("exit code {}", 1));
    }));
    assert!(result.is_err());

    let contents = sink.contents();
    assert!(contents.starts_with("exit code 1\n"));
    // The captured backtrace follows the message on its own lines.
    assert!(contents.lines().count() > 1);
}

#[test]
fn test_fatal_respects_threshold_but_still_terminates() {
    let sink = Testing::new();
    let logger = Logger::new("api");
    logger.set_output(sink.clone());
    logger.set_level(Level::Off);
    logger.set_fatal_hook(intercepted);

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        logger.fatal("suppressed output");
    }));
    assert!(result.is_err(), "termination is unconditional");
    assert!(sink.contents().is_empty());
}
