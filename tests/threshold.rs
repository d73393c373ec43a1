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

use longo::Json;
use longo::Level;
use longo::Logger;
use longo::sink::Testing;

fn capture_logger(prefix: &str) -> (Logger, Testing) {
    let sink = Testing::new();
    let logger = Logger::new(prefix);
    logger.set_output(sink.clone());
    (logger, sink)
}

#[test]
fn test_below_threshold_produces_no_bytes() {
    let (logger, sink) = capture_logger("api");
    logger.set_level(Level::Warn);

    logger.debug("dropped");
    logger.info("dropped");
    logger.infof(format_args!("dropped {}", 1));
    logger.infoj(&Json::new());

    assert!(sink.contents().is_empty());
}

#[test]
fn test_at_or_above_threshold_produces_one_line_each() {
    let (logger, sink) = capture_logger("api");
    logger.set_level(Level::Warn);

    logger.warn("first");
    logger.error("second");

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert!(records[0].starts_with("api|"));
    assert!(records[0].ends_with(" first"));
    assert!(records[1].contains("ERROR"));
    assert!(records[1].ends_with(" second"));
}

#[test]
fn test_all_three_entry_point_flavors() {
    let (logger, sink) = capture_logger("api");
    logger.set_format("${message}\n");

    logger.info("plain");
    logger.infof(format_args!("formatted {}", 7));
    let mut json = Json::new();
    json.insert("k".to_string(), "v".into());
    logger.infoj(&json);

    assert_eq!(
        sink.records(),
        vec!["plain", "formatted 7", r#"{"k":"v"}"#]
    );
}

#[test]
fn test_default_format_shape() {
    let (logger, sink) = capture_logger("svc");
    logger.disable_color();

    logger.info("hello");

    let record = sink.records().pop().unwrap();
    let fields = record.split('|').collect::<Vec<_>>();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0], "svc");
    assert_eq!(fields[2], "INFO");
    assert!(fields[3].starts_with("threshold.rs:"));
    assert!(fields[3].ends_with(" hello"));
}

#[test]
fn test_caller_location_through_free_functions() {
    let sink = Testing::new();
    longo::set_output(sink.clone());
    longo::set_format("${short_file}|${message}\n");

    longo::info("from the default logger");

    let record = sink.records().pop().unwrap();
    assert_eq!(record, "threshold.rs|from the default logger");
}

#[test]
fn test_print_bypasses_threshold_and_template() {
    let (logger, sink) = capture_logger("api");
    logger.set_level(Level::Off);

    logger.print("raw");
    logger.printf(format_args!("raw {}", 2));

    assert_eq!(sink.records(), vec!["raw", "raw 2"]);
}
