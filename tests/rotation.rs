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

use std::fs;

use longo::Logger;
use longo::rotate::RotatingFile;
use longo::sink::Testing;
use tempfile::TempDir;

#[test]
fn test_logger_end_to_end_rotation() {
    let temp_dir = TempDir::new().unwrap();
    let file = RotatingFile::builder()
        .filename("base.log")
        .max_backups(3)
        .max_size(100)
        .build(temp_dir.path())
        .unwrap();

    let logger = Logger::new("rot").with_file(file);
    logger.set_output(Testing::new());
    logger.set_format("${message}\n");

    // Each rendered line is exactly 20 bytes. The active file reaches the
    // 100-byte limit after every 5th write, and the following write rotates
    // before it lands, so 11 writes produce exactly 2 backups.
    for i in 0..11 {
        logger.infof(format_args!("{i:019}"));
    }
    logger.flush();

    let active = fs::metadata(temp_dir.path().join("base.log")).unwrap().len();
    assert!(active <= 20, "active file should be near-empty, got {active}");
    assert!(temp_dir.path().join("base.log.1").exists());
    assert!(temp_dir.path().join("base.log.2").exists());
    assert!(!temp_dir.path().join("base.log.3").exists());
}

#[test]
fn test_file_lines_are_rendered_without_color() {
    let temp_dir = TempDir::new().unwrap();
    let file = RotatingFile::builder()
        .filename("plain.log")
        .build(temp_dir.path())
        .unwrap();

    let logger = Logger::new("rot").with_file(file);
    logger.set_output(Testing::new());
    logger.enable_color();
    logger.set_format("${level} ${message}\n");

    logger.error("boom");
    logger.flush();

    let contents = fs::read_to_string(temp_dir.path().join("plain.log")).unwrap();
    assert_eq!(contents, "ERROR boom\n");
}

#[test]
fn test_console_and_file_receive_the_same_record() {
    let temp_dir = TempDir::new().unwrap();
    let file = RotatingFile::builder()
        .filename("both.log")
        .build(temp_dir.path())
        .unwrap();

    let sink = Testing::new();
    let logger = Logger::new("rot").with_file(file);
    logger.set_output(sink.clone());
    logger.disable_color();
    logger.set_format("${prefix}: ${message}\n");

    logger.warn("to both sinks");
    logger.flush();

    let file_contents = fs::read_to_string(temp_dir.path().join("both.log")).unwrap();
    assert_eq!(file_contents, "rot: to both sinks\n");
    assert_eq!(sink.contents(), file_contents);
}
