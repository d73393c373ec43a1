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
use longo::sink::Testing;

// The default logger and the console toggle are process-wide, so everything
// runs in one test to keep the mutations ordered.
#[test]
fn test_default_logger_surface() {
    let sink = Testing::new();
    longo::set_output(sink.clone());
    longo::set_format("${prefix}|${level}|${message}\n");
    longo::disable_color();

    assert_eq!(longo::prefix(), "-");
    longo::set_prefix("svc");
    assert_eq!(longo::prefix(), "svc");

    assert_eq!(longo::level(), Level::Debug);
    longo::set_level(Level::Info);
    longo::debug("dropped");
    longo::info("kept");
    assert_eq!(sink.records(), vec!["svc|INFO|kept"]);

    let mut json = Json::new();
    json.insert("ok".to_string(), true.into());
    longo::warnj(&json);
    assert_eq!(
        sink.records().pop().unwrap(),
        r#"svc|WARN|{"ok":true}"#
    );

    // The process-wide toggle silences console output for every logger.
    longo::console_output(false);
    longo::error("invisible");
    assert_eq!(sink.records().len(), 2);
    longo::console_output(true);
    longo::error("visible again");
    assert_eq!(sink.records().len(), 3);

    // Unleveled passthroughs ignore both threshold and template.
    longo::set_level(Level::Off);
    longo::print("direct");
    assert_eq!(sink.records().pop().unwrap(), "direct");
}
