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

use std::fmt;

/// A string-keyed map for the structured (`*j`) entry points.
pub type Json = serde_json::Map<String, serde_json::Value>;

/// The body of a log record, resolved once at the call site.
///
/// The three public entry-point flavors map onto the three variants: plain
/// display, preformatted arguments, and a JSON map.
pub(crate) enum Message<'a> {
    Plain(&'a dyn fmt::Display),
    Format(fmt::Arguments<'a>),
    Structured(&'a Json),
}

impl Message<'_> {
    pub(crate) fn compose(&self) -> String {
        match self {
            Message::Plain(display) => display.to_string(),
            Message::Format(args) => args.to_string(),
            Message::Structured(json) => match serde_json::to_string(json) {
                Ok(encoded) => encoded,
                Err(err) => format!("failed to encode json message: {err}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_plain() {
        let message = Message::Plain(&42);
        assert_eq!(message.compose(), "42");
    }

    #[test]
    fn test_compose_format() {
        let message = Message::Format(format_args!("{} + {} = {}", 1, 2, 3));
        assert_eq!(message.compose(), "1 + 2 = 3");
    }

    #[test]
    fn test_compose_structured() {
        let mut json = Json::new();
        json.insert("user".to_string(), "alice".into());
        let message = Message::Structured(&json);
        assert_eq!(message.compose(), r#"{"user":"alice"}"#);
    }
}
