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

//! Compiled `${tag}` format strings.

use std::io;
use std::io::Write;

const TAG_OPEN: &str = "${";
const TAG_CLOSE: char = '}';

/// A format string compiled into literal and tag segments.
///
/// Compilation happens once, when the format is set; rendering walks the
/// segments and asks a resolver for each tag's value. Tags the resolver does
/// not recognize render as a visible `[unknown tag <name>]` marker instead of
/// failing, so a typo in a format string degrades the output rather than
/// dropping it.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Tag(String),
}

impl Template {
    /// Compiles a format string containing `${tag}` placeholders.
    ///
    /// An unterminated `${` is kept as literal text.
    pub fn compile(format: &str) -> Template {
        let mut segments = Vec::new();
        let mut rest = format;

        while let Some(start) = rest.find(TAG_OPEN) {
            let after_open = &rest[start + TAG_OPEN.len()..];
            let Some(end) = after_open.find(TAG_CLOSE) else {
                break;
            };

            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            segments.push(Segment::Tag(after_open[..end].to_string()));
            rest = &after_open[end + TAG_CLOSE.len_utf8()..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Template { segments }
    }

    /// Renders this template into `buf`.
    ///
    /// The resolver writes each tag's value into the buffer and returns
    /// `Ok(false)` for tags it does not recognize. A resolver I/O error
    /// aborts the render; unknown tags never do.
    pub fn render<F>(&self, buf: &mut Vec<u8>, mut resolver: F) -> io::Result<()>
    where
        F: FnMut(&mut Vec<u8>, &str) -> io::Result<bool>,
    {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => buf.extend_from_slice(text.as_bytes()),
                Segment::Tag(tag) => {
                    if !resolver(buf, tag)? {
                        write!(buf, "[unknown tag {tag}]")?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(template: &Template) -> String {
        let mut buf = Vec::new();
        template
            .render(&mut buf, |buf, tag| match tag {
                "prefix" => {
                    buf.extend_from_slice(b"api");
                    Ok(true)
                }
                "message" => {
                    buf.extend_from_slice(b"hello");
                    Ok(true)
                }
                _ => Ok(false),
            })
            .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_literal_only() {
        let template = Template::compile("no tags here\n");
        assert_eq!(render(&template), "no tags here\n");
    }

    #[test]
    fn test_tags_resolved() {
        let template = Template::compile("${prefix}: ${message}\n");
        assert_eq!(render(&template), "api: hello\n");
    }

    #[test]
    fn test_unknown_tag_marker() {
        let template = Template::compile("${prefix} ${nope}!");
        assert_eq!(render(&template), "api [unknown tag nope]!");
    }

    #[test]
    fn test_unterminated_tag_kept_as_literal() {
        let template = Template::compile("${prefix} ${message");
        assert_eq!(render(&template), "api ${message");
    }

    #[test]
    fn test_empty_format() {
        let template = Template::compile("");
        assert_eq!(render(&template), "");
    }

    #[test]
    fn test_render_is_idempotent() {
        let template = Template::compile("${prefix}|${unknown}|${message}");
        assert_eq!(render(&template), render(&template));
    }
}
