//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Parser for the `{ColorName}` tag grammar.

use crate::{Color, ColorString, ColorStringError, ColorStringResult, LeadingText, ParseConfig};
use tracing::trace;

/// A recognized color tag within tagged input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag {
    /// Byte offset of the opening `{`
    pub start: usize,
    /// Byte offset just past the closing `}`
    pub end: usize,
    pub color: Color,
}

/// Iterator over the recognized color tags in a string, left to right.
///
/// A brace group only counts as a tag when its content is one of the
/// sixteen color names; everything else is skipped over as text.
#[derive(Clone, Debug)]
pub struct Tags<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Tags<'a> {
    pub fn new(input: &'a str) -> Tags<'a> {
        Tags { input, position: 0 }
    }
}

impl Iterator for Tags<'_> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        // Every byte is visited at most once: a scan stops at the next brace
        // and resumes from there.
        while let Some(relative) = self.input[self.position..].find('{') {
            let start = self.position + relative;
            let name_start = start + 1;
            let Some(name_len) = self.input[name_start..].find(['{', '}']) else {
                // No brace anywhere after this point
                break;
            };
            let name_end = name_start + name_len;
            if self.input.as_bytes()[name_end] == b'{' {
                self.position = name_end;
                continue;
            }
            let name = &self.input[name_start..name_end];
            self.position = name_end + 1;
            if name.len() > Color::MAX_NAME_LEN {
                continue;
            }
            if let Some(color) = Color::from_name(name) {
                return Some(Tag {
                    start,
                    end: self.position,
                    color,
                });
            }
        }
        self.position = self.input.len();
        None
    }
}

/// Builds a [`ColorString`] from tagged input.
///
/// Each recognized tag closes the previous section and opens a new one; the
/// text of every section is appended with the tag's color as foreground and
/// an unset background. Sections without text record no run.
pub(crate) fn parse_tagged(input: &str, config: &ParseConfig) -> ColorStringResult<ColorString> {
    let mut string = ColorString::new();
    let mut cursor = 0;
    let mut current: Option<Color> = None;

    for tag in Tags::new(input) {
        append_section(&mut string, &input[cursor..tag.start], current, config)?;
        current = Some(tag.color);
        cursor = tag.end;
    }
    append_section(&mut string, &input[cursor..], current, config)?;

    trace!(runs = string.run_count(), len = string.len(), "parsed tagged string");
    Ok(string)
}

fn append_section(
    string: &mut ColorString,
    text: &str,
    color: Option<Color>,
    config: &ParseConfig,
) -> ColorStringResult<()> {
    match color {
        Some(color) => {
            trace!(offset = string.len(), %color, "section");
            string.append(text, Some(color), None);
        }
        None if text.is_empty() => {}
        None => match config.leading_text {
            LeadingText::Reject => {
                return Err(ColorStringError::InvalidTag {
                    tag: leading_token(text).to_string(),
                });
            }
            LeadingText::Uncolored => {
                trace!(len = text.len(), "untagged leading section");
                string.append(text, None, None);
            }
        },
    }
    Ok(())
}

/// The token a tag would occupy at the start of `text`: everything up to the
/// first `}`, without a leading `{`.
fn leading_token(text: &str) -> &str {
    let token = text.split('}').next().unwrap_or(text);
    token.strip_prefix('{').unwrap_or(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors(string: &ColorString) -> Vec<(usize, Option<Color>, Option<Color>)> {
        string
            .run_boundaries()
            .iter()
            .map(|run| (run.offset, run.foreground, run.background))
            .collect()
    }

    #[test]
    fn test_parse_two_sections() {
        let string = ColorString::parse("{Red}abc{Blue}def").unwrap();
        assert_eq!(string.as_str(), "abcdef");
        assert_eq!(
            colors(&string),
            vec![(0, Some(Color::Red), None), (3, Some(Color::Blue), None)]
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        let string = ColorString::parse("{red}a{DARKGREEN}b{darkgreen}c").unwrap();
        assert_eq!(
            colors(&string),
            vec![
                (0, Some(Color::Red), None),
                (1, Some(Color::DarkGreen), None),
                (2, Some(Color::DarkGreen), None),
            ]
        );
    }

    #[test]
    fn test_parse_empty_input() {
        let string = ColorString::parse("").unwrap();
        assert!(string.is_empty());
        assert_eq!(string.run_count(), 0);
    }

    #[test]
    fn test_parse_empty_sections_record_nothing() {
        let string = ColorString::parse("{Red}{Blue}x{Green}").unwrap();
        assert_eq!(string.as_str(), "x");
        assert_eq!(colors(&string), vec![(0, Some(Color::Blue), None)]);
    }

    #[test]
    fn test_parse_unknown_braces_are_literal() {
        let string = ColorString::parse("{Red}a{Purple}b{}c{Blue").unwrap();
        assert_eq!(string.as_str(), "a{Purple}b{}c{Blue");
        assert_eq!(string.run_count(), 1);
    }

    #[test]
    fn test_parse_nested_open_brace() {
        let string = ColorString::parse("{Red}x{{Green}y").unwrap();
        assert_eq!(string.as_str(), "x{y");
        assert_eq!(
            colors(&string),
            vec![(0, Some(Color::Red), None), (2, Some(Color::Green), None)]
        );
    }

    #[test]
    fn test_parse_many_open_braces() {
        let braces = "{".repeat(100_000);
        let string = ColorString::parse(format!("{{Red}}{}{{Blue}}x", braces)).unwrap();
        assert_eq!(string.len(), 100_001);
        let runs: Vec<_> = string.runs().collect();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text(), braces);
        assert_eq!(runs[0].foreground(), Some(Color::Red));
        assert_eq!(runs[1].range(), 100_000..100_001);
        assert_eq!(runs[1].text(), "x");
        assert_eq!(runs[1].foreground(), Some(Color::Blue));
    }

    #[test]
    fn test_tags_skip_overlong_names() {
        let tags: Vec<Tag> = Tags::new("{DarkMagentaX}{DarkMagenta}").collect();
        assert_eq!(
            tags,
            vec![Tag {
                start: 14,
                end: 27,
                color: Color::DarkMagenta,
            }]
        );
    }

    #[test]
    fn test_parse_rejects_leading_text() {
        assert_eq!(
            ColorString::parse("hello{Red}world"),
            Err(ColorStringError::InvalidTag {
                tag: "hello".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_unknown_leading_tag() {
        assert_eq!(
            ColorString::parse("{Purple}x{Red}y"),
            Err(ColorStringError::InvalidTag {
                tag: "Purple".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_rejects_untagged_input() {
        assert!(matches!(
            ColorString::parse("no tags here"),
            Err(ColorStringError::InvalidTag { .. })
        ));
    }

    #[test]
    fn test_parse_lenient_leading_text() {
        let string =
            ColorString::parse_with("hello {Red}world", &ParseConfig::lenient()).unwrap();
        assert_eq!(string.as_str(), "hello world");
        assert_eq!(
            colors(&string),
            vec![(0, None, None), (6, Some(Color::Red), None)]
        );
    }

    #[test]
    fn test_parse_lenient_untagged_input() {
        let string = ColorString::parse_with("plain", &ParseConfig::lenient()).unwrap();
        assert_eq!(string, ColorString::from("plain"));
    }

    #[test]
    fn test_tags_iterator() {
        let tags: Vec<Tag> = Tags::new("a{Gray}b{nope}{White}").collect();
        assert_eq!(
            tags,
            vec![
                Tag {
                    start: 1,
                    end: 7,
                    color: Color::Gray,
                },
                Tag {
                    start: 14,
                    end: 21,
                    color: Color::White,
                },
            ]
        );
    }

    #[test]
    fn test_leading_token() {
        assert_eq!(leading_token("{Purple}x"), "Purple");
        assert_eq!(leading_token("hello"), "hello");
        assert_eq!(leading_token("a}b"), "a");
    }
}
