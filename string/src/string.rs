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

use crate::parser::parse_tagged;
use crate::wrap::wrap_text;
use crate::{Color, ColorStringResult, ParseConfig, WrapOptions};
use std::ops::Range;

/// Text with position-addressed foreground and background color changes.
///
/// A `ColorString` keeps its characters in a single `String` and records a
/// [`Run`] only where an append supplied colors, rather than one color per
/// character. Runs are stored in ascending offset order, which the append-only
/// construction guarantees, so rendering walks them front to back.
///
/// An unset color (`None`) means the run inherits whatever color is active on
/// the output device.
///
/// # Examples
///
/// ```
/// use tinted_string::{Color, ColorString};
///
/// let mut string = ColorString::new();
/// string
///     .append("Error: ", Some(Color::Red), None)
///     .append("file not found", None, None);
///
/// assert_eq!(string.as_str(), "Error: file not found");
/// assert_eq!(string.run_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct ColorString {
    text: String,
    runs: Vec<Run>,
}

/// The colors recorded at the start of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Run {
    /// Byte offset of the first character of the run
    pub offset: usize,
    /// Foreground color, `None` to leave the current one
    pub foreground: Option<Color>,
    /// Background color, `None` to leave the current one
    pub background: Option<Color>,
}

/// A borrowed view of one run: its colors, byte range and text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunRef<'a> {
    start: usize,
    end: usize,
    text: &'a str,
    foreground: Option<Color>,
    background: Option<Color>,
}

impl<'a> RunRef<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }
}

/// Iterator over the runs of a [`ColorString`] in ascending offset order.
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    string: &'a ColorString,
    index: usize,
}

impl<'a> Iterator for Runs<'a> {
    type Item = RunRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let run = self.string.runs.get(self.index)?;
        let end = self
            .string
            .runs
            .get(self.index + 1)
            .map_or(self.string.text.len(), |next| next.offset);
        self.index += 1;
        Some(RunRef {
            start: run.offset,
            end,
            text: &self.string.text[run.offset..end],
            foreground: run.foreground,
            background: run.background,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.string.runs.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Runs<'_> {}

impl ColorString {
    /// Creates an empty `ColorString` with no runs.
    pub fn new() -> ColorString {
        ColorString {
            text: String::new(),
            runs: Vec::new(),
        }
    }

    /// Returns the length of the text in bytes, without any color information.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns the number of characters in the text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the plain text, stripped of colors.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Returns the recorded run boundaries in ascending offset order.
    pub fn run_boundaries(&self) -> &[Run] {
        &self.runs
    }

    /// Iterates the runs in ascending offset order.
    ///
    /// The run texts partition the string: concatenated in order they
    /// reproduce [`as_str`](ColorString::as_str) exactly.
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            string: self,
            index: 0,
        }
    }

    /// Appends `text` as a new run with the given colors.
    ///
    /// Does nothing when `text` is empty, so no zero-length run is ever
    /// recorded. Previously recorded runs are never changed.
    pub fn append<S: AsRef<str>>(
        &mut self,
        text: S,
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> &mut Self {
        let text = text.as_ref();
        if text.is_empty() {
            return self;
        }
        self.runs.push(Run {
            offset: self.text.len(),
            foreground,
            background,
        });
        self.text.push_str(text);
        self
    }

    /// Appends `text` with both colors unset.
    pub fn push_str(&mut self, text: &str) -> &mut Self {
        self.append(text, None, None)
    }

    /// Appends formatted text as a new run.
    ///
    /// ```
    /// use tinted_string::{Color, ColorString};
    ///
    /// let mut string = ColorString::new();
    /// string.append_fmt(Some(Color::Yellow), None, format_args!("{} warnings", 3));
    /// assert_eq!(string.as_str(), "3 warnings");
    /// ```
    pub fn append_fmt(
        &mut self,
        foreground: Option<Color>,
        background: Option<Color>,
        args: std::fmt::Arguments<'_>,
    ) -> &mut Self {
        match args.as_str() {
            Some(text) => self.append(text, foreground, background),
            None => self.append(args.to_string(), foreground, background),
        }
    }

    /// Removes all text and runs.
    pub fn clear(&mut self) -> &mut Self {
        self.text.clear();
        self.runs.clear();
        self
    }

    /// Parses a string of `{ColorName}` tagged sections.
    ///
    /// Every tag naming one of the sixteen [`Color`]s (in any letter case)
    /// starts a new run whose foreground is that color and whose background is
    /// unset. Brace groups that do not name a color are kept as literal text.
    ///
    /// # Errors
    ///
    /// Returns [`ColorStringError::InvalidTag`](crate::ColorStringError::InvalidTag)
    /// if the input has text before its first tag. Use
    /// [`parse_with`](ColorString::parse_with) and [`ParseConfig::lenient`] to
    /// accept such text as an uncolored run instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use tinted_string::{Color, ColorString};
    ///
    /// let string = ColorString::parse("{Red}abc{Blue}def").unwrap();
    /// let runs: Vec<_> = string.runs().collect();
    /// assert_eq!(runs[0].text(), "abc");
    /// assert_eq!(runs[0].foreground(), Some(Color::Red));
    /// assert_eq!(runs[1].range(), 3..6);
    /// ```
    pub fn parse<S: AsRef<str>>(input: S) -> ColorStringResult<ColorString> {
        parse_tagged(input.as_ref(), &ParseConfig::default())
    }

    /// Parses tagged input using the given configuration.
    pub fn parse_with<S: AsRef<str>>(
        input: S,
        config: &ParseConfig,
    ) -> ColorStringResult<ColorString> {
        parse_tagged(input.as_ref(), config)
    }

    /// Formats `args` and parses the result as tagged input.
    pub fn parse_fmt(args: std::fmt::Arguments<'_>) -> ColorStringResult<ColorString> {
        match args.as_str() {
            Some(input) => ColorString::parse(input),
            None => ColorString::parse(args.to_string()),
        }
    }

    /// Word wraps the plain text at `width` characters, indenting every line
    /// after the first by `indentation` spaces.
    ///
    /// Colors are ignored. See [`wrap_text`] for the breaking rules.
    pub fn wrap(&self, width: usize, indentation: usize) -> ColorStringResult<String> {
        self.wrap_with(&WrapOptions::new(width).with_indentation(indentation))
    }

    pub fn wrap_with(&self, options: &WrapOptions) -> ColorStringResult<String> {
        wrap_text(&self.text, options)
    }
}

impl From<&str> for ColorString {
    fn from(value: &str) -> Self {
        let mut string = ColorString::new();
        string.push_str(value);
        string
    }
}

impl From<String> for ColorString {
    fn from(text: String) -> Self {
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            vec![Run {
                offset: 0,
                foreground: None,
                background: None,
            }]
        };
        ColorString { text, runs }
    }
}

impl std::fmt::Display for ColorString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColorStringError;

    #[test]
    fn test_new_is_empty() {
        let string = ColorString::new();
        assert!(string.is_empty());
        assert_eq!(string.len(), 0);
        assert_eq!(string.run_count(), 0);
        assert_eq!(string.runs().count(), 0);
        assert_eq!(string, ColorString::default());
    }

    #[test]
    fn test_append_records_run_at_current_length() {
        let mut string = ColorString::new();
        string
            .append("abc", Some(Color::Red), None)
            .append("de", None, Some(Color::Blue));

        assert_eq!(string.as_str(), "abcde");
        assert_eq!(
            string.run_boundaries(),
            &[
                Run {
                    offset: 0,
                    foreground: Some(Color::Red),
                    background: None,
                },
                Run {
                    offset: 3,
                    foreground: None,
                    background: Some(Color::Blue),
                },
            ]
        );
    }

    #[test]
    fn test_append_empty_is_noop() {
        let mut string = ColorString::from("abc");
        let before = string.clone();
        string.append("", Some(Color::Red), Some(Color::Black));
        string.append(String::new(), None, None);
        assert_eq!(string, before);
    }

    #[test]
    fn test_append_never_rewrites_prior_runs() {
        let mut string = ColorString::new();
        string.append("one", Some(Color::Green), None);
        let first = string.run_boundaries()[0];
        string.append("two", Some(Color::Red), Some(Color::White));
        assert_eq!(string.run_boundaries()[0], first);
    }

    #[test]
    fn test_runs_partition_text() {
        let mut string = ColorString::new();
        string
            .append("Hello", Some(Color::Cyan), None)
            .push_str(", ")
            .append("World", Some(Color::Magenta), Some(Color::DarkBlue));

        let runs: Vec<RunRef<'_>> = string.runs().collect();
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].range(), 0..5);
        assert_eq!(runs[1].range(), 5..7);
        assert_eq!(runs[2].range(), 7..12);
        assert_eq!(runs[1].foreground(), None);
        assert_eq!(runs[2].background(), Some(Color::DarkBlue));

        let joined: String = runs.iter().map(|run| run.text()).collect();
        assert_eq!(joined, string.as_str());
    }

    #[test]
    fn test_runs_exact_size() {
        let string = ColorString::parse("{Red}a{Green}b{Blue}c").unwrap();
        let mut runs = string.runs();
        assert_eq!(runs.len(), 3);
        runs.next();
        assert_eq!(runs.len(), 2);
    }

    #[test]
    fn test_unicode_offsets_on_char_boundaries() {
        let mut string = ColorString::new();
        string
            .append("héllo", Some(Color::Red), None)
            .append("wörld", Some(Color::Blue), None);
        assert_eq!(string.char_count(), 10);
        assert_eq!(string.len(), 12);
        let texts: Vec<&str> = string.runs().map(|run| run.text()).collect();
        assert_eq!(texts, vec!["héllo", "wörld"]);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut string = ColorString::parse("{Red}abc{Blue}def").unwrap();
        assert!(string.clear().is_empty());
        assert_eq!(string.run_count(), 0);
        string.push_str("again");
        assert_eq!(string.run_boundaries()[0].offset, 0);
    }

    #[test]
    fn test_append_fmt() {
        let mut string = ColorString::new();
        string.append_fmt(Some(Color::Yellow), None, format_args!("{}-{}", 1, 2));
        string.append_fmt(None, None, format_args!("static"));
        assert_eq!(string.as_str(), "1-2static");
        assert_eq!(string.run_boundaries()[1].offset, 3);
    }

    #[test]
    fn test_from_str_single_uncolored_run() {
        let string = ColorString::from("plain");
        assert_eq!(
            string.run_boundaries(),
            &[Run {
                offset: 0,
                foreground: None,
                background: None,
            }]
        );
        assert_eq!(ColorString::from(""), ColorString::new());
        assert_eq!(ColorString::from(String::from("plain")), string);
    }

    #[test]
    fn test_from_owned_string_keeps_buffer() {
        let text = String::from("owned text");
        let pointer = text.as_ptr();
        let mut string = ColorString::from(text);
        assert_eq!(string.as_str().as_ptr(), pointer);
        assert_eq!(string.run_count(), 1);
        string.append("!", Some(Color::Red), None);
        assert_eq!(string.as_str(), "owned text!");
        assert_eq!(string.run_boundaries()[1].offset, 10);
        assert_eq!(ColorString::from(String::new()), ColorString::new());
    }

    #[test]
    fn test_display_is_plain_text() {
        let string = ColorString::parse("{Red}abc{Blue}def").unwrap();
        assert_eq!(string.to_string(), "abcdef");
    }

    #[test]
    fn test_parse_fmt() {
        let string = ColorString::parse_fmt(format_args!("{{Red}}{}", 42)).unwrap();
        assert_eq!(string.as_str(), "42");
        assert_eq!(string.run_boundaries()[0].foreground, Some(Color::Red));
    }

    #[test]
    fn test_wrap_uses_plain_text() {
        let string = ColorString::parse("{Red}one {Green}two {Blue}three").unwrap();
        assert_eq!(string.wrap(7, 0).unwrap(), "one \ntwo \nthree");
        assert_eq!(
            string.wrap(3, 3),
            Err(ColorStringError::InvalidArgument {
                name: "width",
                value: "3 - 3".to_string(),
                reason: "width minus indentation must be positive",
            })
        );
    }

    #[test]
    fn test_wrap_with_reflow() {
        let string = ColorString::from("text");
        assert_eq!(
            string.wrap_with(&WrapOptions::new(10).with_reflow(true)),
            Err(ColorStringError::NotImplemented("reflow"))
        );
    }
}
