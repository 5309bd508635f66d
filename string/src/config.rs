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

/// Policy for text that appears before the first `{ColorName}` tag.
///
/// The tag grammar has no tag enclosing such text, so it must either be
/// rejected or given an explicit meaning.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum LeadingText {
    /// Fail with [`ColorStringError::InvalidTag`](crate::ColorStringError::InvalidTag).
    #[default]
    Reject,
    /// Keep the text as a leading run with both colors unset.
    Uncolored,
}

/// Configuration for [`ColorString::parse_with`](crate::ColorString::parse_with).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseConfig {
    /// What to do with text before the first tag
    pub leading_text: LeadingText,
}

impl ParseConfig {
    /// Reject any input that does not start with a color tag.
    pub fn strict() -> ParseConfig {
        ParseConfig {
            leading_text: LeadingText::Reject,
        }
    }
    /// Accept untagged leading text as an uncolored run.
    pub fn lenient() -> ParseConfig {
        ParseConfig {
            leading_text: LeadingText::Uncolored,
        }
    }
}

/// Layout parameters for word wrapping.
///
/// `width` is the total line width and `indentation` the number of spaces
/// placed in front of every line after the first, so text is broken at
/// `width - indentation` characters.
///
/// ```
/// use tinted_string::{WrapOptions, wrap_text};
///
/// let options = WrapOptions::new(10).with_indentation(2);
/// assert_eq!(wrap_text("one two three", &options).unwrap(), "one two \n  three");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct WrapOptions {
    /// Maximum number of characters per line, including indentation
    pub width: usize,
    /// Spaces prepended to every line after the first
    pub indentation: usize,
    /// Re-justify paragraphs instead of only breaking long lines. Not implemented.
    pub reflow: bool,
}

impl WrapOptions {
    /// Wrap at `width` with no indentation and no reflow.
    pub fn new(width: usize) -> WrapOptions {
        WrapOptions {
            width,
            indentation: 0,
            reflow: false,
        }
    }

    pub fn with_indentation(mut self, indentation: usize) -> WrapOptions {
        self.indentation = indentation;
        self
    }

    pub fn with_reflow(mut self, reflow: bool) -> WrapOptions {
        self.reflow = reflow;
        self
    }
}

impl Default for WrapOptions {
    fn default() -> Self {
        WrapOptions::new(80)
    }
}
