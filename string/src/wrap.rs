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

//! Greedy word wrapping with a hard-break fallback.

use crate::{ColorStringError, ColorStringResult, WrapOptions};
use tracing::trace;

/// Characters after which a line may be broken.
pub const BREAK_CHARS: [char; 6] = [' ', '.', ',', '!', '?', ')'];

/// Wraps `text` according to `options` and returns the laid out plain text.
///
/// Existing line breaks (`\r\n` or `\n`) are kept. Each line longer than
/// `width - indentation` characters is broken right after the last break
/// character inside that window, or cut at exactly the window size when the
/// window contains none. Leading spaces are dropped from the remainder after
/// every break. The resulting lines are joined with `\n` followed by
/// `indentation` spaces.
///
/// # Errors
///
/// - [`ColorStringError::NotImplemented`] if `options.reflow` is set.
/// - [`ColorStringError::InvalidArgument`] if `width - indentation` is not positive.
///
/// # Examples
///
/// ```
/// use tinted_string::{WrapOptions, wrap_text};
///
/// let wrapped = wrap_text("one two three", &WrapOptions::new(7)).unwrap();
/// assert_eq!(wrapped, "one \ntwo \nthree");
/// ```
pub fn wrap_text(text: &str, options: &WrapOptions) -> ColorStringResult<String> {
    if options.reflow {
        return Err(ColorStringError::NotImplemented("reflow"));
    }
    let effective = effective_width(options)?;

    let mut segments: Vec<&str> = Vec::new();
    for line in split_lines(text) {
        wrap_line(line, effective, &mut segments);
    }

    let separator = format!("\n{}", " ".repeat(options.indentation));
    Ok(segments.join(&separator))
}

fn effective_width(options: &WrapOptions) -> ColorStringResult<usize> {
    match options.width.checked_sub(options.indentation) {
        Some(effective) if effective > 0 => Ok(effective),
        _ => Err(ColorStringError::InvalidArgument {
            name: "width",
            value: format!("{} - {}", options.width, options.indentation),
            reason: "width minus indentation must be positive",
        }),
    }
}

/// Splits on `\r\n` and `\n`, keeping empty lines.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn wrap_line<'a>(line: &'a str, width: usize, segments: &mut Vec<&'a str>) {
    let mut rest = line;
    // Only the first segment of a line may be empty or start with spaces.
    let mut first = true;

    loop {
        let window_end = match rest.char_indices().nth(width) {
            Some((index, _)) => index,
            None => {
                if first || !rest.is_empty() {
                    segments.push(rest);
                }
                return;
            }
        };

        let split_at = match rest[..window_end].rfind(BREAK_CHARS) {
            Some(index) => index + 1,
            None => {
                trace!(width, "no break character in window, hard break");
                window_end
            }
        };

        let (head, tail) = rest.split_at(split_at);
        segments.push(head);
        rest = tail.trim_start_matches(' ');
        first = false;
    }
}
