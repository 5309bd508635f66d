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

use crate::ConsoleResult;
use std::ops::{Deref, DerefMut};
use tinted_string::Color;
use tracing::warn;

/// An output device with a current foreground and background color.
///
/// This is the whole capability set the renderer depends on: read and change
/// the current colors, and write raw text in whatever colors are current.
pub trait ColorSink {
    /// Returns the current foreground color.
    fn foreground(&self) -> Color;

    /// Returns the current background color.
    fn background(&self) -> Color;

    /// Makes `color` the foreground for subsequently written text.
    fn set_foreground(&mut self, color: Color) -> ConsoleResult<()>;

    /// Makes `color` the background for subsequently written text.
    fn set_background(&mut self, color: Color) -> ConsoleResult<()>;

    /// Writes `text` in the current colors.
    fn write_text(&mut self, text: &str) -> ConsoleResult<()>;

    /// Ends the current line.
    fn write_line_terminator(&mut self) -> ConsoleResult<()> {
        self.write_text("\n")
    }

    fn flush(&mut self) -> ConsoleResult<()> {
        Ok(())
    }
}

impl<S: ColorSink + ?Sized> ColorSink for &mut S {
    fn foreground(&self) -> Color {
        (**self).foreground()
    }

    fn background(&self) -> Color {
        (**self).background()
    }

    fn set_foreground(&mut self, color: Color) -> ConsoleResult<()> {
        (**self).set_foreground(color)
    }

    fn set_background(&mut self, color: Color) -> ConsoleResult<()> {
        (**self).set_background(color)
    }

    fn write_text(&mut self, text: &str) -> ConsoleResult<()> {
        (**self).write_text(text)
    }

    fn write_line_terminator(&mut self) -> ConsoleResult<()> {
        (**self).write_line_terminator()
    }

    fn flush(&mut self) -> ConsoleResult<()> {
        (**self).flush()
    }
}

/// Saves a sink's colors and puts them back when dropped.
///
/// The guard dereferences to the sink, so everything written through it can
/// freely change colors. Whichever way the scope is left, including early
/// returns through `?`, the saved colors are restored. Errors from that
/// implicit restore are logged; call [`restore`](ColorGuard::restore) to
/// observe them instead.
///
/// ```
/// use tinted_console::{ColorGuard, ColorSink, RecordingSink};
/// use tinted_string::Color;
///
/// let mut sink = RecordingSink::new(Color::Gray, Color::Black);
/// {
///     let mut guard = ColorGuard::new(&mut sink);
///     guard.set_foreground(Color::Red).unwrap();
///     guard.write_text("alert").unwrap();
/// }
/// assert_eq!(sink.foreground(), Color::Gray);
/// ```
pub struct ColorGuard<'a, S: ColorSink + ?Sized> {
    sink: &'a mut S,
    foreground: Color,
    background: Color,
    restored: bool,
}

impl<'a, S: ColorSink + ?Sized> ColorGuard<'a, S> {
    pub fn new(sink: &'a mut S) -> ColorGuard<'a, S> {
        let foreground = sink.foreground();
        let background = sink.background();
        ColorGuard {
            sink,
            foreground,
            background,
            restored: false,
        }
    }

    /// Restores the saved colors now and reports the outcome.
    ///
    /// Both colors are always attempted; the first error is returned.
    pub fn restore(mut self) -> ConsoleResult<()> {
        self.restored = true;
        self.restore_colors()
    }

    fn restore_colors(&mut self) -> ConsoleResult<()> {
        let foreground = self.sink.set_foreground(self.foreground);
        let background = self.sink.set_background(self.background);
        foreground.and(background)
    }
}

impl<S: ColorSink + ?Sized> Deref for ColorGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &*self.sink
    }
}

impl<S: ColorSink + ?Sized> DerefMut for ColorGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut *self.sink
    }
}

impl<S: ColorSink + ?Sized> Drop for ColorGuard<'_, S> {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(error) = self.restore_colors() {
            warn!(%error, "failed to restore sink colors");
        }
    }
}
