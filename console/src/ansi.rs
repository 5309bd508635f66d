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

use crate::{ColorMode, ColorSink, ConsoleConfig, ConsoleResult};
use std::io::Write;
use tinted_string::Color;

/// A [`ColorSink`] writing to any [`std::io::Write`] using SGR escape sequences.
///
/// The sink remembers the colors it last selected, starting from the colors
/// in its [`ConsoleConfig`], and writes an escape sequence only when a color
/// actually changes. With [`ColorMode::None`] colors are still tracked but
/// only the text reaches the writer.
///
/// ```
/// use tinted_console::{AnsiSink, ColorSink, ConsoleConfig};
/// use tinted_string::Color;
///
/// let mut sink = AnsiSink::new(Vec::new(), ConsoleConfig::enabled());
/// sink.set_foreground(Color::Red).unwrap();
/// sink.write_text("hot").unwrap();
/// assert_eq!(sink.into_inner(), b"\x1b[91mhot");
/// ```
#[derive(Debug)]
pub struct AnsiSink<W: Write> {
    writer: W,
    color_mode: ColorMode,
    foreground: Color,
    background: Color,
}

impl<W: Write> AnsiSink<W> {
    pub fn new(writer: W, config: ConsoleConfig) -> AnsiSink<W> {
        AnsiSink {
            writer,
            color_mode: config.color_mode,
            foreground: config.foreground,
            background: config.background,
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Get a reference to the inner writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Get a mutable reference to the inner writer
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_sgr(&mut self, code: u8) -> ConsoleResult<()> {
        if self.color_mode.is_ansi() {
            write!(self.writer, "\x1b[{}m", code)?;
        }
        Ok(())
    }
}

impl AnsiSink<std::io::Stdout> {
    /// A sink on standard output.
    pub fn stdout(config: ConsoleConfig) -> AnsiSink<std::io::Stdout> {
        AnsiSink::new(std::io::stdout(), config)
    }
}

impl<W: Write> ColorSink for AnsiSink<W> {
    fn foreground(&self) -> Color {
        self.foreground
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_foreground(&mut self, color: Color) -> ConsoleResult<()> {
        if color == self.foreground {
            return Ok(());
        }
        self.write_sgr(color.foreground_code())?;
        self.foreground = color;
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> ConsoleResult<()> {
        if color == self.background {
            return Ok(());
        }
        self.write_sgr(color.background_code())?;
        self.background = color;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> ConsoleResult<()> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> ConsoleResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
