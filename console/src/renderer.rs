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

use crate::{ColorGuard, ColorSink, ConsoleResult};
use tinted_string::{Color, ColorString};
use tracing::{debug, instrument};

/// Renders [`ColorString`]s onto a [`ColorSink`].
///
/// Each write saves the sink's colors, walks the runs in ascending offset
/// order switching every color a run sets, writes each run's text exactly
/// once, and restores the saved colors, also when a write fails midway.
///
/// ```
/// use tinted_console::{RecordingSink, TerminalRenderer};
/// use tinted_string::ColorString;
///
/// let mut renderer = TerminalRenderer::new(RecordingSink::default());
/// renderer
///     .write_line(&ColorString::parse("{Green}ok{Gray} 3 passed").unwrap())
///     .unwrap();
/// assert_eq!(renderer.sink().text(), "ok 3 passed\n");
/// ```
pub struct TerminalRenderer<S: ColorSink> {
    sink: S,
}

impl<S: ColorSink> TerminalRenderer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Get a reference to the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the sink
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    /// Writes `string` run by run. Does nothing for an empty string.
    #[instrument(skip_all, fields(len = string.len(), runs = string.run_count()))]
    pub fn write(&mut self, string: &ColorString) -> ConsoleResult<()> {
        if string.is_empty() {
            return Ok(());
        }

        let mut guard = ColorGuard::new(&mut self.sink);
        for run in string.runs() {
            if let Some(foreground) = run.foreground() {
                guard.set_foreground(foreground)?;
            }
            if let Some(background) = run.background() {
                guard.set_background(background)?;
            }
            guard.write_text(run.text())?;
        }
        guard.restore()?;

        debug!("rendered color string");
        Ok(())
    }

    /// Writes `string` followed by a line terminator in the restored colors.
    pub fn write_line(&mut self, string: &ColorString) -> ConsoleResult<()> {
        self.write(string)?;
        self.sink.write_line_terminator()
    }

    /// Writes formatted text in `foreground`, and `background` if given, then
    /// restores the previous colors.
    ///
    /// ```
    /// use tinted_console::{RecordingSink, TerminalRenderer};
    /// use tinted_string::Color;
    ///
    /// let mut renderer = TerminalRenderer::new(RecordingSink::default());
    /// renderer
    ///     .write_colored(Color::Yellow, None, format_args!("{} warnings", 2))
    ///     .unwrap();
    /// ```
    #[instrument(skip_all, fields(foreground = %foreground))]
    pub fn write_colored(
        &mut self,
        foreground: Color,
        background: Option<Color>,
        args: std::fmt::Arguments<'_>,
    ) -> ConsoleResult<()> {
        let mut guard = ColorGuard::new(&mut self.sink);
        guard.set_foreground(foreground)?;
        if let Some(background) = background {
            guard.set_background(background)?;
        }
        match args.as_str() {
            Some(text) => guard.write_text(text)?,
            None => guard.write_text(&args.to_string())?,
        }
        guard.restore()
    }

    /// [`write_colored`](TerminalRenderer::write_colored) followed by a line terminator.
    pub fn write_line_colored(
        &mut self,
        foreground: Color,
        background: Option<Color>,
        args: std::fmt::Arguments<'_>,
    ) -> ConsoleResult<()> {
        self.write_colored(foreground, background, args)?;
        self.sink.write_line_terminator()
    }

    pub fn flush(&mut self) -> ConsoleResult<()> {
        self.sink.flush()
    }
}
