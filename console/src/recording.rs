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

use crate::{ColorSink, ConsoleResult};
use tinted_string::Color;

/// One operation performed on a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SinkEvent {
    Foreground(Color),
    Background(Color),
    Text(String),
    LineTerminator,
}

/// An in-memory sink that records every operation in order.
///
/// Useful for inspecting exactly which colors were selected around which
/// text, without going through escape sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordingSink {
    foreground: Color,
    background: Color,
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    /// Creates a sink whose current colors are `foreground` on `background`.
    pub fn new(foreground: Color, background: Color) -> RecordingSink {
        RecordingSink {
            foreground,
            background,
            events: Vec::new(),
        }
    }

    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Removes and returns the recorded events, keeping the current colors.
    pub fn take_events(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.events)
    }

    /// All text written so far, with line terminators as `\n`.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for event in &self.events {
            match event {
                SinkEvent::Text(chunk) => text.push_str(chunk),
                SinkEvent::LineTerminator => text.push('\n'),
                SinkEvent::Foreground(_) | SinkEvent::Background(_) => {}
            }
        }
        text
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        RecordingSink::new(Color::Gray, Color::Black)
    }
}

impl ColorSink for RecordingSink {
    fn foreground(&self) -> Color {
        self.foreground
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_foreground(&mut self, color: Color) -> ConsoleResult<()> {
        self.foreground = color;
        self.events.push(SinkEvent::Foreground(color));
        Ok(())
    }

    fn set_background(&mut self, color: Color) -> ConsoleResult<()> {
        self.background = color;
        self.events.push(SinkEvent::Background(color));
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> ConsoleResult<()> {
        self.events.push(SinkEvent::Text(text.to_string()));
        Ok(())
    }

    fn write_line_terminator(&mut self) -> ConsoleResult<()> {
        self.events.push(SinkEvent::LineTerminator);
        Ok(())
    }
}
