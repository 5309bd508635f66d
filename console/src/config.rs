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

use tinted_string::Color;

/// Represents the color capabilities of the output device.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ColorMode {
    /// No escape sequences are written, only text.
    None,
    /// 4-bit SGR color, the sixteen console colors.
    #[default]
    Basic,
}

impl ColorMode {
    /// Returns `true` if escape sequences should be emitted.
    pub fn is_ansi(&self) -> bool {
        matches!(self, ColorMode::Basic)
    }
}

/// Configuration for an [`AnsiSink`](crate::AnsiSink).
///
/// `foreground` and `background` are the colors the device is assumed to show
/// when the sink is created. An ANSI terminal cannot be asked for its current
/// colors, so the sink tracks them from here on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConsoleConfig {
    /// Escape sequence support of the device
    pub color_mode: ColorMode,
    /// Initial foreground color
    pub foreground: Color,
    /// Initial background color
    pub background: Color,
}

impl ConsoleConfig {
    /// Emit colors, starting from gray on black.
    pub fn enabled() -> ConsoleConfig {
        ConsoleConfig {
            color_mode: ColorMode::Basic,
            foreground: Color::Gray,
            background: Color::Black,
        }
    }
    /// Write text only.
    pub fn plain() -> ConsoleConfig {
        ConsoleConfig {
            color_mode: ColorMode::None,
            ..ConsoleConfig::enabled()
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::enabled()
    }
}
