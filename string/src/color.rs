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

use crate::{ColorStringError, ColorStringResult};
use std::str::FromStr;

/// One of the sixteen console colors.
///
/// The names follow the classic console palette: eight dark colors and their
/// bright counterparts. Each color maps onto a basic ANSI Select Graphic
/// Rendition code, `30`-`37`/`90`-`97` for the foreground and `40`-`47`/`100`-`107`
/// for the background.
///
/// Names parse case-insensitively, which is what the `{ColorName}` tag grammar
/// relies on:
///
/// ```
/// use tinted_string::Color;
///
/// assert_eq!("darkgreen".parse::<Color>().unwrap(), Color::DarkGreen);
/// assert_eq!(Color::DarkGreen.to_string(), "DarkGreen");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Color {
    /// Black - (FG `30`, BG `40`).
    Black,
    /// Dark Blue - (FG `34`, BG `44`).
    DarkBlue,
    /// Dark Green - (FG `32`, BG `42`).
    DarkGreen,
    /// Dark Cyan - (FG `36`, BG `46`).
    DarkCyan,
    /// Dark Red - (FG `31`, BG `41`).
    DarkRed,
    /// Dark Magenta - (FG `35`, BG `45`).
    DarkMagenta,
    /// Dark Yellow - (FG `33`, BG `43`).
    DarkYellow,
    /// Gray - (FG `37`, BG `47`).
    Gray,
    /// Dark Gray - (FG `90`, BG `100`).
    DarkGray,
    /// Blue - (FG `94`, BG `104`).
    Blue,
    /// Green - (FG `92`, BG `102`).
    Green,
    /// Cyan - (FG `96`, BG `106`).
    Cyan,
    /// Red - (FG `91`, BG `101`).
    Red,
    /// Magenta - (FG `95`, BG `105`).
    Magenta,
    /// Yellow - (FG `93`, BG `103`).
    Yellow,
    /// White - (FG `97`, BG `107`).
    White,
}

impl Color {
    /// All sixteen colors in palette order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::DarkCyan,
        Color::DarkRed,
        Color::DarkMagenta,
        Color::DarkYellow,
        Color::Gray,
        Color::DarkGray,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
    ];

    /// Byte length of the longest color name, `DarkMagenta`.
    pub(crate) const MAX_NAME_LEN: usize = 11;

    /// Returns the canonical name of the color, as used in `{ColorName}` tags.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::DarkBlue => "DarkBlue",
            Color::DarkGreen => "DarkGreen",
            Color::DarkCyan => "DarkCyan",
            Color::DarkRed => "DarkRed",
            Color::DarkMagenta => "DarkMagenta",
            Color::DarkYellow => "DarkYellow",
            Color::Gray => "Gray",
            Color::DarkGray => "DarkGray",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Cyan => "Cyan",
            Color::Red => "Red",
            Color::Magenta => "Magenta",
            Color::Yellow => "Yellow",
            Color::White => "White",
        }
    }

    /// Looks up a color by name, ignoring ASCII case.
    ///
    /// Returns `None` for anything that is not one of the sixteen names.
    pub fn from_name(name: &str) -> Option<Color> {
        Color::ALL
            .iter()
            .copied()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }

    /// SGR parameter selecting this color as the foreground.
    pub fn foreground_code(&self) -> u8 {
        match self {
            Color::Black => 30,
            Color::DarkRed => 31,
            Color::DarkGreen => 32,
            Color::DarkYellow => 33,
            Color::DarkBlue => 34,
            Color::DarkMagenta => 35,
            Color::DarkCyan => 36,
            Color::Gray => 37,
            Color::DarkGray => 90,
            Color::Red => 91,
            Color::Green => 92,
            Color::Yellow => 93,
            Color::Blue => 94,
            Color::Magenta => 95,
            Color::Cyan => 96,
            Color::White => 97,
        }
    }

    /// SGR parameter selecting this color as the background.
    pub fn background_code(&self) -> u8 {
        self.foreground_code() + 10
    }
}

impl FromStr for Color {
    type Err = ColorStringError;

    fn from_str(s: &str) -> ColorStringResult<Self> {
        Color::from_name(s)
            .ok_or_else(|| ColorStringError::InvalidTag { tag: s.to_string() })
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
