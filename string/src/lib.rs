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

//! Color annotated text for terminals.
//!
//! A [`ColorString`] is an append-only text buffer that records where the
//! foreground and background color change. It can be built with
//! [`ColorString::append`] or parsed from `{ColorName}` tagged input, and its
//! plain text can be laid out with the greedy word wrapper in [`wrap_text`].
//! Rendering lives in the `tinted-console` crate.

mod color;
mod config;
mod parser;
mod result;
mod string;
mod wrap;

pub use self::color::Color;
pub use self::config::{LeadingText, ParseConfig, WrapOptions};
pub use self::parser::{Tag, Tags};
pub use self::result::{ColorStringError, ColorStringResult};
pub use self::string::{ColorString, Run, RunRef, Runs};
pub use self::wrap::{BREAK_CHARS, wrap_text};
