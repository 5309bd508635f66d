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

//! Rendering of color annotated text onto color capable output devices.
//!
//! A [`TerminalRenderer`] writes a [`ColorString`](tinted_string::ColorString)
//! to any [`ColorSink`], switching colors at every recorded run and restoring
//! the sink's colors afterwards through a [`ColorGuard`]. [`AnsiSink`] targets
//! real terminals with SGR escape sequences; [`RecordingSink`] keeps an
//! in-memory log of every operation.

mod ansi;
mod config;
mod recording;
mod renderer;
mod result;
mod sink;

pub use self::ansi::AnsiSink;
pub use self::config::{ColorMode, ConsoleConfig};
pub use self::recording::{RecordingSink, SinkEvent};
pub use self::renderer::TerminalRenderer;
pub use self::result::{ConsoleError, ConsoleResult};
pub use self::sink::{ColorGuard, ColorSink};
pub use tinted_string::{Color, ColorString};
