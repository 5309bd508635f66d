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

//! Markdown-flavoured rendering demo
//!
//! Colors headings, shell prompts in code blocks and body text of a small
//! embedded document, wrapping body paragraphs to the terminal width.
//!
//! ## Usage
//!
//! ```bash
//! COLUMNS=60 RUST_LOG=tinted_console=debug cargo run --example markdown_demo
//! ```

use tinted_console::{AnsiSink, ConsoleConfig, TerminalRenderer};
use tinted_string::{Color, ColorString};
use tracing::info;

const DOCUMENT: &str = "\
# tinted
## Overview
Tinted renders text with embedded color changes, and wraps long lines at word boundaries, keeping the indentation of continuation lines.
### Usage
    $ cargo run --example markdown_demo
#### Tags
Tags such as {Red}Red{Gray} or {darkgreen}DarkGreen{Gray} change the foreground color of the text after them.";

fn heading_color(line: &str) -> Option<Color> {
    if line.starts_with("##") {
        Some(Color::DarkCyan)
    } else if line.starts_with('#') {
        Some(Color::Cyan)
    } else {
        None
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let width = std::env::var("COLUMNS")
        .ok()
        .and_then(|columns| columns.parse::<usize>().ok())
        .unwrap_or(80)
        .saturating_sub(1);
    info!(width, "rendering demo document");

    let mut renderer = TerminalRenderer::new(AnsiSink::stdout(ConsoleConfig::enabled()));

    for line in DOCUMENT.lines() {
        if let Some(color) = heading_color(line) {
            let heading = ColorString::from(line.trim_start_matches('#').trim_start());
            renderer.write_line_colored(color, None, format_args!("{}", heading))?;
            // Underline the title with one rule character per column
            if !line.starts_with("##") {
                let rule = "=".repeat(heading.char_count());
                renderer.write_line_colored(color, None, format_args!("{}", rule))?;
            }
        } else if let Some(code) = line.strip_prefix("    ") {
            let mut string = ColorString::from("    ");
            match code.strip_prefix('$') {
                Some(command) => string
                    .append("$", Some(Color::DarkGreen), None)
                    .push_str(command),
                None => string.push_str(code),
            };
            renderer.write_line(&string)?;
        } else if line.contains('{') {
            renderer.write_line(&ColorString::parse(format!("{{Gray}}{}", line))?)?;
        } else {
            let wrapped = ColorString::from(line).wrap(width, 2)?;
            renderer.write_line(&ColorString::from(wrapped))?;
        }
    }

    renderer.flush()?;
    Ok(())
}
