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

//! Error types and result aliases for rendering operations

/// Result type for rendering operations
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Errors that can occur while writing to a [`ColorSink`](crate::ColorSink)
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// An I/O error occurred
    ///
    /// This wraps standard I/O errors from the underlying writer.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink refused the operation
    ///
    /// Raised by sinks that are not backed by a writer, such as a closed or
    /// detached device.
    #[error("Sink unavailable: {0}")]
    Unavailable(String),
}
