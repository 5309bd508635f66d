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

//! Error types for the tinted-string crate.
//!
//! Every fallible operation on a [`ColorString`](crate::ColorString) reports one of
//! these errors: tag parsing, color name lookup and wrapping.

/// Result type alias for operations that may fail with a [`ColorStringError`].
pub type ColorStringResult<T> = Result<T, ColorStringError>;

/// Errors that can occur when building or laying out a color string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ColorStringError {
    /// A section of tagged input does not start with a recognized color tag.
    ///
    /// Raised by [`ColorString::parse`](crate::ColorString::parse) for text that
    /// precedes the first tag, and by [`Color`](crate::Color)'s `FromStr` for
    /// unknown color names.
    #[error("Invalid color tag '{tag}'")]
    InvalidTag {
        /// The token that was expected to name a color
        tag: String,
    },

    /// An argument is outside of the domain the operation accepts.
    #[error("Invalid argument '{name}' with value '{value}': {reason}")]
    InvalidArgument {
        /// Name of the argument
        name: &'static str,
        /// The rejected value
        value: String,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// The requested mode of operation exists in the API but is not implemented.
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl ColorStringError {
    /// Check if the error came from malformed tagged input
    pub fn is_tag_error(&self) -> bool {
        matches!(self, ColorStringError::InvalidTag { .. })
    }
}
