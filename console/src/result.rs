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


//! Error types for the console crate

use hueterm_sgr::StyleError;
use thiserror::Error;

/// Result type for console operations
pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;

/// Console error types
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// I/O error from the underlying stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from building or printing a styled value
    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    /// The process-wide context was already built when installation was attempted
    #[error("Console context already initialized")]
    AlreadyInitialized,
}

impl ConsoleError {
    /// Check if the error came from writing to the stream
    pub fn is_io_error(&self) -> bool {
        matches!(
            self,
            ConsoleError::Io(_) | ConsoleError::Style(StyleError::Io(_))
        )
    }
}
