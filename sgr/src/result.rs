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

//! Error types for the sgr crate.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`StyleError`].
pub type StyleResult<T> = Result<T, StyleError>;

/// Errors that can occur when building or printing styled values.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A styled value was requested with no attributes while the
    /// [`EmptyAttributes::Reject`](crate::EmptyAttributes::Reject) policy is active.
    #[error("must provide one or more attributes")]
    MissingAttributes,

    /// An operation needed the value's bound output target but none was bound.
    #[error("no output target bound to styled value")]
    MissingWriter,

    /// I/O error from the underlying writer, passed through unchanged
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StyleError {
    /// Check if the error happened while constructing a value rather than writing it.
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            StyleError::MissingAttributes | StyleError::MissingWriter
        )
    }
}
