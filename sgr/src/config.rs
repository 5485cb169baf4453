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

///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StyleConfig {
    /// What to do when a styled value is built from zero attributes
    pub empty_attributes: EmptyAttributes,
}

impl StyleConfig {
    /// Treat an empty attribute set as a bare reset (`\x1b[0m`)
    pub fn lenient() -> StyleConfig {
        StyleConfig {
            empty_attributes: EmptyAttributes::BareReset,
        }
    }
    /// Refuse to build a styled value from an empty attribute set
    pub fn strict() -> StyleConfig {
        StyleConfig {
            empty_attributes: EmptyAttributes::Reject,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::lenient()
    }
}

/// Policy for styled values requested with no attributes at all.
///
/// # Examples
///
/// ```
/// use hueterm_sgr::{Attribute, EmptyAttributes, StyleError, start_sequence};
///
/// assert_eq!(start_sequence(&[], EmptyAttributes::BareReset).unwrap(), "\x1b[0m");
/// assert!(matches!(
///     start_sequence(&[], EmptyAttributes::Reject),
///     Err(StyleError::MissingAttributes)
/// ));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EmptyAttributes {
    /// Emit `\x1b[0m` as the start sequence; the text is printed unstyled.
    #[default]
    BareReset,
    /// Fail with [`StyleError::MissingAttributes`](crate::StyleError::MissingAttributes).
    Reject,
}
