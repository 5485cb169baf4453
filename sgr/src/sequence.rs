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

//! Conversion of attribute sets into SGR escape sequences and cache keys.

use crate::consts::{DELIMITER, END_CODE, ESCAPE, MAX_CODE_WIDTH, RESET_SEQUENCE};
use crate::{Attribute, EmptyAttributes, StyleError, StyleResult};
use std::fmt::Write;

/// Joins the numeric codes of `attributes` with `;`.
///
/// Codes are written in the order given. Nothing is sorted or de-duplicated,
/// so `[FgWhite, Bold, Underline]` becomes `"37;1;4"`. An empty slice yields
/// an empty payload.
///
/// # Examples
///
/// ```
/// use hueterm_sgr::{Attribute, encode_codes};
///
/// assert_eq!(encode_codes(&[Attribute::FgRed]), "31");
/// assert_eq!(
///     encode_codes(&[Attribute::FgWhite, Attribute::Bold, Attribute::Underline]),
///     "37;1;4"
/// );
/// assert_eq!(encode_codes(&[]), "");
/// ```
pub fn encode_codes(attributes: &[Attribute]) -> String {
    let mut payload = String::with_capacity(attributes.len() * MAX_CODE_WIDTH);
    // Writing to a String never fails.
    let _ = write_codes(&mut payload, attributes);
    payload
}

/// Writes the `;` joined codes of `attributes` into `writer`.
pub fn write_codes<W: Write>(writer: &mut W, attributes: &[Attribute]) -> std::fmt::Result {
    let mut codes = attributes.iter();
    if let Some(first) = codes.next() {
        write!(writer, "{}", first.to_u8())?;
        for code in codes {
            writer.write_str(DELIMITER)?;
            write!(writer, "{}", code.to_u8())?;
        }
    }
    Ok(())
}

/// Builds the complete start sequence `\x1b[<codes>m` for `attributes`.
///
/// An empty slice is resolved by `policy`: [`EmptyAttributes::BareReset`]
/// produces `\x1b[0m` and [`EmptyAttributes::Reject`] fails with
/// [`StyleError::MissingAttributes`].
///
/// # Examples
///
/// ```
/// use hueterm_sgr::{Attribute, EmptyAttributes, start_sequence};
///
/// let start = start_sequence(&[Attribute::Bold, Attribute::FgCyan], EmptyAttributes::Reject).unwrap();
/// assert_eq!(start, "\x1b[1;36m");
/// ```
pub fn start_sequence(attributes: &[Attribute], policy: EmptyAttributes) -> StyleResult<String> {
    match policy {
        EmptyAttributes::Reject if attributes.is_empty() => Err(StyleError::MissingAttributes),
        _ => Ok(bare_reset_start(attributes)),
    }
}

/// [`start_sequence`] under the [`EmptyAttributes::BareReset`] policy, which cannot fail.
pub(crate) fn bare_reset_start(attributes: &[Attribute]) -> String {
    if attributes.is_empty() {
        return RESET_SEQUENCE.to_string();
    }
    let mut sequence = String::with_capacity(
        ESCAPE.len() + attributes.len() * MAX_CODE_WIDTH + END_CODE.len(),
    );
    sequence.push_str(ESCAPE);
    let _ = write_codes(&mut sequence, attributes);
    sequence.push_str(END_CODE);
    sequence
}

/// Order and duplicate insensitive identity of an attribute set.
///
/// Two slices holding the same attributes in any order, with any amount of
/// repetition, produce equal keys. The key stores the numeric codes in
/// ascending order without duplicates.
///
/// # Examples
///
/// ```
/// use hueterm_sgr::{Attribute, AttributeKey};
///
/// let a = AttributeKey::new(&[Attribute::FgRed, Attribute::BgWhite, Attribute::Underline]);
/// let b = AttributeKey::new(&[Attribute::Underline, Attribute::FgRed, Attribute::BgWhite, Attribute::FgRed]);
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "4;31;47");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeKey {
    codes: Vec<u8>,
}

impl AttributeKey {
    /// Canonicalizes `attributes` into a key.
    pub fn new(attributes: &[Attribute]) -> AttributeKey {
        let mut codes: Vec<u8> = attributes.iter().map(Attribute::to_u8).collect();
        codes.sort_unstable();
        codes.dedup();
        AttributeKey { codes }
    }

    /// The canonical numeric codes, ascending and unique.
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Rebuilds the canonical attribute list.
    pub fn attributes(&self) -> Vec<Attribute> {
        self.codes.iter().copied().map(Attribute::from_u8).collect()
    }

    /// Number of distinct attributes in the key.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` for the key of an empty attribute set.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl From<&[Attribute]> for AttributeKey {
    fn from(attributes: &[Attribute]) -> Self {
        AttributeKey::new(attributes)
    }
}

impl From<Attribute> for AttributeKey {
    fn from(attribute: Attribute) -> Self {
        AttributeKey {
            codes: vec![attribute.to_u8()],
        }
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_codes(f, &self.attributes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Attribute::*;

    #[test]
    fn test_encode_single_has_no_delimiter() {
        assert_eq!(encode_codes(&[FgRed]), "31");
        assert_eq!(encode_codes(&[BgHiWhite]), "107");
    }

    #[test]
    fn test_encode_preserves_input_order() {
        assert_eq!(encode_codes(&[FgWhite, Bold, Underline]), "37;1;4");
        assert_eq!(encode_codes(&[Underline, Bold, FgWhite]), "4;1;37");
    }

    #[test]
    fn test_encode_keeps_duplicates() {
        assert_eq!(encode_codes(&[Bold, Bold]), "1;1");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_codes(&[]), "");
    }

    #[test]
    fn test_encode_unknown_code_verbatim() {
        assert_eq!(encode_codes(&[Unknown(58), FgRed]), "58;31");
    }

    #[test]
    fn test_start_sequence() {
        assert_eq!(
            start_sequence(&[FgRed], EmptyAttributes::BareReset).unwrap(),
            "\x1b[31m"
        );
        assert_eq!(
            start_sequence(&[FgWhite, Bold, Underline], EmptyAttributes::Reject).unwrap(),
            "\x1b[37;1;4m"
        );
    }

    #[test]
    fn test_start_sequence_empty_bare_reset() {
        assert_eq!(
            start_sequence(&[], EmptyAttributes::BareReset).unwrap(),
            "\x1b[0m"
        );
    }

    #[test]
    fn test_start_sequence_empty_rejected() {
        let result = start_sequence(&[], EmptyAttributes::Reject);
        assert!(matches!(result, Err(StyleError::MissingAttributes)));
    }

    #[test]
    fn test_key_ignores_order_and_duplicates() {
        let a = AttributeKey::new(&[FgRed, BgWhite, Underline]);
        let b = AttributeKey::new(&[Underline, FgRed, BgWhite]);
        let c = AttributeKey::new(&[BgWhite, BgWhite, Underline, FgRed]);
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.codes(), &[4, 31, 47]);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_key_distinguishes_sets() {
        assert_ne!(AttributeKey::new(&[FgRed]), AttributeKey::new(&[FgRed, Bold]));
        assert_ne!(AttributeKey::new(&[FgRed]), AttributeKey::new(&[BgRed]));
    }

    #[test]
    fn test_key_from_single_attribute_matches_slice() {
        assert_eq!(AttributeKey::from(FgCyan), AttributeKey::new(&[FgCyan]));
    }

    #[test]
    fn test_key_attributes_are_canonical() {
        let key = AttributeKey::new(&[FgBlue, Bold, FgBlue]);
        assert_eq!(key.attributes(), vec![Bold, FgBlue]);
        assert_eq!(key.to_string(), "1;34");
    }

    #[test]
    fn test_empty_key() {
        let key = AttributeKey::new(&[]);
        assert!(key.is_empty());
        assert_eq!(key.to_string(), "");
    }
}
