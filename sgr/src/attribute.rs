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

//! Select Graphic Rendition attribute codes.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// A single Select Graphic Rendition (SGR) parameter.
///
/// Every named variant maps to exactly one numeric SGR code. Codes without a
/// name are carried by [`Attribute::Unknown`] so they can still be emitted and
/// reported in diagnostics.
///
/// # ANSI Codes
///
/// | Band                  | Codes     |
/// |-----------------------|-----------|
/// | Reset and text style  | 0 - 9     |
/// | Foreground            | 30 - 37   |
/// | Background            | 40 - 47   |
/// | Bright foreground     | 90 - 97   |
/// | Bright background     | 100 - 107 |
///
/// # Equality
///
/// Equality, ordering and hashing follow the numeric code, so
/// `Attribute::Unknown(31)` is equal to `Attribute::FgRed`. Use
/// [`Attribute::from_u8`] to always obtain the named variant.
///
/// # Examples
///
/// ```
/// use hueterm_sgr::Attribute;
///
/// assert_eq!(Attribute::FgRed.to_u8(), 31);
/// assert_eq!(Attribute::from_u8(1), Attribute::Bold);
/// assert_eq!(Attribute::from_u8(200).name(), "unknown attribute 200");
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Attribute {
    /// 0 - Reset all attributes
    Reset,
    /// 1 - Bold or increased intensity
    Bold,
    /// 2 - Faint or decreased intensity
    Faint,
    /// 3 - Italic
    Italic,
    /// 4 - Single underline
    Underline,
    /// 5 - Slow blink
    BlinkSlow,
    /// 6 - Rapid blink
    BlinkRapid,
    /// 7 - Swap foreground and background
    ReverseVideo,
    /// 8 - Hidden text
    Concealed,
    /// 9 - Strikethrough
    CrossedOut,

    /// 30 - Black foreground
    FgBlack,
    /// 31 - Red foreground
    FgRed,
    /// 32 - Green foreground
    FgGreen,
    /// 33 - Yellow foreground
    FgYellow,
    /// 34 - Blue foreground
    FgBlue,
    /// 35 - Magenta foreground
    FgMagenta,
    /// 36 - Cyan foreground
    FgCyan,
    /// 37 - White foreground
    FgWhite,

    /// 40 - Black background
    BgBlack,
    /// 41 - Red background
    BgRed,
    /// 42 - Green background
    BgGreen,
    /// 43 - Yellow background
    BgYellow,
    /// 44 - Blue background
    BgBlue,
    /// 45 - Magenta background
    BgMagenta,
    /// 46 - Cyan background
    BgCyan,
    /// 47 - White background
    BgWhite,

    /// 90 - Bright black foreground
    FgHiBlack,
    /// 91 - Bright red foreground
    FgHiRed,
    /// 92 - Bright green foreground
    FgHiGreen,
    /// 93 - Bright yellow foreground
    FgHiYellow,
    /// 94 - Bright blue foreground
    FgHiBlue,
    /// 95 - Bright magenta foreground
    FgHiMagenta,
    /// 96 - Bright cyan foreground
    FgHiCyan,
    /// 97 - Bright white foreground
    FgHiWhite,

    /// 100 - Bright black background
    BgHiBlack,
    /// 101 - Bright red background
    BgHiRed,
    /// 102 - Bright green background
    BgHiGreen,
    /// 103 - Bright yellow background
    BgHiYellow,
    /// 104 - Bright blue background
    BgHiBlue,
    /// 105 - Bright magenta background
    BgHiMagenta,
    /// 106 - Bright cyan background
    BgHiCyan,
    /// 107 - Bright white background
    BgHiWhite,

    /// Unrecognized SGR code
    ///
    /// The value is emitted verbatim. It is not validated.
    Unknown(u8),
}

/// The semantic band an [`Attribute`] code belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Band {
    /// Reset and text style codes (0 - 9)
    Style,
    /// Normal foreground colors (30 - 37)
    Foreground,
    /// Normal background colors (40 - 47)
    Background,
    /// Bright foreground colors (90 - 97)
    BrightForeground,
    /// Bright background colors (100 - 107)
    BrightBackground,
    /// Any code outside the bands above
    Unknown,
}

impl Attribute {
    /// Every named attribute, in ascending code order.
    pub const ALL: [Attribute; 42] = [
        Attribute::Reset,
        Attribute::Bold,
        Attribute::Faint,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::BlinkSlow,
        Attribute::BlinkRapid,
        Attribute::ReverseVideo,
        Attribute::Concealed,
        Attribute::CrossedOut,
        Attribute::FgBlack,
        Attribute::FgRed,
        Attribute::FgGreen,
        Attribute::FgYellow,
        Attribute::FgBlue,
        Attribute::FgMagenta,
        Attribute::FgCyan,
        Attribute::FgWhite,
        Attribute::BgBlack,
        Attribute::BgRed,
        Attribute::BgGreen,
        Attribute::BgYellow,
        Attribute::BgBlue,
        Attribute::BgMagenta,
        Attribute::BgCyan,
        Attribute::BgWhite,
        Attribute::FgHiBlack,
        Attribute::FgHiRed,
        Attribute::FgHiGreen,
        Attribute::FgHiYellow,
        Attribute::FgHiBlue,
        Attribute::FgHiMagenta,
        Attribute::FgHiCyan,
        Attribute::FgHiWhite,
        Attribute::BgHiBlack,
        Attribute::BgHiRed,
        Attribute::BgHiGreen,
        Attribute::BgHiYellow,
        Attribute::BgHiBlue,
        Attribute::BgHiMagenta,
        Attribute::BgHiCyan,
        Attribute::BgHiWhite,
    ];

    /// Converts the attribute to its numeric SGR code.
    ///
    /// # Examples
    ///
    /// ```
    /// use hueterm_sgr::Attribute;
    ///
    /// assert_eq!(Attribute::Reset.to_u8(), 0);
    /// assert_eq!(Attribute::BgHiWhite.to_u8(), 107);
    /// assert_eq!(Attribute::Unknown(58).to_u8(), 58);
    /// ```
    pub fn to_u8(&self) -> u8 {
        match self {
            Attribute::Reset => 0,
            Attribute::Bold => 1,
            Attribute::Faint => 2,
            Attribute::Italic => 3,
            Attribute::Underline => 4,
            Attribute::BlinkSlow => 5,
            Attribute::BlinkRapid => 6,
            Attribute::ReverseVideo => 7,
            Attribute::Concealed => 8,
            Attribute::CrossedOut => 9,
            Attribute::FgBlack => 30,
            Attribute::FgRed => 31,
            Attribute::FgGreen => 32,
            Attribute::FgYellow => 33,
            Attribute::FgBlue => 34,
            Attribute::FgMagenta => 35,
            Attribute::FgCyan => 36,
            Attribute::FgWhite => 37,
            Attribute::BgBlack => 40,
            Attribute::BgRed => 41,
            Attribute::BgGreen => 42,
            Attribute::BgYellow => 43,
            Attribute::BgBlue => 44,
            Attribute::BgMagenta => 45,
            Attribute::BgCyan => 46,
            Attribute::BgWhite => 47,
            Attribute::FgHiBlack => 90,
            Attribute::FgHiRed => 91,
            Attribute::FgHiGreen => 92,
            Attribute::FgHiYellow => 93,
            Attribute::FgHiBlue => 94,
            Attribute::FgHiMagenta => 95,
            Attribute::FgHiCyan => 96,
            Attribute::FgHiWhite => 97,
            Attribute::BgHiBlack => 100,
            Attribute::BgHiRed => 101,
            Attribute::BgHiGreen => 102,
            Attribute::BgHiYellow => 103,
            Attribute::BgHiBlue => 104,
            Attribute::BgHiMagenta => 105,
            Attribute::BgHiCyan => 106,
            Attribute::BgHiWhite => 107,
            Attribute::Unknown(value) => *value,
        }
    }

    /// Converts a numeric SGR code to an attribute.
    ///
    /// Unlike the per-parameter lookups in most SGR tables this never fails:
    /// codes without a name become [`Attribute::Unknown`].
    pub fn from_u8(value: u8) -> Attribute {
        match value {
            0 => Attribute::Reset,
            1 => Attribute::Bold,
            2 => Attribute::Faint,
            3 => Attribute::Italic,
            4 => Attribute::Underline,
            5 => Attribute::BlinkSlow,
            6 => Attribute::BlinkRapid,
            7 => Attribute::ReverseVideo,
            8 => Attribute::Concealed,
            9 => Attribute::CrossedOut,
            30 => Attribute::FgBlack,
            31 => Attribute::FgRed,
            32 => Attribute::FgGreen,
            33 => Attribute::FgYellow,
            34 => Attribute::FgBlue,
            35 => Attribute::FgMagenta,
            36 => Attribute::FgCyan,
            37 => Attribute::FgWhite,
            40 => Attribute::BgBlack,
            41 => Attribute::BgRed,
            42 => Attribute::BgGreen,
            43 => Attribute::BgYellow,
            44 => Attribute::BgBlue,
            45 => Attribute::BgMagenta,
            46 => Attribute::BgCyan,
            47 => Attribute::BgWhite,
            90 => Attribute::FgHiBlack,
            91 => Attribute::FgHiRed,
            92 => Attribute::FgHiGreen,
            93 => Attribute::FgHiYellow,
            94 => Attribute::FgHiBlue,
            95 => Attribute::FgHiMagenta,
            96 => Attribute::FgHiCyan,
            97 => Attribute::FgHiWhite,
            100 => Attribute::BgHiBlack,
            101 => Attribute::BgHiRed,
            102 => Attribute::BgHiGreen,
            103 => Attribute::BgHiYellow,
            104 => Attribute::BgHiBlue,
            105 => Attribute::BgHiMagenta,
            106 => Attribute::BgHiCyan,
            107 => Attribute::BgHiWhite,
            other => Attribute::Unknown(other),
        }
    }

    /// Human readable name of the attribute, e.g. `"FgHiCyan"`.
    ///
    /// Codes without a name render as `"unknown attribute <code>"`.
    pub fn name(&self) -> std::borrow::Cow<'static, str> {
        use std::borrow::Cow;
        let name = match Attribute::from_u8(self.to_u8()) {
            Attribute::Reset => "Reset",
            Attribute::Bold => "Bold",
            Attribute::Faint => "Faint",
            Attribute::Italic => "Italic",
            Attribute::Underline => "Underline",
            Attribute::BlinkSlow => "BlinkSlow",
            Attribute::BlinkRapid => "BlinkRapid",
            Attribute::ReverseVideo => "ReverseVideo",
            Attribute::Concealed => "Concealed",
            Attribute::CrossedOut => "CrossedOut",
            Attribute::FgBlack => "FgBlack",
            Attribute::FgRed => "FgRed",
            Attribute::FgGreen => "FgGreen",
            Attribute::FgYellow => "FgYellow",
            Attribute::FgBlue => "FgBlue",
            Attribute::FgMagenta => "FgMagenta",
            Attribute::FgCyan => "FgCyan",
            Attribute::FgWhite => "FgWhite",
            Attribute::BgBlack => "BgBlack",
            Attribute::BgRed => "BgRed",
            Attribute::BgGreen => "BgGreen",
            Attribute::BgYellow => "BgYellow",
            Attribute::BgBlue => "BgBlue",
            Attribute::BgMagenta => "BgMagenta",
            Attribute::BgCyan => "BgCyan",
            Attribute::BgWhite => "BgWhite",
            Attribute::FgHiBlack => "FgHiBlack",
            Attribute::FgHiRed => "FgHiRed",
            Attribute::FgHiGreen => "FgHiGreen",
            Attribute::FgHiYellow => "FgHiYellow",
            Attribute::FgHiBlue => "FgHiBlue",
            Attribute::FgHiMagenta => "FgHiMagenta",
            Attribute::FgHiCyan => "FgHiCyan",
            Attribute::FgHiWhite => "FgHiWhite",
            Attribute::BgHiBlack => "BgHiBlack",
            Attribute::BgHiRed => "BgHiRed",
            Attribute::BgHiGreen => "BgHiGreen",
            Attribute::BgHiYellow => "BgHiYellow",
            Attribute::BgHiBlue => "BgHiBlue",
            Attribute::BgHiMagenta => "BgHiMagenta",
            Attribute::BgHiCyan => "BgHiCyan",
            Attribute::BgHiWhite => "BgHiWhite",
            Attribute::Unknown(value) => {
                return Cow::Owned(format!("unknown attribute {}", value));
            }
        };
        Cow::Borrowed(name)
    }

    /// The band this attribute's code falls into.
    pub fn band(&self) -> Band {
        match self.to_u8() {
            0..=9 => Band::Style,
            30..=37 => Band::Foreground,
            40..=47 => Band::Background,
            90..=97 => Band::BrightForeground,
            100..=107 => Band::BrightBackground,
            _ => Band::Unknown,
        }
    }

    /// Returns `true` if this code has a name in the SGR table.
    pub fn is_known(&self) -> bool {
        self.band() != Band::Unknown
    }
}

impl From<u8> for Attribute {
    fn from(value: u8) -> Self {
        Attribute::from_u8(value)
    }
}

impl From<Attribute> for u8 {
    fn from(value: Attribute) -> Self {
        value.to_u8()
    }
}

impl PartialEq for Attribute {
    fn eq(&self, other: &Self) -> bool {
        self.to_u8() == other.to_u8()
    }
}

impl Eq for Attribute {}

impl PartialOrd for Attribute {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Attribute {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_u8().cmp(&other.to_u8())
    }
}

impl Hash for Attribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_u8().hash(state);
    }
}

/// Displays the numeric SGR code, which is what goes on the wire.
impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_codes_match_table() {
        assert_eq!(Attribute::Reset.to_u8(), 0);
        assert_eq!(Attribute::CrossedOut.to_u8(), 9);
        assert_eq!(Attribute::FgBlack.to_u8(), 30);
        assert_eq!(Attribute::FgWhite.to_u8(), 37);
        assert_eq!(Attribute::BgBlack.to_u8(), 40);
        assert_eq!(Attribute::BgWhite.to_u8(), 47);
        assert_eq!(Attribute::FgHiBlack.to_u8(), 90);
        assert_eq!(Attribute::FgHiWhite.to_u8(), 97);
        assert_eq!(Attribute::BgHiBlack.to_u8(), 100);
        assert_eq!(Attribute::BgHiWhite.to_u8(), 107);
    }

    #[test]
    fn test_from_u8_inverts_to_u8() {
        for attribute in Attribute::ALL {
            let restored = Attribute::from_u8(attribute.to_u8());
            assert_eq!(restored, attribute);
            assert!(!matches!(restored, Attribute::Unknown(_)));
        }
    }

    #[test]
    fn test_all_is_sorted_and_unique() {
        for pair in Attribute::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should sort before {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_unknown_code_is_representable() {
        let attribute = Attribute::from_u8(58);
        assert_eq!(attribute, Attribute::Unknown(58));
        assert_eq!(attribute.name(), "unknown attribute 58");
        assert_eq!(attribute.band(), Band::Unknown);
        assert!(!attribute.is_known());
        assert_eq!(attribute.to_string(), "58");
    }

    #[test]
    fn test_unknown_with_known_code_equals_named() {
        assert_eq!(Attribute::Unknown(31), Attribute::FgRed);
        assert_eq!(Attribute::Unknown(31).name(), "FgRed");
    }

    #[test]
    fn test_names() {
        assert_eq!(Attribute::Reset.name(), "Reset");
        assert_eq!(Attribute::ReverseVideo.name(), "ReverseVideo");
        assert_eq!(Attribute::FgHiMagenta.name(), "FgHiMagenta");
        assert_eq!(Attribute::BgHiCyan.name(), "BgHiCyan");
    }

    #[test]
    fn test_bands() {
        assert_eq!(Attribute::Bold.band(), Band::Style);
        assert_eq!(Attribute::FgGreen.band(), Band::Foreground);
        assert_eq!(Attribute::BgGreen.band(), Band::Background);
        assert_eq!(Attribute::FgHiGreen.band(), Band::BrightForeground);
        assert_eq!(Attribute::BgHiGreen.band(), Band::BrightBackground);
    }

    #[test]
    fn test_display_is_numeric_code() {
        assert_eq!(Attribute::FgYellow.to_string(), "33");
        assert_eq!(format!("{}", Attribute::BgHiRed), "101");
    }
}
