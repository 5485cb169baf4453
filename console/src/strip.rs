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


//! Removal of ANSI control sequences from strings and byte streams.

use anstream::adapter::{StripBytes, strip_str};
use std::borrow::Cow;
use std::io::{self, Write};

/// Removes ANSI escape sequences from a string.
///
/// Control sequences end at any final byte in `0x40..=0x7E`, so SGR codes
/// (`\x1b[1;31m`), cursor and erase commands (`\x1b[2J`) and keypad codes
/// (`\x1b[3~`) all disappear without touching the text around them.
///
/// If the input holds no escape character the original string is returned
/// borrowed, without allocating.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use hueterm_console::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[1;31mRed Text\x1b[0m"), "Red Text");
/// assert!(matches!(strip_ansi_codes("Plain Text"), Cow::Borrowed(_)));
/// ```
pub fn strip_ansi_codes(str: &str) -> Cow<'_, str> {
    if !str.contains('\x1b') {
        return Cow::Borrowed(str);
    }
    Cow::Owned(strip_str(str).to_string())
}

/// [`Write`] adapter that drops ANSI escape sequences on their way to `inner`.
///
/// Parser state carries over between `write` calls, so a sequence split
/// across several writes is still removed. Stripping can be switched off,
/// in which case bytes pass through untouched.
///
/// `write` reports the whole input buffer as consumed even when escape
/// bytes were dropped.
#[derive(Debug)]
pub struct StripWriter<W> {
    inner: W,
    state: StripBytes,
    enabled: bool,
}

impl<W: Write> StripWriter<W> {
    /// Wraps `inner`, stripping escape sequences when `enabled` is set.
    pub fn new(inner: W, enabled: bool) -> Self {
        Self {
            inner,
            state: StripBytes::new(),
            enabled,
        }
    }

    /// Returns `true` while escape sequences are being removed.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turns stripping on or off.
    ///
    /// Any half-parsed sequence is forgotten.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.state = StripBytes::new();
    }

    /// Get a reference to the inner writer
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the inner writer
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwraps the inner writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for StripWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.enabled {
            return self.inner.write(buf);
        }

        for printable in self.state.strip_next(buf) {
            self.inner.write_all(printable)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
