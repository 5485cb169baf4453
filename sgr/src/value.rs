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

//! Styled values: one fixed attribute set and the operations that decorate output with it.

use crate::consts::{LINE_FEED, RESET_SEQUENCE};
use crate::sequence::{bare_reset_start, start_sequence};
use crate::{Attribute, AttributeKey, OutputTarget, StyleConfig, StyleError, StyleResult};
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// An immutable SGR start sequence paired with the reset sequence.
///
/// A `StyledValue` is built once from an attribute set and then reused for
/// any number of outputs. It can wrap text into a new `String`, write
/// decorated text to an explicit writer, or print to the
/// [`OutputTarget`] it is bound to.
///
/// # Write Errors
///
/// The emit operations perform three writes: start sequence, text, reset
/// sequence. Every failure is reported:
///
/// - if the start write fails nothing else is written;
/// - once the start sequence is out, the reset write is always attempted,
///   even after a failed text write, so the terminal is not left styled;
/// - the first error encountered is returned.
///
/// The byte count returned on success covers the text only.
///
/// # Examples
///
/// ```
/// use hueterm_sgr::{Attribute, StyledValue};
///
/// let value = StyledValue::new(&[Attribute::FgWhite, Attribute::Bold, Attribute::Underline]);
/// assert_eq!(value.wrap("hi"), "\x1b[37;1;4mhi\x1b[0m");
///
/// let mut out = Vec::new();
/// let written = value.emit_line(&mut out, "hi").unwrap();
/// assert_eq!(written, 2);
/// assert_eq!(out, b"\x1b[37;1;4mhi\x1b[0m\n");
/// ```
#[derive(Clone, Debug)]
pub struct StyledValue {
    attributes: Vec<Attribute>,
    start: String,
    target: Option<Arc<dyn OutputTarget>>,
}

impl StyledValue {
    /// Creates an unbound value, treating an empty set as a bare reset.
    pub fn new(attributes: &[Attribute]) -> StyledValue {
        StyledValue {
            attributes: attributes.to_vec(),
            start: bare_reset_start(attributes),
            target: None,
        }
    }

    /// Creates an unbound value using the empty-set policy from `config`.
    pub fn with_config(attributes: &[Attribute], config: &StyleConfig) -> StyleResult<StyledValue> {
        Ok(StyledValue {
            attributes: attributes.to_vec(),
            start: start_sequence(attributes, config.empty_attributes)?,
            target: None,
        })
    }

    /// Creates a value bound to `target`, treating an empty set as a bare reset.
    pub fn bound(target: Arc<dyn OutputTarget>, attributes: &[Attribute]) -> StyledValue {
        StyledValue::new(attributes).bind(target)
    }

    /// Creates a value for which a target is mandatory.
    ///
    /// Fails with [`StyleError::MissingWriter`] when `target` is `None` and
    /// with [`StyleError::MissingAttributes`] when `attributes` is empty under
    /// a strict `config`.
    pub fn build(
        target: Option<Arc<dyn OutputTarget>>,
        attributes: &[Attribute],
        config: &StyleConfig,
    ) -> StyleResult<StyledValue> {
        let target = target.ok_or(StyleError::MissingWriter)?;
        Ok(StyledValue::with_config(attributes, config)?.bind(target))
    }

    /// Binds the value to `target`, replacing any previous binding.
    pub fn bind(mut self, target: Arc<dyn OutputTarget>) -> StyledValue {
        self.target = Some(target);
        self
    }

    /// The attributes this value was built from, in construction order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Canonical key of this value's attribute set.
    pub fn key(&self) -> AttributeKey {
        AttributeKey::new(&self.attributes)
    }

    /// The escape sequence written before the text.
    pub fn start_sequence(&self) -> &str {
        &self.start
    }

    /// The escape sequence written after the text.
    pub fn reset_sequence(&self) -> &'static str {
        RESET_SEQUENCE
    }

    /// The bound output target, if any.
    pub fn target(&self) -> Option<&Arc<dyn OutputTarget>> {
        self.target.as_ref()
    }

    /// Returns `start + text + reset`. No line feed is added.
    pub fn wrap(&self, text: &str) -> String {
        let mut wrapped =
            String::with_capacity(self.start.len() + text.len() + RESET_SEQUENCE.len());
        wrapped.push_str(&self.start);
        wrapped.push_str(text);
        wrapped.push_str(RESET_SEQUENCE);
        wrapped
    }

    /// Formats `args`, then wraps the result.
    ///
    /// ```
    /// use hueterm_sgr::{Attribute, StyledValue};
    ///
    /// let value = StyledValue::new(&[Attribute::FgRed]);
    /// assert_eq!(value.wrap_fmt(format_args!("{:?}", "x")), "\x1b[31m\"x\"\x1b[0m");
    /// ```
    pub fn wrap_fmt(&self, args: fmt::Arguments<'_>) -> String {
        use fmt::Write as _;
        let mut wrapped = String::with_capacity(self.start.len() + RESET_SEQUENCE.len());
        wrapped.push_str(&self.start);
        // Writing to a String never fails.
        let _ = wrapped.write_fmt(args);
        wrapped.push_str(RESET_SEQUENCE);
        wrapped
    }

    /// Wraps `text` and guarantees the result ends with exactly one line feed.
    ///
    /// The check runs against the wrapped string, which always ends in the
    /// reset sequence, so the line feed lands after the reset.
    pub fn wrap_line(&self, text: &str) -> String {
        let mut wrapped = self.wrap(text);
        if !wrapped.ends_with(LINE_FEED) {
            wrapped.push_str(LINE_FEED);
        }
        wrapped
    }

    /// Writes start sequence, `text` and reset sequence to `out`.
    ///
    /// Returns the number of text bytes written.
    pub fn emit<W: Write + ?Sized>(&self, out: &mut W, text: &str) -> io::Result<usize> {
        self.bracket(out, |out| {
            out.write_all(text.as_bytes())?;
            Ok(text.len())
        })
    }

    /// Formats `args` straight into `out` between the start and reset sequences.
    ///
    /// Returns the number of formatted bytes written.
    pub fn emit_fmt<W: Write + ?Sized>(
        &self,
        out: &mut W,
        args: fmt::Arguments<'_>,
    ) -> io::Result<usize> {
        self.bracket(out, |out| {
            let mut counter = CountingWriter { inner: out, count: 0 };
            counter.write_fmt(args)?;
            Ok(counter.count)
        })
    }

    /// Like [`emit`](Self::emit), followed by one line feed after the reset.
    pub fn emit_line<W: Write + ?Sized>(&self, out: &mut W, text: &str) -> io::Result<usize> {
        let written = self.emit(out, text)?;
        out.write_all(LINE_FEED.as_bytes())?;
        Ok(written)
    }

    fn bracket<W: Write + ?Sized>(
        &self,
        out: &mut W,
        body: impl FnOnce(&mut W) -> io::Result<usize>,
    ) -> io::Result<usize> {
        out.write_all(self.start.as_bytes())?;
        let written = body(out);
        let reset = out.write_all(RESET_SEQUENCE.as_bytes());
        let written = written?;
        reset?;
        Ok(written)
    }

    fn bound_target(&self) -> StyleResult<&Arc<dyn OutputTarget>> {
        self.target.as_ref().ok_or(StyleError::MissingWriter)
    }

    /// [`emit`](Self::emit) against the bound target.
    pub fn print(&self, text: &str) -> StyleResult<usize> {
        let mut out = self.bound_target()?.lock();
        Ok(self.emit(&mut out, text)?)
    }

    /// [`emit_fmt`](Self::emit_fmt) against the bound target.
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) -> StyleResult<usize> {
        let mut out = self.bound_target()?.lock();
        Ok(self.emit_fmt(&mut out, args)?)
    }

    /// [`emit_line`](Self::emit_line) against the bound target.
    pub fn print_line(&self, text: &str) -> StyleResult<usize> {
        let mut out = self.bound_target()?.lock();
        Ok(self.emit_line(&mut out, text)?)
    }

    /// Returns a closure over [`wrap`](Self::wrap).
    ///
    /// ```
    /// use hueterm_sgr::{Attribute, StyledValue};
    ///
    /// let emphasized = StyledValue::new(&[Attribute::FgBlue, Attribute::Bold]);
    /// let emphasize = emphasized.wrap_fn();
    /// println!("Wow! This is {}", emphasize("exciting!"));
    /// ```
    pub fn wrap_fn(&self) -> impl Fn(&str) -> String + '_ {
        move |text| self.wrap(text)
    }

    /// Returns a closure over [`wrap_fmt`](Self::wrap_fmt).
    pub fn wrap_fmt_fn(&self) -> impl Fn(fmt::Arguments<'_>) -> String + '_ {
        move |args| self.wrap_fmt(args)
    }

    /// Returns a closure over [`wrap_line`](Self::wrap_line).
    pub fn wrap_line_fn(&self) -> impl Fn(&str) -> String + '_ {
        move |text| self.wrap_line(text)
    }

    /// Returns a closure over [`emit`](Self::emit).
    pub fn emit_fn(&self) -> impl Fn(&mut dyn Write, &str) -> io::Result<usize> + '_ {
        move |out, text| self.emit(out, text)
    }

    /// Returns a closure over [`emit_fmt`](Self::emit_fmt).
    pub fn emit_fmt_fn(
        &self,
    ) -> impl Fn(&mut dyn Write, fmt::Arguments<'_>) -> io::Result<usize> + '_ {
        move |out, args| self.emit_fmt(out, args)
    }

    /// Returns a closure over [`emit_line`](Self::emit_line).
    pub fn emit_line_fn(&self) -> impl Fn(&mut dyn Write, &str) -> io::Result<usize> + '_ {
        move |out, text| self.emit_line(out, text)
    }

    /// Returns a closure over [`print`](Self::print).
    pub fn print_fn(&self) -> impl Fn(&str) -> StyleResult<usize> + '_ {
        move |text| self.print(text)
    }

    /// Returns a closure over [`print_fmt`](Self::print_fmt).
    pub fn print_fmt_fn(&self) -> impl Fn(fmt::Arguments<'_>) -> StyleResult<usize> + '_ {
        move |args| self.print_fmt(args)
    }

    /// Returns a closure over [`print_line`](Self::print_line).
    pub fn print_line_fn(&self) -> impl Fn(&str) -> StyleResult<usize> + '_ {
        move |text| self.print_line(text)
    }
}

/// Counts the bytes that make it into the inner writer.
struct CountingWriter<'a, W: ?Sized> {
    inner: &'a mut W,
    count: usize,
}

impl<W: Write + ?Sized> Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.count += written;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
