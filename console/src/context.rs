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


//! Process-wide stdout and stderr streams.

use crate::{Console, ConsoleConfig, ConsoleError, ConsoleResult};
use hueterm_sgr::{Attribute, LINE_FEED, OutputTarget, StyledValue, ValueCache};
use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::debug;

static GLOBAL: OnceLock<Context> = OnceLock::new();

/// A console together with the cache of values bound to it.
#[derive(Debug)]
pub struct Stream {
    console: Arc<Console>,
    cache: ValueCache,
}

impl Stream {
    /// Wraps `console` with an empty value cache bound to it.
    pub fn new(console: Arc<Console>) -> Stream {
        let target: Arc<dyn OutputTarget> = console.clone();
        Stream {
            console,
            cache: ValueCache::new(target),
        }
    }

    /// The console all of this stream's values print to.
    pub fn console(&self) -> &Arc<Console> {
        &self.console
    }

    /// The values created for this stream so far.
    pub fn cache(&self) -> &ValueCache {
        &self.cache
    }

    /// Cached value for `attributes`, bound to this stream's console.
    ///
    /// Codes are written in ascending order, so within one band the highest
    /// code wins regardless of the order given here.
    pub fn value(&self, attributes: &[Attribute]) -> Arc<StyledValue> {
        self.cache.value(attributes)
    }

    fn print(&self, enabled: bool, attribute: Attribute, text: &str) -> ConsoleResult<usize> {
        let ends_with_line_feed = text.ends_with(LINE_FEED);
        if enabled {
            let value = self.value(&[attribute]);
            let written = if ends_with_line_feed {
                value.print(text)?
            } else {
                value.print_line(text)?
            };
            return Ok(written);
        }

        let mut out = self.console.lock();
        out.write_all(text.as_bytes())?;
        if !ends_with_line_feed {
            out.write_all(LINE_FEED.as_bytes())?;
        }
        Ok(text.len())
    }
}

/// The stdout and stderr streams of a process plus the global color toggle
/// read by the convenience helpers.
///
/// Most programs use [`Context::global`]. Tests and embedders can build their
/// own context over arbitrary writers.
#[derive(Debug)]
pub struct Context {
    stdout: Stream,
    stderr: Stream,
    colors_enabled: AtomicBool,
}

impl Context {
    /// Builds a context writing to `stdout` and `stderr`.
    pub fn new<O, E>(stdout: O, stderr: E, config: &ConsoleConfig) -> Context
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Context::from_consoles(
            Arc::new(Console::new(stdout, config)),
            Arc::new(Console::new(stderr, config)),
        )
    }

    /// Builds a context over existing consoles.
    pub fn from_consoles(stdout: Arc<Console>, stderr: Arc<Console>) -> Context {
        Context {
            stdout: Stream::new(stdout),
            stderr: Stream::new(stderr),
            colors_enabled: AtomicBool::new(true),
        }
    }

    /// The process context, built on first use from the standard streams and
    /// [`ConsoleConfig::from_env`].
    pub fn global() -> &'static Context {
        GLOBAL.get_or_init(|| {
            let config = ConsoleConfig::from_env();
            debug!(color_choice = ?config.color_choice, "initializing process console context");
            Context::new(io::stdout(), io::stderr(), &config)
        })
    }

    /// Installs `context` as the process context.
    ///
    /// Fails with [`ConsoleError::AlreadyInitialized`] if [`Context::global`]
    /// already ran or another context was installed first.
    pub fn install(context: Context) -> ConsoleResult<&'static Context> {
        GLOBAL
            .set(context)
            .map_err(|_| ConsoleError::AlreadyInitialized)?;
        debug!("installed process console context");
        Ok(Context::global())
    }

    /// The standard output stream.
    pub fn stdout(&self) -> &Stream {
        &self.stdout
    }

    /// The standard error stream.
    pub fn stderr(&self) -> &Stream {
        &self.stderr
    }

    /// Turns styling on or off for [`Context::print`], [`Context::eprint`]
    /// and [`Context::string`]. Values obtained directly are unaffected.
    pub fn set_colors_enabled(&self, enabled: bool) {
        if self.colors_enabled.swap(enabled, Ordering::Relaxed) != enabled {
            debug!(enabled, "global color toggle changed");
        }
    }

    /// Returns `true` unless styling was turned off with [`Context::set_colors_enabled`].
    pub fn colors_enabled(&self) -> bool {
        self.colors_enabled.load(Ordering::Relaxed)
    }

    /// Prints formatted text in `attribute` to stdout, terminated by a line
    /// feed.
    ///
    /// If the text already ends with a line feed it is written inside the
    /// styled region; otherwise one is appended after the reset. Returns the
    /// number of text bytes written.
    pub fn print(&self, attribute: Attribute, args: fmt::Arguments<'_>) -> ConsoleResult<usize> {
        self.stdout.print(self.colors_enabled(), attribute, &args.to_string())
    }

    /// Same as [`Context::print`] but writes to stderr.
    pub fn eprint(&self, attribute: Attribute, args: fmt::Arguments<'_>) -> ConsoleResult<usize> {
        self.stderr.print(self.colors_enabled(), attribute, &args.to_string())
    }

    /// Formats `args` wrapped in `attribute`, or plain when colors are off.
    pub fn string(&self, attribute: Attribute, args: fmt::Arguments<'_>) -> String {
        if self.colors_enabled() {
            self.stdout.value(&[attribute]).wrap_fmt(args)
        } else {
            args.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::SharedBuffer;
    use hueterm_sgr::Attribute::*;

    fn context(config: &ConsoleConfig) -> (Context, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::default();
        let err = SharedBuffer::default();
        (Context::new(out.clone(), err.clone(), config), out, err)
    }

    #[test]
    fn test_print_appends_line_feed_after_reset() {
        let (ctx, out, err) = context(&ConsoleConfig::colored());
        let n = ctx.print(FgRed, format_args!("{} {}", "foo", 32)).unwrap();
        assert_eq!(n, 6);
        assert_eq!(out.contents(), "\x1b[31mfoo 32\x1b[0m\n");
        assert_eq!(err.contents(), "");
    }

    #[test]
    fn test_print_keeps_trailing_line_feed_inside() {
        let (ctx, out, _) = context(&ConsoleConfig::colored());
        ctx.print(FgGreen, format_args!("done\n")).unwrap();
        assert_eq!(out.contents(), "\x1b[32mdone\n\x1b[0m");
    }

    #[test]
    fn test_eprint_goes_to_stderr() {
        let (ctx, out, err) = context(&ConsoleConfig::colored());
        ctx.eprint(FgHiYellow, format_args!("warn")).unwrap();
        assert_eq!(out.contents(), "");
        assert_eq!(err.contents(), "\x1b[93mwarn\x1b[0m\n");
    }

    #[test]
    fn test_toggle_off_prints_plain() {
        let (ctx, out, _) = context(&ConsoleConfig::colored());
        ctx.set_colors_enabled(false);
        assert!(!ctx.colors_enabled());
        ctx.print(FgRed, format_args!("foo")).unwrap();
        ctx.print(FgRed, format_args!("bar\n")).unwrap();
        assert_eq!(out.contents(), "foo\nbar\n");
        assert_eq!(ctx.string(FgRed, format_args!("baz")), "baz");
    }

    #[test]
    fn test_string_wraps_when_enabled() {
        let (ctx, out, _) = context(&ConsoleConfig::colored());
        assert_eq!(ctx.string(FgBlue, format_args!("{}", 7)), "\x1b[34m7\x1b[0m");
        assert_eq!(out.contents(), "");
    }

    #[test]
    fn test_plain_console_strips_context_output() {
        let (ctx, out, _) = context(&ConsoleConfig::plain());
        ctx.print(FgMagenta, format_args!("quiet")).unwrap();
        assert_eq!(out.contents(), "quiet\n");
    }

    #[test]
    fn test_stream_values_are_cached() {
        let (ctx, _, _) = context(&ConsoleConfig::colored());
        ctx.print(FgCyan, format_args!("a")).unwrap();
        ctx.print(FgCyan, format_args!("b")).unwrap();
        assert_eq!(ctx.stdout().cache().len(), 1);
        assert!(Arc::ptr_eq(
            &ctx.stdout().value(&[FgCyan]),
            &ctx.stdout().value(&[FgCyan])
        ));
        assert!(ctx.stderr().cache().is_empty());
    }

    #[test]
    fn test_stream_value_uses_canonical_order() {
        let (ctx, out, _) = context(&ConsoleConfig::colored());
        let value = ctx.stdout().value(&[FgBlue, FgRed]);
        assert_eq!(value.start_sequence(), "\x1b[31;34m");
        value.print("blue").unwrap();
        assert_eq!(out.contents(), "\x1b[31;34mblue\x1b[0m");
    }

    #[test]
    fn test_global_is_singleton() {
        assert!(std::ptr::eq(Context::global(), Context::global()));
        let second = Context::new(io::sink(), io::sink(), &ConsoleConfig::plain());
        assert!(matches!(
            Context::install(second),
            Err(ConsoleError::AlreadyInitialized)
        ));
    }
}
