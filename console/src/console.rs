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


//! Serialized, optionally stripping, output consoles.

use crate::{ConsoleConfig, StripWriter};
use hueterm_sgr::{OutputTarget, RESET_SEQUENCE, StyledValue};
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

type ConsoleWriter = StripWriter<Box<dyn Write + Send>>;

/// A shared output stream, typically stdout or stderr.
///
/// Every write goes through one mutex, so the start, text and reset writes of
/// a styled print never interleave with output from other threads. A console
/// either passes escape sequences through or strips them, and can be switched
/// at runtime with [`Console::disable_colors`].
///
/// `&Console` implements [`Write`], so plain output can be mixed in:
///
/// ```no_run
/// use hueterm_console::{Console, ConsoleConfig};
/// use hueterm_sgr::{Attribute, StyledValue};
/// use std::io::Write;
///
/// let console = Console::stdout(&ConsoleConfig::colored());
/// let magenta = StyledValue::new(&[Attribute::FgHiMagenta]);
/// console.set(&magenta).unwrap();
/// writeln!(&console, "magenta until unset").unwrap();
/// console.unset().unwrap();
/// ```
pub struct Console {
    writer: Mutex<ConsoleWriter>,
}

impl Console {
    /// Wraps `writer` in a console configured by `config`.
    pub fn new<W: Write + Send + 'static>(writer: W, config: &ConsoleConfig) -> Console {
        let writer: Box<dyn Write + Send> = Box::new(writer);
        Console {
            writer: Mutex::new(StripWriter::new(writer, config.color_choice.strips())),
        }
    }

    /// Console over the process's standard output.
    pub fn stdout(config: &ConsoleConfig) -> Console {
        Console::new(io::stdout(), config)
    }

    /// Console over the process's standard error.
    pub fn stderr(config: &ConsoleConfig) -> Console {
        Console::new(io::stderr(), config)
    }

    /// Strip escape sequences from all further output if `strip` is true,
    /// otherwise pass them through.
    pub fn disable_colors(&self, strip: bool) {
        let mut writer = self.guard();
        if writer.is_enabled() != strip {
            debug!(strip, "switching console color mode");
        }
        writer.set_enabled(strip);
    }

    /// Returns `true` if escape sequences reach the underlying stream.
    pub fn colors_enabled(&self) -> bool {
        !self.guard().is_enabled()
    }

    /// Writes `value`'s start sequence so that everything written afterwards
    /// is styled until [`Console::unset`] is called.
    pub fn set(&self, value: &StyledValue) -> io::Result<()> {
        self.guard().write_all(value.start_sequence().as_bytes())
    }

    /// Writes the reset sequence, undoing a previous [`Console::set`].
    pub fn unset(&self) -> io::Result<()> {
        self.guard().write_all(RESET_SEQUENCE.as_bytes())
    }

    /// Prints `text` decorated by `value`.
    pub fn print(&self, value: &StyledValue, text: &str) -> io::Result<usize> {
        value.emit(&mut *self.guard(), text)
    }

    /// Prints formatted text decorated by `value`.
    pub fn print_fmt(&self, value: &StyledValue, args: fmt::Arguments<'_>) -> io::Result<usize> {
        value.emit_fmt(&mut *self.guard(), args)
    }

    /// Prints `text` decorated by `value`, followed by a line feed.
    pub fn print_line(&self, value: &StyledValue, text: &str) -> io::Result<usize> {
        value.emit_line(&mut *self.guard(), text)
    }

    fn guard(&self) -> MutexGuard<'_, ConsoleWriter> {
        self.writer.lock().unwrap_or_else(|poisoned| {
            warn!("recovering poisoned console lock");
            poisoned.into_inner()
        })
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("colors_enabled", &self.colors_enabled())
            .finish()
    }
}

impl OutputTarget for Console {
    fn lock(&self) -> Box<dyn Write + '_> {
        Box::new(ConsoleLock(self.guard()))
    }
}

impl Write for &Console {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.guard().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.guard().flush()
    }
}

/// Exclusive access to a console for the lifetime of the guard.
struct ConsoleLock<'a>(MutexGuard<'a, ConsoleWriter>);

impl Write for ConsoleLock<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
