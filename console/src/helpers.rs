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


//! One-call colored printing against the process context.
//!
//! Every foreground color has three helpers: `red` prints a line to stdout,
//! `red_e` prints a line to stderr and `red_string` returns the styled text.
//! Each also exists as a macro taking `format!` arguments.
//!
//! ```no_run
//! hueterm_console::hi_magenta!("hello magenta {}", "foo");
//! hueterm_console::hi_cyan_e!("hello cyan {}", 10);
//! let warning = hueterm_console::yellow_string!("careful");
//! hueterm_console::red(format_args!("{} failed", warning));
//! ```

use crate::{Context, Stream};
use hueterm_sgr::Attribute;
use std::fmt;
use tracing::debug;

/// The process stdout stream.
pub fn stdout() -> &'static Stream {
    Context::global().stdout()
}

/// The process stderr stream.
pub fn stderr() -> &'static Stream {
    Context::global().stderr()
}

/// Turns styling of the color helpers on or off process wide.
pub fn set_colors_enabled(enabled: bool) {
    Context::global().set_colors_enabled(enabled)
}

/// Returns `true` unless the color helpers were turned off.
pub fn colors_enabled() -> bool {
    Context::global().colors_enabled()
}

fn print_stdout(attribute: Attribute, args: fmt::Arguments<'_>) {
    if let Err(error) = Context::global().print(attribute, args) {
        debug!(%error, "dropped colored stdout output");
    }
}

fn print_stderr(attribute: Attribute, args: fmt::Arguments<'_>) {
    if let Err(error) = Context::global().eprint(attribute, args) {
        debug!(%error, "dropped colored stderr output");
    }
}

macro_rules! color_helpers {
    ($d:tt $($attribute:ident => $print:ident, $eprint:ident, $string:ident;)*) => {
        $(
            #[doc = concat!("Prints a line in `", stringify!($attribute), "` to stdout.")]
            pub fn $print(args: fmt::Arguments<'_>) {
                print_stdout(Attribute::$attribute, args)
            }

            #[doc = concat!("Prints a line in `", stringify!($attribute), "` to stderr.")]
            pub fn $eprint(args: fmt::Arguments<'_>) {
                print_stderr(Attribute::$attribute, args)
            }

            #[doc = concat!("Formats text wrapped in `", stringify!($attribute), "`.")]
            pub fn $string(args: fmt::Arguments<'_>) -> String {
                Context::global().string(Attribute::$attribute, args)
            }

            #[doc = concat!("Prints a formatted line in `", stringify!($attribute), "` to stdout.")]
            #[macro_export]
            macro_rules! $print {
                ($d($d arg:tt)*) => {
                    $crate::$print(::std::format_args!($d($d arg)*))
                };
            }

            #[doc = concat!("Prints a formatted line in `", stringify!($attribute), "` to stderr.")]
            #[macro_export]
            macro_rules! $eprint {
                ($d($d arg:tt)*) => {
                    $crate::$eprint(::std::format_args!($d($d arg)*))
                };
            }

            #[doc = concat!("Formats text wrapped in `", stringify!($attribute), "`.")]
            #[macro_export]
            macro_rules! $string {
                ($d($d arg:tt)*) => {
                    $crate::$string(::std::format_args!($d($d arg)*))
                };
            }
        )*
    };
}

// `$` is passed in so the generated macros can declare their own fragments.
color_helpers! {
    $
    FgBlack => black, black_e, black_string;
    FgRed => red, red_e, red_string;
    FgGreen => green, green_e, green_string;
    FgYellow => yellow, yellow_e, yellow_string;
    FgBlue => blue, blue_e, blue_string;
    FgMagenta => magenta, magenta_e, magenta_string;
    FgCyan => cyan, cyan_e, cyan_string;
    FgWhite => white, white_e, white_string;
    FgHiBlack => hi_black, hi_black_e, hi_black_string;
    FgHiRed => hi_red, hi_red_e, hi_red_string;
    FgHiGreen => hi_green, hi_green_e, hi_green_string;
    FgHiYellow => hi_yellow, hi_yellow_e, hi_yellow_string;
    FgHiBlue => hi_blue, hi_blue_e, hi_blue_string;
    FgHiMagenta => hi_magenta, hi_magenta_e, hi_magenta_string;
    FgHiCyan => hi_cyan, hi_cyan_e, hi_cyan_string;
    FgHiWhite => hi_white, hi_white_e, hi_white_string;
}
