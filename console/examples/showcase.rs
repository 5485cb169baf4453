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


//! Styled Output Showcase
//!
//! Prints a short tour of styled values, console modes and the color helpers.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p hueterm-console --example showcase
//! NO_COLOR=1 cargo run -p hueterm-console --example showcase
//! ```

use hueterm_console as console;
use hueterm_sgr::{Attribute::*, StyleConfig, StyledValue};
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let stdout = console::stdout();
    let out = stdout.console();

    let value = StyledValue::new(&[BgBlack, FgHiMagenta]);
    out.print(&value, "here is some text\n")?;
    console::hi_magenta!("hello magenta {}", "foo");
    console::hi_cyan!("hello cyan {}", 10);

    let emphasized = StyledValue::new(&[FgBlue, FgRed, Bold]);
    let excite = emphasized.wrap_fn();
    writeln!(&**out, "Wow! This is {}", excite("exciting!"))?;

    out.print_line(&StyledValue::new(&[]), "no color at all")?;

    out.set(&StyledValue::new(&[FgHiMagenta]))?;
    writeln!(&**out, "still magenta")?;
    out.unset()?;
    writeln!(&**out, "back to normal")?;

    // Cached values are shared per attribute set.
    stdout.value(&[Underline, FgGreen]).print_line("underlined green")?;
    stdout.value(&[FgGreen, Underline]).print_line("same value again")?;

    if let Err(error) = StyledValue::with_config(&[], &StyleConfig::strict()) {
        console::red_e!("strict config: {}", error);
    }

    console::set_colors_enabled(false);
    console::yellow!("helpers print plain text while disabled");
    console::set_colors_enabled(true);

    out.disable_colors(true);
    out.print_line(&value, "stripped by the console")?;
    out.disable_colors(false);

    println!("{}", console::green_string!("done"));
    Ok(())
}
