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


//! Integration tests for consoles, contexts and stripping

use hueterm_console::{Console, ConsoleConfig, Context, StripWriter, strip_ansi_codes};
use hueterm_sgr::Attribute::*;
use hueterm_sgr::StyledValue;
use proptest::prelude::*;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_showcase_session() {
    let out = Capture::default();
    let console = Arc::new(Console::new(out.clone(), &ConsoleConfig::colored()));
    let sink = Arc::new(Console::new(io::sink(), &ConsoleConfig::colored()));
    let ctx = Context::from_consoles(console.clone(), sink);

    let value = StyledValue::new(&[BgBlack, FgHiMagenta]);
    console.print(&value, "here is some text\n").unwrap();
    ctx.print(FgHiMagenta, format_args!("hello magenta {}", "foo")).unwrap();

    let emphasized = StyledValue::new(&[FgBlue, FgRed, Bold]);
    let excite = emphasized.wrap_fn();
    writeln!(&*console, "Wow! This is {}", excite("exciting!")).unwrap();

    console.print_line(&StyledValue::new(&[]), "no color at all").unwrap();

    console.set(&StyledValue::new(&[FgHiMagenta])).unwrap();
    writeln!(&*console, "magenta").unwrap();
    console.unset().unwrap();
    writeln!(&*console, "normal").unwrap();

    assert_eq!(
        out.text(),
        concat!(
            "\x1b[40;95mhere is some text\n\x1b[0m",
            "\x1b[95mhello magenta foo\x1b[0m\n",
            "Wow! This is \x1b[34;31;1mexciting!\x1b[0m\n",
            "\x1b[0mno color at all\x1b[0m\n",
            "\x1b[95mmagenta\n\x1b[0m",
            "normal\n",
        )
    );
}

#[test]
fn test_stripped_session_is_plain_text() {
    let out = Capture::default();
    let console = Console::new(out.clone(), &ConsoleConfig::plain());
    console.print_line(&StyledValue::new(&[Bold, FgRed]), "error").unwrap();
    console.set(&StyledValue::new(&[FgGreen])).unwrap();
    writeln!(&console, "ok").unwrap();
    console.unset().unwrap();
    assert_eq!(out.text(), "error\nok\n");
}

#[test]
fn test_context_streams_are_independent() {
    let out = Capture::default();
    let err = Capture::default();
    let ctx = Context::new(out.clone(), err.clone(), &ConsoleConfig::colored());
    ctx.stderr().console().disable_colors(true);

    ctx.print(FgRed, format_args!("out")).unwrap();
    ctx.eprint(FgRed, format_args!("err")).unwrap();

    assert_eq!(out.text(), "\x1b[31mout\x1b[0m\n");
    assert_eq!(err.text(), "err\n");
}

#[test]
fn test_concurrent_context_prints_do_not_interleave() {
    const THREADS: usize = 8;
    const LINES: usize = 50;

    let out = Capture::default();
    let ctx = Context::new(out.clone(), io::sink(), &ConsoleConfig::colored());

    std::thread::scope(|scope| {
        for i in 0..THREADS {
            let ctx = &ctx;
            scope.spawn(move || {
                let attribute = if i % 2 == 0 { FgGreen } else { FgHiBlue };
                for n in 0..LINES {
                    ctx.print(attribute, format_args!("{}-{}", i, n)).unwrap();
                }
            });
        }
    });

    let text = out.text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), THREADS * LINES);
    for line in lines {
        let line_ok = (line.starts_with("\x1b[32m") || line.starts_with("\x1b[94m"))
            && line.ends_with("\x1b[0m")
            && strip_ansi_codes(line).split('-').count() == 2;
        assert!(line_ok, "interleaved line: {:?}", line);
    }
}

#[test]
fn test_string_macros_format_and_wrap() {
    assert_eq!(
        hueterm_console::red_string!("{} of {}", 3, "tries"),
        "\x1b[31m3 of tries\x1b[0m"
    );
    assert_eq!(hueterm_console::hi_cyan_string!("cyan"), "\x1b[96mcyan\x1b[0m");
    assert_eq!(
        hueterm_console::yellow_string!("x"),
        hueterm_console::yellow_string(format_args!("x"))
    );
}

#[test]
fn test_strip_writer_over_styled_emit() {
    let mut writer = StripWriter::new(Vec::new(), true);
    StyledValue::new(&[Underline, FgCyan])
        .emit_line(&mut writer, "link")
        .unwrap();
    assert_eq!(writer.into_inner(), b"link\n");
}

proptest! {
    #[test]
    fn prop_stripping_wrapped_text_restores_it(text in "[ -~äöüß✓]*", code in 30u8..38) {
        let value = StyledValue::new(&[code.into()]);
        let wrapped = value.wrap(&text);
        prop_assert_eq!(strip_ansi_codes(&wrapped), text.as_str());
    }

    #[test]
    fn prop_strip_writer_split_writes(text in "[a-z ]{0,16}", split in 0usize..32) {
        let wrapped = StyledValue::new(&[Bold, FgYellow]).wrap(&text);
        let bytes = wrapped.as_bytes();
        let split = split.min(bytes.len());
        let mut writer = StripWriter::new(Vec::new(), true);
        writer.write_all(&bytes[..split]).unwrap();
        writer.write_all(&bytes[split..]).unwrap();
        prop_assert_eq!(writer.into_inner(), text.into_bytes());
    }
}
