//! Bridge: the "what" (`Display`, `CountDisplay`) and the "how"
//! (`DisplayImpl` implementations) vary independently. Function-side types
//! hold a boxed implementation instead of inheriting from it.

use crate::config::BridgeConfig;
use crate::error::Result;
use std::io::{self, Write};
use std::ops::Deref;
use tracing::debug;

/// Implementation-side API.
pub trait DisplayImpl {
    fn raw_open(&self, out: &mut dyn Write) -> io::Result<()>;
    fn raw_print(&self, out: &mut dyn Write) -> io::Result<()>;
    fn raw_close(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Draws the text inside a box sized to its character count.
#[derive(Debug, Clone)]
pub struct StringDisplayImpl {
    text: String,
    width: usize,
}

impl StringDisplayImpl {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.chars().count();
        StringDisplayImpl { text, width }
    }

    fn print_line(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "+{}+", "-".repeat(self.width))
    }
}

impl DisplayImpl for StringDisplayImpl {
    fn raw_open(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_line(out)
    }

    fn raw_print(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "|{}|", self.text)
    }

    fn raw_close(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_line(out)
    }
}

/// Writes everything on one line: head, bodies, tail.
#[derive(Debug, Clone)]
pub struct CharDisplayImpl {
    head: char,
    body: char,
    tail: char,
}

impl CharDisplayImpl {
    pub fn new(head: char, body: char, tail: char) -> Self {
        CharDisplayImpl { head, body, tail }
    }
}

impl DisplayImpl for CharDisplayImpl {
    fn raw_open(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.head)
    }

    fn raw_print(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.body)
    }

    fn raw_close(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.tail)
    }
}

/// Function side: builds behaviour on top of whatever implementation it holds.
pub struct Display {
    imp: Box<dyn DisplayImpl>,
}

impl Display {
    pub fn new(imp: impl DisplayImpl + 'static) -> Self {
        Display { imp: Box::new(imp) }
    }

    pub fn open(&self, out: &mut dyn Write) -> io::Result<()> {
        self.imp.raw_open(out)
    }

    pub fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        self.imp.raw_print(out)
    }

    pub fn close(&self, out: &mut dyn Write) -> io::Result<()> {
        self.imp.raw_close(out)
    }

    pub fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        self.open(out)?;
        self.print(out)?;
        self.close(out)
    }
}

/// Extends `Display` without touching any `DisplayImpl`.
pub struct CountDisplay {
    inner: Display,
}

impl CountDisplay {
    pub fn new(imp: impl DisplayImpl + 'static) -> Self {
        CountDisplay {
            inner: Display::new(imp),
        }
    }

    pub fn multi_display(&self, times: usize, out: &mut dyn Write) -> io::Result<()> {
        self.open(out)?;
        for _ in 0..times {
            self.print(out)?;
        }
        self.close(out)
    }
}

impl Deref for CountDisplay {
    type Target = Display;

    fn deref(&self) -> &Display {
        &self.inner
    }
}

pub fn demo(config: &BridgeConfig, out: &mut dyn Write) -> Result<()> {
    let d1 = Display::new(StringDisplayImpl::new(config.message.as_str()));
    let d2 = CountDisplay::new(StringDisplayImpl::new(config.message.as_str()));

    d1.display(out)?;
    d2.display(out)?;
    debug!(repeat = config.repeat, "multi display");
    d2.multi_display(config.repeat, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture(f: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_display_boxes_text() {
        let display = Display::new(StringDisplayImpl::new("Hello"));
        assert_eq!(
            capture(|out| display.display(out)),
            "+-----+\n|Hello|\n+-----+\n"
        );
    }

    #[test]
    fn test_width_counts_chars_not_bytes() {
        let display = Display::new(StringDisplayImpl::new("héllo"));
        let rendered = capture(|out| display.open(out));
        assert_eq!(rendered, "+-----+\n");
    }

    #[test]
    fn test_multi_display_repeats_body() {
        let display = CountDisplay::new(StringDisplayImpl::new("ab"));
        assert_eq!(
            capture(|out| display.multi_display(3, out)),
            "+--+\n|ab|\n|ab|\n|ab|\n+--+\n"
        );
    }

    #[test]
    fn test_multi_display_zero_times() {
        let display = CountDisplay::new(StringDisplayImpl::new("ab"));
        assert_eq!(capture(|out| display.multi_display(0, out)), "+--+\n+--+\n");
    }

    #[test]
    fn test_count_display_with_char_impl() {
        let display = CountDisplay::new(CharDisplayImpl::new('<', '*', '>'));
        assert_eq!(capture(|out| display.multi_display(4, out)), "<****>\n");
        assert_eq!(capture(|out| display.display(out)), "<*>\n");
    }

    #[test]
    fn test_demo_output() {
        let config = BridgeConfig {
            message: "Hi".into(),
            repeat: 2,
        };
        let rendered = capture(|out| {
            demo(&config, out).map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))
        });
        assert_eq!(
            rendered,
            "+--+\n|Hi|\n+--+\n\
             +--+\n|Hi|\n+--+\n\
             +--+\n|Hi|\n|Hi|\n+--+\n"
        );
    }
}
