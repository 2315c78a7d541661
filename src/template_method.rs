//! Template Method: `AbstractDisplay::display` fixes the skeleton
//! (open, print a few times, close) and implementors only fill in the steps.

use crate::config::TemplateMethodConfig;
use crate::error::Result;
use std::io::{self, Write};

pub const DEFAULT_REPETITIONS: usize = 5;

pub trait AbstractDisplay {
    fn open(&self, out: &mut dyn Write) -> io::Result<()>;
    fn print(&self, out: &mut dyn Write) -> io::Result<()>;
    fn close(&self, out: &mut dyn Write) -> io::Result<()>;

    fn repetitions(&self) -> usize {
        DEFAULT_REPETITIONS
    }

    /// The template. Implementors should not need to override this.
    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        self.open(out)?;
        for _ in 0..self.repetitions() {
            self.print(out)?;
        }
        self.close(out)
    }
}

#[derive(Debug, Clone)]
pub struct CharDisplay {
    ch: String,
}

impl CharDisplay {
    pub fn new(ch: impl Into<String>) -> Self {
        CharDisplay { ch: ch.into() }
    }
}

impl AbstractDisplay for CharDisplay {
    fn open(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "<<")
    }

    fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        write!(out, "{}", self.ch)
    }

    fn close(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, ">>")
    }
}

#[derive(Debug, Clone)]
pub struct StringDisplay {
    text: String,
    width: usize,
}

impl StringDisplay {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let width = text.chars().count();
        StringDisplay { text, width }
    }

    fn print_line(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "+{}+", "-".repeat(self.width))
    }
}

impl AbstractDisplay for StringDisplay {
    fn open(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_line(out)
    }

    fn print(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "|{}|", self.text)
    }

    fn close(&self, out: &mut dyn Write) -> io::Result<()> {
        self.print_line(out)
    }
}

pub fn demo(config: &TemplateMethodConfig, out: &mut dyn Write) -> Result<()> {
    let displays: Vec<Box<dyn AbstractDisplay>> = vec![
        Box::new(CharDisplay::new(config.ch.as_str())),
        Box::new(StringDisplay::new(config.message.as_str())),
    ];
    for display in &displays {
        display.display(out)?;
    }
    Ok(())
}
