//! Adapter: make an existing `Banner` satisfy the `Print` interface that
//! callers expect, once by implementing the trait on a wrapper type and once
//! by holding a banner and forwarding to it.

use crate::config::AdapterConfig;
use crate::error::Result;
use std::io::{self, Write};
use std::ops::Deref;

/// The adaptee: it already knows how to decorate a string.
#[derive(Debug, Clone)]
pub struct Banner {
    text: String,
}

impl Banner {
    pub fn new(text: impl Into<String>) -> Self {
        Banner { text: text.into() }
    }

    pub fn show_with_paren(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "({})", self.text)
    }

    pub fn show_with_aster(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "*{}*", self.text)
    }
}

/// The target interface.
pub trait Print {
    fn print_weak(&self, out: &mut dyn Write) -> io::Result<()>;
    fn print_strong(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Adapter that *is* a banner: derefs to it and implements `Print` on top.
#[derive(Debug, Clone)]
pub struct PrintBanner(Banner);

impl PrintBanner {
    pub fn new(text: impl Into<String>) -> Self {
        PrintBanner(Banner::new(text))
    }
}

impl Deref for PrintBanner {
    type Target = Banner;

    fn deref(&self) -> &Banner {
        &self.0
    }
}

impl Print for PrintBanner {
    fn print_weak(&self, out: &mut dyn Write) -> io::Result<()> {
        self.show_with_paren(out)
    }

    fn print_strong(&self, out: &mut dyn Write) -> io::Result<()> {
        self.show_with_aster(out)
    }
}

/// Adapter that *has* a banner and delegates to it.
#[derive(Debug, Clone)]
pub struct PrintBannerDelegation {
    banner: Banner,
}

impl PrintBannerDelegation {
    pub fn new(text: impl Into<String>) -> Self {
        PrintBannerDelegation {
            banner: Banner::new(text),
        }
    }
}

impl Print for PrintBannerDelegation {
    fn print_weak(&self, out: &mut dyn Write) -> io::Result<()> {
        self.banner.show_with_paren(out)
    }

    fn print_strong(&self, out: &mut dyn Write) -> io::Result<()> {
        self.banner.show_with_aster(out)
    }
}

pub fn demo(config: &AdapterConfig, out: &mut dyn Write) -> Result<()> {
    // Callers only see `Print`; which adapter sits behind it is irrelevant.
    let printers: [Box<dyn Print>; 2] = [
        Box::new(PrintBanner::new(config.message.as_str())),
        Box::new(PrintBannerDelegation::new(config.delegated_message.as_str())),
    ];
    for printer in &printers {
        printer.print_weak(out)?;
        printer.print_strong(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(printer: &dyn Print) -> String {
        let mut out = Vec::new();
        printer.print_weak(&mut out).unwrap();
        printer.print_strong(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_wrapper_adapter() {
        assert_eq!(render(&PrintBanner::new("Hello")), "(Hello)\n*Hello*\n");
    }

    #[test]
    fn test_delegation_adapter() {
        assert_eq!(render(&PrintBannerDelegation::new("Hi")), "(Hi)\n*Hi*\n");
    }

    #[test]
    fn test_wrapper_still_exposes_banner() {
        let adapter = PrintBanner::new("raw");
        let mut out = Vec::new();
        adapter.show_with_aster(&mut out).unwrap();
        assert_eq!(out, b"*raw*\n");
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        demo(&AdapterConfig::default(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "(Hello)\n*Hello*\n(Hello delegation)\n*Hello delegation*\n"
        );
    }
}
