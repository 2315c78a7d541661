//! Prototype: new products are copies of registered instances, so the
//! `Manager` never names a concrete type.

use crate::config::PrototypeConfig;
use crate::error::{PatternError, Result};
use std::collections::HashMap;
use std::io::Write;
use tracing::debug;

pub trait Product {
    fn use_product(&self, content: &str, out: &mut dyn Write) -> Result<()>;
    fn create_copy(&self) -> Box<dyn Product>;
}

/// Keeps prototypes by name and hands out copies of them.
#[derive(Default)]
pub struct Manager {
    showcase: HashMap<String, Box<dyn Product>>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, prototype: Box<dyn Product>) {
        let name = name.into();
        debug!(%name, "prototype registered");
        self.showcase.insert(name, prototype);
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Product>> {
        self.showcase
            .get(name)
            .map(|proto| proto.create_copy())
            .ok_or_else(|| PatternError::UnknownPrototype(name.to_string()))
    }
}

/// Frames the content with a decoration character.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageBox {
    deco: char,
}

impl MessageBox {
    pub fn new(deco: char) -> Self {
        MessageBox { deco }
    }
}

impl Product for MessageBox {
    fn use_product(&self, content: &str, out: &mut dyn Write) -> Result<()> {
        let rule: String = std::iter::repeat(self.deco)
            .take(content.chars().count() + 2)
            .collect();
        writeln!(out, "{rule}")?;
        writeln!(out, "{}{content}{}", self.deco, self.deco)?;
        writeln!(out, "{rule}")?;
        Ok(())
    }

    fn create_copy(&self) -> Box<dyn Product> {
        Box::new(self.clone())
    }
}

/// Underlines the content.
#[derive(Debug, Clone, PartialEq)]
pub struct UnderlinePen {
    ulchar: char,
}

impl UnderlinePen {
    pub fn new(ulchar: char) -> Self {
        UnderlinePen { ulchar }
    }
}

impl Default for UnderlinePen {
    fn default() -> Self {
        UnderlinePen::new('-')
    }
}

impl Product for UnderlinePen {
    fn use_product(&self, content: &str, out: &mut dyn Write) -> Result<()> {
        let line: String = std::iter::repeat(self.ulchar)
            .take(content.chars().count())
            .collect();
        writeln!(out, "{content}")?;
        writeln!(out, "{line}")?;
        Ok(())
    }

    fn create_copy(&self) -> Box<dyn Product> {
        Box::new(self.clone())
    }
}

pub fn demo(config: &PrototypeConfig, out: &mut dyn Write) -> Result<()> {
    let mut manager = Manager::new();
    manager.register("slash_box", Box::new(MessageBox::new('/')));
    manager.register("aster_box", Box::new(MessageBox::new('*')));
    manager.register("ul_pen", Box::new(UnderlinePen::default()));

    for name in ["slash_box", "aster_box", "ul_pen"] {
        manager.create(name)?.use_product(&config.message, out)?;
    }
    Ok(())
}
