//! Factory Method: `Factory::create` is a fixed recipe (make, then
//! register) whose two steps are supplied by the concrete factory.

use crate::config::FactoryMethodConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;
use tracing::debug;

pub trait Product: fmt::Display {
    fn use_product(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait Factory {
    fn create_product(&mut self, owner: &str, out: &mut dyn Write) -> Result<Box<dyn Product>>;
    fn register_product(&mut self, product: &dyn Product, out: &mut dyn Write) -> Result<()>;

    /// Callers depend on this and never on the concrete factory.
    fn create(&mut self, owner: &str, out: &mut dyn Write) -> Result<Box<dyn Product>> {
        let product = self.create_product(owner, out)?;
        self.register_product(product.as_ref(), out)?;
        Ok(product)
    }
}

#[derive(Debug, Clone)]
pub struct IdCard {
    owner: String,
}

impl IdCard {
    pub fn issue(owner: impl Into<String>, out: &mut dyn Write) -> Result<Self> {
        let owner = owner.into();
        writeln!(out, "Issue {owner}'s card")?;
        Ok(IdCard { owner })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl fmt::Display for IdCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[IDCard: {}]", self.owner)
    }
}

impl Product for IdCard {
    fn use_product(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Use {}'s card", self.owner)?;
        Ok(())
    }
}

/// Issues ID cards and keeps the registry of cards handed out.
#[derive(Debug, Default)]
pub struct IdCardFactory {
    registered: Vec<String>,
}

impl IdCardFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registered(&self) -> &[String] {
        &self.registered
    }
}

impl Factory for IdCardFactory {
    fn create_product(&mut self, owner: &str, out: &mut dyn Write) -> Result<Box<dyn Product>> {
        Ok(Box::new(IdCard::issue(owner, out)?))
    }

    fn register_product(&mut self, product: &dyn Product, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "registered {product}")?;
        self.registered.push(product.to_string());
        debug!(count = self.registered.len(), "id card registered");
        Ok(())
    }
}

pub fn demo(config: &FactoryMethodConfig, out: &mut dyn Write) -> Result<()> {
    let mut factory = IdCardFactory::new();
    run_with(&mut factory, &config.owners, out)
}

fn run_with(factory: &mut dyn Factory, owners: &[String], out: &mut dyn Write) -> Result<()> {
    for owner in owners {
        let card = factory.create(owner, out)?;
        card.use_product(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_issues_then_registers() {
        let mut factory = IdCardFactory::new();
        let mut out = Vec::new();
        let card = factory.create("Alice", &mut out).unwrap();

        assert_eq!(card.to_string(), "[IDCard: Alice]");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Issue Alice's card\nregistered [IDCard: Alice]\n"
        );
    }

    #[test]
    fn test_create_product_alone_skips_registry() {
        let mut factory = IdCardFactory::new();
        let mut out = Vec::new();
        factory.create_product("Bob", &mut out).unwrap();
        assert!(factory.registered().is_empty());
    }

    #[test]
    fn test_registry_tracks_owners() {
        let mut factory = IdCardFactory::new();
        let mut sink = std::io::sink();
        factory.create("Alice", &mut sink).unwrap();
        factory.create("Bob", &mut sink).unwrap();
        assert_eq!(factory.registered(), ["[IDCard: Alice]", "[IDCard: Bob]"]);
    }

    #[test]
    fn test_demo_output() {
        let config = FactoryMethodConfig {
            owners: vec!["Alice".into(), "Bob".into()],
        };
        let mut out = Vec::new();
        demo(&config, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Issue Alice's card\nregistered [IDCard: Alice]\nUse Alice's card\n\
             Issue Bob's card\nregistered [IDCard: Bob]\nUse Bob's card\n"
        );
    }
}
