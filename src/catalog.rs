//! The list of vignettes and the dispatcher that runs them.

use crate::config::DemoConfig;
use crate::error::Result;
use crate::{
    abstract_factory, adapter, bridge, builder, composite, factory_method, iterator, prototype,
    singleton, strategy, template_method,
};
use clap::ValueEnum;
use std::fmt;
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    AbstractFactory,
    Adapter,
    Bridge,
    Builder,
    Composite,
    FactoryMethod,
    Iterator,
    Prototype,
    Singleton,
    Strategy,
    TemplateMethod,
}

impl Pattern {
    pub const ALL: [Pattern; 11] = [
        Pattern::AbstractFactory,
        Pattern::Adapter,
        Pattern::Bridge,
        Pattern::Builder,
        Pattern::Composite,
        Pattern::FactoryMethod,
        Pattern::Iterator,
        Pattern::Prototype,
        Pattern::Singleton,
        Pattern::Strategy,
        Pattern::TemplateMethod,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Pattern::AbstractFactory => "Abstract Factory",
            Pattern::Adapter => "Adapter",
            Pattern::Bridge => "Bridge",
            Pattern::Builder => "Builder",
            Pattern::Composite => "Composite",
            Pattern::FactoryMethod => "Factory Method",
            Pattern::Iterator => "Iterator",
            Pattern::Prototype => "Prototype",
            Pattern::Singleton => "Singleton",
            Pattern::Strategy => "Strategy",
            Pattern::TemplateMethod => "Template Method",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Pattern::AbstractFactory => "swap a whole family of related parts at once",
            Pattern::Adapter => "fit an existing type to the interface callers expect",
            Pattern::Bridge => "vary what a type does and how it does it independently",
            Pattern::Builder => "assemble a document step by step, format chosen later",
            Pattern::Composite => "treat containers and their contents alike",
            Pattern::FactoryMethod => "fix the creation recipe, defer the product",
            Pattern::Iterator => "walk a collection through a cursor",
            Pattern::Prototype => "create new objects by copying registered ones",
            Pattern::Singleton => "one shared instance behind an accessor",
            Pattern::Strategy => "swap the algorithm a player uses",
            Pattern::TemplateMethod => "fix the skeleton, let implementors fill the steps",
        }
    }

    /// Runs the vignette, writing its output to `out`.
    pub fn run(self, config: &DemoConfig, out: &mut dyn Write) -> Result<()> {
        info!(pattern = self.title(), "running vignette");
        match self {
            Pattern::AbstractFactory => abstract_factory::demo(&config.abstract_factory, out),
            Pattern::Adapter => adapter::demo(&config.adapter, out),
            Pattern::Bridge => bridge::demo(&config.bridge, out),
            Pattern::Builder => builder::demo(out),
            Pattern::Composite => composite::demo(out),
            Pattern::FactoryMethod => factory_method::demo(&config.factory_method, out),
            Pattern::Iterator => iterator::demo(&config.iterator, out),
            Pattern::Prototype => prototype::demo(&config.prototype, out),
            Pattern::Singleton => singleton::demo(out),
            Pattern::Strategy => strategy::demo(&config.strategy, out),
            Pattern::TemplateMethod => template_method::demo(&config.template_method, out),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_cli_variants() {
        assert_eq!(Pattern::ALL.as_slice(), Pattern::value_variants());
    }

    #[test]
    fn test_cli_names_are_kebab_case() {
        let name = Pattern::TemplateMethod
            .to_possible_value()
            .map(|value| value.get_name().to_string());
        assert_eq!(name.as_deref(), Some("template-method"));
        assert_eq!(
            Pattern::from_str("factory-method", false),
            Ok(Pattern::FactoryMethod)
        );
    }

    #[test]
    fn test_every_pattern_runs_with_defaults() {
        let config = DemoConfig::default();
        for pattern in Pattern::ALL {
            let mut out = Vec::new();
            pattern.run(&config, &mut out).unwrap();
            assert!(!out.is_empty(), "{pattern} wrote nothing");
        }
    }
}
