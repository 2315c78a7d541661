//! TOML settings for the vignettes.
//!
//! Every section is optional; a missing section or field falls back to the
//! literals the drivers have always used.
//!
//! ```toml
//! [iterator]
//! books = ["Around the World in 80 Days", "Bible"]
//!
//! [bridge]
//! message = "Hello, Japan"
//! repeat = 3
//! ```

use crate::error::{PatternError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub iterator: IteratorConfig,
    pub adapter: AdapterConfig,
    pub bridge: BridgeConfig,
    pub template_method: TemplateMethodConfig,
    pub factory_method: FactoryMethodConfig,
    pub abstract_factory: AbstractFactoryConfig,
    pub prototype: PrototypeConfig,
    pub strategy: StrategyConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct IteratorConfig {
    pub books: Vec<String>,
}

impl Default for IteratorConfig {
    fn default() -> Self {
        Self {
            books: vec!["book1".into(), "book2".into(), "book3".into()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdapterConfig {
    pub message: String,
    pub delegated_message: String,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            message: "Hello".into(),
            delegated_message: "Hello delegation".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct BridgeConfig {
    pub message: String,
    pub repeat: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            message: "Hello, World".into(),
            repeat: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TemplateMethodConfig {
    /// Text repeated between `<<` and `>>`.
    pub ch: String,
    pub message: String,
}

impl Default for TemplateMethodConfig {
    fn default() -> Self {
        Self {
            ch: "Hello".into(),
            message: "Hello".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FactoryMethodConfig {
    pub owners: Vec<String>,
}

impl Default for FactoryMethodConfig {
    fn default() -> Self {
        Self {
            owners: vec!["Alice".into(), "Bob".into(), "Carol".into()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AbstractFactoryConfig {
    /// Name passed to `abstract_factory::factory_for`.
    pub factory: String,
}

impl Default for AbstractFactoryConfig {
    fn default() -> Self {
        Self {
            factory: "list".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrototypeConfig {
    pub message: String,
}

impl Default for PrototypeConfig {
    fn default() -> Self {
        Self {
            message: "Hello".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StrategyConfig {
    pub seed: u64,
    pub rounds: u32,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            seed: 314,
            rounds: 100,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads `path` if given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .map_err(|err| PatternError::config_read(path, err))?;
                Self::from_toml_str(&content)
            }
            None => Ok(Self::default()),
        }
    }
}
