//! # Pattern Vignettes
//!
//! Small runnable demonstrations of the classic object-oriented design
//! patterns, one self-contained module per pattern.
//!
//! ## Creational
//! - [`abstract_factory`]: list and table page factories
//! - [`builder`]: one director, plain text and HTML builders
//! - [`factory_method`]: ID card factory
//! - [`prototype`]: copy registered products by name
//! - [`singleton`]: `OnceLock` accessor, a static ticket counter, a triple
//!
//! ## Structural
//! - [`adapter`]: banner adapted by wrapping and by delegation
//! - [`bridge`]: display functions and display implementations kept apart
//! - [`composite`]: file and directory entries
//!
//! ## Behavioral
//! - [`iterator`]: bookshelf cursor
//! - [`strategy`]: rock-paper-scissors players
//! - [`template_method`]: display skeleton
//!
//! Every module exposes a `demo` driver that writes to any `std::io::Write`.
//!
//! ```bash
//! cargo run -- list
//! cargo run -- run builder
//! cargo run -- all --config vignettes.toml
//! ```

pub mod abstract_factory;
pub mod adapter;
pub mod bridge;
pub mod builder;
pub mod catalog;
pub mod composite;
pub mod config;
pub mod error;
pub mod factory_method;
pub mod iterator;
pub mod logging;
pub mod prototype;
pub mod singleton;
pub mod strategy;
pub mod template_method;

pub use catalog::Pattern;
pub use config::DemoConfig;
pub use error::{PatternError, Result};
