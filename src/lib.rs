//! # Kotoba
//!
//! A flexible text analysis library for Rust.
//!
//! ## Features
//!
//! - Declarative analyzer definitions (char filters, one tokenizer, token filters)
//! - A closed component catalog with validated parameters and JSON serialization
//! - Compiled, immutable, shareable analysis pipelines with caching
//! - Autocomplete expansion (shingles, n-grams, edge n-grams) with truncation
//! - Index-vs-query token comparison with matched-token annotation
//! - Built-in analyzer presets, including per-language stemming analyzers
//!
//! ## Quick start
//!
//! ```
//! use kotoba::analysis::definition::AnalyzerDefinition;
//! use kotoba::analysis::compiler::compile;
//! use kotoba::analysis::analyzer::token_texts;
//!
//! # fn main() -> kotoba::error::Result<()> {
//! let definition = AnalyzerDefinition::from_json(
//!     r#"{
//!         "tokenizer": { "type": "standard" },
//!         "tokenFilters": [{ "type": "lowercase" }]
//!     }"#,
//! )?;
//!
//! let analyzer = compile(&definition)?;
//! let tokens = token_texts(&analyzer, "Hello World")?;
//! assert_eq!(tokens, vec!["hello", "world"]);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod autocomplete;
pub mod cli;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod registry;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
