//! Text analysis for Kotoba.
//!
//! This module provides the core text analysis functionality: declarative
//! analyzer definitions, compilation into char filter / tokenizer / token
//! filter pipelines, and a cache of compiled pipelines.

pub mod analyzer;
pub mod cache;
pub mod char_filter;
pub mod compiler;
pub mod definition;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use cache::PipelineCache;
pub use compiler::compile;
pub use definition::{
    AnalyzerDefinition, CharFilterDefinition, TokenFilterDefinition, TokenizerDefinition,
};
pub use token::{Token, TokenStream};
