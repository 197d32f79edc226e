//! Caching of compiled analysis pipelines.
//!
//! Compiling a definition allocates regexes, automata and stemmer tables,
//! so repeated requests with the same definition should not pay that cost
//! twice. [`PipelineCache`] keys compiled pipelines by the definition's
//! structural equality: two definitions with identical content share one
//! compiled pipeline, whatever their JSON formatting looked like.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::compiler::compile;
use crate::analysis::definition::AnalyzerDefinition;
use crate::error::Result;

/// A thread-safe cache of compiled pipelines keyed by definition.
///
/// Reads take a shared lock; a miss compiles outside any lock and then
/// re-checks under the write lock, so two threads racing on the same
/// definition may both compile but only one result is kept. Compilation
/// failures are never cached.
#[derive(Default)]
pub struct PipelineCache {
    pipelines: RwLock<AHashMap<AnalyzerDefinition, Arc<PipelineAnalyzer>>>,
}

impl PipelineCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached pipeline for a definition, compiling it on a miss.
    pub fn get_or_compile(&self, definition: &AnalyzerDefinition) -> Result<Arc<PipelineAnalyzer>> {
        if let Some(pipeline) = self.pipelines.read().get(definition) {
            return Ok(Arc::clone(pipeline));
        }

        let compiled = Arc::new(compile(definition)?);
        log::debug!(
            "compiled pipeline: {} char filters, {} token filters",
            definition.char_filters.len(),
            definition.token_filters.len()
        );

        let mut pipelines = self.pipelines.write();
        let entry = pipelines
            .entry(definition.clone())
            .or_insert_with(|| Arc::clone(&compiled));
        Ok(Arc::clone(entry))
    }

    /// Number of cached pipelines.
    pub fn len(&self) -> usize {
        self.pipelines.read().len()
    }

    /// True when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.pipelines.read().is_empty()
    }

    /// Drop every cached pipeline.
    pub fn clear(&self) {
        self.pipelines.write().clear();
    }
}
