//! Shared, replaceable dictionary for long-running callers.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{info, warn};

use notam_model::AbbreviationMapping;

use crate::builder::{BuildOptions, BuildReport};
use crate::error::DictionaryError;
use crate::loader::load_dictionary;

/// Holds the current mapping behind an `Arc`.
///
/// Readers clone the `Arc` and keep using that snapshot for the whole request;
/// a reload swaps the pointer, so nobody observes a partially built mapping.
#[derive(Debug, Default)]
pub struct DictionaryHandle {
    current: RwLock<Arc<AbbreviationMapping>>,
}

impl DictionaryHandle {
    pub fn new(mapping: AbbreviationMapping) -> Self {
        Self {
            current: RwLock::new(Arc::new(mapping)),
        }
    }

    /// Snapshot of the current mapping.
    pub fn current(&self) -> Arc<AbbreviationMapping> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Swap in a new mapping, returning the previous one.
    pub fn replace(&self, mapping: AbbreviationMapping) -> Arc<AbbreviationMapping> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(mapping))
    }

    /// Rebuild from a file. The current mapping is kept if loading fails.
    pub fn reload(&self, path: &Path, options: BuildOptions) -> Result<BuildReport, DictionaryError> {
        match load_dictionary(path, options) {
            Ok(loaded) => {
                self.replace(loaded.mapping);
                info!(path = %path.display(), entries = loaded.report.entries, "dictionary reloaded");
                Ok(loaded.report)
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "dictionary reload failed; keeping previous mapping");
                Err(error)
            }
        }
    }
}
