use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::SkipReason;

/// One batch item that produced no output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedItem {
    pub name: String,
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Outcome of a batch run: written files and skipped items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub processed: Vec<PathBuf>,
    pub skipped: Vec<SkippedItem>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn processed_count(&self) -> usize {
        self.processed.len()
    }

    pub fn skip_count(&self) -> usize {
        self.skipped.len()
    }

    pub(crate) fn record_processed(&mut self, output: PathBuf) {
        tracing::debug!(path = %output.display(), "Wrote output");
        self.processed.push(output);
    }

    /// Record a skipped item and emit the notice for it.
    pub(crate) fn record_skip(&mut self, name: &str, path: &Path, reason: SkipReason) {
        tracing::warn!(name, path = %path.display(), "{reason}, skipping");
        self.skipped.push(SkippedItem {
            name: name.to_string(),
            path: path.to_path_buf(),
            reason,
        });
    }
}
