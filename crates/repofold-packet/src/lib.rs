//! Ingestion pipeline core for repofold.
//!
//! This crate turns a cloned repository tree (a sequence of raw file
//! entries) into one size-bounded, text-safe artifact string, plus an
//! auditable record of everything that was left out and why.
//!
//! Stages, in order per entry: path exclusion ([`repofold_selectors`]),
//! binary/text classification ([`classify`]), budget admission
//! ([`budget`]); rejections accumulate in the [`ledger`], acceptances in an
//! ordered admitted list, and [`render`] serializes both once at the end.

mod budget;
mod builder;
mod classify;
mod escape;
mod ledger;
mod model;
mod render;

use repofold_utils::types::SkipRecord;

/// The result of one import run.
///
/// Ownership is transient: the pipeline produces one `ImportArtifact` per
/// run and holds no reference after returning.
#[derive(Debug, Clone)]
pub struct ImportArtifact {
    /// The serialized artifact text, ready to embed in a transcript.
    pub artifact: String,
    /// BLAKE3 hash of the artifact content, for auditability.
    pub blake3_hash: String,
    /// Paths admitted into the artifact, in admission order. Handed to the
    /// command-detection collaborator so it can scan only decoded text
    /// files.
    pub admitted_paths: Vec<String>,
    /// Every rejected path with its reason, in rejection order.
    pub skipped: Vec<SkipRecord>,
    /// Total decoded bytes admitted; never exceeds the aggregate ceiling.
    pub admitted_bytes: usize,
}

impl ImportArtifact {
    /// The serialized artifact text.
    #[must_use]
    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    /// BLAKE3 hash of the artifact text.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.blake3_hash
    }

    /// True if nothing was skipped during the run.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

pub use budget::{Admission, BudgetState};
pub use builder::ImportPipeline;
pub use classify::{TEXT_EXTENSIONS, TEXT_FILENAMES, classify};
pub use escape::{escape_content, unescape_content};
pub use ledger::SkipLedger;
pub use model::ClassifiedEntry;
pub use render::render_artifact;
