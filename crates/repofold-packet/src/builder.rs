//! Pipeline orchestration: one pass over the raw entries, in order.

use repofold_config::{Config, Limits};
use repofold_selectors::IgnoreRules;
use repofold_utils::error::RepofoldError;
use repofold_utils::types::{RawEntry, SkipReason};

use crate::ImportArtifact;
use crate::budget::{Admission, BudgetState};
use crate::classify::classify;
use crate::ledger::SkipLedger;
use crate::model::ClassifiedEntry;
use crate::render::render_artifact;

/// Orchestrates filter, classification, budget, and serialization for one
/// repository import.
///
/// The pipeline itself is immutable and reusable; all per-run state (the
/// budget, the ledger, the admitted list) lives inside [`run`](Self::run),
/// so a single pipeline can serve sequential or concurrent runs.
#[derive(Debug, Clone)]
pub struct ImportPipeline {
    rules: IgnoreRules,
    limits: Limits,
}

impl ImportPipeline {
    /// Pipeline with the default ignore rules and default size limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: IgnoreRules::default_rules(),
            limits: Limits::default(),
        }
    }

    /// Pipeline configured from a validated [`Config`].
    ///
    /// Fails if the configured exclusion patterns do not compile.
    pub fn with_config(config: &Config) -> Result<Self, RepofoldError> {
        Ok(Self {
            rules: config.selectors.compile()?,
            limits: config.limits,
        })
    }

    /// The exclusion rules this pipeline applies.
    #[must_use]
    pub fn rules(&self) -> &IgnoreRules {
        &self.rules
    }

    /// Run the pipeline over `entries`, in input order.
    ///
    /// Per-path skips never abort the run; they land in the returned skip
    /// list. Only structural problems (an entry with an empty path) fail
    /// the whole run.
    pub fn run(
        &self,
        entries: Vec<RawEntry>,
        source: &str,
        destination: &str,
    ) -> Result<ImportArtifact, RepofoldError> {
        let mut budget = BudgetState::new(
            self.limits.per_file_bytes,
            self.limits.total_bytes,
        );
        let mut ledger = SkipLedger::new();
        let mut admitted: Vec<ClassifiedEntry> = Vec::new();

        for (index, entry) in entries.into_iter().enumerate() {
            if entry.path.is_empty() {
                return Err(RepofoldError::MalformedEntry { index });
            }

            if self.rules.is_excluded(&entry.path) {
                tracing::debug!(path = %entry.path, "excluded by ignore rules");
                ledger.record(entry.path, SkipReason::Filtered, "excluded by ignore rules");
                continue;
            }

            let classified = match classify(entry) {
                Ok(classified) => classified,
                Err(skip) => {
                    tracing::debug!(path = %skip.path, reason = %skip.reason, "skipped");
                    ledger.push(skip);
                    continue;
                }
            };

            match budget.try_admit(classified.byte_len()) {
                Admission::Admitted => admitted.push(classified),
                Admission::TooLarge { size, .. } => {
                    ledger.record(
                        classified.path,
                        SkipReason::TooLarge,
                        format!("file too large: {} KiB", kib(size)),
                    );
                }
                Admission::BudgetExceeded { remaining, .. } => {
                    ledger.record(
                        classified.path,
                        SkipReason::BudgetExceeded,
                        format!("total size budget exceeded ({} KiB remaining)", kib(remaining)),
                    );
                }
            }
        }

        let skipped = ledger.into_records();
        let artifact = render_artifact(&admitted, &skipped, source, destination);
        let blake3_hash = blake3::hash(artifact.as_bytes()).to_hex().to_string();

        tracing::info!(
            source,
            admitted = admitted.len(),
            skipped = skipped.len(),
            admitted_bytes = budget.admitted_bytes(),
            "import complete"
        );

        Ok(ImportArtifact {
            artifact,
            blake3_hash,
            admitted_paths: admitted.into_iter().map(|e| e.path).collect(),
            skipped,
            admitted_bytes: budget.admitted_bytes(),
        })
    }
}

impl Default for ImportPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Rounded-up KiB for human-readable skip details.
const fn kib(bytes: usize) -> usize {
    bytes.div_ceil(1024)
}
