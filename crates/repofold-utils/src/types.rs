use serde::{Deserialize, Serialize};

/// Encoding declared by the clone collaborator for a raw file entry.
///
/// The clone layer hands the pipeline raw bytes plus whatever it knows about
/// their encoding. The pipeline treats this as a hint, not ground truth: the
/// text-extension allowlist can override a `Binary` declaration, and an
/// `Unknown` declaration triggers a decode attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclaredEncoding {
    /// Content is declared to already be valid UTF-8.
    Utf8,
    /// Content is declared to be raw binary bytes.
    Binary,
    /// The clone layer made no determination.
    Unknown,
}

/// One file handed to the pipeline by the clone collaborator.
///
/// Paths are relative and use forward-slash separators. Entries are
/// immutable; the pipeline consumes them by value so decoded content can
/// reuse the byte buffer without copying.
#[derive(Debug, Clone)]
pub struct RawEntry {
    /// Relative, forward-slash path inside the cloned tree.
    pub path: String,
    /// Raw file bytes as retrieved by the clone layer.
    pub bytes: Vec<u8>,
    /// Declared encoding hint for `bytes`.
    pub encoding: DeclaredEncoding,
}

impl RawEntry {
    #[must_use]
    pub fn new(path: impl Into<String>, bytes: Vec<u8>, encoding: DeclaredEncoding) -> Self {
        Self {
            path: path.into(),
            bytes,
            encoding,
        }
    }
}

/// Why a path was left out of the artifact.
///
/// All five reasons are policy outcomes rather than errors: each one
/// degrades to a [`SkipRecord`] and the run continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// Excluded by the ignore-rule set before any content inspection.
    Filtered,
    /// Classified as non-text content; no decode was attempted.
    Binary,
    /// Declared-text bytes failed to decode into representable text.
    DecodeError,
    /// A single file exceeded the per-file size ceiling.
    TooLarge,
    /// Admitting the file would push the aggregate past the total ceiling.
    BudgetExceeded,
}

impl SkipReason {
    /// Canonical kebab-case name used in skip summaries and logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Filtered => "filtered",
            Self::Binary => "binary",
            Self::DecodeError => "decode-error",
            Self::TooLarge => "too-large",
            Self::BudgetExceeded => "budget-exceeded",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rejected path with a human-readable explanation.
///
/// Records are append-only and keep the order in which rejections were
/// encountered during the scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipRecord {
    pub path: String,
    pub reason: SkipReason,
    /// Human-readable detail, e.g. the computed size for `too-large`.
    pub detail: String,
}

impl SkipRecord {
    #[must_use]
    pub fn new(path: impl Into<String>, reason: SkipReason, detail: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason,
            detail: detail.into(),
        }
    }
}
