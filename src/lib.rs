//! repofold - Fold a cloned repository tree into one text-safe artifact
//!
//! repofold ingests a repository tree (raw file bytes plus a declared
//! encoding per path) and produces a single size-bounded artifact string
//! suitable for embedding in a transcript or prompt, alongside an auditable
//! record of every path that was left out and why.
//!
//! repofold can be used in two ways:
//! - **CLI**: run `repofold <dir>` against a local checkout
//! - **Library**: feed [`RawEntry`] values from your own clone layer into
//!   an [`ImportPipeline`]
//!
//! # Quick Start (CLI)
//!
//! ```bash
//! # Fold the current checkout into an artifact on stdout
//! repofold .
//!
//! # Write the artifact to a file and print a JSON run summary
//! repofold . --output context.txt --json
//! ```
//!
//! # Quick Start (Library)
//!
//! ```no_run
//! use repofold::{ImportPipeline, RawEntry, DeclaredEncoding};
//!
//! let entries = vec![
//!     RawEntry::new("README.md", b"# hello".to_vec(), DeclaredEncoding::Utf8),
//! ];
//! let pipeline = ImportPipeline::new();
//! let result = pipeline.run(entries, "acme/project", "the chat")?;
//! println!("{}", result.artifact());
//! # Ok::<(), repofold_utils::error::RepofoldError>(())
//! ```
//!
//! # Pipeline stages
//!
//! Per entry, in order: glob exclusion, binary/text classification with
//! strict UTF-8 decoding, per-file and aggregate budget admission. Every
//! rejection lands in the skip ledger with one of five reasons
//! (`filtered`, `binary`, `decode-error`, `too-large`, `budget-exceeded`);
//! rejections never abort a run.

pub mod cli;
pub mod loader;

pub use repofold_config::{Config, ConfigBuilder, DEFAULT_PER_FILE_BYTES, DEFAULT_TOTAL_BYTES};
pub use repofold_packet::{ImportArtifact, ImportPipeline, escape_content, unescape_content};
pub use repofold_selectors::{DEFAULT_IGNORE_PATTERNS, IgnoreRules};
pub use repofold_utils::error::{ConfigError, RepofoldError};
pub use repofold_utils::exit_codes::ExitCode;
pub use repofold_utils::types::{DeclaredEncoding, RawEntry, SkipReason, SkipRecord};
