//! Ignore-rule compilation and path exclusion.
//!
//! Candidate paths are tested against an ordered set of glob patterns
//! compiled once into a [`globset::GlobSet`] and reused for every path.
//! The policy is "matches any pattern ⇒ excluded"; negation rules are not
//! supported.
//!
//! Pattern semantics:
//! - `dir/**` excludes the directory and everything beneath it
//! - a leading `**/` matches at any depth
//! - a bare filename pattern (no separator) matches on basename at any
//!   depth

use globset::{Glob, GlobSet, GlobSetBuilder};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use repofold_utils::error::ConfigError;

/// Default exclusion patterns for imported repository trees: dependency
/// directories, VCS metadata, build output, lockfiles, logs, and caches.
///
/// The list is a deployment-time constant; overriding it requires a new
/// compiled [`IgnoreRules`], never in-place mutation mid-scan.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    // VCS / editor metadata
    ".git/**",
    ".github/**",
    ".gitlab/**",
    ".vscode/**",
    ".idea/**",
    // dependency directories, at any depth
    "**/node_modules/**",
    "**/bower_components/**",
    "**/vendor/**",
    "**/__pycache__/**",
    "**/.venv/**",
    // build output
    "**/dist/**",
    "**/build/**",
    "**/out/**",
    "**/target/**",
    "**/coverage/**",
    "**/.next/**",
    "**/.nuxt/**",
    "**/.cache/**",
    "**/.netlify/**",
    // lockfiles
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "**/*.lock",
    // logs and noise
    "**/*.log",
    "**/logs/**",
    "**/tmp/**",
    ".DS_Store",
    // bundled / generated frontend assets
    "**/*.min.js",
    "**/*.min.css",
    "**/*.map",
];

static DEFAULT_RULES: Lazy<IgnoreRules> = Lazy::new(|| {
    IgnoreRules::compile(DEFAULT_IGNORE_PATTERNS)
        .expect("default ignore patterns must be valid globs")
});

/// A compiled, immutable set of exclusion rules.
///
/// Compilation happens once; [`is_excluded`](Self::is_excluded) is a pure
/// function over the compiled set with no per-call recompilation.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    set: GlobSet,
    patterns: Vec<String>,
}

impl IgnoreRules {
    /// Compile an ordered pattern list into a reusable rule set.
    ///
    /// Bare filename patterns (no `/` and no `*`) are additionally compiled
    /// as `**/<name>` so they match on basename at any depth.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if any pattern is not a valid
    /// glob.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::with_capacity(patterns.len());

        for pattern in patterns {
            let pattern = pattern.as_ref();
            builder.add(parse_glob(pattern)?);
            if !pattern.contains('/') && !pattern.contains('*') {
                builder.add(parse_glob(&format!("**/{pattern}"))?);
            }
            kept.push(pattern.to_string());
        }

        let set = builder.build().map_err(|e| ConfigError::InvalidValue {
            key: "selectors.exclude".to_string(),
            value: format!("failed to compile pattern set: {e}"),
        })?;

        Ok(Self { set, patterns: kept })
    }

    /// Compiled rule set for [`DEFAULT_IGNORE_PATTERNS`].
    #[must_use]
    pub fn default_rules() -> Self {
        DEFAULT_RULES.clone()
    }

    /// Test a relative, forward-slash path against the rule set.
    ///
    /// Pure; a path is excluded iff it matches any pattern.
    #[must_use]
    pub fn is_excluded(&self, path: &str) -> bool {
        self.set.is_match(path)
    }

    /// The source patterns this set was compiled from.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}

impl Default for IgnoreRules {
    fn default() -> Self {
        Self::default_rules()
    }
}

fn parse_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidValue {
        key: "selectors.exclude".to_string(),
        value: format!("invalid glob pattern '{pattern}': {e}"),
    })
}

/// Exclusion configuration as it appears in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Selectors {
    /// Glob patterns for paths to exclude from the import.
    pub exclude: Vec<String>,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            exclude: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl Selectors {
    /// Validate glob patterns without building the full set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending pattern.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for pattern in &self.exclude {
            parse_glob(pattern)?;
        }
        Ok(())
    }

    /// Compile the configured patterns into an [`IgnoreRules`] set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if any pattern is invalid.
    pub fn compile(&self) -> Result<IgnoreRules, ConfigError> {
        IgnoreRules::compile(&self.exclude)
    }
}
