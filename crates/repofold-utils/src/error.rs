use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Library-level error type for repofold operations.
///
/// The ingestion core is deliberately hard to fail: every per-file content
/// problem (binary data, decode failure, size overruns) degrades to a skip
/// record instead of an error. `RepofoldError` covers what remains — a
/// contract violation from the upstream clone collaborator, configuration
/// problems, and I/O at the CLI adapter edge.
///
/// Library code returns `RepofoldError` and does NOT call
/// `std::process::exit()`; use [`to_exit_code()`](Self::to_exit_code) at the
/// CLI boundary.
#[derive(Error, Debug)]
pub enum RepofoldError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The clone collaborator handed the pipeline an entry without a path.
    /// This is a contract violation and fails the whole run rather than
    /// silently dropping the entry.
    #[error("Malformed input entry at index {index}: entry has no path")]
    MalformedEntry { index: usize },

    #[error("Input path is not a directory: {path}")]
    NotADirectory { path: String },
}

impl RepofoldError {
    /// Map the error to the documented CLI exit code table.
    #[must_use]
    pub const fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Config(_) => ExitCode::CLI_ARGS,
            Self::MalformedEntry { .. } => ExitCode::MALFORMED_INPUT,
            Self::Io(_) | Self::NotADirectory { .. } => ExitCode::INTERNAL,
        }
    }
}

/// Configuration file and value errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_entry_maps_to_malformed_input_exit_code() {
        let err = RepofoldError::MalformedEntry { index: 3 };
        assert_eq!(err.to_exit_code(), ExitCode::MALFORMED_INPUT);
        assert!(err.to_string().contains("index 3"));
    }

    #[test]
    fn config_error_maps_to_cli_args_exit_code() {
        let err = RepofoldError::Config(ConfigError::InvalidValue {
            key: "limits.per_file_bytes".to_string(),
            value: "0".to_string(),
        });
        assert_eq!(err.to_exit_code(), ExitCode::CLI_ARGS);
    }
}
