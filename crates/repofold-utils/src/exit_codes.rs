//! Exit code constants for the repofold CLI.
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Import completed successfully |
//! | 1 | `INTERNAL` | General/internal failure |
//! | 2 | `CLI_ARGS` | Invalid CLI arguments or configuration |
//! | 3 | `MALFORMED_INPUT` | Upstream handed the pipeline a malformed entry |

/// Exit codes matching the documented exit code table.
///
/// The numeric values are part of the public CLI contract and will not
/// change within a release line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - import completed successfully
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// General or internal failure
    pub const INTERNAL: ExitCode = ExitCode(1);

    /// Invalid or missing command-line arguments / configuration
    pub const CLI_ARGS: ExitCode = ExitCode(2);

    /// Contract violation in the input entry set
    pub const MALFORMED_INPUT: ExitCode = ExitCode(3);

    /// Numeric value for `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
