//! Binary entrypoint for repofold.
//!
//! Deliberately empty of logic: everything lives in the library so it can
//! be embedded and tested without a process boundary.

fn main() {
    // All user-facing output, including error reporting, happens inside
    // cli::run(); the only job left here is turning its exit code into a
    // process exit.
    if let Err(code) = repofold::cli::run() {
        std::process::exit(code.as_i32());
    }
}
