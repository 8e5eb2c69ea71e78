//! # Shipreg CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file only
//! invokes `cli::run()` and turns errors into exit codes.
//!
//! | Exit code | Meaning |
//! |-----------|---------|
//! | 0 | success |
//! | 1 | storage or configuration failure |
//! | 2 | rejected request (validation failure or malformed input) |
//! | 3 | ship not found |

mod cli;

use shipreg::error::ShipError;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        let code = match &e {
            ShipError::NotFound(_) => 3,
            e if e.is_bad_request() => 2,
            _ => 1,
        };
        std::process::exit(code);
    }
}
