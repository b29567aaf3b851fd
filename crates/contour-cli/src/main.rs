//! CLI entrypoint for the Contour projection tool.
//!
//! The binary delegates to [`contour_cli::run`], which parses arguments,
//! reads the spec and data documents, and writes the projection as JSON.

use std::io::{self, StderrLock, StdinLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdin: StdinLock<'_> = io::stdin().lock();
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    contour_cli::run(std::env::args_os(), &mut stdin, &mut stdout, &mut stderr)
}
