//! Command-line runtime for the Contour projection tool.
//!
//! `contour` reads a spec document and a data document, projects the data
//! through the spec, and writes the result to standard output as JSON.  The
//! runtime takes its arguments and IO streams as parameters so tests can
//! drive it without spawning a process.

use std::ffi::OsString;
use std::io::{Read, Write};
use std::process::ExitCode;

use clap::Parser;
use contour::{Engine, EngineConfig, Value};
use tracing::debug;

mod cli;
mod errors;
mod input;
pub mod telemetry;

use cli::Cli;
use errors::AppError;

/// Prefix for error messages written to standard error.
const ERROR_PREFIX: &str = "contour";

/// Runs the CLI using the provided arguments and IO handles.
///
/// Help and version requests are written to `stdout` and succeed.  Usage
/// errors exit with clap's status code; every other failure is reported on
/// `stderr` as `contour: <error>` and exits with status 1.
#[must_use]
pub fn run<I, R, W, E>(args: I, stdin: &mut R, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    R: Read,
    W: Write,
    E: Write,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(error) => return report_usage(&error, stdout, stderr),
    };

    match execute(&cli, stdin, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{ERROR_PREFIX}: {error}");
            for line in error.details() {
                let _ = writeln!(stderr, "  {line}");
            }
            ExitCode::FAILURE
        }
    }
}

fn report_usage<W: Write, E: Write>(error: &clap::Error, stdout: &mut W, stderr: &mut E) -> ExitCode {
    let rendered = error.render();
    if error.use_stderr() {
        let _ = write!(stderr, "{rendered}");
    } else {
        let _ = write!(stdout, "{rendered}");
    }
    ExitCode::from(u8::try_from(error.exit_code()).unwrap_or(1))
}

fn execute<R: Read, W: Write>(cli: &Cli, stdin: &mut R, stdout: &mut W) -> Result<(), AppError> {
    telemetry::initialise(&cli.log_filter, cli.log_format)?;
    if input::is_stdin(&cli.spec) && input::is_stdin(&cli.data) {
        return Err(AppError::StdinTwice);
    }

    let engine = Engine::new(EngineConfig::new(cli.max_depth));
    let spec_text = input::read_document(&cli.spec, stdin)?;
    let spec = input::compile_spec(&engine, &cli.spec, &spec_text)?;
    let data_text = input::read_document(&cli.data, stdin)?;
    let data = input::parse_data(&cli.data, &data_text, cli.keyed)?;

    let index = cli.index_mode();
    debug!(spec = %cli.spec, data = %cli.data, ?index, entries = spec.len(), "projecting");
    let output = engine.project(&data, Some(&spec), &index)?;
    emit(stdout, &output, cli.pretty)
}

fn emit<W: Write>(stdout: &mut W, output: &Value, pretty: bool) -> Result<(), AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    }
    .map_err(AppError::SerialiseOutput)?;
    writeln!(stdout, "{rendered}").map_err(AppError::WriteOutput)?;
    stdout.flush().map_err(AppError::WriteOutput)
}

#[cfg(test)]
mod tests;
