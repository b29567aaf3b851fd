//! Error types for the CLI runtime.

use std::io;

use camino::Utf8PathBuf;
use contour::{DiagnosticReport, ProjectionError};
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("the spec and the data cannot both be read from standard input")]
    StdinTwice,
    #[error("failed to read {path}: {source}")]
    ReadInput { path: Utf8PathBuf, source: io::Error },
    #[error("failed to parse data {path}: {message}")]
    ParseData { path: Utf8PathBuf, message: String },
    #[error("invalid spec {path}: {report}")]
    Spec {
        path: Utf8PathBuf,
        report: DiagnosticReport,
    },
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(serde_json::Error),
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

impl AppError {
    /// Returns follow-up lines describing the error in more detail.
    pub(crate) fn details(&self) -> Vec<String> {
        let Self::Spec { report, .. } = self else {
            return Vec::new();
        };
        let mut lines = Vec::new();
        for (position, diagnostic) in report.diagnostics().iter().enumerate() {
            if position > 0 {
                let location = diagnostic
                    .pointer()
                    .filter(|pointer| !pointer.is_empty())
                    .map(|pointer| format!(" (at {pointer})"))
                    .unwrap_or_default();
                lines.push(format!(
                    "{}: {}{location}",
                    diagnostic.code(),
                    diagnostic.message()
                ));
            }
            lines.extend(diagnostic.notes().iter().map(|note| format!("note: {note}")));
        }
        lines
    }
}
