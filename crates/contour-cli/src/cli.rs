//! CLI argument definitions for the Contour tool.

use camino::Utf8PathBuf;
use clap::Parser;
use contour::{AttributePath, DEFAULT_MAX_DEPTH, IndexMode};

use crate::input::STDIN_MARKER;
use crate::telemetry::LogFormat;

/// Command-line interface for the Contour projection tool.
#[derive(Parser, Debug)]
#[command(
    name = "contour",
    version,
    about = "Projects JSON or YAML data through a declarative attribute spec"
)]
pub(crate) struct Cli {
    /// Spec document; `.yaml` and `.yml` files are YAML, others JSON.
    #[arg(long, value_name = "SPEC")]
    pub(crate) spec: Utf8PathBuf,
    /// Data document; `-` reads standard input.
    #[arg(long, value_name = "DATA", default_value = STDIN_MARKER)]
    pub(crate) data: Utf8PathBuf,
    /// Keys collection elements by the value at this attribute path.
    #[arg(long, value_name = "PATH", conflicts_with = "keep_keys")]
    pub(crate) index_by: Option<String>,
    /// Keys collection elements by their source key or position.
    #[arg(long)]
    pub(crate) keep_keys: bool,
    /// Treats a top-level object as a keyed collection instead of a record.
    #[arg(long)]
    pub(crate) keyed: bool,
    /// Maximum nesting depth of the spec.
    #[arg(long, value_name = "N", env = "CONTOUR_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub(crate) max_depth: usize,
    /// Pretty-prints the JSON output.
    #[arg(long)]
    pub(crate) pretty: bool,
    /// Tracing filter directives for diagnostics on standard error.
    #[arg(long, value_name = "FILTER", env = "CONTOUR_LOG_FILTER", default_value = "warn")]
    pub(crate) log_filter: String,
    /// Format of diagnostic log lines.
    #[arg(long, value_name = "FORMAT", env = "CONTOUR_LOG_FORMAT", default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
}

impl Cli {
    /// Returns the collection keying selected by the flags.
    pub(crate) fn index_mode(&self) -> IndexMode {
        if let Some(attribute) = &self.index_by {
            return IndexMode::Attribute(AttributePath::new(attribute.as_str()));
        }
        if self.keep_keys {
            IndexMode::SourceKey
        } else {
            IndexMode::Sequential
        }
    }
}
