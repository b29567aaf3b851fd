//! Reading and parsing the spec and data documents.

use std::fs;
use std::io::Read;

use camino::Utf8Path;
use contour::{Engine, Map, ProjectionSpec, Value};
use tracing::debug;

use crate::errors::AppError;

/// Path argument that selects standard input.
pub(crate) const STDIN_MARKER: &str = "-";

/// Syntax of a document, chosen from its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub(crate) fn for_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(extension)
                if extension.eq_ignore_ascii_case("yaml") || extension.eq_ignore_ascii_case("yml") =>
            {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

pub(crate) fn is_stdin(path: &Utf8Path) -> bool {
    path.as_str() == STDIN_MARKER
}

/// Reads a document from `path`, or from `stdin` for the `-` marker.
pub(crate) fn read_document<R: Read>(path: &Utf8Path, stdin: &mut R) -> Result<String, AppError> {
    let read_failure = |source| AppError::ReadInput {
        path: path.to_owned(),
        source,
    };
    if is_stdin(path) {
        let mut text = String::new();
        stdin.read_to_string(&mut text).map_err(read_failure)?;
        Ok(text)
    } else {
        fs::read_to_string(path).map_err(read_failure)
    }
}

/// Compiles a spec document with the engine's function registry.
pub(crate) fn compile_spec(
    engine: &Engine,
    path: &Utf8Path,
    text: &str,
) -> Result<ProjectionSpec, AppError> {
    let compiled = match DocumentFormat::for_path(path) {
        DocumentFormat::Json => engine.compile_json(text),
        DocumentFormat::Yaml => engine.compile_yaml(text),
    };
    compiled.map_err(|report| AppError::Spec {
        path: path.to_owned(),
        report,
    })
}

/// Parses a data document.
///
/// Objects become records, except that with `keyed` a top-level object is a
/// keyed collection whose entries are projected one by one.
pub(crate) fn parse_data(path: &Utf8Path, text: &str, keyed: bool) -> Result<Value, AppError> {
    let parse_failure = |message: String| AppError::ParseData {
        path: path.to_owned(),
        message,
    };
    let document: serde_json::Value = match DocumentFormat::for_path(path) {
        DocumentFormat::Json => {
            serde_json::from_str(text).map_err(|error| parse_failure(error.to_string()))?
        }
        DocumentFormat::Yaml => {
            serde_saphyr::from_str(text).map_err(|error| parse_failure(error.to_string()))?
        }
    };
    debug!(%path, keyed, "parsed data document");
    match document {
        serde_json::Value::Object(entries) if keyed => Ok(Value::Map(
            entries
                .into_iter()
                .map(|(key, item)| (key, Value::from(item)))
                .collect::<Map>(),
        )),
        other => Ok(Value::from(other)),
    }
}
