//! Text front ends for spec documents.

use contour_core::{Diagnostic, DiagnosticCode, DiagnosticReport, FunctionRegistry, ProjectionSpec};

use crate::compile::compile;

/// Parses and compiles a YAML spec document.
///
/// # Errors
///
/// Returns a report with [`DiagnosticCode::EContourYamlParse`] when the text
/// is not valid YAML, or the compilation diagnostics otherwise.
pub fn parse_yaml(text: &str, registry: &FunctionRegistry) -> Result<ProjectionSpec, DiagnosticReport> {
    let document: serde_json::Value = serde_saphyr::from_str(text).map_err(|error| {
        DiagnosticReport::single(Diagnostic::new(
            DiagnosticCode::EContourYamlParse,
            format!("invalid YAML spec document: {error}"),
            None,
            vec![],
        ))
    })?;
    compile(&document, registry)
}

/// Parses and compiles a JSON spec document.
///
/// Object key order is preserved, so output keys follow the document.
///
/// # Errors
///
/// Returns a report with [`DiagnosticCode::EContourJsonParse`] when the text
/// is not valid JSON, or the compilation diagnostics otherwise.
///
/// # Example
///
/// ```
/// use contour_core::{FunctionRegistry, Target};
///
/// let spec = contour_yaml::parse_json(r#"{"b": true, "a": true}"#, &FunctionRegistry::new())
///     .expect("valid document");
/// let targets: Vec<&Target> = spec.entries().iter().map(|entry| entry.target()).collect();
/// assert_eq!(targets, [&Target::Key("b".into()), &Target::Key("a".into())]);
/// ```
pub fn parse_json(text: &str, registry: &FunctionRegistry) -> Result<ProjectionSpec, DiagnosticReport> {
    let document: serde_json::Value = serde_json::from_str(text).map_err(|error| {
        DiagnosticReport::single(Diagnostic::new(
            DiagnosticCode::EContourJsonParse,
            format!("invalid JSON spec document: {error}"),
            None,
            vec![format!("line {}, column {}", error.line(), error.column())],
        ))
    })?;
    compile(&document, registry)
}
