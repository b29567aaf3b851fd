//! Diagnostic types for structured error reporting.
//!
//! Problems found while building a projection spec, whether from the
//! builder API or from a spec document, are surfaced through a
//! [`DiagnosticReport`] containing one or more [`Diagnostic`] entries.  Each
//! diagnostic carries a stable [`DiagnosticCode`], a human-readable message,
//! an optional pointer to the offending spec entry, and supplementary notes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable error codes for Contour diagnostics.
///
/// # Example
///
/// ```
/// use contour_core::DiagnosticCode;
///
/// let code = DiagnosticCode::EContourYamlParse;
/// assert_eq!(format!("{code}"), "E_CONTOUR_YAML_PARSE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum DiagnosticCode {
    /// YAML spec document parse failure.
    EContourYamlParse,
    /// JSON spec document parse failure.
    EContourJsonParse,
    /// A spec document node has an unsupported shape.
    EContourSchemaInvalid,
    /// A descriptor names no attribute path.
    EContourEmptyPath,
    /// A `$fn` descriptor names an unregistered function.
    EContourUnknownFunction,
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EContourYamlParse => f.write_str("E_CONTOUR_YAML_PARSE"),
            Self::EContourJsonParse => f.write_str("E_CONTOUR_JSON_PARSE"),
            Self::EContourSchemaInvalid => f.write_str("E_CONTOUR_SCHEMA_INVALID"),
            Self::EContourEmptyPath => f.write_str("E_CONTOUR_EMPTY_PATH"),
            Self::EContourUnknownFunction => f.write_str("E_CONTOUR_UNKNOWN_FUNCTION"),
        }
    }
}

/// A single diagnostic entry within a report.
///
/// The pointer locates the offending entry inside a spec document using
/// JSON-pointer syntax (`/address/zip as postal`); the empty string is the
/// document root.
///
/// # Example
///
/// ```
/// use contour_core::{Diagnostic, DiagnosticCode};
///
/// let diag = Diagnostic::new(
///     DiagnosticCode::EContourEmptyPath,
///     String::from("descriptor is empty"),
///     Some(String::from("/name")),
///     vec![],
/// );
/// assert_eq!(diag.pointer(), Some("/name"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The stable error code.
    code: DiagnosticCode,
    /// A human-readable description of the problem.
    message: String,
    /// Location of the offending entry, if known.
    pointer: Option<String>,
    /// Additional notes providing context or suggestions.
    notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub const fn new(
        code: DiagnosticCode,
        message: String,
        pointer: Option<String>,
        notes: Vec<String>,
    ) -> Self {
        Self {
            code,
            message,
            pointer,
            notes,
        }
    }

    /// Returns the diagnostic code.
    #[must_use]
    pub const fn code(&self) -> DiagnosticCode {
        self.code
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the entry pointer, if available.
    #[must_use]
    pub fn pointer(&self) -> Option<&str> {
        self.pointer.as_deref()
    }

    /// Returns the supplementary notes.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Returns the diagnostic relocated under `pointer`.
    #[must_use]
    pub fn at(mut self, pointer: impl Into<String>) -> Self {
        self.pointer = Some(pointer.into());
        self
    }
}

/// Summarises the first diagnostic in a report for the `Display` impl.
fn diagnostic_summary(diagnostics: &[Diagnostic]) -> String {
    diagnostics.first().map_or_else(
        || String::from("empty diagnostic report"),
        |d| match d.pointer.as_deref() {
            Some(pointer) if !pointer.is_empty() => {
                format!("{}: {} (at {pointer})", d.code, d.message)
            }
            _ => format!("{}: {}", d.code, d.message),
        },
    )
}

/// A collection of diagnostics produced while building a spec.
///
/// # Example
///
/// ```
/// use contour_core::{Diagnostic, DiagnosticCode, DiagnosticReport};
///
/// let report = DiagnosticReport::single(Diagnostic::new(
///     DiagnosticCode::EContourSchemaInvalid,
///     String::from("spec must be a mapping or a list"),
///     None,
///     vec![],
/// ));
/// assert_eq!(report.len(), 1);
/// assert!(format!("{report}").starts_with("E_CONTOUR_SCHEMA_INVALID"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[error("{}", diagnostic_summary(&self.diagnostics))]
pub struct DiagnosticReport {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticReport {
    /// Creates a report from a vector of diagnostics.
    #[must_use]
    pub const fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Creates a report holding one diagnostic.
    #[must_use]
    pub fn single(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }

    /// Returns the diagnostics in this report.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if the report contains no diagnostics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns the number of diagnostics in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }
}

/// Appends `key` to a JSON-pointer style location.
///
/// `~` and `/` inside `key` are escaped as `~0` and `~1`.
///
/// # Example
///
/// ```
/// use contour_core::child_pointer;
///
/// assert_eq!(child_pointer("/address", "zip as postal"), "/address/zip as postal");
/// assert_eq!(child_pointer("", "a/b"), "/a~1b");
/// ```
#[must_use]
pub fn child_pointer(parent: &str, key: &str) -> String {
    let escaped = key.replace('~', "~0").replace('/', "~1");
    format!("{parent}/{escaped}")
}
