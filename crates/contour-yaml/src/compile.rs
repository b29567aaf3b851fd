//! Compilation of parsed spec documents into projection specs.

use contour_core::{
    Diagnostic, DiagnosticCode, DiagnosticReport, FunctionRegistry, ProjectionSpec, SpecEntry,
    SpecError, child_pointer,
};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing::debug;

/// Mapping key that marks a computed entry.
pub const FUNCTION_KEY: &str = "$fn";

/// Compiles a parsed document into a projection spec.
///
/// Every problem in the document is reported; compilation does not stop at
/// the first one.
///
/// # Errors
///
/// Returns a report listing each invalid node, located by JSON pointer.
///
/// # Example
///
/// ```
/// use contour_core::{DiagnosticCode, FunctionRegistry};
/// use serde_json::json;
///
/// let report = contour_yaml::compile(&json!({"total": {"$fn": "sum"}}), &FunctionRegistry::new())
///     .expect_err("sum is not registered");
/// assert_eq!(report.diagnostics()[0].code(), DiagnosticCode::EContourUnknownFunction);
/// ```
pub fn compile(
    document: &JsonValue,
    registry: &FunctionRegistry,
) -> Result<ProjectionSpec, DiagnosticReport> {
    let mut compiler = Compiler {
        registry,
        diagnostics: Vec::new(),
    };
    let spec = compiler.spec(document, "");
    if compiler.diagnostics.is_empty() {
        debug!(entries = spec.len(), depth = spec.depth(), "compiled spec document");
        Ok(spec)
    } else {
        debug!(problems = compiler.diagnostics.len(), "spec document rejected");
        Err(DiagnosticReport::new(compiler.diagnostics))
    }
}

struct Compiler<'a> {
    registry: &'a FunctionRegistry,
    diagnostics: Vec<Diagnostic>,
}

impl Compiler<'_> {
    fn spec(&mut self, node: &JsonValue, pointer: &str) -> ProjectionSpec {
        match node {
            JsonValue::Object(entries) => entries
                .iter()
                .filter_map(|(key, value)| {
                    self.mapping_entry(key, value, &child_pointer(pointer, key))
                })
                .collect(),
            JsonValue::Array(items) => items
                .iter()
                .enumerate()
                .filter_map(|(position, item)| {
                    self.list_item(item, &child_pointer(pointer, &position.to_string()))
                })
                .collect(),
            other => {
                self.invalid(
                    pointer,
                    format!(
                        "projection spec must be a mapping or a list, found {}",
                        describe(other)
                    ),
                );
                ProjectionSpec::default()
            }
        }
    }

    fn mapping_entry(&mut self, key: &str, value: &JsonValue, pointer: &str) -> Option<SpecEntry> {
        match value {
            JsonValue::Bool(true) => self.accept(SpecEntry::parse(key), pointer),
            JsonValue::String(descriptor) => self.accept(SpecEntry::parse(descriptor), pointer),
            JsonValue::Object(fields) => {
                if let Some(function) = function_reference(fields) {
                    return self.computed(key, function, pointer);
                }
                let nested = self.spec(value, pointer);
                self.accept(SpecEntry::nested(key, nested), pointer)
            }
            other => {
                self.invalid(
                    pointer,
                    format!(
                        "unsupported descriptor {}; expected `true`, a descriptor string, or a mapping",
                        describe(other)
                    ),
                );
                None
            }
        }
    }

    fn list_item(&mut self, item: &JsonValue, pointer: &str) -> Option<SpecEntry> {
        match item {
            JsonValue::String(descriptor) => self.accept(SpecEntry::parse(descriptor), pointer),
            JsonValue::Object(fields) if fields.len() == 1 => {
                let (key, value) = fields.iter().next()?;
                self.mapping_entry(key, value, &child_pointer(pointer, key))
            }
            other => {
                self.invalid(
                    pointer,
                    format!(
                        "list items must be descriptor strings or single-entry mappings, found {}",
                        describe(other)
                    ),
                );
                None
            }
        }
    }

    fn computed(&mut self, key: &str, function: &JsonValue, pointer: &str) -> Option<SpecEntry> {
        let Some(name) = function.as_str() else {
            self.invalid(
                &child_pointer(pointer, FUNCTION_KEY),
                format!("`{FUNCTION_KEY}` must name a function, found {}", describe(function)),
            );
            return None;
        };
        let Some(computed) = self.registry.get(name) else {
            let known = self.registry.names().collect::<Vec<_>>().join(", ");
            self.diagnostics.push(Diagnostic::new(
                DiagnosticCode::EContourUnknownFunction,
                format!("unknown function '{name}'"),
                Some(pointer.to_owned()),
                vec![format!("registered functions: {known}")],
            ));
            return None;
        };
        self.accept(SpecEntry::computed(key, computed.clone()), pointer)
    }

    fn accept(&mut self, entry: Result<SpecEntry, SpecError>, pointer: &str) -> Option<SpecEntry> {
        match entry {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                self.diagnostics.push(error.to_diagnostic().at(pointer));
                None
            }
        }
    }

    fn invalid(&mut self, pointer: &str, message: String) {
        self.diagnostics.push(Diagnostic::new(
            DiagnosticCode::EContourSchemaInvalid,
            message,
            Some(pointer.to_owned()),
            vec![],
        ));
    }
}

/// Returns the `$fn` value when `fields` is exactly a function reference.
fn function_reference(fields: &JsonMap<String, JsonValue>) -> Option<&JsonValue> {
    if fields.len() == 1 {
        fields.get(FUNCTION_KEY)
    } else {
        None
    }
}

const fn describe(node: &JsonValue) -> &'static str {
    match node {
        JsonValue::Null => "null",
        JsonValue::Bool(true) => "`true`",
        JsonValue::Bool(false) => "`false`",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a list",
        JsonValue::Object(_) => "a mapping",
    }
}
