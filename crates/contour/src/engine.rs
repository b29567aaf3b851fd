//! The projection engine entrypoint.
//!
//! The [`Engine`] owns the structural limits and the function registry used
//! when compiling spec documents.  Projection itself is a pure function of
//! the data and the spec, so one engine can be shared across threads.

use contour_core::{DiagnosticReport, EngineConfig, FunctionRegistry, ProjectionSpec, Value};
use tracing::debug;

use crate::dispatch;
use crate::error::ProjectionError;
use crate::index::IndexMode;
use crate::resolve::Resolver;

/// Projects data values through declarative specs.
///
/// # Example
///
/// ```
/// use contour::{Engine, EngineConfig, IndexMode, Record, Value};
///
/// let engine = Engine::new(EngineConfig::default());
/// let spec = engine
///     .compile_yaml("id: true\ntags as tagCount: {$fn: count}\n")
///     .expect("valid document");
/// let items = Value::from(vec![
///     Value::from(Record::new().with_field("id", 7).with_field("tags", vec![Value::from("a")])),
/// ]);
///
/// let output = engine
///     .project(&items, Some(&spec), &IndexMode::Sequential)
///     .expect("within depth limit");
/// let first = &output.as_sequence().expect("a sequence")[0];
/// assert_eq!(first.as_map().and_then(|fields| fields.get("tagCount")), Some(&Value::Int(1)));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    functions: FunctionRegistry,
}

impl Engine {
    /// Creates an engine with the builtin function registry.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            functions: FunctionRegistry::with_builtins(),
        }
    }

    /// Replaces the function registry used by spec documents.
    #[must_use]
    pub fn with_functions(mut self, functions: FunctionRegistry) -> Self {
        self.functions = functions;
        self
    }

    /// Returns the engine configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the function registry.
    #[must_use]
    pub const fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Returns the function registry for registering more functions.
    pub const fn functions_mut(&mut self) -> &mut FunctionRegistry {
        &mut self.functions
    }

    /// Projects a single item or every element of a collection.
    ///
    /// - `Null` yields `Null`.
    /// - A record or scalar is resolved against `spec`.  Without a spec a
    ///   record yields its fields and a scalar yields `Null`.
    /// - A sequence or map is projected element by element and keyed
    ///   according to `index`.  The result is a sequence unless some element
    ///   received an explicit key, in which case it is a map.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::DepthExceeded`] when nested specs go deeper
    /// than [`EngineConfig::max_depth`].
    pub fn project(
        &self,
        data: &Value,
        spec: Option<&ProjectionSpec>,
        index: &IndexMode,
    ) -> Result<Value, ProjectionError> {
        dispatch::project(Resolver::new(&self.config), data, spec, index)
    }

    /// Resolves `spec` against one data value.
    ///
    /// `context_key` is what the `%key%` marker resolves to.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::DepthExceeded`] when nested specs go deeper
    /// than [`EngineConfig::max_depth`].
    ///
    /// # Example
    ///
    /// ```
    /// use contour::{Engine, EngineConfig, ProjectionSpec, Record, Value};
    ///
    /// let engine = Engine::new(EngineConfig::default());
    /// let spec = ProjectionSpec::builder().path("%key% as slot").build().expect("valid");
    /// let output = engine
    ///     .resolve(&Value::from(Record::new()), &spec, Some(&Value::from("k3")))
    ///     .expect("within depth limit");
    /// assert_eq!(output.as_map().and_then(|m| m.get("slot")), Some(&Value::from("k3")));
    /// ```
    pub fn resolve(
        &self,
        data: &Value,
        spec: &ProjectionSpec,
        context_key: Option<&Value>,
    ) -> Result<Value, ProjectionError> {
        Resolver::new(&self.config).resolve(data, spec, context_key, 1)
    }

    /// Compiles a YAML spec document against this engine's functions.
    ///
    /// # Errors
    ///
    /// Returns every problem found in the document.
    pub fn compile_yaml(&self, text: &str) -> Result<ProjectionSpec, DiagnosticReport> {
        debug!(bytes = text.len(), "compiling YAML spec document");
        contour_yaml::parse_yaml(text, &self.functions)
    }

    /// Compiles a JSON spec document against this engine's functions.
    ///
    /// # Errors
    ///
    /// Returns every problem found in the document.
    pub fn compile_json(&self, text: &str) -> Result<ProjectionSpec, DiagnosticReport> {
        debug!(bytes = text.len(), "compiling JSON spec document");
        contour_yaml::parse_json(text, &self.functions)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
