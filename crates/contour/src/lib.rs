//! Contour: a declarative attribute projection engine.
//!
//! Contour turns an input [`Value`] (a record, a keyed collection, a
//! sequence, or a scalar) into a new ordered mapping holding only the
//! attributes a [`ProjectionSpec`] asks for.  Attributes may be renamed,
//! coerced to numbers, computed by a callable, or re-projected with a nested
//! spec.  Collections are projected element by element and keyed according
//! to an [`IndexMode`].
//!
//! This facade re-exports the stable types from [`contour_core`] and adds the
//! [`Engine`] entrypoint.  Projection specs can be built in code with
//! [`ProjectionSpec::builder`] or compiled from YAML and JSON documents.
//!
//! # Core types
//!
//! - [`Value`], [`Record`] and [`Map`]: the data model
//! - [`AttributePath`]: dotted attribute paths, resolved by [`path::resolve`]
//! - [`ProjectionSpec`], [`SpecEntry`] and [`Descriptor`]: compiled specs
//! - [`FunctionRegistry`] and [`Computed`]: callables for computed entries
//! - [`DiagnosticReport`] and [`Diagnostic`]: spec construction errors
//! - [`EngineConfig`]: structural limits
//! - [`Engine`]: projection and spec compilation
//!
//! # Example
//!
//! ```
//! use contour::{Engine, EngineConfig, IndexMode, ProjectionSpec, Record, Value};
//!
//! let engine = Engine::new(EngineConfig::default());
//! let spec = ProjectionSpec::builder()
//!     .path("name as fullName")
//!     .path("age int")
//!     .build()
//!     .expect("valid spec");
//! let person = Value::from(Record::new().with_field("name", "Ann").with_field("age", "30"));
//!
//! let output = engine
//!     .project(&person, Some(&spec), &IndexMode::Sequential)
//!     .expect("within depth limit");
//! let fields = output.as_map().expect("a record projects to a mapping");
//! assert_eq!(fields.get("fullName"), Some(&Value::from("Ann")));
//! assert_eq!(fields.get("age"), Some(&Value::Int(30)));
//! ```

mod dispatch;
mod engine;
mod error;
pub mod index;
mod resolve;

pub use contour_core::{
    AttributePath, Cast, Computed, DEFAULT_MAX_DEPTH, Descriptor, Diagnostic, DiagnosticCode,
    DiagnosticReport, EngineConfig, FunctionRegistry, Lookup, Map, ProjectionSpec, Record,
    SpecBuilder, SpecEntry, SpecError, Target, Value, path,
};

pub use engine::Engine;
pub use error::ProjectionError;
pub use index::IndexMode;

#[cfg(test)]
mod tests;
