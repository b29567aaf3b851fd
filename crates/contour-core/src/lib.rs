//! Core data model, path resolution, and spec types for the Contour
//! projection engine.
//!
//! This crate provides the canonical type definitions used throughout the
//! Contour pipeline: data values and the [`Lookup`] capability trait,
//! attribute paths and their resolver, compiled projection specs, computed
//! callables, diagnostic reports, and engine configuration.  It is
//! re-exported by the `contour` facade crate for stable public consumption.
//!
//! # Core types
//!
//! - [`Value`], [`Record`] and [`Map`]: projection input and output
//! - [`AttributePath`] and [`path::resolve`]: dotted path lookup
//! - [`ProjectionSpec`], [`SpecEntry`] and [`Descriptor`]: compiled specs
//! - [`Computed`] and [`FunctionRegistry`]: callables for computed entries
//! - [`DiagnosticReport`] and [`Diagnostic`]: structured error reporting
//! - [`EngineConfig`]: structural limits
//!
//! # Example
//!
//! ```
//! use contour_core::{AttributePath, Record, Value, path};
//!
//! let data = Value::from(Record::new().with_field("name", "Ann"));
//! let name = path::resolve(&data, &AttributePath::new("name"));
//! assert_eq!(name, &Value::from("Ann"));
//! ```

mod cast;
mod config;
mod diagnostic;
pub mod path;
mod registry;
mod spec;
mod value;

pub use cast::Cast;
pub use config::{DEFAULT_MAX_DEPTH, EngineConfig};
pub use diagnostic::{Diagnostic, DiagnosticCode, DiagnosticReport, child_pointer};
pub use path::AttributePath;
pub use registry::{Computed, FunctionRegistry};
pub use spec::{Descriptor, ProjectionSpec, SpecBuilder, SpecEntry, SpecError, Target};
pub use value::{Lookup, Map, Record, Value};

#[cfg(test)]
mod tests;
