//! Spec document parsing for the Contour projection engine.
//!
//! Projection specs can be written as YAML or JSON documents.  This crate
//! reads such a document and compiles it into a
//! [`contour_core::ProjectionSpec`], collecting every problem it finds into a
//! single [`contour_core::DiagnosticReport`].
//!
//! # Document shape
//!
//! The root is either a mapping or a list.  In a mapping, each key is a
//! descriptor (`"<path> [modifier...]"`) and each value says how to read it:
//!
//! - `true`: a plain path entry described by the key
//! - a string: a plain path entry described by the value
//! - `{ $fn: <name> }`: a computed entry calling a registered function
//! - any other mapping: a nested spec applied to the key's path
//!
//! A list holds descriptor strings or single-entry mappings of the form
//! above.
//!
//! # Example
//!
//! ```
//! use contour_core::FunctionRegistry;
//!
//! let spec = contour_yaml::parse_yaml(
//!     "name as fullName: true\naddress:\n  city: true\n",
//!     &FunctionRegistry::with_builtins(),
//! )
//! .expect("valid document");
//! assert_eq!(spec.len(), 2);
//! ```

mod compile;
mod document;

pub use compile::{FUNCTION_KEY, compile};
pub use document::{parse_json, parse_yaml};

#[cfg(test)]
mod tests;
