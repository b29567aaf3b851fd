//! Errors raised while projecting data.

use thiserror::Error;

/// A projection that could not be completed.
///
/// Data never causes a failure: missing paths and mismatched shapes resolve
/// to [`Value::Null`](crate::Value::Null).  The only fault is a spec nested
/// deeper than [`EngineConfig::max_depth`](crate::EngineConfig::max_depth).
///
/// # Example
///
/// ```
/// use contour::ProjectionError;
///
/// let error = ProjectionError::DepthExceeded { limit: 4 };
/// assert_eq!(error.to_string(), "projection nesting exceeds the depth limit of 4");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProjectionError {
    /// Nested specs went deeper than the configured limit.
    #[error("projection nesting exceeds the depth limit of {limit}")]
    DepthExceeded {
        /// The configured maximum depth.
        limit: usize,
    },
}
