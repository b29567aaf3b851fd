//! Engine configuration for resource limits.

/// Nesting depth allowed when no explicit limit is configured.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Engine configuration controlling structural limits.
///
/// # Defaults
///
/// - `max_depth`: 64 nested spec levels
///
/// # Example
///
/// ```
/// use contour_core::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.max_depth(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum number of nested spec levels resolved before failing.
    max_depth: usize,
}

impl EngineConfig {
    /// Creates a new engine configuration with explicit values.
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the maximum nesting depth.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
