//! Compiled projection specs.
//!
//! A spec is an ordered list of [`SpecEntry`] values.  Each entry is parsed
//! once from its textual form, `"<path> [modifier...]"`, into an explicit
//! source path, an optional numeric [`Cast`], an output [`Target`], and the
//! `array` flag.  Resolution then dispatches on the entry's [`Descriptor`]
//! instead of re-reading strings.
//!
//! Modifier tokens are separated by whitespace and matched without regard to
//! ASCII case:
//!
//! - `int`, `float`: coerce a scalar result (the last cast wins)
//! - `as <name>`: emit under `<name>`; the next token is taken literally
//! - `array`: for nested specs, project every element of a collection
//!
//! Unknown tokens and a trailing `as` are ignored.

use thiserror::Error;

use crate::cast::Cast;
use crate::diagnostic::{Diagnostic, DiagnosticCode, DiagnosticReport, child_pointer};
use crate::path::AttributePath;
use crate::registry::Computed;
use crate::value::Value;

/// Where a resolved value is written in the output mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// Store the value under this key.
    Key(String),
    /// Splice the entries of a mapping value into the output.
    Merge,
}

impl Target {
    /// Interprets an output key token; `.` selects [`Target::Merge`].
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == AttributePath::IDENTITY {
            Self::Merge
        } else {
            Self::Key(token.to_owned())
        }
    }
}

/// How an entry obtains its raw value.
#[derive(Debug, Clone)]
pub enum Descriptor {
    /// Resolve the path, then project the result with a nested spec.
    Nested(ProjectionSpec),
    /// Resolve the path, then hand the result to a callable.
    Computed(Computed),
    /// Use the contextual key of the enclosing collection element.
    ContextKey,
    /// Resolve the path and use the result directly.
    Path,
}

/// Errors raised while parsing a spec entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// The descriptor contained no tokens.
    #[error("descriptor `{descriptor}` names no attribute path")]
    EmptyPath {
        /// The offending descriptor text.
        descriptor: String,
    },
}

impl SpecError {
    /// Returns the stable diagnostic code for this error.
    #[must_use]
    pub const fn code(&self) -> DiagnosticCode {
        match self {
            Self::EmptyPath { .. } => DiagnosticCode::EContourEmptyPath,
        }
    }

    /// Converts the error into a diagnostic without a location.
    #[must_use]
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.code(), self.to_string(), None, vec![])
    }
}

/// One compiled entry of a projection spec.
///
/// # Example
///
/// ```
/// use contour_core::{Cast, SpecEntry, Target};
///
/// let entry = SpecEntry::parse("age int as years").expect("valid descriptor");
/// assert_eq!(entry.path().as_str(), "age");
/// assert_eq!(entry.cast(), Some(Cast::Int));
/// assert_eq!(entry.target(), &Target::Key(String::from("years")));
/// ```
#[derive(Debug, Clone)]
pub struct SpecEntry {
    path: AttributePath,
    descriptor: Descriptor,
    cast: Option<Cast>,
    target: Target,
    array: bool,
}

impl SpecEntry {
    /// Parses a path descriptor such as `"name as fullName"`.
    ///
    /// A path of `%key%` selects the contextual key.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::EmptyPath`] when `descriptor` has no tokens.
    pub fn parse(descriptor: &str) -> Result<Self, SpecError> {
        let tokens = Tokens::parse(descriptor)?;
        let kind = if tokens.path.is_context_key() {
            Descriptor::ContextKey
        } else {
            Descriptor::Path
        };
        Ok(tokens.into_entry(kind))
    }

    /// Parses `key` as `"<path> [modifier...]"` and attaches a nested spec.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::EmptyPath`] when `key` has no tokens.
    pub fn nested(key: &str, spec: ProjectionSpec) -> Result<Self, SpecError> {
        Tokens::parse(key).map(|tokens| tokens.into_entry(Descriptor::Nested(spec)))
    }

    /// Parses `key` as `"<path> [modifier...]"` and attaches a callable.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError::EmptyPath`] when `key` has no tokens.
    pub fn computed(key: &str, computed: Computed) -> Result<Self, SpecError> {
        Tokens::parse(key).map(|tokens| tokens.into_entry(Descriptor::Computed(computed)))
    }

    /// Returns the source attribute path.
    #[must_use]
    pub const fn path(&self) -> &AttributePath {
        &self.path
    }

    /// Returns the descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Returns the requested numeric coercion.
    #[must_use]
    pub const fn cast(&self) -> Option<Cast> {
        self.cast
    }

    /// Returns the output target.
    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    /// Returns `true` when the `array` modifier was given.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        self.array
    }
}

/// Positional parse of a descriptor's whitespace-separated tokens.
struct Tokens {
    path: AttributePath,
    cast: Option<Cast>,
    rename: Option<String>,
    array: bool,
}

impl Tokens {
    fn parse(text: &str) -> Result<Self, SpecError> {
        let mut tokens = text.split_whitespace();
        let path = tokens.next().ok_or_else(|| SpecError::EmptyPath {
            descriptor: text.to_owned(),
        })?;
        let mut parsed = Self {
            path: AttributePath::new(path),
            cast: None,
            rename: None,
            array: false,
        };
        while let Some(token) = tokens.next() {
            if token.eq_ignore_ascii_case("as") {
                if let Some(name) = tokens.next() {
                    parsed.rename = Some(name.to_owned());
                }
            } else if token.eq_ignore_ascii_case("array") {
                parsed.array = true;
            } else if let Some(cast) = Cast::from_token(token) {
                parsed.cast = Some(cast);
            }
        }
        Ok(parsed)
    }

    fn into_entry(self, descriptor: Descriptor) -> SpecEntry {
        let target = Target::from_token(self.rename.as_deref().unwrap_or(self.path.as_str()));
        SpecEntry {
            path: self.path,
            descriptor,
            cast: self.cast,
            target,
            array: self.array,
        }
    }
}

/// An ordered projection spec.
///
/// # Example
///
/// ```
/// use contour_core::ProjectionSpec;
///
/// let spec = ProjectionSpec::builder()
///     .path("id")
///     .nested("address", ProjectionSpec::builder().path("city").build().expect("valid"))
///     .build()
///     .expect("valid spec");
/// assert_eq!(spec.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProjectionSpec {
    entries: Vec<SpecEntry>,
}

impl ProjectionSpec {
    /// Starts building a spec.
    #[must_use]
    pub fn builder() -> SpecBuilder {
        SpecBuilder::default()
    }

    /// Appends a compiled entry.
    pub fn push(&mut self, entry: SpecEntry) {
        self.entries.push(entry);
    }

    /// Returns the entries in order.
    #[must_use]
    pub fn entries(&self) -> &[SpecEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the spec has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the deepest chain of nested specs, counting this one.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .entries
            .iter()
            .filter_map(|entry| match &entry.descriptor {
                Descriptor::Nested(nested) => Some(nested.depth()),
                _ => None,
            })
            .max()
            .unwrap_or(0)
    }
}

impl FromIterator<SpecEntry> for ProjectionSpec {
    fn from_iter<I: IntoIterator<Item = SpecEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Collects spec entries, gathering every parse problem into one report.
#[derive(Debug, Default)]
pub struct SpecBuilder {
    entries: Vec<SpecEntry>,
    diagnostics: Vec<Diagnostic>,
}

impl SpecBuilder {
    /// Adds a path descriptor entry.
    #[must_use]
    pub fn path(mut self, descriptor: &str) -> Self {
        self.accept(descriptor, SpecEntry::parse(descriptor));
        self
    }

    /// Adds a nested spec entry keyed by `"<path> [modifier...]"`.
    #[must_use]
    pub fn nested(mut self, key: &str, spec: ProjectionSpec) -> Self {
        self.accept(key, SpecEntry::nested(key, spec));
        self
    }

    /// Adds a computed entry keyed by `"<path> [modifier...]"`.
    #[must_use]
    pub fn computed<F>(self, key: &str, func: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.computed_with(key, Computed::new(func))
    }

    /// Adds a computed entry using an existing callable.
    #[must_use]
    pub fn computed_with(mut self, key: &str, computed: Computed) -> Self {
        self.accept(key, SpecEntry::computed(key, computed));
        self
    }

    /// Finishes the spec.
    ///
    /// # Errors
    ///
    /// Returns every diagnostic collected while adding entries.
    pub fn build(self) -> Result<ProjectionSpec, DiagnosticReport> {
        if self.diagnostics.is_empty() {
            Ok(ProjectionSpec {
                entries: self.entries,
            })
        } else {
            Err(DiagnosticReport::new(self.diagnostics))
        }
    }

    fn accept(&mut self, key: &str, entry: Result<SpecEntry, SpecError>) {
        match entry {
            Ok(parsed) => self.entries.push(parsed),
            Err(error) => self
                .diagnostics
                .push(error.to_diagnostic().at(child_pointer("", key))),
        }
    }
}
