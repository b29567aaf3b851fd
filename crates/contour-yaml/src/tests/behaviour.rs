//! Behaviour-driven tests for spec document compilation.

use std::cell::RefCell;
use std::str::FromStr;

use contour_core::{DiagnosticReport, FunctionRegistry, ProjectionSpec, Target};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::{parse_json, parse_yaml};

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A double-quoted string value from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuotedString(String);

impl FromStr for QuotedString {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim_matches('"').to_owned()))
    }
}

impl QuotedString {
    fn as_str(&self) -> &str {
        &self.0
    }
}

/// A single-quoted document body, so JSON can keep its double quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DocumentText(String);

impl FromStr for DocumentText {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim();
        let body = inner
            .strip_prefix('\'')
            .and_then(|rest| rest.strip_suffix('\''))
            .unwrap_or(inner);
        Ok(Self(body.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Syntax {
    Yaml,
    Json,
}

#[derive(Default)]
struct TestWorld {
    document: Option<(Syntax, String)>,
    result: Option<Result<ProjectionSpec, DiagnosticReport>>,
}

impl TestWorld {
    fn spec(&self) -> &ProjectionSpec {
        match self.result.as_ref().expect("document should be compiled") {
            Ok(spec) => spec,
            Err(report) => panic!("expected a spec, got: {report}"),
        }
    }

    fn report(&self) -> &DiagnosticReport {
        match self.result.as_ref().expect("document should be compiled") {
            Ok(spec) => panic!("expected a failure, got {} entries", spec.len()),
            Err(report) => report,
        }
    }
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("the YAML spec document {text}")]
fn given_yaml(world: &RefCell<TestWorld>, text: DocumentText) {
    world.borrow_mut().document = Some((Syntax::Yaml, text.0));
}

#[given("the JSON spec document {text}")]
fn given_json(world: &RefCell<TestWorld>, text: DocumentText) {
    world.borrow_mut().document = Some((Syntax::Json, text.0));
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the document is compiled")]
fn when_compiled(world: &RefCell<TestWorld>) {
    let mut w = world.borrow_mut();
    let (syntax, text) = w.document.clone().expect("document should be set");
    let registry = FunctionRegistry::with_builtins();
    let result = match syntax {
        Syntax::Yaml => parse_yaml(&text, &registry),
        Syntax::Json => parse_json(&text, &registry),
    };
    w.result = Some(result);
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the spec has {count} entries")]
fn then_entry_count(world: &RefCell<TestWorld>, count: usize) {
    assert_eq!(world.borrow().spec().len(), count);
}

#[then("entry {position} writes to {name}")]
fn then_entry_target(world: &RefCell<TestWorld>, position: usize, name: QuotedString) {
    let w = world.borrow();
    let entry = w
        .spec()
        .entries()
        .get(position - 1)
        .expect("entry should exist");
    assert_eq!(entry.target(), &Target::Key(name.as_str().to_owned()));
}

#[then("the spec is {levels} levels deep")]
fn then_spec_depth(world: &RefCell<TestWorld>, levels: usize) {
    assert_eq!(world.borrow().spec().depth(), levels);
}

#[then("compilation fails with {code}")]
fn then_fails_with(world: &RefCell<TestWorld>, code: QuotedString) {
    let w = world.borrow();
    let first = w.report().diagnostics().first().expect("one diagnostic");
    assert_eq!(first.code().to_string(), code.as_str());
}

#[then("the first diagnostic points at {pointer}")]
fn then_points_at(world: &RefCell<TestWorld>, pointer: QuotedString) {
    let w = world.borrow();
    let first = w.report().diagnostics().first().expect("one diagnostic");
    assert_eq!(first.pointer(), Some(pointer.as_str()));
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/contour_yaml.feature",
    name = "Compiling a flow-style YAML document"
)]
fn flow_yaml_document(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/contour_yaml.feature",
    name = "Compiling a JSON list document"
)]
fn json_list_document(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/contour_yaml.feature",
    name = "Referencing an unknown function"
)]
fn unknown_function(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/contour_yaml.feature",
    name = "Rejecting a scalar root"
)]
fn scalar_root(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/contour_yaml.feature",
    name = "Rejecting malformed JSON"
)]
fn malformed_json(world: RefCell<TestWorld>) {
    drop(world);
}
