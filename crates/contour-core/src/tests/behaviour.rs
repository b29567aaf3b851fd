//! Behaviour-driven tests for `contour_core` path resolution.

use std::cell::RefCell;
use std::str::FromStr;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use crate::{AttributePath, Cast, Lookup, Record, Value, path};

// ---------------------------------------------------------------------------
// Typed wrappers for Gherkin step parameters
// ---------------------------------------------------------------------------

/// A quoted string value from a Gherkin feature file.
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

/// A JSON literal from a Gherkin feature file.
#[derive(Debug, Clone, PartialEq)]
struct JsonLiteral(serde_json::Value);

impl FromStr for JsonLiteral {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s.trim()).map(Self)
    }
}

// ---------------------------------------------------------------------------
// Test world
// ---------------------------------------------------------------------------

#[derive(Default)]
struct TestWorld {
    data: Option<Value>,
    resolved: Option<Value>,
}

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::default())
}

fn customer() -> Value {
    Value::from(
        Record::new()
            .with_field("name", "Ann")
            .with_field("age", "30")
            .with_field(
                "address",
                Record::new()
                    .with_field("city", "Kyiv")
                    .with_field("zip", "01001"),
            )
            .with_field(
                "orders",
                vec![
                    Value::from(Record::new().with_field("total", 3)),
                    Value::from(Record::new().with_field("total", 12.5)),
                ],
            ),
    )
}

// ---------------------------------------------------------------------------
// Given steps
// ---------------------------------------------------------------------------

#[given("a customer record")]
fn given_customer(world: &RefCell<TestWorld>) {
    world.borrow_mut().data = Some(customer());
}

// ---------------------------------------------------------------------------
// When steps
// ---------------------------------------------------------------------------

#[when("the path {attribute} is resolved")]
fn when_path_resolved(world: &RefCell<TestWorld>, attribute: QuotedString) {
    let mut w = world.borrow_mut();
    let data = w.data.as_ref().expect("data should be set");
    let resolved = path::resolve(data, &AttributePath::new(attribute.as_str())).clone();
    w.resolved = Some(resolved);
}

#[when("the path {attribute} is cast with {modifier}")]
fn when_path_cast(world: &RefCell<TestWorld>, attribute: QuotedString, modifier: QuotedString) {
    let mut w = world.borrow_mut();
    let data = w.data.as_ref().expect("data should be set");
    let cast = Cast::from_token(modifier.as_str()).expect("known cast");
    let raw = path::resolve(data, &AttributePath::new(attribute.as_str())).clone();
    let resolved = cast.apply(raw);
    w.resolved = Some(resolved);
}

// ---------------------------------------------------------------------------
// Then steps
// ---------------------------------------------------------------------------

#[then("the resolved value is {expected}")]
fn then_resolved_value(world: &RefCell<TestWorld>, expected: JsonLiteral) {
    let w = world.borrow();
    let resolved = w.resolved.as_ref().expect("resolved value should be set");
    assert_eq!(resolved, &Value::from(expected.0));
}

#[then("the resolved value has field {name}")]
fn then_resolved_has_field(world: &RefCell<TestWorld>, name: QuotedString) {
    let w = world.borrow();
    let resolved = w.resolved.as_ref().expect("resolved value should be set");
    assert!(
        resolved.field(name.as_str()).is_some(),
        "expected field '{}' on {resolved:?}",
        name.as_str()
    );
}

// ---------------------------------------------------------------------------
// Scenario registration
// ---------------------------------------------------------------------------

#[scenario(
    path = "tests/features/contour_core.feature",
    name = "Resolving a nested attribute path"
)]
fn nested_attribute_path(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/contour_core.feature",
    name = "Resolving a missing path yields null"
)]
fn missing_path(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/contour_core.feature",
    name = "Resolving the identity path returns the record"
)]
fn identity_path(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/contour_core.feature",
    name = "Reading a sequence element by position"
)]
fn sequence_position(world: RefCell<TestWorld>) {
    drop(world);
}

#[scenario(
    path = "tests/features/contour_core.feature",
    name = "Coercing a numeric string"
)]
fn numeric_coercion(world: RefCell<TestWorld>) {
    drop(world);
}
