//! Tests for diagnostic types.

use rstest::rstest;

use crate::{Diagnostic, DiagnosticCode, DiagnosticReport, child_pointer};

#[rstest]
#[case::yaml_parse(DiagnosticCode::EContourYamlParse, "E_CONTOUR_YAML_PARSE")]
#[case::json_parse(DiagnosticCode::EContourJsonParse, "E_CONTOUR_JSON_PARSE")]
#[case::schema_invalid(DiagnosticCode::EContourSchemaInvalid, "E_CONTOUR_SCHEMA_INVALID")]
#[case::empty_path(DiagnosticCode::EContourEmptyPath, "E_CONTOUR_EMPTY_PATH")]
#[case::unknown_function(
    DiagnosticCode::EContourUnknownFunction,
    "E_CONTOUR_UNKNOWN_FUNCTION"
)]
fn diagnostic_code_display(#[case] code: DiagnosticCode, #[case] expected: &str) {
    assert_eq!(format!("{code}"), expected);
}

#[test]
fn diagnostic_code_serde_round_trip() {
    let code = DiagnosticCode::EContourSchemaInvalid;
    let json = serde_json::to_string(&code).expect("serialize");
    let deserialized: DiagnosticCode = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(deserialized, code);
}

#[test]
fn diagnostic_construction_and_accessors() {
    let diag = Diagnostic::new(
        DiagnosticCode::EContourUnknownFunction,
        String::from("unknown function 'slugify'"),
        None,
        vec![String::from("registered functions: count")],
    )
    .at("/title");
    assert_eq!(diag.code(), DiagnosticCode::EContourUnknownFunction);
    assert_eq!(diag.message(), "unknown function 'slugify'");
    assert_eq!(diag.pointer(), Some("/title"));
    assert_eq!(diag.notes().len(), 1);
}

#[test]
fn report_display_includes_pointer() {
    let report = DiagnosticReport::single(Diagnostic::new(
        DiagnosticCode::EContourEmptyPath,
        String::from("descriptor `` names no attribute path"),
        Some(String::from("/address/zip")),
        vec![],
    ));
    assert_eq!(
        format!("{report}"),
        "E_CONTOUR_EMPTY_PATH: descriptor `` names no attribute path (at /address/zip)"
    );
}

#[test]
fn report_display_omits_root_pointer() {
    let report = DiagnosticReport::single(Diagnostic::new(
        DiagnosticCode::EContourSchemaInvalid,
        String::from("bad root"),
        Some(String::new()),
        vec![],
    ));
    assert_eq!(format!("{report}"), "E_CONTOUR_SCHEMA_INVALID: bad root");
}

#[test]
fn diagnostic_report_is_std_error() {
    let report = DiagnosticReport::single(Diagnostic::new(
        DiagnosticCode::EContourJsonParse,
        String::from("expected value"),
        None,
        vec![],
    ));
    let err: &dyn std::error::Error = &report;
    assert!(format!("{err}").contains("E_CONTOUR_JSON_PARSE"));
}

#[test]
fn diagnostic_report_serde_round_trip() {
    let report = DiagnosticReport::new(vec![
        Diagnostic::new(
            DiagnosticCode::EContourYamlParse,
            String::from("bad yaml"),
            None,
            vec![],
        ),
        Diagnostic::new(
            DiagnosticCode::EContourSchemaInvalid,
            String::from("unsupported value"),
            Some(String::from("/age")),
            vec![String::from("use `true` or a descriptor string")],
        ),
    ]);
    let json = serde_json::to_string(&report).expect("serialize");
    let deserialized: DiagnosticReport = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(deserialized.diagnostics(), report.diagnostics());
}

#[test]
fn empty_diagnostic_report() {
    let report = DiagnosticReport::new(vec![]);
    assert!(report.is_empty());
    assert_eq!(format!("{report}"), "empty diagnostic report");
}

#[rstest]
#[case("", "name", "/name")]
#[case("/address", "zip as postal", "/address/zip as postal")]
#[case("", "a/b~c", "/a~1b~0c")]
fn pointers_escape_separators(#[case] parent: &str, #[case] key: &str, #[case] expected: &str) {
    assert_eq!(child_pointer(parent, key), expected);
}
