use idlsema_core::{Document, Enum, Function, Program, Requiredness, Service, Type};

use tracing::Level;

use crate::test_utils::{capture_logs, field, optional, required, structure, union};
use crate::{Checker, ErrorKind, Options, WarningKind, check_all};

fn warn_doc(filename: &str) -> Document {
    Document::new(filename).with_struct_like(structure("S", [field(0, "zero")]))
}

#[test]
fn clean_program_has_empty_report() {
    let mut program = Program::new(
        Document::new("a.thrift")
            .with_enum(Enum::new("E").with_value("A", 1))
            .with_struct_like(structure("S", [required(1, "a")]))
            .with_service(Service::new("Svc").with_function(Function::new("ping"))),
    );

    let report = check_all(&mut program, Options::default());
    assert!(report.is_ok());
    assert!(report.warnings.is_empty());
    assert_eq!(report.render(), "");
}

#[test]
fn documents_are_checked_root_first_in_include_order() {
    let mut program = Program::new(warn_doc("root.thrift"));
    let root = program.root();
    let b = program.add_document(warn_doc("b.thrift"));
    let c = program.add_document(warn_doc("c.thrift"));
    program.add_include(root, b);
    program.add_include(root, c);

    let report = check_all(&mut program, Options::default());
    let files: Vec<_> = report.warnings.iter().map(|w| w.file.as_str()).collect();
    assert_eq!(files, ["root.thrift", "b.thrift", "c.thrift"]);
}

#[test]
fn shared_include_is_checked_once() {
    let mut program = Program::new(Document::new("root.thrift"));
    let root = program.root();
    let left = program.add_document(Document::new("left.thrift"));
    let right = program.add_document(Document::new("right.thrift"));
    let shared = program.add_document(warn_doc("shared.thrift"));
    program.add_include(root, left);
    program.add_include(root, right);
    program.add_include(left, shared);
    program.add_include(right, shared);
    program.add_include(shared, root);

    let report = check_all(&mut program, Options::default());
    assert!(report.is_ok());
    assert_eq!(report.warnings.count_of(WarningKind::NonPositiveFieldId), 1);
}

#[test]
fn error_stops_traversal_and_keeps_earlier_warnings() {
    let mut program = Program::new(warn_doc("root.thrift"));
    let root = program.root();
    let bad = program.add_document(
        Document::new("bad.thrift")
            .with_typedef("T", Type::named("i32"))
            .with_typedef("T", Type::named("i64")),
    );
    let never = program.add_document(warn_doc("never.thrift"));
    program.add_include(root, bad);
    program.add_include(root, never);

    let report = check_all(&mut program, Options::default());
    insta::assert_snapshot!(report.render(), @r#"
    warning: non-positive ID 0 of field "zero" in struct "S" from file root.thrift
    error: [IDL grammar error] duplicated names in global scope: T from file bad.thrift
    "#);
    assert_eq!(report.error.as_ref().map(|e| e.file()), Some("bad.thrift"));
}

#[test]
fn fixes_before_abort_are_kept_and_later_documents_untouched() {
    let mut program = Program::new(
        Document::new("root.thrift").with_struct_like(union("U", [required(1, "a")])),
    );
    let root = program.root();
    let bad = program.add_document(
        Document::new("bad.thrift").with_service(
            Service::new("Svc")
                .with_function(Function::new("f"))
                .with_function(Function::new("f")),
        ),
    );
    let later = program.add_document(
        Document::new("later.thrift").with_struct_like(union("V", [required(1, "b")])),
    );
    program.add_include(root, bad);
    program.add_include(root, later);

    let report = check_all(&mut program, Options::default().with_fix_warnings(true));
    assert_eq!(
        report.error.as_ref().map(|e| e.kind()),
        Some(ErrorKind::DuplicateFunctionName)
    );
    assert_eq!(
        program.document(root).struct_likes[0].fields[0].requiredness,
        Requiredness::Optional
    );
    assert_eq!(
        program.document(later).struct_likes[0].fields[0].requiredness,
        Requiredness::Required
    );
}

#[test]
fn rules_run_in_fixed_order_within_a_document() {
    // Struct-like warnings precede union warnings, which precede function warnings.
    let doc = Document::new("a.thrift")
        .with_service(
            Service::new("Svc").with_function(Function::new("f").with_argument(optional(1, "x"))),
        )
        .with_struct_like(union("U", [required(1, "a")]))
        .with_struct_like(structure("S", [field(0, "z")]));
    let mut program = Program::new(doc);

    let report = Checker::new(Options::default()).check_all(&mut program);
    let kinds: Vec<_> = report.warnings.iter().map(|w| w.kind).collect();
    assert_eq!(
        kinds,
        [
            WarningKind::NonPositiveFieldId,
            WarningKind::RequiredUnionMember,
            WarningKind::OptionalArgument,
        ]
    );
}

#[test]
fn into_result_splits_success_and_failure() {
    let mut ok = Program::new(warn_doc("ok.thrift"));
    let warnings = check_all(&mut ok, Options::default()).into_result().unwrap();
    assert_eq!(warnings.len(), 1);

    let mut bad = Program::new(warn_doc("root.thrift"));
    let root = bad.root();
    let conflicting = bad.add_document(
        Document::new("bad.thrift").with_enum(Enum::new("E").with_value("A", 1).with_value("B", 1)),
    );
    bad.add_include(root, conflicting);
    let failure = check_all(&mut bad, Options::default())
        .into_result()
        .unwrap_err();
    assert_eq!(failure.warnings.len(), 1);
    assert_eq!(failure.error.kind(), ErrorKind::ConflictingEnumValue);
    insta::assert_snapshot!(
        failure.to_string(),
        @"[IDL grammar error] enum E: duplicate value 1 between 'A' and 'B' from file bad.thrift"
    );
}

#[test]
fn colored_render_wraps_labels() {
    let mut program = Program::new(warn_doc("a.thrift"));
    let report = check_all(&mut program, Options::default());

    let out = report.printer().colored(true).render();
    assert!(out.starts_with("\x1b[1;33mwarning\x1b[0m: non-positive ID 0"));
}

#[test]
fn each_rule_run_is_traced() {
    let mut program = Program::new(Document::new("a.thrift"));
    let (report, lines) =
        capture_logs(Level::DEBUG, || check_all(&mut program, Options::default()));
    assert!(report.is_ok());

    let rules: Vec<_> = lines
        .iter()
        .filter(|l| l.contains("running rule"))
        .filter_map(|l| l.split("rule=").nth(1))
        .map(|rest| rest.split_whitespace().next().unwrap_or_default())
        .collect();
    assert_eq!(
        rules,
        [
            "\"globals\"",
            "\"enums\"",
            "\"struct_likes\"",
            "\"unions\"",
            "\"functions\"",
        ]
    );
    assert!(lines.iter().any(|l| l.contains("check finished")));
}
