use idlsema_core::{ConstValue, Document, Enum, Service, Type};

use super::check_globals;
use crate::test_utils::{check, exception, field, structure, union};
use crate::{Error, ErrorKind};

#[test]
fn distinct_names_pass() {
    let doc = Document::new("a.thrift")
        .with_typedef("Id", Type::named("i64"))
        .with_constant("MAX", Type::named("i32"), ConstValue::Int(3))
        .with_struct_like(structure("User", []))
        .with_service(Service::new("UserService"));

    assert_eq!(check_globals(&doc), Ok(()));
}

#[test]
fn struct_and_service_collide() {
    let doc = Document::new("a.thrift")
        .with_struct_like(structure("Api", []))
        .with_service(Service::new("Api"));

    let err = check_globals(&doc).unwrap_err();
    assert_eq!(
        err,
        Error::DuplicateGlobalName {
            name: "Api".to_owned(),
            file: "a.thrift".to_owned(),
        }
    );
    insta::assert_snapshot!(
        err.to_string(),
        @"[IDL grammar error] duplicated names in global scope: Api from file a.thrift"
    );
}

#[test]
fn first_duplicate_in_declaration_order_is_reported() {
    // Typedefs are scanned before struct-likes, so "B" is met twice before "A" is.
    let doc = Document::new("a.thrift")
        .with_typedef("A", Type::named("i32"))
        .with_typedef("B", Type::named("i32"))
        .with_constant("B", Type::named("i32"), ConstValue::Int(1))
        .with_struct_like(union("A", []));

    let err = check_globals(&doc).unwrap_err();
    assert!(matches!(err, Error::DuplicateGlobalName { ref name, .. } if name == "B"));
}

#[test]
fn struct_likes_of_different_categories_share_scope() {
    let doc = Document::new("a.thrift")
        .with_struct_like(structure("Oops", []))
        .with_struct_like(exception("Oops", []));

    assert_eq!(
        check_globals(&doc).unwrap_err().kind(),
        ErrorKind::DuplicateGlobalName
    );
}

#[test]
fn enums_are_not_part_of_global_scope() {
    let doc = Document::new("a.thrift")
        .with_struct_like(structure("Color", []))
        .with_enum(Enum::new("Color").with_value("RED", 1));

    assert_eq!(check_globals(&doc), Ok(()));
}

#[test]
fn duplicate_aborts_before_other_rules() {
    let doc = Document::new("a.thrift")
        .with_typedef("T", Type::named("i32"))
        .with_typedef("T", Type::named("i64"))
        .with_struct_like(structure("S", [field(0, "zero")]));

    let (report, _) = check(doc);
    assert_eq!(
        report.error.map(|e| e.kind()),
        Some(ErrorKind::DuplicateGlobalName)
    );
    assert!(report.warnings.is_empty());
}
