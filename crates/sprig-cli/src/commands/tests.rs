//! Unit tests for CLI boundary validation.

use super::fetch::{build_request, FetchArgs, FetchRequest, RecordKind};
use sprig_core::error::SprigError;
use sprig_core::types::{OrderDirection, PackageOrderBy, Selector};

fn args(kind: RecordKind, name_or_id: &str) -> FetchArgs {
    FetchArgs {
        kind,
        name_or_id: name_or_id.to_string(),
        include_versions: None,
        order_by: None,
        order_direction: None,
        package_id: None,
        quantity: None,
        cursor: None,
    }
}

fn field_of(err: SprigError) -> String {
    match err {
        SprigError::InvalidOptions { field, .. } => field,
        other => panic!("expected InvalidOptions, got {:?}", other),
    }
}

#[test]
fn test_include_versions_requires_package_kind() {
    let mut invalid = args(RecordKind::Profile, "3");
    invalid.include_versions = Some("default".to_string());

    assert_eq!(field_of(build_request(&invalid).unwrap_err()), "includeVersions");
}

#[test]
fn test_package_id_requires_version_kind() {
    let mut invalid = args(RecordKind::Package, "cool-package");
    invalid.package_id = Some("42".to_string());

    assert_eq!(field_of(build_request(&invalid).unwrap_err()), "packageId");
}

#[test]
fn test_cursor_requires_version_kind() {
    let mut invalid = args(RecordKind::Profile, "*");
    invalid.cursor = Some(100);

    assert_eq!(field_of(build_request(&invalid).unwrap_err()), "cursor");
}

#[test]
fn test_order_direction_requires_order_by() {
    let mut invalid = args(RecordKind::Package, "*");
    invalid.order_direction = Some("desc".to_string());

    assert_eq!(field_of(build_request(&invalid).unwrap_err()), "orderDirection");
}

#[test]
fn test_version_identifier_classification() {
    // Integer IDs and the collection sentinel are always fine
    assert!(build_request(&args(RecordKind::Version, "42")).is_ok());
    assert!(build_request(&args(RecordKind::Version, "*")).is_ok());

    // A semver identifier is fine, an arbitrary name is not
    assert!(build_request(&args(RecordKind::Version, "1.2.3")).is_ok());
    assert_eq!(
        field_of(build_request(&args(RecordKind::Version, "not-semver")).unwrap_err()),
        "nameOrId"
    );
}

#[test]
fn test_order_column_must_match_kind() {
    let mut invalid = args(RecordKind::Profile, "*");
    invalid.order_by = Some("downloads".to_string());

    assert_eq!(field_of(build_request(&invalid).unwrap_err()), "orderBy");
}

#[test]
fn test_valid_package_request() {
    let mut valid = args(RecordKind::Package, "cool-package");
    valid.include_versions = Some("1.0.0,default".to_string());

    match build_request(&valid).unwrap() {
        FetchRequest::Package(selector, options) => {
            assert_eq!(selector, Selector::Key("cool-package".to_string()));
            assert_eq!(
                options.include_versions,
                Some(vec!["1.0.0".to_string(), "default".to_string()])
            );
        }
        other => panic!("expected a package request, got {:?}", other),
    }
}

#[test]
fn test_valid_collection_request() {
    let mut valid = args(RecordKind::Package, "*");
    valid.order_by = Some("downloads".to_string());
    valid.order_direction = Some("desc".to_string());
    valid.quantity = Some(5);

    match build_request(&valid).unwrap() {
        FetchRequest::Package(selector, options) => {
            assert_eq!(selector, Selector::All);
            assert_eq!(options.order_by, Some(PackageOrderBy::Downloads));
            assert_eq!(options.order_direction, Some(OrderDirection::Descending));
            assert_eq!(options.quantity, Some(5));
        }
        other => panic!("expected a package request, got {:?}", other),
    }
}

#[test]
fn test_missing_identifier_rejected() {
    let invalid = args(RecordKind::Package, "");
    assert_eq!(field_of(build_request(&invalid).unwrap_err()), "nameOrId");
}
