//! Registry API wire types.
//!
//! These mirror the JSON the server emits: timestamps are still strings here,
//! and a package's `versions` field may be either identifier strings or full
//! embedded records. The normalization layer converts these into the owned
//! entity types in `sprig-core`.

use serde::{Deserialize, Serialize};
use sprig_core::types::{DateStyle, TimeStyle};

/// Package record as it appears on the wire
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPackage {
    pub id: u64,
    pub name: String,
    pub author: u64,
    pub owner: u64,
    pub description: String,
    pub default_version: Option<String>,
    pub versions: RawVersions,
    /// ISO-like timestamp string
    pub date_created: String,
    /// ISO-like timestamp string
    pub date_modified: String,
    pub keywords: Vec<String>,
    pub downloads: u64,
    pub tag: String,
}

/// The `versions` field of a wire package: identifiers, or embedded records.
///
/// Which shape arrives is decided by whether the request asked for version
/// inclusion; the server never mixes the two.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawVersions {
    /// Semantic version identifiers only
    Identifiers(Vec<String>),
    /// Full version records, timestamps still raw
    Embedded(Vec<RawVersion>),
}

/// Version record as it appears on the wire
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawVersion {
    pub id: u64,
    pub version_identifier: String,
    pub author: u64,
    pub description: String,
    pub js: String,
    pub css: String,
    pub parent_package: u64,
    /// ISO-like timestamp string
    pub date_created: String,
}

/// Profile record as it appears on the wire
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawProfile {
    pub user_id: u64,
    pub name: String,
    pub description: String,
    pub email: String,
    pub email_visible: bool,
    /// ISO-like timestamp string
    pub date_created: String,
    pub date_style: DateStyle,
    pub time_style: TimeStyle,
    pub packages: Vec<String>,
}

/// Paginated envelope wrapping one page of collection results
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPage<T> {
    pub count: u64,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub results: Vec<T>,
}

/// Error envelope the server sends with non-2xx statuses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_field_shapes_deserialize() {
        let listed: RawVersions = serde_json::from_str(r#"["1.0.0", "1.1.0"]"#).unwrap();
        assert!(matches!(listed, RawVersions::Identifiers(ids) if ids.len() == 2));

        let embedded: RawVersions = serde_json::from_str(
            r#"[{
                "id": 7,
                "version_identifier": "1.0.0",
                "author": 3,
                "description": "",
                "js": "",
                "css": "",
                "parent_package": 42,
                "date_created": "2020-01-01T00:00:00Z"
            }]"#,
        )
        .unwrap();
        assert!(matches!(embedded, RawVersions::Embedded(versions) if versions.len() == 1));
    }

    #[test]
    fn test_error_envelope() {
        let envelope: ErrorEnvelope = serde_json::from_str(r#"{"error": "not found"}"#).unwrap();
        assert_eq!(envelope.error, "not found");
    }
}
