//! Package records.
//!
//! A package groups its published versions together with ownership and
//! discovery metadata. The `versions` field changes shape depending on the
//! request: a plain list of version identifiers, or the full version records
//! when the caller asked for them to be embedded.

use super::Version;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A package record, as returned by the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Numeric record ID
    pub id: u64,
    /// Unique package name
    pub name: String,
    /// User ID of the original author
    pub author: u64,
    /// User ID of the current owner
    pub owner: u64,
    /// Package description
    pub description: String,
    /// Identifier of the default version, if one is set
    pub default_version: Option<String>,
    /// Version identifiers, or embedded full records when requested
    pub versions: Versions,
    /// When the package was created
    pub date_created: DateTime<Utc>,
    /// When the package was last modified
    pub date_modified: DateTime<Utc>,
    /// Discovery keywords
    pub keywords: Vec<String>,
    /// Total download count
    pub downloads: u64,
    /// Release channel tag
    pub tag: String,
}

/// The two shapes of a package's `versions` field.
///
/// The shape is never mixed: a single fetch either embeds every version in
/// full or lists identifiers only, depending on whether version inclusion
/// was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Versions {
    /// Semantic version identifiers only
    Identifiers(Vec<String>),
    /// Full version records
    Embedded(Vec<Version>),
}

impl Package {
    /// Check if this package has a specific keyword
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }

    /// Number of published versions, regardless of the field shape
    pub fn version_count(&self) -> usize {
        match &self.versions {
            Versions::Identifiers(ids) => ids.len(),
            Versions::Embedded(versions) => versions.len(),
        }
    }
}

impl Versions {
    /// True when the field carries full version records
    pub fn is_embedded(&self) -> bool {
        matches!(self, Versions::Embedded(_))
    }

    /// The embedded records, when present
    pub fn embedded(&self) -> Option<&[Version]> {
        match self {
            Versions::Embedded(versions) => Some(versions),
            Versions::Identifiers(_) => None,
        }
    }

    /// The version identifiers, listed or extracted from embedded records
    pub fn identifiers(&self) -> Vec<&str> {
        match self {
            Versions::Identifiers(ids) => ids.iter().map(String::as_str).collect(),
            Versions::Embedded(versions) => versions
                .iter()
                .map(|v| v.version_identifier.as_str())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_package(versions: Versions) -> Package {
        Package {
            id: 42,
            name: "cool-package".to_string(),
            author: 1,
            owner: 1,
            description: "A cool package".to_string(),
            default_version: Some("1.0.0".to_string()),
            versions,
            date_created: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            date_modified: Utc.with_ymd_and_hms(2020, 6, 1, 0, 0, 0).unwrap(),
            keywords: vec!["adventure".to_string()],
            downloads: 1200,
            tag: "stable".to_string(),
        }
    }

    #[test]
    fn test_keywords() {
        let pkg = sample_package(Versions::Identifiers(vec!["1.0.0".to_string()]));
        assert!(pkg.has_keyword("adventure"));
        assert!(!pkg.has_keyword("horror"));
    }

    #[test]
    fn test_version_count_across_shapes() {
        let listed = sample_package(Versions::Identifiers(vec![
            "1.0.0".to_string(),
            "1.1.0".to_string(),
        ]));
        assert_eq!(listed.version_count(), 2);
        assert!(!listed.versions.is_embedded());

        let embedded = sample_package(Versions::Embedded(vec![Version {
            id: 7,
            version_identifier: "1.0.0".to_string(),
            author: 1,
            description: String::new(),
            script: String::new(),
            style: String::new(),
            parent_package: 42,
            date_created: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        }]));
        assert_eq!(embedded.version_count(), 1);
        assert!(embedded.versions.is_embedded());
        assert_eq!(embedded.versions.identifiers(), vec!["1.0.0"]);
    }
}
