//! Published version records.
//!
//! A version is a single published revision of a package, carrying the two
//! opaque code payloads the registry stores for it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published version of a package, as returned by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Numeric record ID
    pub id: u64,
    /// Semantic version identifier, e.g. "1.2.0"
    pub version_identifier: String,
    /// User ID of the publishing author
    pub author: u64,
    /// Version description
    pub description: String,
    /// Script payload (wire field `js`)
    #[serde(rename = "js")]
    pub script: String,
    /// Style payload (wire field `css`)
    #[serde(rename = "css")]
    pub style: String,
    /// Record ID of the package this version belongs to
    pub parent_package: u64,
    /// When the version was published
    pub date_created: DateTime<Utc>,
}

impl Version {
    /// Check whether this version carries any code payload at all
    pub fn has_payload(&self) -> bool {
        !self.script.is_empty() || !self.style.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Version {
        Version {
            id: 7,
            version_identifier: "1.0.0".to_string(),
            author: 3,
            description: "initial release".to_string(),
            script: String::new(),
            style: String::new(),
            parent_package: 42,
            date_created: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_has_payload() {
        let mut version = sample();
        assert!(!version.has_payload());

        version.script = "console.log('hi');".to_string();
        assert!(version.has_payload());
    }

    #[test]
    fn test_payload_fields_serialize_with_wire_names() {
        let mut version = sample();
        version.script = "a".to_string();
        version.style = "b".to_string();

        let json = serde_json::to_value(&version).unwrap();
        assert_eq!(json["js"], "a");
        assert_eq!(json["css"], "b");
        assert!(json.get("script").is_none());
    }
}
