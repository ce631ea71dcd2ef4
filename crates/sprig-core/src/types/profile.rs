//! User profile records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile record, as returned by the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Numeric user ID
    pub user_id: u64,
    /// Display name
    pub name: String,
    /// Profile description
    pub description: String,
    /// Contact email address
    pub email: String,
    /// Whether the email is shown on the public profile
    pub email_visible: bool,
    /// When the account was created
    pub date_created: DateTime<Utc>,
    /// Preferred date rendering order
    pub date_style: DateStyle,
    /// Preferred clock style
    pub time_style: TimeStyle,
    /// Names of the packages this user owns
    pub packages: Vec<String>,
}

/// Date rendering preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// month/day/year
    Mdy,
    /// day/month/year
    Dmy,
    /// year/month/day
    Ymd,
}

/// Clock rendering preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeStyle {
    /// 12-hour clock
    #[serde(rename = "12h")]
    Hour12,
    /// 24-hour clock
    #[serde(rename = "24h")]
    Hour24,
}

impl Profile {
    /// Check whether this user owns a package of the given name
    pub fn owns_package(&self, name: &str) -> bool {
        self.packages.iter().any(|p| p == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_wire_values() {
        assert_eq!(serde_json::to_string(&DateStyle::Mdy).unwrap(), "\"mdy\"");
        assert_eq!(
            serde_json::to_string(&TimeStyle::Hour24).unwrap(),
            "\"24h\""
        );

        let parsed: TimeStyle = serde_json::from_str("\"12h\"").unwrap();
        assert_eq!(parsed, TimeStyle::Hour12);
    }
}
