//! Request-side types: selectors, ordering, and per-entity fetch options.
//!
//! Options that do not apply to the selector mode in use are silently
//! ignored by the query builders; validation of type/option combinations
//! happens at the CLI boundary only.

use std::fmt;
use std::str::FromStr;

use crate::error::SprigError;

/// What a fetch call targets: the whole collection, or one record.
///
/// The reserved identifier `*` selects the collection; a numeric ID or a
/// name/semver key selects a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Fetch the collection (the `*` sentinel)
    All,
    /// Fetch one record by numeric ID
    Id(u64),
    /// Fetch one record by name or semantic version identifier
    Key(String),
}

impl Selector {
    /// True for the collection sentinel
    pub fn is_all(&self) -> bool {
        matches!(self, Selector::All)
    }

    /// The URL path segment for this selector; empty for the collection
    pub fn path_segment(&self) -> String {
        match self {
            Selector::All => String::new(),
            Selector::Id(id) => id.to_string(),
            Selector::Key(key) => key.clone(),
        }
    }
}

impl FromStr for Selector {
    type Err = SprigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SprigError::invalid_options(
                "nameOrId",
                "an identifier must be provided",
            ));
        }

        if s == "*" {
            Ok(Selector::All)
        } else if s.bytes().all(|b| b.is_ascii_digit()) {
            s.parse::<u64>()
                .map(Selector::Id)
                .map_err(|_| SprigError::invalid_options("nameOrId", "numeric ID out of range"))
        } else {
            Ok(Selector::Key(s.to_string()))
        }
    }
}

impl From<u64> for Selector {
    fn from(id: u64) -> Self {
        Selector::Id(id)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => write!(f, "*"),
            Selector::Id(id) => write!(f, "{}", id),
            Selector::Key(key) => write!(f, "{}", key),
        }
    }
}

/// Direction for ordered collection fetches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Ascending,
    Descending,
}

impl FromStr for OrderDirection {
    type Err = SprigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(OrderDirection::Ascending),
            "desc" | "descending" => Ok(OrderDirection::Descending),
            other => Err(SprigError::invalid_options(
                "orderDirection",
                format!("'{}' is not 'asc' or 'desc'", other),
            )),
        }
    }
}

/// Columns a package collection can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageOrderBy {
    Name,
    Downloads,
    DateCreated,
    DateModified,
}

impl PackageOrderBy {
    /// The wire name of the ordering column
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageOrderBy::Name => "name",
            PackageOrderBy::Downloads => "downloads",
            PackageOrderBy::DateCreated => "date_created",
            PackageOrderBy::DateModified => "date_modified",
        }
    }
}

impl FromStr for PackageOrderBy {
    type Err = SprigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(PackageOrderBy::Name),
            "downloads" => Ok(PackageOrderBy::Downloads),
            "date_created" => Ok(PackageOrderBy::DateCreated),
            "date_modified" => Ok(PackageOrderBy::DateModified),
            other => Err(SprigError::invalid_options(
                "orderBy",
                format!("'{}' is not a package ordering column", other),
            )),
        }
    }
}

/// Columns a profile collection can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileOrderBy {
    Name,
    DateCreated,
}

impl ProfileOrderBy {
    /// The wire name of the ordering column
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileOrderBy::Name => "name",
            ProfileOrderBy::DateCreated => "date_created",
        }
    }
}

impl FromStr for ProfileOrderBy {
    type Err = SprigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ProfileOrderBy::Name),
            "date_created" => Ok(ProfileOrderBy::DateCreated),
            other => Err(SprigError::invalid_options(
                "orderBy",
                format!("'{}' is not a profile ordering column", other),
            )),
        }
    }
}

/// Columns a version collection can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionOrderBy {
    VersionIdentifier,
    DateCreated,
}

impl VersionOrderBy {
    /// The wire name of the ordering column
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionOrderBy::VersionIdentifier => "version_identifier",
            VersionOrderBy::DateCreated => "date_created",
        }
    }
}

impl FromStr for VersionOrderBy {
    type Err = SprigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "version_identifier" => Ok(VersionOrderBy::VersionIdentifier),
            "date_created" => Ok(VersionOrderBy::DateCreated),
            other => Err(SprigError::invalid_options(
                "orderBy",
                format!("'{}' is not a version ordering column", other),
            )),
        }
    }
}

/// Options for package fetches.
///
/// `include_versions` applies only to single-entity fetches; the ordering
/// and quantity fields apply only to collection fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageFetchOptions {
    /// Version identifiers (or the literal "default") to embed in full
    pub include_versions: Option<Vec<String>>,
    /// Ordering column for collection fetches
    pub order_by: Option<PackageOrderBy>,
    /// Ordering direction; only honored together with `order_by`
    pub order_direction: Option<OrderDirection>,
    /// Page size cap for collection fetches
    pub quantity: Option<u32>,
}

/// Options for profile fetches; all fields apply to collection fetches only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFetchOptions {
    /// Ordering column for collection fetches
    pub order_by: Option<ProfileOrderBy>,
    /// Ordering direction; only honored together with `order_by`
    pub order_direction: Option<OrderDirection>,
    /// Page size cap for collection fetches
    pub quantity: Option<u32>,
}

/// Options for version fetches.
///
/// `package_id` applies only to single-entity fetches, where it names the
/// parent package of a semver-identified version. The remaining fields apply
/// only to collection fetches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionFetchOptions {
    /// Parent package, disambiguating a semver-identifier lookup
    pub package_id: Option<String>,
    /// Resume the collection after the record with this ID
    pub cursor: Option<u64>,
    /// Ordering column for collection fetches
    pub order_by: Option<VersionOrderBy>,
    /// Ordering direction; only honored together with `order_by`
    pub order_direction: Option<OrderDirection>,
    /// Page size cap for collection fetches
    pub quantity: Option<u32>,
}

/// Options for free-text package search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Result count cap
    pub quantity: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        assert_eq!("*".parse::<Selector>().unwrap(), Selector::All);
        assert_eq!("42".parse::<Selector>().unwrap(), Selector::Id(42));
        assert_eq!(
            "cool-package".parse::<Selector>().unwrap(),
            Selector::Key("cool-package".to_string())
        );
        assert_eq!(
            "1.0.0".parse::<Selector>().unwrap(),
            Selector::Key("1.0.0".to_string())
        );
        assert!("".parse::<Selector>().is_err());
    }

    #[test]
    fn test_selector_path_segment() {
        assert_eq!(Selector::All.path_segment(), "");
        assert_eq!(Selector::Id(42).path_segment(), "42");
        assert_eq!(Selector::Key("pkg".to_string()).path_segment(), "pkg");
    }

    #[test]
    fn test_order_direction_parsing() {
        assert_eq!(
            "asc".parse::<OrderDirection>().unwrap(),
            OrderDirection::Ascending
        );
        assert_eq!(
            "descending".parse::<OrderDirection>().unwrap(),
            OrderDirection::Descending
        );
        assert!("up".parse::<OrderDirection>().is_err());
    }

    #[test]
    fn test_order_columns() {
        assert_eq!(PackageOrderBy::Downloads.as_str(), "downloads");
        assert_eq!(
            "date_modified".parse::<PackageOrderBy>().unwrap(),
            PackageOrderBy::DateModified
        );
        assert!("downloads".parse::<ProfileOrderBy>().is_err());
        assert_eq!(
            "version_identifier".parse::<VersionOrderBy>().unwrap(),
            VersionOrderBy::VersionIdentifier
        );
    }
}
