//! Response normalization.
//!
//! Converts wire records (timestamps as strings) into the owned entity types
//! in `sprig-core`, parsing every timestamp into a `DateTime<Utc>`. Embedded
//! versions inside a package are normalized recursively; an identifier list
//! passes through untouched. No timestamp leaves this layer as a string.

use chrono::{DateTime, Utc};

use sprig_core::error::{SprigError, SprigResult};
use sprig_core::types::{Package, Profile, Version, Versions};

use crate::api::{RawPackage, RawProfile, RawVersion, RawVersions};

/// Parse an ISO-like timestamp string into a UTC date value.
///
/// Parsing a formatted `DateTime` back through this function yields the same
/// instant, so normalization is idempotent.
pub fn parse_timestamp(raw: &str) -> SprigResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| SprigError::Deserialize {
            message: format!("invalid timestamp '{}': {}", raw, err),
        })
}

/// Normalize a wire version record
pub fn normalize_version(raw: RawVersion) -> SprigResult<Version> {
    Ok(Version {
        id: raw.id,
        version_identifier: raw.version_identifier,
        author: raw.author,
        description: raw.description,
        script: raw.js,
        style: raw.css,
        parent_package: raw.parent_package,
        date_created: parse_timestamp(&raw.date_created)?,
    })
}

/// Normalize a wire profile record
pub fn normalize_profile(raw: RawProfile) -> SprigResult<Profile> {
    Ok(Profile {
        user_id: raw.user_id,
        name: raw.name,
        description: raw.description,
        email: raw.email,
        email_visible: raw.email_visible,
        date_created: parse_timestamp(&raw.date_created)?,
        date_style: raw.date_style,
        time_style: raw.time_style,
        packages: raw.packages,
    })
}

/// Normalize a wire package record.
///
/// Dispatches on the shape of the `versions` field: identifier strings are
/// kept as-is, embedded records are normalized recursively. The shape is
/// decided by whether the request asked for version inclusion, so no extra
/// flag is needed here.
pub fn normalize_package(raw: RawPackage) -> SprigResult<Package> {
    let versions = match raw.versions {
        RawVersions::Identifiers(ids) => Versions::Identifiers(ids),
        RawVersions::Embedded(raw_versions) => Versions::Embedded(
            raw_versions
                .into_iter()
                .map(normalize_version)
                .collect::<SprigResult<Vec<_>>>()?,
        ),
    };

    Ok(Package {
        id: raw.id,
        name: raw.name,
        author: raw.author,
        owner: raw.owner,
        description: raw.description,
        default_version: raw.default_version,
        versions,
        date_created: parse_timestamp(&raw.date_created)?,
        date_modified: parse_timestamp(&raw.date_modified)?,
        keywords: raw.keywords,
        downloads: raw.downloads,
        tag: raw.tag,
    })
}
