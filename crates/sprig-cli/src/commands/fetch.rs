//! `sprig fetch` command implementation.
//!
//! Validates the type/option combination and the identifier up front, then
//! delegates to the registry client. This is the only validation boundary:
//! the query builders below silently drop whatever does not apply.

use clap::{Args, ValueEnum};

use sprig_core::error::{SprigError, SprigResult};
use sprig_core::types::{
    PackageFetchOptions, ProfileFetchOptions, Selector, VersionFetchOptions,
};

use super::{render_json, CommandContext};

/// Arguments for `sprig fetch`
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// The kind of record to fetch
    #[arg(value_enum)]
    pub kind: RecordKind,

    /// Integer ID, name, or semver identifier; `*` fetches the collection
    pub name_or_id: String,

    /// Comma-separated version identifiers (or the word "default") to embed
    /// in full. Packages only.
    #[arg(short = 'v', long)]
    pub include_versions: Option<String>,

    /// Column to order collection results by
    #[arg(short = 'o', long)]
    pub order_by: Option<String>,

    /// Whether to return collection results in ascending or descending order
    #[arg(short = 'd', long)]
    pub order_direction: Option<String>,

    /// Parent package of the version when identifying it by its semantic
    /// version identifier. Versions only.
    #[arg(short = 'i', long)]
    pub package_id: Option<String>,

    /// Cap on the number of collection results
    #[arg(short = 'q', long)]
    pub quantity: Option<u32>,

    /// Resume the collection after the record with this ID. Versions only.
    #[arg(long)]
    pub cursor: Option<u64>,
}

/// The record kinds the registry serves
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Package,
    Profile,
    Version,
}

/// A fully validated fetch request, ready for the client
#[derive(Debug, PartialEq)]
pub(crate) enum FetchRequest {
    Package(Selector, PackageFetchOptions),
    Profile(Selector, ProfileFetchOptions),
    Version(Selector, VersionFetchOptions),
}

/// Execute the `sprig fetch` command
pub async fn execute(args: FetchArgs, ctx: &CommandContext) -> SprigResult<()> {
    let rendered = match build_request(&args)? {
        FetchRequest::Package(selector, options) => {
            render_json(&ctx.client.fetch_packages(&selector, Some(&options)).await?)?
        }
        FetchRequest::Profile(selector, options) => {
            render_json(&ctx.client.fetch_profiles(&selector, Some(&options)).await?)?
        }
        FetchRequest::Version(selector, options) => {
            render_json(&ctx.client.fetch_versions(&selector, Some(&options)).await?)?
        }
    };

    println!("{}", rendered);
    Ok(())
}

/// Validate the cross-field constraints and build the typed request
pub(crate) fn build_request(args: &FetchArgs) -> SprigResult<FetchRequest> {
    if args.include_versions.is_some() && args.kind != RecordKind::Package {
        return Err(SprigError::invalid_options(
            "includeVersions",
            "may only be used when fetching packages",
        ));
    }

    if args.package_id.is_some() && args.kind != RecordKind::Version {
        return Err(SprigError::invalid_options(
            "packageId",
            "may only be used when fetching versions",
        ));
    }

    if args.cursor.is_some() && args.kind != RecordKind::Version {
        return Err(SprigError::invalid_options(
            "cursor",
            "may only be used when fetching versions",
        ));
    }

    if args.order_direction.is_some() && args.order_by.is_none() {
        return Err(SprigError::invalid_options(
            "orderDirection",
            "requires orderBy",
        ));
    }

    let selector: Selector = args.name_or_id.parse()?;

    // A version is addressed by integer ID or by a valid semver identifier
    if args.kind == RecordKind::Version {
        if let Selector::Key(key) = &selector {
            if semver::Version::parse(key).is_err() {
                return Err(SprigError::invalid_options(
                    "nameOrId",
                    "not an integer ID and not a valid semver identifier",
                ));
            }
        }
    }

    let order_direction = args
        .order_direction
        .as_deref()
        .map(str::parse)
        .transpose()?;

    match args.kind {
        RecordKind::Package => Ok(FetchRequest::Package(
            selector,
            PackageFetchOptions {
                include_versions: args
                    .include_versions
                    .as_deref()
                    .map(|list| list.split(',').map(str::to_string).collect()),
                order_by: args.order_by.as_deref().map(str::parse).transpose()?,
                order_direction,
                quantity: args.quantity,
            },
        )),
        RecordKind::Profile => Ok(FetchRequest::Profile(
            selector,
            ProfileFetchOptions {
                order_by: args.order_by.as_deref().map(str::parse).transpose()?,
                order_direction,
                quantity: args.quantity,
            },
        )),
        RecordKind::Version => Ok(FetchRequest::Version(
            selector,
            VersionFetchOptions {
                package_id: args.package_id.clone(),
                cursor: args.cursor,
                order_by: args.order_by.as_deref().map(str::parse).transpose()?,
                order_direction,
                quantity: args.quantity,
            },
        )),
    }
}
