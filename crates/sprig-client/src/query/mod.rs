//! Query-string construction for registry requests.
//!
//! One pure builder per entity kind. Every query carries `format=json`: the
//! server answers with HTML otherwise, which is useless to a client library.
//!
//! Options that do not apply to the selector mode in use are silently
//! dropped rather than rejected. The CLI validates type/option combinations
//! before they reach this layer.

use url::form_urlencoded::Serializer;

use sprig_core::types::{
    OrderDirection, PackageFetchOptions, ProfileFetchOptions, SearchOptions, Selector,
    VersionFetchOptions,
};

/// Build the query string for a package fetch
pub fn package_query(selector: &Selector, options: Option<&PackageFetchOptions>) -> String {
    let mut query = Serializer::new(String::new());
    query.append_pair("format", "json");

    if let Some(options) = options {
        if selector.is_all() {
            append_ordering(
                &mut query,
                options.order_by.map(|column| column.as_str()),
                options.order_direction,
            );
            append_quantity(&mut query, options.quantity);
        } else if let Some(versions) = &options.include_versions {
            query.append_pair("include_versions", &versions.join(","));
        }
    }

    query.finish()
}

/// Build the query string for a profile fetch
pub fn profile_query(selector: &Selector, options: Option<&ProfileFetchOptions>) -> String {
    let mut query = Serializer::new(String::new());
    query.append_pair("format", "json");

    if let Some(options) = options {
        if selector.is_all() {
            append_ordering(
                &mut query,
                options.order_by.map(|column| column.as_str()),
                options.order_direction,
            );
            append_quantity(&mut query, options.quantity);
        }
    }

    query.finish()
}

/// Build the query string for a version fetch
pub fn version_query(selector: &Selector, options: Option<&VersionFetchOptions>) -> String {
    let mut query = Serializer::new(String::new());
    query.append_pair("format", "json");

    if let Some(options) = options {
        if selector.is_all() {
            if let Some(cursor) = options.cursor {
                query.append_pair("cursor", &cursor.to_string());
            }

            append_ordering(
                &mut query,
                options.order_by.map(|column| column.as_str()),
                options.order_direction,
            );
            append_quantity(&mut query, options.quantity);
        } else if let Some(package_id) = &options.package_id {
            query.append_pair("package_id", package_id);
        }
    }

    query.finish()
}

/// Build the query string for a free-text package search
pub fn search_query(text: &str, options: Option<&SearchOptions>) -> String {
    let mut query = Serializer::new(String::new());
    query.append_pair("query", text);
    query.append_pair("format", "json");

    if let Some(options) = options {
        append_quantity(&mut query, options.quantity);
    }

    query.finish()
}

/// Append the ordering column; descending order is a leading `-` on the
/// column name. A direction without a column is dropped.
fn append_ordering(
    query: &mut Serializer<'_, String>,
    column: Option<&str>,
    direction: Option<OrderDirection>,
) {
    if let Some(column) = column {
        match direction {
            Some(OrderDirection::Descending) => {
                query.append_pair("orderBy", &format!("-{}", column));
            }
            _ => {
                query.append_pair("orderBy", column);
            }
        }
    }
}

fn append_quantity(query: &mut Serializer<'_, String>, quantity: Option<u32>) {
    if let Some(quantity) = quantity {
        query.append_pair("quantity", &quantity.to_string());
    }
}
