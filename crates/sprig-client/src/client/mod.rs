//! Fetch orchestrators.
//!
//! `RegistryClient` composes query building, the injected transport, status
//! branching, JSON decoding, and date normalization into one asynchronous
//! operation per entity kind. Each call is a single unit of work: no retries,
//! no caching, no shared state between calls.

use serde::de::DeserializeOwned;
use tracing::debug;

use sprig_core::error::{SprigError, SprigResult};
use sprig_core::types::{
    Fetched, Package, PackageFetchOptions, Page, Profile, ProfileFetchOptions, SearchOptions,
    Selector, Version, VersionFetchOptions,
};

use crate::api::{ErrorEnvelope, RawPage, RawPackage, RawProfile, RawVersion};
use crate::config::ApiConfig;
use crate::normalize::{normalize_package, normalize_profile, normalize_version};
use crate::query;
use crate::transport::{HttpTransport, Transport};

/// Registry API client, generic over the injected transport
#[derive(Debug, Clone)]
pub struct RegistryClient<T = HttpTransport> {
    /// Injected HTTP capability
    transport: T,
    /// Base registry URL, without a trailing slash
    base_url: String,
}

impl RegistryClient<HttpTransport> {
    /// Create a client against the configured registry endpoint.
    ///
    /// Reads `SPRIG_API_URL` / `SPRIG_TIMEOUT_SECS` overrides from the
    /// environment.
    pub fn new() -> SprigResult<Self> {
        Self::with_config(ApiConfig::from_env())
    }

    /// Create a client with an explicit configuration
    pub fn with_config(config: ApiConfig) -> SprigResult<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(transport, config.base_url))
    }
}

impl<T: Transport> RegistryClient<T> {
    /// Create a client with an injected transport, for deterministic tests
    /// or a non-default HTTP stack
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    /// Fetch one package by ID or name, or the package collection with
    /// `Selector::All`
    pub async fn fetch_packages(
        &self,
        selector: &Selector,
        options: Option<&PackageFetchOptions>,
    ) -> SprigResult<Fetched<Package>> {
        let query = query::package_query(selector, options);
        self.fetch::<RawPackage, _, _>("packages", selector, &query, normalize_package)
            .await
    }

    /// Fetch one profile by user ID, or the profile collection with
    /// `Selector::All`
    pub async fn fetch_profiles(
        &self,
        selector: &Selector,
        options: Option<&ProfileFetchOptions>,
    ) -> SprigResult<Fetched<Profile>> {
        let query = query::profile_query(selector, options);
        self.fetch::<RawProfile, _, _>("profiles", selector, &query, normalize_profile)
            .await
    }

    /// Fetch one version by ID or semver identifier, or the version
    /// collection with `Selector::All`
    pub async fn fetch_versions(
        &self,
        selector: &Selector,
        options: Option<&VersionFetchOptions>,
    ) -> SprigResult<Fetched<Version>> {
        let query = query::version_query(selector, options);
        self.fetch::<RawVersion, _, _>("versions", selector, &query, normalize_version)
            .await
    }

    /// Free-text package search.
    ///
    /// The result is the server's JSON as-is; no normalization pass runs
    /// over search results.
    pub async fn search_packages(
        &self,
        text: &str,
        options: Option<&SearchOptions>,
    ) -> SprigResult<serde_json::Value> {
        let query = query::search_query(text, options);
        let url = format!("{}/packages/search/?{}", self.base_url, query);
        let body = self.request(&url).await?;
        decode(&body)
    }

    /// Shared orchestration: URL assembly, request, decode, normalize
    async fn fetch<R, E, F>(
        &self,
        resource: &str,
        selector: &Selector,
        query: &str,
        normalize: F,
    ) -> SprigResult<Fetched<E>>
    where
        R: DeserializeOwned,
        F: Fn(R) -> SprigResult<E>,
    {
        let url = format!(
            "{}/{}/{}?{}",
            self.base_url,
            resource,
            selector.path_segment(),
            query
        );
        let body = self.request(&url).await?;

        if selector.is_all() {
            let raw: RawPage<R> = decode(&body)?;
            let results = raw
                .results
                .into_iter()
                .map(&normalize)
                .collect::<SprigResult<Vec<_>>>()?;

            // Envelope fields pass through unchanged
            Ok(Fetched::Page(Page {
                count: raw.count,
                previous: raw.previous,
                next: raw.next,
                results,
            }))
        } else {
            let raw: R = decode(&body)?;
            Ok(Fetched::One(normalize(raw)?))
        }
    }

    /// Issue the request and branch on the HTTP status.
    ///
    /// Success statuses yield the body for decoding. Anything else becomes a
    /// `Server` error when the body carries a decodable error envelope, and
    /// a synthesized `Status` error when it does not.
    async fn request(&self, url: &str) -> SprigResult<Vec<u8>> {
        debug!(%url, "issuing registry request");
        let response = self.transport.get(url).await?;

        if response.is_success() {
            Ok(response.body)
        } else {
            match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
                Ok(envelope) => Err(SprigError::Server {
                    status: response.status,
                    message: envelope.error,
                }),
                Err(_) => Err(SprigError::Status {
                    status: response.status,
                }),
            }
        }
    }
}

/// Decode a success body; failure preserves the signal that the network
/// operation itself succeeded
fn decode<D: DeserializeOwned>(body: &[u8]) -> SprigResult<D> {
    serde_json::from_slice(body).map_err(|err| SprigError::Deserialize {
        message: err.to_string(),
    })
}
