//! Registry API client for Sprig
//!
//! This crate provides the HTTP client for fetching package, profile, and
//! version records from a Sprig registry server. It shapes query parameters
//! for single-entity and collection requests, and normalizes serialized
//! timestamps in the responses into date values.

pub mod api;
pub mod client;
pub mod config;
pub mod normalize;
pub mod query;
pub mod transport;

// Re-export main types
pub use api::{ErrorEnvelope, RawPackage, RawPage, RawProfile, RawVersion, RawVersions};
pub use client::RegistryClient;
pub use config::ApiConfig;
pub use transport::{HttpTransport, Transport, TransportResponse};

pub use sprig_core::error::{SprigError, SprigResult};
