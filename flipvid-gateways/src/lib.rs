//! # flipvid-gateways
//!
//! Implementations of the gateway contracts towards external
//! collaborators, most notably the remotely hosted course manifest.

pub mod manifest;

pub use manifest::ManifestGateway;
