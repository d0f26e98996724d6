#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]
// DefaultCatalogClient is used through CatalogClientPort, not its generic internals
#![allow(private_interfaces)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::DefaultCatalogClient;

// Configuration
pub use config::{CatalogClientConfig, DEFAULT_API_BASE_URL};

// Errors
pub use error::{CatalogError, CatalogResult};
