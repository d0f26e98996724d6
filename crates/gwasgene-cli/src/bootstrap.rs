//! CLI bootstrap - the composition root.
//!
//! This is the only place where the catalog adapter is instantiated.
//! Handlers receive a `CliContext` and reach the catalog through the port.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use gwasgene_catalog::{CatalogClientConfig, DefaultCatalogClient};
use gwasgene_core::paths::{
    DEFAULT_GCST_LIST_RELATIVE, DEFAULT_MANIFEST_RELATIVE, DataDirSource, repo_root,
    resolve_data_dir,
};
use gwasgene_core::ports::CatalogClientPort;

use crate::error::CliError;

/// Environment override for the REST API base URL.
pub const API_URL_ENV: &str = "GWASGENE_API_URL";

/// Environment override for the FTP mirror base URL.
pub const FTP_URL_ENV: &str = "GWASGENE_FTP_URL";

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Test data directory.
    pub data_dir: PathBuf,
    /// Where `data_dir` came from.
    pub data_dir_source: DataDirSource,
    /// Catalog client settings.
    pub catalog: CatalogClientConfig,
}

impl CliConfig {
    /// Resolve configuration from flags and the environment.
    pub fn resolve(data_dir: Option<&Path>) -> Self {
        let (data_dir, data_dir_source) = resolve_data_dir(data_dir);

        let mut catalog = CatalogClientConfig::new();
        if let Some(url) = env_value(API_URL_ENV) {
            catalog = catalog.with_api_base_url(url);
        }
        if let Some(url) = env_value(FTP_URL_ENV) {
            catalog = catalog.with_ftp_base_url(url);
        }

        Self {
            data_dir,
            data_dir_source,
            catalog,
        }
    }

    /// Default curated accession list.
    pub fn default_gcst_list() -> PathBuf {
        repo_root().join(DEFAULT_GCST_LIST_RELATIVE)
    }

    /// Default URL manifest.
    pub fn default_manifest() -> PathBuf {
        repo_root().join(DEFAULT_MANIFEST_RELATIVE)
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    pub config: CliConfig,
    /// Catalog access for query and download commands.
    pub catalog: Arc<dyn CatalogClientPort>,
}

impl CliContext {
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    pub fn catalog(&self) -> &Arc<dyn CatalogClientPort> {
        &self.catalog
    }
}

/// Bootstrap the CLI.
///
/// Builds the HTTP catalog client; no request is made here.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let client = DefaultCatalogClient::new(&config.catalog).map_err(CliError::from)?;
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        source = ?config.data_dir_source,
        "Bootstrapped CLI context"
    );

    Ok(CliContext {
        config,
        catalog: Arc::new(client),
    })
}
