//! GWAS Catalog port.

mod client;
mod error;

pub use client::CatalogClientPort;
pub use error::{CatalogPortError, CatalogPortResult};
