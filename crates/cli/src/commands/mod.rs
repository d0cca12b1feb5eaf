//! Command implementations.
//!
//! Every command runs against a [`Context`] assembled from the environment:
//! file-backed storage areas, the stores over them, and the catalog.

use std::path::Path;
use std::rc::Rc;

use manga_panel_client::{
    ClientConfig, ConfigError, FavoritesStore, FileStorage, Session, StorageArea,
};
use manga_panel_core::{CatalogError, EmailError, StaticCatalog};
use thiserror::Error;

pub mod catalog;
pub mod favorites;
pub mod session;

/// Catalog used when `MP_CATALOG_PATH` is not set.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    CatalogFile {
        /// Catalog path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The catalog is malformed.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Invalid email.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Stores and catalog shared by all commands.
pub struct Context {
    /// Favorites of the current reader.
    pub favorites: FavoritesStore,
    /// Login state.
    pub session: Session,
    /// Catalog lookup.
    pub catalog: Rc<StaticCatalog>,
}

impl Context {
    /// Build the context from environment configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or the catalog is invalid.
    pub fn from_env() -> Result<Self, CliError> {
        let config = ClientConfig::from_env()?;
        let catalog = match &config.catalog_path {
            Some(path) => load_catalog(path)?,
            None => StaticCatalog::from_json(BUNDLED_CATALOG)?,
        };

        tracing::debug!(
            data_dir = %config.data_dir.display(),
            catalog = catalog.len(),
            "Loaded configuration"
        );

        Ok(Self::new(
            Rc::new(FileStorage::new(config.durable_path())),
            Rc::new(FileStorage::new(config.volatile_path())),
            &config,
            catalog,
        ))
    }

    /// Build the context over explicit storage areas.
    #[must_use]
    pub fn new(
        durable: Rc<dyn StorageArea>,
        volatile: Rc<dyn StorageArea>,
        config: &ClientConfig,
        catalog: StaticCatalog,
    ) -> Self {
        let favorites = FavoritesStore::new(durable, volatile, config.keys.clone());
        let session = Session::new(favorites.clone());
        Self {
            favorites,
            session,
            catalog: Rc::new(catalog),
        }
    }
}

fn load_catalog(path: &Path) -> Result<StaticCatalog, CliError> {
    let json = std::fs::read_to_string(path).map_err(|source| CliError::CatalogFile {
        path: path.display().to_string(),
        source,
    })?;
    Ok(StaticCatalog::from_json(&json)?)
}
