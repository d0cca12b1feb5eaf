//! Manga Panel Core - Shared types library.
//!
//! This crate provides common types used across all Manga Panel components:
//! - `client` - Session identity, scoped favorites and change notification
//! - `cli` - Command-line driver for the client layer
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no notification plumbing. This keeps it lightweight and allows it to be used
//! anywhere, including `wasm32` builds of the front end.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails and catalog IDs, identity and manga records
//! - [`catalog`] - Read-only catalog lookup

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, CatalogError, StaticCatalog};
pub use types::*;
