//! Core types for Manga Panel.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod identity;
pub mod manga;

pub use email::{Email, EmailError};
pub use id::MangaId;
pub use identity::Identity;
pub use manga::Manga;
