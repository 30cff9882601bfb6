//! Core library for the Galleria artwork gallery.
//!
//! Owns the pieces with actual design content: the artwork repository port
//! and its store adapters, the pure query/filter engine, derived gallery
//! statistics, and the catalog service that ties a repository to an
//! explicitly invalidated list cache. The HTTP surface lives in
//! `galleria-server`; the shared data model in `galleria-model`.

pub mod catalog;
pub mod database;
pub mod error;
pub mod query;
pub mod stats;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

pub use catalog::ArtworkCatalog;
pub use database::{
    ArtworkRepository, MemoryArtworkRepository, PostgresArtworkRepository,
};
pub use error::{GalleryError, Result};
pub use stats::GalleryStats;
