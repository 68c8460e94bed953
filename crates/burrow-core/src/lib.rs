//! Core types and traits for the Burrow URL shortener.
//!
//! This crate provides the types shared by the storage backends, the
//! extension generators and the shortener service.

pub mod error;
pub mod extension;
pub mod repository;
pub mod shortener;

pub use error::{ShortenerError, StorageError};
pub use extension::Extension;
pub use repository::{ReadRepository, Repository, UrlRecord};
pub use shortener::{ShortenParams, Shortener};
