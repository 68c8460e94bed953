//! URL shortener service implementation.
//!
//! This crate provides [`ShortenerService`], which composes a
//! [`Repository`](burrow_core::Repository) with a
//! [`Generator`](burrow_generator::Generator) to implement the
//! [`Shortener`](burrow_core::Shortener) operations. Core types are
//! re-exported from `burrow_core`.

pub mod service;

pub use burrow_core::{Extension, ShortenParams, Shortener, ShortenerError, UrlRecord};
pub use service::{ShortenerService, ShortenerSettings};
