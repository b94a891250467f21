/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # TPP Client
//!
//! Async client for the Venafi Trust Protection Platform (TPP) REST API.
//!
//! The crate turns typed calls into authenticated HTTP requests against the
//! `/vedsdk` endpoints and maps the platform's result codes onto [`AppError`].
//!
//! - Lazy, single-flight login: the API key is obtained on first use and cached
//! - Configuration object CRUD (create, read, write, enumerate, delete)
//! - Certificate listing, retrieval and import
//! - Certificate vault (X509 store) management
//! - Identity lookup, policy folders and CA templates
//! - PEM encoding/decoding for certificates and private keys
//!
//! ## Example
//! ```ignore
//! use tpp_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let policy = client.create_policy("\\VED\\Policy\\Team").await?;
//! let certs = client.list().await?;
//! ```
//!
//! [`AppError`]: crate::error::AppError

/// Service layer: configuration, authentication, client facade and services
pub mod application;

/// Constants used across the crate
pub mod constants;

/// X.509 certificates, private keys and their PEM codec
pub mod crypto;

/// Error types
pub mod error;

/// Wire models and the authenticated request pipeline
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Caller-facing domain types
pub mod presentation;

/// Environment and logging helpers
pub mod utils;

pub use application::config;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
