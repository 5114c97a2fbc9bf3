//! Core components of the `fxrates-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`FxClient`] and its builder.
//! - The primary [`FxError`] type.
//! - The connectivity signal consumed by the request pipeline.

/// The main client (`FxClient`), builder, and configuration.
pub mod client;
/// The connectivity watch consumed (not owned) by the client.
pub mod connectivity;
/// The primary error type (`FxError`) for the crate.
pub mod error;

// convenient re-exports so most code can just `use crate::core::FxClient`
pub use client::{FxClient, FxClientBuilder, Method, QueryParams};
pub use connectivity::ConnectivityWatch;
pub use error::FxError;
