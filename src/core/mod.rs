//! Core components of the `finnhub-rs` client.
//!
//! - The main [`FhClient`] and its builder.
//! - The primary [`FhError`] type.
//! - Internal networking helpers.

/// The main client (`FhClient`), builder, and configuration.
pub mod client;
/// The primary error type (`FhError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

pub use client::{FhClient, FhClientBuilder};
pub use error::FhError;
