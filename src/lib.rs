//! finnhub-rs: a small async client for the Finnhub.io quote endpoint.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), finnhub_rs::FhError> {
//! let mut client = finnhub_rs::FhClient::default();
//! client.set_token(std::env::var("FINNHUB_API_TOKEN").unwrap_or_default());
//!
//! let quote = client.quote("AAPL").await?;
//! println!("{quote}");
//! # Ok(())
//! # }
//! ```
//!
//! Features:
//! - `tracing`: instrument API calls with `tracing` spans and events.
//! - `tracing-subscriber`: adds [`init_tracing_for_tests`].
//! - `test-mode`: record response bodies as fixtures when `FH_RECORD=1`.

pub mod core;
pub mod quote;

pub use crate::core::{FhClient, FhClientBuilder, FhError};
pub use quote::Quote;

/// Install a `fmt` subscriber filtered by `RUST_LOG` (default `finnhub_rs=debug`).
/// Safe to call more than once; later calls are no-ops.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("finnhub_rs=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
