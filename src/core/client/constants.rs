//! Centralized constants for the default endpoint, UA and timeouts.

use std::time::Duration;

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("finnhub-rs/", env!("CARGO_PKG_VERSION"));

/// Finnhub quote endpoint (symbol goes in the query string).
pub(crate) const DEFAULT_BASE_QUOTE: &str = "https://finnhub.io/api/v1/quote";

/// Header carrying the API token.
pub(crate) const TOKEN_HEADER: &str = "X-Finnhub-Token";

/// Overall request timeout unless the builder says otherwise.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
