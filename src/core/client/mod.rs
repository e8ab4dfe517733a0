//! Public client surface + builder.
//! Defaults (endpoint, UA, timeout) live in `constants`.

mod constants;

pub(crate) use constants::TOKEN_HEADER;

use crate::core::FhError;
use crate::quote::Quote;
use constants::{DEFAULT_BASE_QUOTE, DEFAULT_TIMEOUT, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Client for the Finnhub.io API.
///
/// Holds the API token and a configured HTTP client. The HTTP client is shared
/// by every call, so cloning an `FhClient` is cheap and clones reuse the same
/// connection pool.
///
/// A token must be set before any API call; see [`FhClient::set_token`].
///
/// # Example
///
/// ```no_run
/// # use finnhub_rs::FhClient;
/// # #[tokio::main]
/// # async fn main() -> Result<(), finnhub_rs::FhError> {
/// let mut client = FhClient::default();
/// client.set_token("my-api-token");
///
/// let quote = client.quote("GME").await?;
/// println!("{quote}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FhClient {
    http: Client,
    base_quote: Url,
    token: String,
}

impl fmt::Debug for FhClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FhClient")
            .field("base_quote", &self.base_quote.as_str())
            .field("token", &self.token().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl Default for FhClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl FhClient {
    /// Create a new builder.
    pub fn builder() -> FhClientBuilder {
        FhClientBuilder::default()
    }

    /// Build a client with default settings and the given token.
    ///
    /// # Errors
    ///
    /// Fails only if the underlying HTTP client cannot be constructed.
    pub fn new(token: impl Into<String>) -> Result<Self, FhError> {
        Self::builder().token(token).build()
    }

    /// Set the API token, replacing any previous one. The value is not validated.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    /// The current token, or `None` if no (non-empty) token has been set.
    pub fn token(&self) -> Option<&str> {
        (!self.token.is_empty()).then_some(self.token.as_str())
    }

    /// Fetch the current quote for `symbol`.
    ///
    /// The token is checked first, then the symbol; neither failure touches the
    /// network. Any non-2xx response is reported as [`FhError::Status`] whatever
    /// its body says.
    ///
    /// # Errors
    ///
    /// - [`FhError::TokenNotSet`] if no token has been set.
    /// - [`FhError::MissingSymbol`] if `symbol` is empty.
    /// - [`FhError::Http`] on transport failures, including timeouts.
    /// - [`FhError::Status`] on a non-2xx response.
    /// - [`FhError::Decode`] if the body is not the expected JSON.
    /// - [`FhError::Data`] if the timestamp is out of range.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn quote(&self, symbol: &str) -> Result<Quote, FhError> {
        crate::quote::fetch_quote(self, symbol).await
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_quote(&self) -> &Url {
        &self.base_quote
    }
    pub(crate) fn raw_token(&self) -> &str {
        &self.token
    }
}

/* ----------------------- Builder ----------------------- */

const BUILD_CALLER: &str = "FhClientBuilder::build()";

/// Builder for [`FhClient`].
#[derive(Debug, Default)]
pub struct FhClientBuilder {
    user_agent: Option<String>,
    base_quote: Option<Url>,
    token: Option<String>,

    timeout: Option<Option<Duration>>,
    connect_timeout: Option<Duration>,
}

impl FhClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quote endpoint (e.g., `https://finnhub.io/api/v1/quote`).
    #[must_use]
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Set the initial API token.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set a global request timeout (overall). Default: 30 seconds.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(Some(dur));
        self
    }

    /// Disable the overall request timeout; a hung server then blocks the call indefinitely.
    #[must_use]
    pub fn no_timeout(mut self) -> Self {
        self.timeout = Some(None);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// The overall timeout `build` will apply: the default unless overridden,
    /// `None` after [`no_timeout`](Self::no_timeout).
    fn effective_timeout(&self) -> Option<Duration> {
        self.timeout.unwrap_or(Some(DEFAULT_TIMEOUT))
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`FhError::Url`] if the default endpoint fails to parse and
    /// [`FhError::Http`] if the HTTP client cannot be constructed (for
    /// example, a user agent that is not a valid header value).
    pub fn build(self) -> Result<FhClient, FhError> {
        let timeout = self.effective_timeout();
        let base_quote = match self.base_quote {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_QUOTE)?,
        };

        let mut httpb =
            Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build().map_err(|source| FhError::Http {
            caller: BUILD_CALLER,
            source,
        })?;

        Ok(FhClient {
            http,
            base_quote,
            token: self.token.unwrap_or_default(),
        })
    }
}
