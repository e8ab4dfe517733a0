use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Variants raised by an API call carry `caller`, the call site that produced
/// them (e.g. `FhClient::quote()`), and their messages start with it.
#[derive(Debug, Error)]
pub enum FhError {
    /// The API token was never set (or was set to an empty string).
    #[error("{caller} token not set, use FhClient::set_token()")]
    TokenNotSet {
        /// The call site that rejected the request.
        caller: &'static str,
    },

    /// An empty symbol was supplied.
    #[error("{caller} no symbol given")]
    MissingSymbol {
        /// The call site that rejected the request.
        caller: &'static str,
    },

    /// The HTTP client or request could not be built, the request could not be
    /// sent, or its body could not be read.
    #[error("{caller}: {source}")]
    Http {
        /// The call site that issued the request.
        caller: &'static str,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status. The response body is discarded.
    #[error("{caller} request for \"{symbol}\" failed (status {status})")]
    Status {
        /// The call site that issued the request.
        caller: &'static str,
        /// The symbol that was requested.
        symbol: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body was not the JSON shape the endpoint documents.
    #[error("{caller} error decoding response body: {source}")]
    Decode {
        /// The call site that decoded the body.
        caller: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The body decoded, but a value in it cannot be represented.
    #[error("{caller} data out of range: {msg}")]
    Data {
        /// The call site that mapped the body.
        caller: &'static str,
        /// What was wrong with the data.
        msg: String,
    },

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl FhError {
    /// The call site recorded on the error, if the error came from an API call.
    pub fn caller(&self) -> Option<&'static str> {
        match self {
            Self::TokenNotSet { caller }
            | Self::MissingSymbol { caller }
            | Self::Http { caller, .. }
            | Self::Status { caller, .. }
            | Self::Decode { caller, .. }
            | Self::Data { caller, .. } => Some(*caller),
            Self::Url(_) => None,
        }
    }

    /// True if the error is a transport timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http { source, .. } if source.is_timeout())
    }
}
