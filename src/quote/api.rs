use crate::core::client::TOKEN_HEADER;
use crate::core::{FhClient, FhError, net};
use serde::de;

use super::model::Quote;
use super::wire::QuoteNode;

/// Call site reported by every error from this endpoint.
const CALLER: &str = "FhClient::quote()";

pub(crate) async fn fetch_quote(client: &FhClient, symbol: &str) -> Result<Quote, FhError> {
    let token = client.raw_token();
    if token.is_empty() {
        return Err(FhError::TokenNotSet { caller: CALLER });
    }
    if symbol.is_empty() {
        return Err(FhError::MissingSymbol { caller: CALLER });
    }

    let mut url = client.base_quote().clone();
    url.query_pairs_mut().append_pair("symbol", symbol);

    let resp = client
        .http()
        .get(url)
        .header(TOKEN_HEADER, token)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|source| FhError::Http {
            caller: CALLER,
            source,
        })?;

    let status = resp.status();
    #[cfg(feature = "tracing")]
    tracing::debug!(status = status.as_u16(), "quote response");

    if !status.is_success() {
        return Err(FhError::Status {
            caller: CALLER,
            symbol: symbol.to_string(),
            status: status.as_u16(),
        });
    }

    let body = net::get_text(resp, "quote", symbol, "json")
        .await
        .map_err(|source| FhError::Http {
            caller: CALLER,
            source,
        })?;

    parse_quote(&body, symbol)
}

/// Decode the first JSON value in `body`; anything after it is ignored.
/// A `null` body reads as an all-zero quote.
pub(crate) fn parse_quote(body: &str, symbol: &str) -> Result<Quote, FhError> {
    let first = serde_json::Deserializer::from_str(body)
        .into_iter::<Option<QuoteNode>>()
        .next()
        .unwrap_or_else(|| Err(de::Error::custom("empty response body")));
    let node = first
        .map_err(|source| FhError::Decode {
            caller: CALLER,
            source,
        })?
        .unwrap_or_default();
    node.into_quote(symbol)
        .map_err(|msg| FhError::Data { caller: CALLER, msg })
}
