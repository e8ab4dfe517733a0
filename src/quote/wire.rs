use chrono::DateTime;
use serde::Deserialize;

use super::model::Quote;

/// Body of `GET /quote`. Absent or `null` fields read as zero.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct QuoteNode {
    #[serde(rename = "t", default)]
    pub(crate) time: Option<f64>,
    #[serde(rename = "o", default)]
    pub(crate) open: Option<f64>,
    #[serde(rename = "h", default)]
    pub(crate) high: Option<f64>,
    #[serde(rename = "l", default)]
    pub(crate) low: Option<f64>,
    #[serde(rename = "c", default)]
    pub(crate) current: Option<f64>,
    #[serde(rename = "pc", default)]
    pub(crate) previous_close: Option<f64>,
}

impl QuoteNode {
    /// Map into a public `Quote` for `symbol`. Fails only if `t` is outside
    /// the range chrono can represent.
    pub(crate) fn into_quote(self, symbol: &str) -> Result<Quote, String> {
        // fractional seconds are dropped
        let secs = self.time.unwrap_or_default() as i64;
        let as_of = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| format!("timestamp {secs} is out of range"))?;

        Ok(Quote {
            symbol: symbol.to_string(),
            open: self.open.unwrap_or_default(),
            high: self.high.unwrap_or_default(),
            low: self.low.unwrap_or_default(),
            current: self.current.unwrap_or_default(),
            previous_close: self.previous_close.unwrap_or_default(),
            as_of,
        })
    }
}
