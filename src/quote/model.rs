use chrono::{DateTime, Local, Utc};
use std::fmt;

/// A point-in-time price snapshot for one symbol.
///
/// Only ever produced by a successful [`FhClient::quote`](crate::FhClient::quote)
/// call. Prices are passed through as upstream reports them; no ordering
/// between `low` and `high` is guaranteed.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub(crate) symbol: String,
    pub(crate) open: f64,
    pub(crate) high: f64,
    pub(crate) low: f64,
    pub(crate) current: f64,
    pub(crate) previous_close: f64,
    pub(crate) as_of: DateTime<Utc>,
}

impl Quote {
    /// The symbol exactly as passed to the request.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
    /// Open price of the day.
    pub const fn open(&self) -> f64 {
        self.open
    }
    /// High price of the day.
    pub const fn high(&self) -> f64 {
        self.high
    }
    /// Low price of the day.
    pub const fn low(&self) -> f64 {
        self.low
    }
    /// Current price.
    pub const fn current(&self) -> f64 {
        self.current
    }
    /// Previous close price.
    pub const fn previous_close(&self) -> f64 {
        self.previous_close
    }
    /// Time the snapshot refers to. The Unix epoch if upstream omitted it.
    pub fn as_of(&self) -> DateTime<Utc> {
        self.as_of
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:\n\tAs of  : {}\n\tCurrent: {:.2}\n\tLow    : {:.2}\n\tHigh   : {:.2}\n\tOpen   : {:.2}\n\tPrevious Close: {:.2}",
            self.symbol,
            self.as_of.with_timezone(&Local),
            self.current,
            self.low,
            self.high,
            self.open,
            self.previous_close,
        )
    }
}
