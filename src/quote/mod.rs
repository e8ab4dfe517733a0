//! The `/quote` endpoint: current price snapshot for one symbol.

mod api;
mod model;
mod wire;

pub(crate) use api::fetch_quote;
pub use model::Quote;
