#![allow(dead_code)]

use finnhub_rs::FhClient;
use httpmock::{Method::GET, Mock, MockServer};
use std::{env, fs, path::Path, time::Duration};
use url::Url;

pub const QUOTE_PATH: &str = "/api/v1/quote";
pub const TOKEN_HEADER: &str = "x-finnhub-token";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// The credential for live tests, read from `FINNHUB_API_TOKEN`.
/// Each test that needs it calls this and hands the value to its own client.
pub fn api_token() -> Option<String> {
    env::var("FINNHUB_API_TOKEN").ok().filter(|t| !t.is_empty())
}

pub fn quote_base(server: &MockServer) -> Url {
    Url::parse(&format!("{}{}", server.base_url(), QUOTE_PATH)).unwrap()
}

/// A client pointed at the mock server, with `token` already set.
pub fn client_for(server: &MockServer, token: &str) -> FhClient {
    FhClient::builder()
        .base_quote(quote_base(server))
        .token(token)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{endpoint}_{symbol}.{ext}"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn mock_quote<'a>(server: &'a MockServer, symbol: &'a str, body: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(QUOTE_PATH).query_param("symbol", symbol);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Catch-all mock used to prove that no request reached the server.
pub fn mock_any_quote(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path(QUOTE_PATH);
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    })
}
