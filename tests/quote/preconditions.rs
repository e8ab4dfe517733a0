use crate::common::{mock_any_quote, quote_base, setup_server};
use finnhub_rs::{FhClient, FhError};

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    let server = setup_server();
    let any = mock_any_quote(&server);

    let client = FhClient::builder()
        .base_quote(quote_base(&server))
        .build()
        .unwrap();

    for symbol in ["GME", ""] {
        let err = client.quote(symbol).await.unwrap_err();
        match err {
            FhError::TokenNotSet { caller } => assert_eq!(caller, "FhClient::quote()"),
            other => panic!("expected TokenNotSet for {symbol:?}, got {other:?}"),
        }
    }

    any.assert_calls(0);
}

#[tokio::test]
async fn empty_symbol_fails_before_any_request() {
    let server = setup_server();
    let any = mock_any_quote(&server);

    let mut client = FhClient::builder()
        .base_quote(quote_base(&server))
        .build()
        .unwrap();
    client.set_token("token");

    let err = client.quote("").await.unwrap_err();
    assert!(matches!(err, FhError::MissingSymbol { .. }), "got {err:?}");
    assert!(err.to_string().starts_with("FhClient::quote()"));

    any.assert_calls(0);
}

#[tokio::test]
async fn token_cleared_with_empty_string_counts_as_unset() {
    let server = setup_server();
    let any = mock_any_quote(&server);

    let mut client = crate::common::client_for(&server, "token");
    client.set_token("");

    let err = client.quote("GME").await.unwrap_err();
    assert!(matches!(err, FhError::TokenNotSet { .. }), "got {err:?}");
    any.assert_calls(0);
}
