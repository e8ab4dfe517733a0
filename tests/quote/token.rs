use crate::common::{QUOTE_PATH, TOKEN_HEADER, client_for, setup_server};
use httpmock::Method::GET;

#[tokio::test]
async fn latest_token_is_sent() {
    let server = setup_server();
    let stale = server.mock(|when, then| {
        when.method(GET).path(QUOTE_PATH).header(TOKEN_HEADER, "first");
        then.status(200).body(r#"{"c":1.0}"#);
    });
    let fresh = server.mock(|when, then| {
        when.method(GET).path(QUOTE_PATH).header(TOKEN_HEADER, "second");
        then.status(200).body(r#"{"c":2.0}"#);
    });

    let mut client = client_for(&server, "zero");
    client.set_token("first");
    client.set_token("second");

    let q = client.quote("GME").await.unwrap();
    assert_eq!(q.current(), 2.0);
    fresh.assert();
    stale.assert_calls(0);
}

#[tokio::test]
async fn token_is_sent_verbatim() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(QUOTE_PATH)
            .header(TOKEN_HEADER, "c0ffee-Token_42");
        then.status(200).body("{}");
    });

    let client = client_for(&server, "c0ffee-Token_42");
    client.quote("GME").await.unwrap();
    mock.assert();
}
