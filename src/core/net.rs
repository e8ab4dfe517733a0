/// Read a successful response body as text.
///
/// Under the `test-mode` feature with `FH_RECORD=1`, the body is also saved as
/// `tests/fixtures/<endpoint>_<symbol>.<ext>` so offline tests can replay it.
/// A failed write is reported on stderr and never fails the request.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
    symbol: &str,
    ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if recording_enabled()
            && let Err(e) = crate::core::fixtures::record_fixture(endpoint, symbol, ext, &text)
        {
            eprintln!("FH_RECORD: failed to write {endpoint} fixture for {symbol}: {e}");
        }
    }
    #[cfg(not(feature = "test-mode"))]
    let _ = (endpoint, symbol, ext);

    Ok(text)
}

#[cfg(feature = "test-mode")]
fn recording_enabled() -> bool {
    std::env::var("FH_RECORD").is_ok_and(|v| v == "1")
}
