//! Test/recording helpers for persisting HTTP fixtures.
//! Compiled only when the `test-mode` feature is enabled.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn fixture_dir() -> PathBuf {
    env::var("FH_FIXDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// File name a recorded body is stored under, e.g. `quote_GME.json`.
/// Characters that are awkward in paths (`/`, `:`, `^`) become `_`.
pub(crate) fn fixture_name(endpoint: &str, symbol: &str, ext: &str) -> String {
    let safe: String = symbol
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':' | '^') { '_' } else { c })
        .collect();
    format!("{endpoint}_{safe}.{ext}")
}

pub(crate) fn record_fixture(
    endpoint: &str,
    symbol: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let dir = fixture_dir();
    fs::create_dir_all(&dir)?;
    let path = dir.join(fixture_name(endpoint, symbol, ext));
    fs::write(&path, body)?;

    if env::var("FH_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("FH_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}
