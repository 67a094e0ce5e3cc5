//! Static asset fetching.
//!
//! Thin layer over [`Host::fetch_text`]: text assets pass through, JSON
//! assets are decoded with `serde_json`. No retry and no cache; every call
//! goes to the network.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::host::Host;

/// Fetch a text asset (an HTML fragment).
///
/// # Errors
///
/// Propagates the host's fetch error.
pub async fn fetch_text<H: Host + ?Sized>(host: &H, path: &str) -> Result<String, AppError> {
    log::debug!("fetch {path}");
    host.fetch_text(path).await
}

/// Fetch and decode a JSON asset.
///
/// # Errors
///
/// Propagates the host's fetch error, or [`AppError::Parse`] when the body
/// is not valid JSON for `T`.
pub async fn fetch_json<T: DeserializeOwned, H: Host + ?Sized>(host: &H, path: &str) -> Result<T, AppError> {
    let body = fetch_text(host, path).await?;
    serde_json::from_str(&body).map_err(|source| AppError::Parse { path: path.to_owned(), source })
}
