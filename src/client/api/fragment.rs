use reqwasm::http::Request;

use crate::client::component::html_fragment::fallback_snippet;

/// Fetches an HTML fragment by relative path and returns its raw text.
///
/// Never fails: a non-success status or transport error resolves to a
/// fallback snippet naming the failed path, so callers can inject the
/// result unconditionally.
pub async fn load_fragment(path: &str) -> String {
    match Request::get(path).send().await {
        Ok(response) if (200..300).contains(&(response.status() as u64)) => response
            .text()
            .await
            .unwrap_or_else(|_| fallback_snippet(path)),
        _ => fallback_snippet(path),
    }
}
