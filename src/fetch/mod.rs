mod basic;
mod cache_bust;
mod client;

pub use basic::BasicClient;
pub use cache_bust::CacheBust;
pub use client::HttpClient;

use anyhow::Result;

/// Fetches a URL as text. Non-success status codes are errors; no retry is
/// attempted.
pub async fn fetch_text<C: HttpClient>(client: &C, url: &str) -> Result<String> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?.error_for_status()?;
    Ok(resp.text().await?)
}
