use crate::fetch::client::HttpClient;
use async_trait::async_trait;
use chrono::Utc;

/// An [`HttpClient`] wrapper that appends a `cachebust` query parameter with
/// the current unix-millisecond timestamp, so intermediaries never serve a
/// stale copy of the published sheet export.
pub struct CacheBust<C> {
    pub inner: C,
}

impl<C> CacheBust<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for CacheBust<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.url_mut()
            .query_pairs_mut()
            .append_pair("cachebust", &Utc::now().timestamp_millis().to_string());
        self.inner.execute(req).await
    }
}
