use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;

use crate::domain::repositories::{PlayerPage, PlayerSource, SourceError};

/// Player source backed by the upstream league HTTP API
///
/// Issues `GET {base_url}/players?per_page=N&cursor=C` with the API key sent
/// verbatim in the `Authorization` header.
#[derive(Debug, Clone)]
pub struct HttpPlayerSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpPlayerSource {
    /// Creates a source for `base_url` (without the `/players` suffix)
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        let base_url: String = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn players_url(&self) -> String {
        format!("{}/players", self.base_url)
    }
}

#[async_trait]
impl PlayerSource for HttpPlayerSource {
    async fn fetch_page(&self, cursor: u64, per_page: u32) -> Result<PlayerPage, SourceError> {
        let response = self
            .client
            .get(self.players_url())
            .query(&[("per_page", per_page as u64), ("cursor", cursor)])
            .header(AUTHORIZATION, &self.api_key)
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SourceError::RateLimited);
        }
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        response
            .json::<PlayerPage>()
            .await
            .map_err(|e| SourceError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped_from_base_url() {
        let source =
            HttpPlayerSource::new("http://localhost:9/v1/", "key", Duration::from_secs(1)).unwrap();
        assert_eq!(source.players_url(), "http://localhost:9/v1/players");
    }
}
