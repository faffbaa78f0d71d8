use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::config::NewsSettings;
use crate::models::NewsResponse;

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("request to news provider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("news provider returned status {status}")]
    Provider { status: u16 },

    #[error("news provider returned a malformed body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Outcome of a provider search: the body exactly as the provider sent it,
/// plus the parsed form used for validation and logging.
#[derive(Debug, Clone)]
pub struct SearchRelay {
    pub raw: String,
    pub parsed: NewsResponse,
}

#[derive(Clone)]
pub struct NewsService {
    client: Client,
    settings: NewsSettings,
}

impl NewsService {
    pub fn new(settings: NewsSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, settings }
    }

    /// Issues one outbound search against the provider. A failure is final;
    /// nothing is retried.
    pub async fn search(&self, query: &str) -> Result<SearchRelay, NewsError> {
        let max = self.settings.max_results.to_string();
        let response = self
            .client
            .get(format!("{}/search", self.settings.base_url))
            .query(&[
                ("q", query),
                ("lang", self.settings.lang.as_str()),
                ("country", self.settings.country.as_str()),
                ("max", max.as_str()),
                ("apikey", self.settings.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::Provider {
                status: status.as_u16(),
            });
        }

        let raw = response.text().await?;
        let parsed: NewsResponse = serde_json::from_str(&raw)?;

        Ok(SearchRelay { raw, parsed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SINGLE_ARTICLE: &str = r#"{"totalArticles":1,"articles":[{"title":"A","description":"B","content":"C","url":"http://x","image":"http://y","publishedAt":"2024-01-01","source":{"name":"S","url":"http://s"}}]}"#;

    fn settings(base_url: &str) -> NewsSettings {
        NewsSettings {
            api_key: "secret".to_string(),
            base_url: base_url.to_string(),
            default_query: "example".to_string(),
            lang: "en".to_string(),
            country: "us".to_string(),
            max_results: 10,
            request_timeout_secs: 5,
        }
    }

    #[actix_rt::test]
    async fn sends_query_and_fixed_parameters() {
        let provider = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "climate change"))
            .and(query_param("lang", "en"))
            .and(query_param("country", "us"))
            .and(query_param("max", "10"))
            .and(query_param("apikey", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(SINGLE_ARTICLE, "application/json"))
            .expect(1)
            .mount(&provider)
            .await;

        let service = NewsService::new(settings(&provider.uri()));
        let relay = service.search("climate change").await.unwrap();
        assert_eq!(relay.parsed.total_articles, 1);
    }

    #[actix_rt::test]
    async fn returns_provider_body_verbatim() {
        let provider = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(SINGLE_ARTICLE, "application/json"))
            .mount(&provider)
            .await;

        let service = NewsService::new(settings(&provider.uri()));
        let relay = service.search("election").await.unwrap();
        assert_eq!(relay.raw, SINGLE_ARTICLE);
        assert_eq!(relay.parsed.articles[0].title, "A");
    }

    #[actix_rt::test]
    async fn maps_provider_error_status() {
        let provider = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(403).set_body_raw(
                r#"{"errors":["Invalid API key"]}"#,
                "application/json",
            ))
            .mount(&provider)
            .await;

        let service = NewsService::new(settings(&provider.uri()));
        match service.search("election").await {
            Err(NewsError::Provider { status }) => assert_eq!(status, 403),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[actix_rt::test]
    async fn maps_malformed_body_to_parse_error() {
        let provider = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html>busy</html>", "text/html"))
            .mount(&provider)
            .await;

        let service = NewsService::new(settings(&provider.uri()));
        assert!(matches!(
            service.search("election").await,
            Err(NewsError::Parse(_))
        ));
    }

    #[actix_rt::test]
    async fn maps_unreachable_provider_to_request_error() {
        // Discard port; nothing listens there.
        let service = NewsService::new(settings("http://127.0.0.1:9"));
        assert!(matches!(
            service.search("election").await,
            Err(NewsError::Request(_))
        ));
    }
}
