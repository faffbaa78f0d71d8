use serde::{Deserialize, Serialize};

/// A search response as the news provider returns it. Article order is the
/// provider's relevance ranking and must be preserved through the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub total_articles: u64,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    pub content: String,
    pub url: String,
    pub image: String,
    /// Provider-formatted timestamp, relayed as-is and never parsed.
    pub published_at: String,
    pub source: ArticleSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSource {
    pub name: String,
    pub url: String,
}
