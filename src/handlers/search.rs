use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use tracing::{error, info};

use crate::models::ErrorResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Relays a search to the news provider. An absent or empty `query` falls
/// back to the configured default term; that case is never an error.
pub async fn search(
    state: web::Data<AppState>,
    params: web::Query<SearchParams>,
) -> Result<HttpResponse> {
    let query = match params.query.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => state.config.news.default_query.as_str(),
    };

    match state.news_service.search(query).await {
        Ok(relay) => {
            info!(
                "Relaying {} articles for query '{}'",
                relay.parsed.total_articles, query
            );
            // The provider body goes back byte-for-byte; the parsed form is
            // only for validation and the log line above.
            Ok(HttpResponse::Ok()
                .content_type("application/json")
                .body(relay.raw))
        }
        Err(e) => {
            error!("Error fetching news: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch news")))
        }
    }
}
