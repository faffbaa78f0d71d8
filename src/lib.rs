pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use std::time::Instant;

use config::Config;
use services::NewsService;

#[derive(Clone)]
pub struct AppState {
    pub news_service: NewsService,
    pub config: Config,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let news_service = NewsService::new(config.news.clone());
        Self {
            news_service,
            config,
            start_time: Instant::now(),
        }
    }
}
