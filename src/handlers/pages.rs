use actix_web::{HttpResponse, Result};

/// The browse page is one self-contained document compiled into the binary.
const BROWSE_PAGE: &str = include_str!("../../static/browse.html");

pub async fn browse() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(BROWSE_PAGE))
}
