use actix_files::NamedFile;
use actix_web::{get, web, HttpResponse};
use chrono::Utc;
use tracing::debug;

use crate::state::AppState;
use crate::types::HealthResponse;

/// Serve the browser front end
#[get("/")]
pub async fn index(state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    let path = state.config.static_dir.join("index.html");
    debug!("Serving {}", path.display());

    NamedFile::open_async(&path)
        .await
        .map_err(actix_web::error::ErrorNotFound)
}

/// Liveness check; never touches external services
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        service: "DocBridge Document Translation API",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now().to_rfc3339(),
    })
}
