//! DocBridge HTTP Server
//!
//! Actix-web REST API: document upload, translation and summarization

pub mod error;
pub mod multipart;
pub mod routes;
pub mod state;
pub mod types;

pub use error::{json_config, ApiError};
pub use state::AppState;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use docbridge_common::{AppConfig, Result};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

/// Register state, extractor limits and all routes
pub fn configure(state: web::Data<AppState>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let limit = state.config.max_upload_bytes;
        let static_dir = state.config.static_dir.clone();

        cfg.app_data(state)
            .app_data(json_config(limit))
            .service(routes::system::index)
            .service(routes::system::health)
            .service(routes::languages::languages)
            .service(routes::translate::translate)
            .service(routes::upload::upload)
            .service(routes::analyze::analyze);

        if static_dir.is_dir() {
            cfg.service(Files::new("/static", static_dir));
        } else {
            warn!("Static directory {} not found; UI disabled", static_dir.display());
        }
    }
}

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let state = web::Data::new(AppState::new(config)?);

    info!(
        "Serving {} languages, static files from {}",
        state.languages.len(),
        state.config.static_dir.display()
    );
    info!("Starting HTTP server on http://{}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .configure(configure(state.clone()))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped");
    Ok(())
}
