use actix_web::{get, web, HttpResponse};

use crate::state::AppState;
use crate::types::LanguagesResponse;

/// Supported target languages, code to display name
#[get("/languages")]
pub async fn languages(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(LanguagesResponse {
        success: true,
        languages: state.languages.as_map(),
        count: state.languages.len(),
    })
}
