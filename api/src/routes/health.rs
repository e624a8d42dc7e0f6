use actix_web::{web, HttpResponse};
use serde_json::json;

use tg_core::repositories::{RevocationStore, UserRepository};
use tg_core::services::auth::PasswordHasher;

use crate::routes::auth::AppState;

/// Handler for GET /health
///
/// Reports 503 while the revocation store cannot be reached, since every
/// gated request would fail in that state.
pub async fn health<U, H, S>(state: web::Data<AppState<U, H, S>>) -> HttpResponse
where
    U: UserRepository + 'static,
    H: PasswordHasher + 'static,
    S: RevocationStore + 'static,
{
    let store_up = state.token_service.check_store().await.is_ok();
    let body = json!({
        "status": if store_up { "ok" } else { "degraded" },
        "service": "tokengate",
        "version": env!("CARGO_PKG_VERSION"),
        "revocation_store": if store_up { "up" } else { "down" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    if store_up {
        HttpResponse::Ok().json(body)
    } else {
        log::warn!("Health check reports revocation store down");
        HttpResponse::ServiceUnavailable().json(body)
    }
}
