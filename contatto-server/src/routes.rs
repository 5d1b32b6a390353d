use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};

use crate::{controllers, health_with_pool, AppState};

pub fn router(state: Arc<AppState>, static_dir: &Path) -> Router {
    /* Qualsiasi percorso non gestito dalle rotte API viene servito dalla
       directory statica; se il file non esiste si risponde con index.html,
       così la pagina principale copre ogni path. */
    let index = static_dir.join("index.html");
    let static_files = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    // CORS permissivo: il form può essere inviato da qualunque origine
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    Router::new()
        .route(
            "/health",
            get(|Extension(state): Extension<Arc<AppState>>| async move {
                health_with_pool(&state.pool).await
            }),
        )
        .route("/api/contact", post(controllers::submit_contact))
        .route("/api/messages", get(controllers::list_messages))
        .fallback_service(static_files)
        .layer(cors)
        .layer(Extension(state))
}
