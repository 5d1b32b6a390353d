use axum::{extract::Extension, http::StatusCode, Json};
use contatto_core::{
    error::ErrorResponse,
    models::ContactMessage,
    protocol::http::{ContactRequest, ContactResponse, ListMessagesResponse},
    utils::now_timestamp,
};
use sqlx::Row;
use std::sync::Arc;

use crate::AppState;

// Messaggi fissi restituiti sul wire.
const THANK_YOU: &str = "Thank you for your message! We will get back to you soon.";
const FIELDS_REQUIRED: &str = "All fields are required.";
const SAVE_FAILED: &str = "There was an error saving your message. Please try again.";
const FETCH_FAILED: &str = "There was an error fetching messages.";

/* Un campo è valido solo se presente e non vuoto. La stringa di soli spazi
   passa la validazione e viene salvata così com'è. */
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Handler per POST /api/contact
pub async fn submit_contact(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, (StatusCode, Json<ErrorResponse>)> {
    // controllo che i tre campi siano tutti presenti e non vuoti:
    // se anche uno solo manca la richiesta viene rifiutata con 400 senza toccare il DB
    let (name, email, message) = match (
        non_empty(req.name),
        non_empty(req.email),
        non_empty(req.message),
    ) {
        (Some(n), Some(e), Some(m)) => (n, e, m),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(FIELDS_REQUIRED)),
            ))
        }
    };

    // created_at è assegnato dal server, l'id dallo store
    let created_at = now_timestamp();

    // inserisci
    let result = sqlx::query(
        "INSERT INTO contact_messages (name, email, message, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&name) // bind imposta il parametro della query
    .bind(&email)
    .bind(&message)
    .bind(&created_at)
    /* execute esegue la query, non ritorna righe ma il risultato dell'esecuzione */
    .execute(&state.pool)
    .await
    /* se l'INSERT fallisce l'errore viene loggato e il client riceve il 500 generico */
    .map_err(|e| {
        tracing::error!("error saving message: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(SAVE_FAILED)),
        )
    })?;

    /* creazione della risposta: il record restituito è quello salvato,
       con la chiave appena assegnata da SQLite */
    let record = ContactMessage {
        id: result.last_insert_rowid(),
        name,
        email,
        message,
        created_at,
    };
    Ok(Json(ContactResponse {
        success: true,
        message: THANK_YOU.to_string(),
        data: record,
    }))
}

/// Handler per GET /api/messages
pub async fn list_messages(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<ListMessagesResponse>, (StatusCode, Json<ErrorResponse>)> {
    /* Ordina dal più recente al più vecchio. created_at RFC3339 si ordina
       lessicograficamente; a parità di istante decide l'id decrescente. */
    let rows = sqlx::query(
        "SELECT id, name, email, message, created_at FROM contact_messages \
         ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(&state.pool) // fetch_all esegue la query e ritorna tutte le righe
    .await
    .map_err(|e| {
        tracing::error!("error fetching messages: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(FETCH_FAILED)),
        )
    })?;

    // cerco di ottenere i vari campi da ogni riga restituita
    let mut messages = Vec::with_capacity(rows.len());
    for row in rows {
        let record = row_to_message(&row).map_err(|e| {
            tracing::error!("error decoding message row: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(FETCH_FAILED)),
            )
        })?;
        messages.push(record);
    }

    Ok(Json(ListMessagesResponse { success: true, data: messages }))
}

fn row_to_message(row: &sqlx::sqlite::SqliteRow) -> Result<ContactMessage, sqlx::Error> {
    Ok(ContactMessage {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        message: row.try_get("message")?,
        created_at: row.try_get("created_at")?,
    })
}
