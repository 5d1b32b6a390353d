use serde::{Deserialize, Serialize};

/// Envelope di errore restituito dalle API: `{ "success": false, "message": "..." }`.
/// È l'unica forma di errore che viaggia sul wire, sia per i 400 di validazione
/// che per i 500 dello store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,

    pub message: String,
}

impl ErrorResponse {
    /// Costruisce l'envelope con `success` già a `false`.
    pub fn new(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}
