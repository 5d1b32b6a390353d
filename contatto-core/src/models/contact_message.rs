use serde::{Deserialize, Serialize};

/// Messaggio di contatto persistito dal server e restituito sul wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    /// Chiave auto-incrementale assegnata dallo store.
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String, // RFC3339 UTC
}
