use serde::{Deserialize, Serialize};

use crate::models::ContactMessage;
/*
    http dto for http requests and responses
*/
// Contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    /* I tre campi sono Option con default: un body JSON a cui manca una chiave
       deve comunque essere deserializzato, così l'handler può rispondere 400
       invece di lasciare che l'extractor rifiuti la richiesta. */
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    /// Sempre `true` in questa risposta, i fallimenti usano ErrorResponse.
    pub success: bool,
    /// Messaggio di cortesia mostrato all'utente.
    pub message: String,
    /// Il record così come è stato salvato (id e createdAt assegnati dal server).
    pub data: ContactMessage,
}

// Messages listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesResponse {
    pub success: bool,
    /// Record ordinati dal più recente al più vecchio.
    pub data: Vec<ContactMessage>,
}
