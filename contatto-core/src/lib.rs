//! contatto-core: tipi condivisi tra client e server (modelli, DTO HTTP, errori).
//! Niente I/O o dipendenze non compatibili con WASM.

pub mod error;
pub mod models;
pub mod protocol;
pub mod utils;

// Re-export utili per ridurre i percorsi nel crate server
pub use error::ErrorResponse;
pub use models::ContactMessage;
pub use protocol::http::{ContactRequest, ContactResponse, ListMessagesResponse};
pub use utils::now_timestamp;
