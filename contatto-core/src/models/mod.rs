pub mod contact_message;

// Re-export per comodità
pub use contact_message::ContactMessage;
