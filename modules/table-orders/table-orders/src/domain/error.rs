use table_orders_sdk::{InvalidOrderStatus, InvalidTableNumber};
use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Menu item '{name}' does not exist")]
    UnknownMenuItem { name: String },

    #[error("Order item not found: {id}")]
    ItemNotFound { id: Uuid },

    #[error("Invalid table number: '{raw}'")]
    InvalidTableNumber { raw: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn unknown_menu_item(name: impl Into<String>) -> Self {
        Self::UnknownMenuItem { name: name.into() }
    }

    pub fn item_not_found(id: Uuid) -> Self {
        Self::ItemNotFound { id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

impl From<InvalidTableNumber> for DomainError {
    fn from(e: InvalidTableNumber) -> Self {
        Self::InvalidTableNumber { raw: e.raw }
    }
}

impl From<InvalidOrderStatus> for DomainError {
    fn from(e: InvalidOrderStatus) -> Self {
        Self::validation("status", e.to_string())
    }
}
