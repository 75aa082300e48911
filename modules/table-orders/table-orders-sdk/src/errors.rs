use thiserror::Error;

/// A table number that is not a positive integer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid table number '{raw}': must be a positive integer")]
pub struct InvalidTableNumber {
    pub raw: String,
}

/// A status string outside the known order lifecycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown order status '{raw}'")]
pub struct InvalidOrderStatus {
    pub raw: String,
}
