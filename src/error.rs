//! Errors returned by a [`Chain`](crate::Chain).
//!
//! Running out of continuations while generating is *not* an error, that is simply how a
//! sentence ends. Neither is feeding a sentence that is too short to fill a window; it is skipped.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// An order of zero leaves no words to build a context key from, and an order close to
    /// `usize::MAX` leaves no room for the words that follow a window.
    #[error("invalid order {order}: must be at least 1 and leave room for a window")]
    InvalidOrder { order: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A random choice was requested from a pool with nothing in it, most likely because the
    /// chain has not been fed anything yet.
    #[error("cannot choose from empty pool of {pool}")]
    EmptyPool { pool: &'static str },

    #[error("order mismatch: expected {expected}, found {found}")]
    OrderMismatch { expected: usize, found: usize },
}

impl ChainError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
