//! Unified error type for the ledger, the access layer and the CLI.

use thiserror::Error;

/// Every failure the crate can surface to a caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// A write was rejected by field validation
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Which constraint failed
        message: String,
    },

    /// Amount was zero, negative or not a finite number
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// The entity does not exist or belongs to another user
    #[error("{entity} {id} not found")]
    NotAuthorizedOrNotFound {
        /// Entity kind, e.g. "expense"
        entity: &'static str,
        /// Requested identifier
        id: i64,
    },

    /// Username or email is already registered
    #[error("{field} is already registered")]
    DuplicateIdentity {
        /// `"username"` or `"email"`
        field: &'static str,
    },

    /// Unknown email or wrong password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The password hashing backend failed
    #[error("Password hashing failed: {message}")]
    PasswordHash {
        /// Backend error text
        message: String,
    },

    /// Error returned by the database layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem or stream error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Integer conversion overflow (page numbers, limits)
    #[error("Integer conversion error: {0}")]
    IntConversion(#[from] std::num::TryFromIntError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
