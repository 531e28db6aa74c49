//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// This is the complete client-facing failure taxonomy: the first three
/// variants reject invalid input before anything is persisted, `NotFound`
/// covers lookups by unknown id. Infrastructure failures live in
/// `stockroom-infra` and are never folded into this enum.
///
/// The `Display` strings double as the user-visible error messages.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required creation field is absent (or empty, for the text fields).
    #[error("missing required fields")]
    MissingFields,

    /// `quantity` is (or would become) negative.
    #[error("quantity cannot be negative")]
    InvalidQuantity,

    /// `price` is (or would become) zero or negative.
    #[error("price must be greater than 0")]
    InvalidPrice,

    /// No record exists with the requested id.
    #[error("item not found")]
    NotFound,
}
