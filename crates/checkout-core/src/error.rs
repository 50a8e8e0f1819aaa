//! # Error Types
//!
//! The engine has exactly one failure mode: the inputs were malformed.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ValidationError (this file)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Routing layer (separate deployment)                                    │
//! │       │  serializes field + message                                     │
//! │       ▼                                                                 │
//! │  HTTP 400 with field-level detail (never a 500)                        │
//! │                                                                         │
//! │  Once validation passes, stages 2-5 are total functions: any panic     │
//! │  past that point is an engine defect, not a caller error.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant carries the failing field path (e.g. `items[2].quantity`)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors, raised before any monetary computation begins.
///
/// Retrying with the same inputs always fails identically; there is no
/// partial-result mode. Either the full `PricingResult` comes back or one
/// of these does.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Floating-point value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

impl ValidationError {
    /// The path of the field that failed validation, for client-facing
    /// error payloads (e.g. `items[2].quantity`, `user.tenureYears`).
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustNotBeNegative { field }
            | ValidationError::NotFinite { field } => field,
        }
    }
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
