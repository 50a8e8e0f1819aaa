//! # Validation Module
//!
//! The Input Normalizer: every constraint the type system cannot carry is
//! checked here, before any arithmetic runs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Parse boundary (serde)                                        │
//! │  ├── unitPrice/quantity must be JSON integers (i64 targets)            │
//! │  ├── method must be one of STANDARD/EXPEDITED/EXPRESS (closed enum)    │
//! │  └── Rejected payloads never reach the engine                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (runtime constraints)                             │
//! │  ├── sku non-empty                                                      │
//! │  ├── unitPrice ≥ 0, quantity > 0                                        │
//! │  ├── weightKg finite and ≥ 0                                            │
//! │  └── tenureYears finite and ≥ 0                                         │
//! │                                                                         │
//! │  Pure validation, no coercion: values pass through unchanged or the    │
//! │  whole call is rejected with the failing field path.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty cart is valid. It prices to all-zero totals plus whatever the
//! chosen shipping method charges on a weightless, discountless cart.

use crate::error::{ValidationError, ValidationResult};
use crate::types::{CartLineItem, CustomerProfile};

// =============================================================================
// Cart Validators
// =============================================================================

/// Validates every line of a cart, in order.
///
/// The first violation wins; its field path carries the line index using the
/// wire field names (e.g. `items[2].quantity`), so the routing layer can map
/// it straight onto the request payload.
pub fn validate_cart(items: &[CartLineItem]) -> ValidationResult<()> {
    for (index, item) in items.iter().enumerate() {
        validate_line_item(index, item)?;
    }
    Ok(())
}

/// Validates a single cart line at the given index.
///
/// ## Rules
/// - `sku` must be non-empty (whitespace-only counts as empty)
/// - `unit_price` must be non-negative (zero allowed: free items ship too)
/// - `quantity` must be positive
/// - `weight_kg` must be finite and non-negative
fn validate_line_item(index: usize, item: &CartLineItem) -> ValidationResult<()> {
    if item.sku.trim().is_empty() {
        return Err(ValidationError::Required {
            field: format!("items[{index}].sku"),
        });
    }

    if item.unit_price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: format!("items[{index}].unitPrice"),
        });
    }

    if item.quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: format!("items[{index}].quantity"),
        });
    }

    // NaN fails every comparison, so finiteness has to be checked first
    if !item.weight_kg.is_finite() {
        return Err(ValidationError::NotFinite {
            field: format!("items[{index}].weightKg"),
        });
    }

    if item.weight_kg < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: format!("items[{index}].weightKg"),
        });
    }

    Ok(())
}

// =============================================================================
// Profile Validators
// =============================================================================

/// Validates the customer profile.
///
/// ## Rules
/// - `tenure_years` must be finite and non-negative
pub fn validate_profile(user: &CustomerProfile) -> ValidationResult<()> {
    if !user.tenure_years.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "user.tenureYears".to_string(),
        });
    }

    if user.tenure_years < 0.0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "user.tenureYears".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
