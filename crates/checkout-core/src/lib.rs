//! # checkout-core: Pure Pricing & Shipping Logic
//!
//! This crate is the **heart** of the checkout system. It computes the price
//! a shopper owes for a cart as a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront (web UI)                            │   │
//! │  │    Cart UI ──► Shipping Picker ──► Order Review                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ POST /pricing/calculate                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Routing layer (separate deployment)                │   │
//! │  │    parses { items, user, method }, maps errors to HTTP 400     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ │   │
//! │  │  │  types  │ │  money  │ │ config  │ │validation│ │ engine  │ │   │
//! │  │  │  Cart   │ │  Money  │ │ Pricing │ │  rules   │ │ 5-stage │ │   │
//! │  │  │ Results │ │  cents  │ │ Config  │ │  checks  │ │pipeline │ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO CACHING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CartLineItem, PricingResult, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`config`] - The injectable pricing policy
//! - [`validation`] - Input normalization rules
//! - [`engine`] - The five-stage calculation pipeline
//! - [`error`] - The single validation error type
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: identical inputs always yield bit-exact outputs;
//!    results are golden-mastered across releases
//! 2. **No I/O**: database, network, clock and file system access FORBIDDEN
//! 3. **Integer Money**: all monetary values are cents (i64); every rate is
//!    applied with one explicit half-away-from-zero rounding
//! 4. **Explicit Errors**: the only failure is typed input validation
//! 5. **No Hidden State**: nothing is cached between calls; any number of
//!    threads may call the engine concurrently without coordination
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{calculate, CartLineItem, CustomerProfile, Money, ShippingMethod};
//!
//! let items = vec![CartLineItem {
//!     sku: "COKE-330".to_string(),
//!     name: "Coca-Cola 330ml".to_string(),
//!     unit_price: Money::from_cents(299),
//!     quantity: 3, // qualifies for the 15% bulk discount
//!     weight_kg: 0.35,
//! }];
//! let user = CustomerProfile { tenure_years: 4.0 }; // VIP (> 2 years)
//!
//! let result = calculate(&items, &user, ShippingMethod::Standard).unwrap();
//!
//! assert_eq!(result.original_total.cents(), 897);
//! assert_eq!(result.volume_discount_total.cents(), 135);
//! assert_eq!(result.grand_total, result.final_total + result.shipment.total_shipping);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod engine;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Money` instead of
// `use checkout_core::money::Money`

pub use config::PricingConfig;
pub use engine::{calculate, PricingEngine};
pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::*;
