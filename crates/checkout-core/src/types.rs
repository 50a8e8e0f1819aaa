//! # Domain Types
//!
//! Inputs and derived results of the pricing engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUTS (caller-owned, never mutated)                                  │
//! │  ┌─────────────────┐  ┌──────────────────┐  ┌──────────────────┐       │
//! │  │  CartLineItem   │  │ CustomerProfile  │  │  ShippingMethod  │       │
//! │  │  ─────────────  │  │  ──────────────  │  │  ──────────────  │       │
//! │  │  sku, name      │  │  tenure_years    │  │  Standard        │       │
//! │  │  unit_price     │  └──────────────────┘  │  Expedited       │       │
//! │  │  quantity       │                        │  Express         │       │
//! │  │  weight_kg      │                        └──────────────────┘       │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  OUTPUTS (freshly allocated per call, never persisted by the engine)   │
//! │  ┌─────────────────┐  ┌──────────────────┐  ┌──────────────────┐       │
//! │  │ LineItemResult  │  │  ShipmentResult  │  │  PricingResult   │       │
//! │  └─────────────────┘  └──────────────────┘  └──────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All result structs rename to camelCase so the serialized shape is exactly
//! what the routing layer returns from `POST /pricing/calculate` and what the
//! storefront reads. Every monetary field is a [`Money`], which serializes as
//! a bare integer cent count.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Inputs
// =============================================================================

/// One line of a shopper's cart.
///
/// ## Design Notes
/// - `sku` is treated as unique within a cart by convention; the engine does
///   not enforce uniqueness and prices duplicate SKUs as independent lines
/// - `unit_price` and `quantity` are integers by type; serde rejects
///   fractional JSON numbers for them at the parse boundary
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Stock Keeping Unit - business identifier, must be non-empty.
    pub sku: String,

    /// Display name shown to the shopper.
    pub name: String,

    /// Unit price in cents, non-negative (zero allowed for free items).
    pub unit_price: Money,

    /// Quantity ordered, must be positive.
    pub quantity: i64,

    /// Shipping weight per unit in kilograms, non-negative.
    pub weight_kg: f64,
}

/// The coarse loyalty signal the engine receives about the shopper.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    /// How long the customer has held an account, in years. Non-negative;
    /// fractional years are fine (2.5 qualifies for VIP, 2.0 does not).
    pub tenure_years: f64,
}

/// The shipping method chosen at checkout.
///
/// A closed enumeration: deserialization of any other string fails before
/// the engine runs, which is the whole method-validation story.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingMethod {
    /// Ground shipping: base rate plus weight surcharge.
    Standard,
    /// Faster ground: Standard plus a 15% surcharge on the pre-discount total.
    Expedited,
    /// Overnight: flat rate, never free, ignores weight entirely.
    Express,
}

// =============================================================================
// Derived Results
// =============================================================================

/// Per-line pricing breakdown, one per input cart line, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItemResult {
    /// SKU echoed from the input line.
    pub sku: String,

    /// Name echoed from the input line.
    pub name: String,

    /// Unit price echoed from the input line.
    pub unit_price: Money,

    /// Quantity echoed from the input line.
    pub quantity: i64,

    /// unit_price × quantity, before any discount.
    pub line_original_total: Money,

    /// 15% bulk discount when quantity ≥ 3, otherwise zero.
    pub bulk_discount: Money,

    /// line_original_total − bulk_discount.
    pub line_total_after_bulk: Money,
}

/// Shipping cost breakdown for the chosen method.
///
/// ## Note on `weight_surcharge`
/// On the free-shipping path the surcharge is still computed and reported
/// (the storefront shows the shopper "what it would have cost") but it is
/// not charged: `total_shipping` stays zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentResult {
    /// The method this shipment was priced for.
    pub method: ShippingMethod,

    /// Flat base rate for Standard/Expedited; zero for Express.
    pub base_shipping: Money,

    /// round(total cart weight in kg × per-kg rate); zero for Express.
    pub weight_surcharge: Money,

    /// 15% of the pre-discount cart total; Expedited (non-free) only.
    pub expedited_surcharge: Money,

    /// The amount actually charged for shipping.
    pub total_shipping: Money,

    /// Whether the free-shipping threshold waived the charge.
    /// Always false for Express.
    pub is_free_shipping: bool,
}

/// The full pricing breakdown for one `calculate` call.
///
/// Fully determined by `(items, user, method)`: two calls with equal inputs
/// produce deep-equal results. Every numeric field is an integer cent count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Σ line_original_total, before any discount.
    pub original_total: Money,

    /// Σ bulk_discount across all lines.
    pub volume_discount_total: Money,

    /// original_total − volume_discount_total.
    pub subtotal_after_bulk: Money,

    /// 5% loyalty discount on the post-bulk subtotal (tenure > 2 years).
    pub vip_discount: Money,

    /// Combined discount actually granted, after the 30% safety cap.
    pub total_discount: Money,

    /// True when the safety cap clamped the combined discount.
    pub is_capped: bool,

    /// original_total − total_discount. The free-shipping eligibility base.
    pub final_total: Money,

    /// Per-line breakdown, in input order.
    pub line_items: Vec<LineItemResult>,

    /// Shipping cost breakdown for the chosen method.
    pub shipment: ShipmentResult,

    /// final_total + shipment.total_shipping: the amount the shopper owes.
    pub grand_total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
