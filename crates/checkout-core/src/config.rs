//! # Pricing Configuration
//!
//! Every rate, threshold and flat price the engine applies, gathered into one
//! immutable value.
//!
//! ## Why a Config Struct Instead of Constants?
//! The engine stays a pure function of `(inputs, config)`: the published
//! policy is just `PricingConfig::default()`, and alternate policies (A/B
//! pricing experiments, regression fixtures) are plain values constructed in
//! tests. Nothing in the crate reads mutable global state.

use crate::money::Money;

/// Immutable pricing policy for one engine instance.
///
/// ## Rate Encoding
/// Percentage rates are basis points (1 bps = 0.01%), so 1500 = 15%.
/// Keeping rates integral keeps every discount computation integral.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Line quantity at which the bulk discount starts (inclusive).
    pub bulk_quantity_threshold: i64,

    /// Bulk discount rate applied per qualifying line.
    pub bulk_discount_bps: u32,

    /// Tenure a customer must *exceed* to earn the VIP discount.
    /// Strictly greater-than: exactly this many years does not qualify.
    pub vip_tenure_threshold_years: f64,

    /// VIP discount rate, applied to the post-bulk subtotal.
    pub vip_discount_bps: u32,

    /// Safety valve: combined discounts never exceed this share of the
    /// pre-discount cart total.
    pub max_discount_bps: u32,

    /// Post-discount total a cart must *exceed* for free Standard/Expedited
    /// shipping. Strictly greater-than: exactly this total still pays.
    pub free_shipping_threshold: Money,

    /// Base rate for Standard and Expedited shipping.
    pub standard_base: Money,

    /// Weight surcharge rate, cents per kilogram of total cart weight.
    pub weight_rate_cents_per_kg: i64,

    /// Expedited surcharge rate, applied to the pre-discount total.
    pub expedited_surcharge_bps: u32,

    /// Flat Express rate. Charged regardless of weight, discounts or the
    /// free-shipping threshold.
    pub express_flat: Money,
}

/// The published pricing policy.
impl Default for PricingConfig {
    fn default() -> Self {
        PricingConfig {
            bulk_quantity_threshold: 3,
            bulk_discount_bps: 1500,             // 15%
            vip_tenure_threshold_years: 2.0,
            vip_discount_bps: 500,               // 5%
            max_discount_bps: 3000,              // 30%
            free_shipping_threshold: Money::from_cents(10000), // $100.00
            standard_base: Money::from_cents(700),             // $7.00
            weight_rate_cents_per_kg: 200,                     // $2.00/kg
            expedited_surcharge_bps: 1500,       // 15%
            express_flat: Money::from_cents(2500),             // $25.00
        }
    }
}
