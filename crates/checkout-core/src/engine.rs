//! # Pricing Engine
//!
//! The deterministic pipeline that turns a cart, a loyalty signal and a
//! shipping choice into a full `PricingResult`.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      calculate() Pipeline                               │
//! │                                                                         │
//! │  items, user, method                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Validate ──────────► ValidationError (the only failure mode)       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Per-line bulk discount (15% when quantity ≥ 3, per line)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. Aggregate: originalTotal, volumeDiscountTotal, subtotalAfterBulk   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. VIP discount (5% of post-bulk subtotal, tenure > 2y)               │
//! │     Safety valve: combined discount capped at 30% of originalTotal     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  5. Shipment (from finalTotal, method, weight)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PricingResult { …, grandTotal = finalTotal + totalShipping }          │
//! │                                                                         │
//! │  Data flows strictly forward. No stage reads a later stage's output.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Discounts compound sequentially: the VIP rate applies to the post-bulk
//! subtotal, never to the original total. The cap, in contrast, is always
//! measured against the original total.
//!
//! ## Shipment State Machine
//! One-shot classification keyed by `(method, free-shipping eligibility)`:
//! ```text
//! ┌──────────────┬──────────────┬─────────────────────────────────────────┐
//! │ method       │ eligible?    │ totalShipping                           │
//! ├──────────────┼──────────────┼─────────────────────────────────────────┤
//! │ EXPRESS      │ (ignored)    │ flat $25.00, never free                 │
//! │ STANDARD     │ yes          │ 0 (weight surcharge reported, unpaid)   │
//! │ EXPEDITED    │ yes          │ 0 (weight surcharge reported, unpaid)   │
//! │ STANDARD     │ no           │ base + weight surcharge                 │
//! │ EXPEDITED    │ no           │ base + weight + 15% of originalTotal    │
//! └──────────────┴──────────────┴─────────────────────────────────────────┘
//! ```
//! Eligibility is `finalTotal > $100.00` (post-discount, strictly greater).
//! The expedited surcharge is the one rate in the engine computed on the
//! pre-discount total.

use crate::config::PricingConfig;
use crate::error::ValidationResult;
use crate::money::Money;
use crate::types::{
    CartLineItem, CustomerProfile, LineItemResult, PricingResult, ShipmentResult, ShippingMethod,
};
use crate::validation;

// =============================================================================
// Engine
// =============================================================================

/// The pricing engine: a pricing policy plus the rules that apply it.
///
/// Holds no other state. `calculate` borrows its inputs, allocates a fresh
/// result, and touches nothing shared, so one engine value can serve any
/// number of concurrent callers without locking.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Creates an engine with the given pricing policy.
    pub fn new(config: PricingConfig) -> Self {
        PricingEngine { config }
    }

    /// The policy this engine applies.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Prices a cart: the engine's single operation.
    ///
    /// Identical inputs always yield deep-equal, integer-cent results.
    /// The only failure mode is input validation; once inputs pass, every
    /// downstream stage is a total function.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{calculate, CartLineItem, CustomerProfile, Money, ShippingMethod};
    ///
    /// let items = vec![CartLineItem {
    ///     sku: "MUG-01".to_string(),
    ///     name: "Mug".to_string(),
    ///     unit_price: Money::from_cents(10000),
    ///     quantity: 1,
    ///     weight_kg: 1.0,
    /// }];
    /// let user = CustomerProfile { tenure_years: 0.0 };
    ///
    /// let result = calculate(&items, &user, ShippingMethod::Standard).unwrap();
    /// assert_eq!(result.grand_total.cents(), 10900);
    /// ```
    pub fn calculate(
        &self,
        items: &[CartLineItem],
        user: &CustomerProfile,
        method: ShippingMethod,
    ) -> ValidationResult<PricingResult> {
        // Stage 1: reject malformed input before any arithmetic runs
        validation::validate_cart(items)?;
        validation::validate_profile(user)?;

        // Stage 2: per-line bulk discounts
        let line_items: Vec<LineItemResult> =
            items.iter().map(|item| self.price_line(item)).collect();

        // Stage 3: cart-level subtotals
        let original_total = line_items
            .iter()
            .fold(Money::zero(), |sum, line| sum + line.line_original_total);
        let volume_discount_total = line_items
            .iter()
            .fold(Money::zero(), |sum, line| sum + line.bulk_discount);
        let subtotal_after_bulk = original_total - volume_discount_total;

        // Stage 4: loyalty discount, then the safety valve
        let vip_discount = if user.tenure_years > self.config.vip_tenure_threshold_years {
            subtotal_after_bulk.percentage(self.config.vip_discount_bps)
        } else {
            Money::zero()
        };

        let raw_discount = volume_discount_total + vip_discount;
        let max_discount = original_total.percentage(self.config.max_discount_bps);
        let (total_discount, is_capped) = if raw_discount > max_discount {
            (max_discount, true)
        } else {
            (raw_discount, false)
        };
        let final_total = original_total - total_discount;

        // Stage 5: shipment, from the *final* total and the chosen method
        let shipment = self.price_shipment(items, original_total, final_total, method);
        let grand_total = final_total + shipment.total_shipping;

        Ok(PricingResult {
            original_total,
            volume_discount_total,
            subtotal_after_bulk,
            vip_discount,
            total_discount,
            is_capped,
            final_total,
            line_items,
            shipment,
            grand_total,
        })
    }

    /// Stage 2: prices one cart line.
    ///
    /// The bulk threshold is a per-line quantity check: two lines of
    /// quantity 2 never combine to trigger it. The discount is rounded once
    /// here and never re-rounded downstream.
    fn price_line(&self, item: &CartLineItem) -> LineItemResult {
        let line_original_total = item.unit_price.multiply_quantity(item.quantity);

        let bulk_discount = if item.quantity >= self.config.bulk_quantity_threshold {
            line_original_total.percentage(self.config.bulk_discount_bps)
        } else {
            Money::zero()
        };

        LineItemResult {
            sku: item.sku.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
            line_original_total,
            bulk_discount,
            line_total_after_bulk: line_original_total - bulk_discount,
        }
    }

    /// Stage 5: classifies the shipment and prices it.
    ///
    /// `original_total` feeds the expedited surcharge (pre-discount base);
    /// `final_total` feeds free-shipping eligibility (post-discount base).
    /// The weight surcharge is computed for every non-Express shipment,
    /// including free ones, because the storefront reports it either way.
    fn price_shipment(
        &self,
        items: &[CartLineItem],
        original_total: Money,
        final_total: Money,
        method: ShippingMethod,
    ) -> ShipmentResult {
        let total_weight_kg: f64 = items
            .iter()
            .map(|item| item.weight_kg * item.quantity as f64)
            .sum();
        // f64::round is half-away-from-zero, matching the money rounding rule
        let weight_surcharge = Money::from_cents(
            (total_weight_kg * self.config.weight_rate_cents_per_kg as f64).round() as i64,
        );

        let eligible = final_total > self.config.free_shipping_threshold;

        match (method, eligible) {
            // Express bypasses every other rule: flat rate, never free
            (ShippingMethod::Express, _) => ShipmentResult {
                method,
                base_shipping: Money::zero(),
                weight_surcharge: Money::zero(),
                expedited_surcharge: Money::zero(),
                total_shipping: self.config.express_flat,
                is_free_shipping: false,
            },

            // Free shipping: surcharges reported but not charged
            (ShippingMethod::Standard | ShippingMethod::Expedited, true) => ShipmentResult {
                method,
                base_shipping: self.config.standard_base,
                weight_surcharge,
                expedited_surcharge: Money::zero(),
                total_shipping: Money::zero(),
                is_free_shipping: true,
            },

            (ShippingMethod::Standard, false) => ShipmentResult {
                method,
                base_shipping: self.config.standard_base,
                weight_surcharge,
                expedited_surcharge: Money::zero(),
                total_shipping: self.config.standard_base + weight_surcharge,
                is_free_shipping: false,
            },

            (ShippingMethod::Expedited, false) => {
                let expedited_surcharge =
                    original_total.percentage(self.config.expedited_surcharge_bps);
                ShipmentResult {
                    method,
                    base_shipping: self.config.standard_base,
                    weight_surcharge,
                    expedited_surcharge,
                    total_shipping: self.config.standard_base
                        + weight_surcharge
                        + expedited_surcharge,
                    is_free_shipping: false,
                }
            }
        }
    }
}

// =============================================================================
// Convenience Entry Point
// =============================================================================

/// Prices a cart under the published policy (`PricingConfig::default()`).
///
/// Equivalent to `PricingEngine::default().calculate(items, user, method)`.
pub fn calculate(
    items: &[CartLineItem],
    user: &CustomerProfile,
    method: ShippingMethod,
) -> ValidationResult<PricingResult> {
    PricingEngine::default().calculate(items, user, method)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(sku: &str, price: i64, qty: i64, weight: f64) -> CartLineItem {
        CartLineItem {
            sku: sku.to_string(),
            name: format!("Item {sku}"),
            unit_price: Money::from_cents(price),
            quantity: qty,
            weight_kg: weight,
        }
    }

    fn user(tenure_years: f64) -> CustomerProfile {
        CustomerProfile { tenure_years }
    }

    // -------------------------------------------------------------------------
    // Golden scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_single_item_standard_shipping() {
        let items = vec![line("A", 10000, 1, 1.0)];
        let result = calculate(&items, &user(0.0), ShippingMethod::Standard).unwrap();

        assert_eq!(result.original_total.cents(), 10000);
        assert_eq!(result.volume_discount_total.cents(), 0);
        assert_eq!(result.vip_discount.cents(), 0);
        assert_eq!(result.final_total.cents(), 10000);
        assert!(!result.shipment.is_free_shipping);
        assert_eq!(result.shipment.total_shipping.cents(), 900); // 700 + 200
        assert_eq!(result.grand_total.cents(), 10900);
    }

    #[test]
    fn test_bulk_discount_earns_free_shipping() {
        let items = vec![line("A", 10000, 5, 1.0)];
        let result = calculate(&items, &user(0.0), ShippingMethod::Standard).unwrap();

        assert_eq!(result.original_total.cents(), 50000);
        assert_eq!(result.volume_discount_total.cents(), 7500);
        assert_eq!(result.subtotal_after_bulk.cents(), 42500);
        assert_eq!(result.final_total.cents(), 42500);
        assert!(result.shipment.is_free_shipping);
        assert_eq!(result.shipment.total_shipping.cents(), 0);
        assert_eq!(result.grand_total.cents(), 42500);
    }

    #[test]
    fn test_vip_discount() {
        let items = vec![line("A", 10000, 1, 1.0)];
        let result = calculate(&items, &user(3.0), ShippingMethod::Standard).unwrap();

        assert_eq!(result.vip_discount.cents(), 500);
        assert_eq!(result.final_total.cents(), 9500);
    }

    #[test]
    fn test_express_is_flat_rate() {
        let items = vec![line("HEAVY", 100000, 1, 10.0)];
        let result = calculate(&items, &user(0.0), ShippingMethod::Express).unwrap();

        // $1000 cart, 10 kg: still exactly $25.00, never free
        assert_eq!(result.shipment.total_shipping.cents(), 2500);
        assert_eq!(result.shipment.base_shipping.cents(), 0);
        assert_eq!(result.shipment.weight_surcharge.cents(), 0);
        assert_eq!(result.shipment.expedited_surcharge.cents(), 0);
        assert!(!result.shipment.is_free_shipping);
        assert_eq!(result.grand_total.cents(), 102500);
    }

    #[test]
    fn test_expedited_breakdown() {
        let items = vec![line("A", 5000, 1, 5.0)];
        let result = calculate(&items, &user(0.0), ShippingMethod::Expedited).unwrap();

        assert_eq!(result.shipment.base_shipping.cents(), 700);
        assert_eq!(result.shipment.weight_surcharge.cents(), 1000);
        assert_eq!(result.shipment.expedited_surcharge.cents(), 750);
        assert_eq!(result.shipment.total_shipping.cents(), 2450);
        assert_eq!(result.grand_total.cents(), 7450);
    }

    // -------------------------------------------------------------------------
    // Boundary behaviors
    // -------------------------------------------------------------------------

    #[test]
    fn test_bulk_threshold_is_quantity_three() {
        let at_two = calculate(&[line("A", 1000, 2, 0.0)], &user(0.0), ShippingMethod::Standard)
            .unwrap();
        assert_eq!(at_two.volume_discount_total.cents(), 0);

        let at_three =
            calculate(&[line("A", 1000, 3, 0.0)], &user(0.0), ShippingMethod::Standard).unwrap();
        assert_eq!(at_three.volume_discount_total.cents(), 450); // 15% of 3000
    }

    #[test]
    fn test_bulk_threshold_does_not_combine_across_lines() {
        // Two lines of quantity 2: four units total, zero bulk discount
        let items = vec![line("A", 1000, 2, 0.0), line("B", 1000, 2, 0.0)];
        let result = calculate(&items, &user(0.0), ShippingMethod::Standard).unwrap();
        assert_eq!(result.volume_discount_total.cents(), 0);
    }

    #[test]
    fn test_vip_threshold_is_strict() {
        let items = vec![line("A", 10000, 1, 0.0)];

        let at_two = calculate(&items, &user(2.0), ShippingMethod::Standard).unwrap();
        assert_eq!(at_two.vip_discount.cents(), 0);

        let past_two = calculate(&items, &user(2.1), ShippingMethod::Standard).unwrap();
        assert_eq!(past_two.vip_discount.cents(), 500);
    }

    #[test]
    fn test_vip_applies_to_post_bulk_subtotal() {
        // Sequential compounding: 5% of 42500, not 5% of 50000
        let items = vec![line("A", 10000, 5, 0.0)];
        let result = calculate(&items, &user(5.0), ShippingMethod::Standard).unwrap();

        assert_eq!(result.subtotal_after_bulk.cents(), 42500);
        assert_eq!(result.vip_discount.cents(), 2125);
        assert_eq!(result.final_total.cents(), 40375);
    }

    #[test]
    fn test_free_shipping_threshold_is_strict() {
        let exactly = calculate(
            &[line("A", 10000, 1, 1.0)],
            &user(0.0),
            ShippingMethod::Standard,
        )
        .unwrap();
        assert!(!exactly.shipment.is_free_shipping);
        assert_eq!(exactly.shipment.total_shipping.cents(), 900);

        let just_over = calculate(
            &[line("A", 10001, 1, 1.0)],
            &user(0.0),
            ShippingMethod::Standard,
        )
        .unwrap();
        assert!(just_over.shipment.is_free_shipping);
        assert_eq!(just_over.shipment.total_shipping.cents(), 0);
    }

    #[test]
    fn test_free_shipping_still_reports_weight_surcharge() {
        let result = calculate(
            &[line("A", 20000, 1, 3.0)],
            &user(0.0),
            ShippingMethod::Standard,
        )
        .unwrap();

        assert!(result.shipment.is_free_shipping);
        assert_eq!(result.shipment.weight_surcharge.cents(), 600);
        assert_eq!(result.shipment.total_shipping.cents(), 0);
    }

    #[test]
    fn test_eligibility_uses_post_discount_total() {
        // Original $110 drops under the threshold after the VIP discount
        let items = vec![line("A", 10400, 1, 1.0)];
        let result = calculate(&items, &user(10.0), ShippingMethod::Standard).unwrap();

        assert_eq!(result.final_total.cents(), 9880); // 10400 - 520
        assert!(!result.shipment.is_free_shipping);
    }

    #[test]
    fn test_safety_valve_caps_combined_discount() {
        // The published rates (15% + 5% compounded ≈ 19.25%) cannot reach the
        // 30% cap; an aggressive experimental policy can, and the valve must
        // hold regardless of policy.
        let engine = PricingEngine::new(PricingConfig {
            bulk_discount_bps: 4000, // 40% bulk promotion
            ..PricingConfig::default()
        });
        let items = vec![line("A", 10000, 5, 0.0)];
        let result = engine
            .calculate(&items, &user(0.0), ShippingMethod::Standard)
            .unwrap();

        assert_eq!(result.original_total.cents(), 50000);
        assert_eq!(result.volume_discount_total.cents(), 20000);
        assert!(result.is_capped);
        assert_eq!(result.total_discount.cents(), 15000); // exactly 30%
        assert_eq!(result.final_total.cents(), 35000);
    }

    #[test]
    fn test_uncapped_discount_is_not_clamped() {
        let items = vec![line("A", 10000, 5, 0.0)];
        let result = calculate(&items, &user(5.0), ShippingMethod::Standard).unwrap();

        assert!(!result.is_capped);
        assert_eq!(result.total_discount.cents(), 7500 + 2125);
    }

    // -------------------------------------------------------------------------
    // Edge cases
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_cart_prices_to_shipping_only() {
        let result = calculate(&[], &user(5.0), ShippingMethod::Standard).unwrap();

        assert_eq!(result.original_total.cents(), 0);
        assert_eq!(result.total_discount.cents(), 0);
        assert_eq!(result.final_total.cents(), 0);
        assert!(result.line_items.is_empty());
        assert_eq!(result.shipment.total_shipping.cents(), 700); // base only
        assert_eq!(result.grand_total.cents(), 700);
    }

    #[test]
    fn test_empty_cart_express() {
        let result = calculate(&[], &user(0.0), ShippingMethod::Express).unwrap();
        assert_eq!(result.grand_total.cents(), 2500);
    }

    #[test]
    fn test_line_results_preserve_input_order() {
        let items = vec![
            line("FIRST", 100, 1, 0.0),
            line("SECOND", 200, 1, 0.0),
            line("THIRD", 300, 1, 0.0),
        ];
        let result = calculate(&items, &user(0.0), ShippingMethod::Standard).unwrap();

        let skus: Vec<&str> = result.line_items.iter().map(|l| l.sku.as_str()).collect();
        assert_eq!(skus, vec!["FIRST", "SECOND", "THIRD"]);
    }

    #[test]
    fn test_duplicate_skus_priced_independently() {
        // Uniqueness is a caller convention, not an engine rule
        let items = vec![line("DUP", 1000, 2, 0.0), line("DUP", 1000, 2, 0.0)];
        let result = calculate(&items, &user(0.0), ShippingMethod::Standard).unwrap();

        assert_eq!(result.line_items.len(), 2);
        assert_eq!(result.volume_discount_total.cents(), 0);
    }

    #[test]
    fn test_validation_error_short_circuits() {
        let items = vec![line("A", 1000, 0, 0.0)];
        let err = calculate(&items, &user(0.0), ShippingMethod::Standard).unwrap_err();
        assert_eq!(err.field(), "items[0].quantity");
    }

    #[test]
    fn test_determinism() {
        let items = vec![line("A", 1099, 3, 0.35), line("B", 4999, 1, 1.2)];
        let first = calculate(&items, &user(4.0), ShippingMethod::Expedited).unwrap();
        let second = calculate(&items, &user(4.0), ShippingMethod::Expedited).unwrap();
        assert_eq!(first, second);
    }
}
