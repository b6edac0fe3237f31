// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commission breakdown computation for a single sale.
//!
//! This module provides the pure, deterministic split of a sale amount
//! across the seller and the seller's chain of ancestors, according to
//! the configured percentage schedule.

use crate::hierarchy::Hierarchy;
use crate::schedule::CommissionSchedule;
use crate::types::{CommissionPart, CommissionRole, EmployeeId};
use rust_decimal::Decimal;

/// Computes the commission breakdown for one sale.
///
/// This is a pure, deterministic computation that:
/// - Credits the seller first, at the base seller rate
/// - Walks the ancestor chain from the direct parent up to the root
/// - Holds the original seller's level fixed across the whole walk
/// - Appends an override part for each ancestor with a positive rate
///
/// The hierarchy snapshot is never mutated; callers apply the resulting
/// amounts to their own state. An unknown seller yields an empty
/// breakdown — boundary callers are expected to pre-validate. The amount
/// is not special-cased for zero or negative values; each part is simply
/// the amount scaled by its percentage.
///
/// # Arguments
///
/// * `hierarchy` - The organization snapshot to compute against
/// * `schedule` - The percentage schedule to apply
/// * `seller_id` - The employee who made the sale
/// * `sale_amount` - The sale amount
///
/// # Returns
///
/// The breakdown in payout order: seller first, then ancestors
/// nearest-to-farthest.
#[must_use]
pub fn compute_breakdown(
    hierarchy: &Hierarchy,
    schedule: &CommissionSchedule,
    seller_id: EmployeeId,
    sale_amount: Decimal,
) -> Vec<CommissionPart> {
    let mut breakdown: Vec<CommissionPart> = Vec::new();
    let Some(seller) = hierarchy.employee(seller_id) else {
        return breakdown;
    };

    breakdown.push(CommissionPart::new(
        seller.id,
        seller.name.clone(),
        schedule.seller_rate,
        part_amount(sale_amount, schedule.seller_rate),
        CommissionRole::Seller,
    ));

    for ancestor in hierarchy.ancestor_chain(seller_id) {
        let is_direct_manager: bool = seller.parent_id == Some(ancestor.id);
        let rate: u8 = schedule.override_rate(seller.level, ancestor.level, is_direct_manager);
        if rate == 0 {
            continue;
        }

        let role: CommissionRole = if ancestor.level == 0 {
            CommissionRole::OwnerOverride
        } else {
            CommissionRole::ManagerOverride
        };
        breakdown.push(CommissionPart::new(
            ancestor.id,
            ancestor.name.clone(),
            rate,
            part_amount(sale_amount, rate),
            role,
        ));
    }

    breakdown
}

/// Scales a sale amount by a whole-number percentage.
fn part_amount(sale_amount: Decimal, percentage: u8) -> Decimal {
    sale_amount * Decimal::from(percentage) / Decimal::ONE_HUNDRED
}
