// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::schedule::CommissionSchedule;
use rust_decimal::Decimal;

/// Validates the field constraints for a new employee.
///
/// This checks that the display fields are not blank. It does NOT check
/// the parent reference or depth (those require the hierarchy).
///
/// # Arguments
///
/// * `name` - The proposed display name
/// * `role` - The proposed display role
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - The role is empty or whitespace-only
pub fn validate_employee_fields(name: &str, role: &str) -> Result<(), DomainError> {
    // Rule: name must not be blank
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    // Rule: role must not be blank
    if role.trim().is_empty() {
        return Err(DomainError::InvalidRole(String::from(
            "Role cannot be empty",
        )));
    }

    Ok(())
}

/// Validates that a sale amount is strictly positive.
///
/// The breakdown computation itself does not special-case zero or
/// negative amounts; this check is applied at the transition boundary
/// before a sale is recorded.
///
/// # Arguments
///
/// * `amount` - The sale amount to validate
///
/// # Errors
///
/// Returns an error if the amount is zero or negative.
pub fn validate_sale_amount(amount: Decimal) -> Result<(), DomainError> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::InvalidAmount(amount));
    }
    Ok(())
}

/// Validates that a commission schedule is usable.
///
/// # Arguments
///
/// * `schedule` - The schedule to validate
///
/// # Errors
///
/// Returns an error if the maximum stage depth is zero, which would
/// leave the root unable to take on any direct reports.
pub const fn validate_schedule(schedule: &CommissionSchedule) -> Result<(), DomainError> {
    if schedule.max_stages == 0 {
        return Err(DomainError::InvalidMaxStages {
            max_stages: schedule.max_stages,
        });
    }
    Ok(())
}
