// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use plotledger_domain::{CommissionSchedule, DomainError, EmployeeId};

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{State, TransitionResult};

/// Validates that a seller identifier resolves to an existing employee.
///
/// This is a read-only validation that does not create audit events. It
/// lets boundary callers reject a sale request before building a command.
///
/// # Arguments
///
/// * `state` - The state to check against
/// * `seller_id` - The seller to validate
///
/// # Errors
///
/// Returns `DomainError::EmployeeNotFound` if the seller does not exist.
pub fn validate_seller_exists(state: &State, seller_id: EmployeeId) -> Result<(), DomainError> {
    if state.hierarchy.employee(seller_id).is_none() {
        return Err(DomainError::EmployeeNotFound(seller_id));
    }
    Ok(())
}

/// Validates that a parent can take on a new direct report.
///
/// This is a read-only validation that does not create audit events. It
/// checks both that the parent exists and that its level is strictly
/// below the configured maximum stage depth.
///
/// # Arguments
///
/// * `schedule` - The schedule supplying the maximum stage depth
/// * `state` - The state to check against
/// * `parent_id` - The prospective parent
///
/// # Errors
///
/// * `DomainError::EmployeeNotFound` if the parent does not exist
/// * `DomainError::DepthExceeded` if the parent sits at the maximum depth
pub fn validate_parent_capacity(
    schedule: &CommissionSchedule,
    state: &State,
    parent_id: EmployeeId,
) -> Result<(), DomainError> {
    let Some(parent) = state.hierarchy.employee(parent_id) else {
        return Err(DomainError::EmployeeNotFound(parent_id));
    };

    if parent.level >= schedule.max_stages {
        return Err(DomainError::DepthExceeded {
            parent_id,
            level: parent.level,
            max_stages: schedule.max_stages,
        });
    }
    Ok(())
}
