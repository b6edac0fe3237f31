// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::EmployeeId;
use rust_decimal::Decimal;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Referenced employee does not exist.
    EmployeeNotFound(EmployeeId),
    /// The target parent is already at the maximum stage depth.
    DepthExceeded {
        /// The parent that was targeted.
        parent_id: EmployeeId,
        /// The parent's level.
        level: u8,
        /// The configured maximum stage depth.
        max_stages: u8,
    },
    /// Employee name is empty or invalid.
    InvalidName(String),
    /// Employee role is empty or invalid.
    InvalidRole(String),
    /// Sale amount is not strictly positive.
    InvalidAmount(Decimal),
    /// Commission role string is not recognized.
    InvalidCommissionRole(String),
    /// The configured maximum stage depth is invalid.
    InvalidMaxStages {
        /// The invalid depth value.
        max_stages: u8,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmployeeNotFound(id) => write!(f, "Employee {id} not found"),
            Self::DepthExceeded {
                parent_id,
                level,
                max_stages,
            } => {
                write!(
                    f,
                    "Employee {parent_id} at level {level} has reached the maximum stage depth of {max_stages}"
                )
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidRole(msg) => write!(f, "Invalid role: {msg}"),
            Self::InvalidAmount(amount) => {
                write!(f, "Sale amount must be strictly positive, got {amount}")
            }
            Self::InvalidCommissionRole(msg) => {
                write!(f, "Invalid commission role: {msg}")
            }
            Self::InvalidMaxStages { max_stages } => {
                write!(
                    f,
                    "Invalid maximum stage depth: {max_stages}. Must be at least 1"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
