// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::EmployeeId;
use rust_decimal::Decimal;

#[test]
fn test_employee_not_found_display() {
    let error: DomainError = DomainError::EmployeeNotFound(EmployeeId::new(12));

    assert_eq!(error.to_string(), "Employee emp-12 not found");
}

#[test]
fn test_depth_exceeded_display() {
    let error: DomainError = DomainError::DepthExceeded {
        parent_id: EmployeeId::new(8),
        level: 6,
        max_stages: 6,
    };

    assert_eq!(
        error.to_string(),
        "Employee emp-8 at level 6 has reached the maximum stage depth of 6"
    );
}

#[test]
fn test_invalid_amount_display_includes_value() {
    let error: DomainError = DomainError::InvalidAmount(Decimal::from(-250));

    assert_eq!(
        error.to_string(),
        "Sale amount must be strictly positive, got -250"
    );
}

#[test]
fn test_invalid_name_display() {
    let error: DomainError = DomainError::InvalidName(String::from("Name cannot be empty"));

    assert_eq!(error.to_string(), "Invalid name: Name cannot be empty");
}

#[test]
fn test_invalid_max_stages_display() {
    let error: DomainError = DomainError::InvalidMaxStages { max_stages: 0 };

    assert_eq!(
        error.to_string(),
        "Invalid maximum stage depth: 0. Must be at least 1"
    );
}

#[test]
fn test_errors_implement_std_error() {
    let error: Box<dyn std::error::Error> =
        Box::new(DomainError::EmployeeNotFound(EmployeeId::new(1)));

    assert!(error.source().is_none());
}
