// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_chain_state, create_test_state};
use crate::{State, validate_parent_capacity, validate_seller_exists};
use plotledger_domain::{CommissionSchedule, DomainError, EmployeeId};

#[test]
fn test_validate_seller_exists_for_root() {
    let state: State = create_test_state();

    assert!(validate_seller_exists(&state, state.hierarchy.root_id()).is_ok());
}

#[test]
fn test_validate_seller_exists_unknown_id_fails() {
    let state: State = create_test_state();

    let result: Result<(), DomainError> = validate_seller_exists(&state, EmployeeId::new(404));

    assert!(matches!(
        result.unwrap_err(),
        DomainError::EmployeeNotFound(_)
    ));
}

#[test]
fn test_validate_parent_capacity_below_max_depth() {
    let schedule: CommissionSchedule = CommissionSchedule::default();
    let (state, ids) = create_chain_state(5);

    assert!(validate_parent_capacity(&schedule, &state, ids[5]).is_ok());
}

#[test]
fn test_validate_parent_capacity_at_max_depth_fails() {
    let schedule: CommissionSchedule = CommissionSchedule::default();
    let (state, ids) = create_chain_state(6);

    let result: Result<(), DomainError> = validate_parent_capacity(&schedule, &state, ids[6]);

    assert!(matches!(
        result.unwrap_err(),
        DomainError::DepthExceeded {
            level: 6,
            max_stages: 6,
            ..
        }
    ));
}

#[test]
fn test_validate_parent_capacity_unknown_parent_fails() {
    let schedule: CommissionSchedule = CommissionSchedule::default();
    let state: State = create_test_state();

    let result: Result<(), DomainError> =
        validate_parent_capacity(&schedule, &state, EmployeeId::new(42));

    assert!(matches!(
        result.unwrap_err(),
        DomainError::EmployeeNotFound(_)
    ));
}
