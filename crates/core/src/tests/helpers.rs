// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::State;
use chrono::{DateTime, TimeZone, Utc};
use plotledger_audit::{Actor, Cause};
use plotledger_domain::EmployeeId;

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("op-17"), String::from("operator"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-204"), String::from("Operator request"))
}

pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 4, 9, 0, 0).unwrap()
}

pub fn create_test_state() -> State {
    State::new(
        String::from("Alexander Sterling"),
        String::from("Company Owner"),
        fixed_timestamp(),
    )
}

/// Builds a state whose hierarchy is a straight chain of `depth`
/// employees under the root. Returns the state plus the ids per stage
/// (index 0 = root).
pub fn create_chain_state(depth: u8) -> (State, Vec<EmployeeId>) {
    let mut state: State = create_test_state();
    let max_stages: u8 = depth.max(6);
    let mut ids: Vec<EmployeeId> = vec![state.hierarchy.root_id()];
    for stage in 1..=depth {
        let id: EmployeeId = state
            .hierarchy
            .add_employee(
                format!("Stage {stage}"),
                String::from("Sales Agent"),
                ids[usize::from(stage) - 1],
                max_stages,
                fixed_timestamp(),
            )
            .unwrap();
        ids.push(id);
    }
    (state, ids)
}
