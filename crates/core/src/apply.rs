// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{State, TransitionResult};
use plotledger_audit::{Action, Actor, AuditEvent, Cause, StateDigest};
use plotledger_domain::{
    CommissionPart, CommissionSchedule, DomainError, Employee, EmployeeId, SaleId, SaleRecord,
    compute_breakdown, validate_employee_fields, validate_sale_amount, validate_schedule,
};

/// Applies a command to the current state, producing a new state and
/// exactly one audit event.
///
/// Transitions are atomic: a rejected command returns an error with the
/// input state untouched and no audit event emitted. The input state is
/// never mutated either way — callers swap in `new_state` on success.
///
/// # Arguments
///
/// * `schedule` - The commission schedule and depth configuration
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state, the audit event,
///   and the created employee or sale record
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The schedule's maximum stage depth is zero
/// - The command violates a domain rule (unknown employee, exhausted
///   depth, blank fields, non-positive amount)
pub fn apply(
    schedule: &CommissionSchedule,
    state: &State,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    validate_schedule(schedule)?;

    match command {
        Command::AddEmployee {
            name,
            role,
            parent_id,
            joined_at,
        } => {
            tracing::debug!(parent_id = %parent_id, "Applying AddEmployee command");

            // Validate field constraints before touching any state
            validate_employee_fields(&name, &role)?;

            // Capture state before transition
            let before: StateDigest = state.to_digest();

            // Create new state with the member added; parent existence
            // and depth are enforced by the hierarchy itself
            let mut new_state: State = state.clone();
            let new_id: EmployeeId = new_state.hierarchy.add_employee(
                name,
                role,
                parent_id,
                schedule.max_stages,
                joined_at,
            )?;
            let created: Employee = new_state
                .hierarchy
                .employee(new_id)
                .cloned()
                .ok_or(DomainError::EmployeeNotFound(new_id))?;

            // Capture state after transition
            let after: StateDigest = new_state.to_digest();

            let action: Action = Action::new(
                String::from("AddEmployee"),
                Some(format!(
                    "Added '{}' ({}) at level {} under {parent_id}",
                    created.name, created.role, created.level
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after);

            tracing::info!(
                employee_id = %created.id,
                level = created.level,
                "Employee added"
            );

            Ok(TransitionResult {
                new_state,
                audit_event,
                new_employee: Some(created),
                sale: None,
            })
        }
        Command::RecordSale {
            seller_id,
            amount,
            plot_name,
            recorded_at,
        } => {
            tracing::debug!(seller_id = %seller_id, "Applying RecordSale command");

            // Validate the request before touching any state
            validate_sale_amount(amount)?;
            if state.hierarchy.employee(seller_id).is_none() {
                return Err(CoreError::DomainViolation(DomainError::EmployeeNotFound(
                    seller_id,
                )));
            }

            // Capture state before transition
            let before: StateDigest = state.to_digest();

            let mut new_state: State = state.clone();

            // The breakdown is computed once, against this snapshot, and
            // becomes part of the immutable sale record
            let breakdown: Vec<CommissionPart> =
                compute_breakdown(&new_state.hierarchy, schedule, seller_id, amount);

            let sale_id: SaleId = new_state.allocate_sale_id();
            let sale: SaleRecord = SaleRecord::new(
                sale_id,
                seller_id,
                amount,
                plot_name,
                recorded_at,
                breakdown,
            );

            // Apply the deltas: every part credits its recipient, and the
            // sale amount counts toward the seller alone
            for part in &sale.commission_breakdown {
                new_state
                    .hierarchy
                    .credit_commission(part.employee_id, part.amount)?;
            }
            new_state.hierarchy.credit_sale(seller_id, amount)?;

            // The sale log is reverse-chronological: newest first
            new_state.sales.insert(0, sale.clone());

            // Capture state after transition
            let after: StateDigest = new_state.to_digest();

            let action: Action = Action::new(
                String::from("RecordSale"),
                Some(format!(
                    "Recorded sale {} of '{}' for {} by {seller_id}, split into {} parts",
                    sale.id,
                    sale.plot_name,
                    sale.amount,
                    sale.commission_breakdown.len()
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(actor, cause, action, before, after);

            tracing::info!(
                sale_id = %sale.id,
                seller_id = %seller_id,
                parts = sale.commission_breakdown.len(),
                "Sale recorded"
            );

            Ok(TransitionResult {
                new_state,
                audit_event,
                new_employee: None,
                sale: Some(sale),
            })
        }
    }
}
