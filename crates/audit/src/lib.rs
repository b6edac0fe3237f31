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
    clippy::all
)]

use rust_decimal::Decimal;

/// Represents the entity performing a ledger action.
///
/// An actor is any identifiable entity that initiates a state change:
/// an operator at a terminal, an import job, or an automated trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The kind of actor (e.g., "operator", "system").
    pub kind: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `kind` - The kind of actor
    #[must_use]
    pub const fn new(id: String, kind: String) -> Self {
        Self { id, kind }
    }
}

/// Represents the reason or trigger for a ledger action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., a request id).
    pub id: String,
    /// A description of what triggered this action.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this cause
    /// * `description` - A description of what triggered this action
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`AddEmployee`", "`RecordSale`").
    pub name: String,
    /// Optional human-readable details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A cheap summary of ledger state at a point in time.
///
/// Digests capture the observable size of the organization and its sale
/// log rather than the full state, which keeps events small while still
/// making before/after comparisons meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDigest {
    /// A string summary of the state.
    pub summary: String,
}

impl StateDigest {
    /// Creates a `StateDigest` from a pre-rendered summary.
    ///
    /// # Arguments
    ///
    /// * `summary` - A string summary of the state
    #[must_use]
    pub const fn new(summary: String) -> Self {
        Self { summary }
    }

    /// Renders the standard digest for an organization ledger.
    ///
    /// # Arguments
    ///
    /// * `employee_count` - Number of employees, root included
    /// * `sale_count` - Number of recorded sales
    /// * `total_volume` - Sum of all recorded sale amounts
    #[must_use]
    pub fn summarize(employee_count: usize, sale_count: usize, total_volume: Decimal) -> Self {
        Self {
            summary: format!(
                "employees={employee_count},sales={sale_count},volume={total_volume}"
            ),
        }
    }
}

/// An immutable audit event representing one state transition.
///
/// Every successful transition must produce exactly one audit event;
/// rejected commands produce none. Events capture who performed the
/// action, why, what was done, and digests of the state on both sides of
/// the transition. Once created, an event is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The state digest before the transition.
    pub before: StateDigest,
    /// The state digest after the transition.
    pub after: StateDigest,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`.
    ///
    /// # Arguments
    ///
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The state digest before the transition
    /// * `after` - The state digest after the transition
    #[must_use]
    pub const fn new(
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateDigest,
        after: StateDigest,
    ) -> Self {
        Self {
            actor,
            cause,
            action,
            before,
            after,
        }
    }
}
