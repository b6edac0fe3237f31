// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};
use plotledger_audit::{AuditEvent, StateDigest};
use plotledger_domain::{Employee, Hierarchy, SaleId, SaleRecord};
use rust_decimal::Decimal;

/// The complete ledger state for one organization.
///
/// A state is a plain immutable value from the engine's point of view:
/// `apply` reads one snapshot and produces a fresh one, so an embedding
/// service needs only a single writer, and readers may keep older
/// snapshots for as long as they like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The organization tree.
    pub hierarchy: Hierarchy,
    /// All recorded sales, newest first.
    pub sales: Vec<SaleRecord>,
    /// The next sale identifier to allocate.
    next_sale_id: u64,
}

impl State {
    /// Creates a new state holding only the root owner and no sales.
    ///
    /// # Arguments
    ///
    /// * `owner_name` - The owner's display name
    /// * `owner_role` - The owner's display role
    /// * `founded_at` - The owner's `date_joined` timestamp
    #[must_use]
    pub fn new(owner_name: String, owner_role: String, founded_at: DateTime<Utc>) -> Self {
        Self {
            hierarchy: Hierarchy::new(owner_name, owner_role, founded_at),
            sales: Vec::new(),
            next_sale_id: 1,
        }
    }

    /// Returns the sum of all recorded sale amounts.
    #[must_use]
    pub fn total_volume(&self) -> Decimal {
        self.sales.iter().map(|sale| sale.amount).sum()
    }

    /// Converts the state to a digest for audit purposes.
    #[must_use]
    pub fn to_digest(&self) -> StateDigest {
        StateDigest::summarize(
            self.hierarchy.employee_count(),
            self.sales.len(),
            self.total_volume(),
        )
    }

    /// Allocates the next sale identifier.
    pub(crate) const fn allocate_sale_id(&mut self) -> SaleId {
        let id: SaleId = SaleId::new(self.next_sale_id);
        self.next_sale_id += 1;
        id
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail with
/// no side effects. The created artifact (employee or sale record) rides
/// along so boundary callers can surface it without re-querying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
    /// The employee created by an `AddEmployee` command.
    pub new_employee: Option<Employee>,
    /// The sale record created by a `RecordSale` command.
    pub sale: Option<SaleRecord>,
}
