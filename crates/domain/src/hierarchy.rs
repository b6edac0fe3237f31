// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The organization tree, stored as an arena of employee nodes.
//!
//! Nodes are keyed by identifier and linked by identifier, never by
//! native reference, so a hierarchy snapshot is a plain value that can be
//! cloned and shared freely.

use crate::error::DomainError;
use crate::types::{Employee, EmployeeId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// An arena of employees forming a rooted tree.
///
/// Exactly one root (the owner, level 0) exists per hierarchy. Employees
/// are append-only: there is no deletion or reparenting, so identifiers
/// are never reused and levels never change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    /// All employees, keyed by identifier.
    employees: BTreeMap<EmployeeId, Employee>,
    /// The root owner's identifier.
    root_id: EmployeeId,
    /// The next identifier to allocate.
    next_id: u64,
}

impl Hierarchy {
    /// Creates a hierarchy containing only its root owner.
    ///
    /// # Arguments
    ///
    /// * `owner_name` - The owner's display name
    /// * `owner_role` - The owner's display role
    /// * `founded_at` - The owner's `date_joined` timestamp
    #[must_use]
    pub fn new(owner_name: String, owner_role: String, founded_at: DateTime<Utc>) -> Self {
        let root_id: EmployeeId = EmployeeId::new(1);
        let root: Employee = Employee::new(root_id, owner_name, owner_role, 0, None, founded_at);
        let mut employees: BTreeMap<EmployeeId, Employee> = BTreeMap::new();
        employees.insert(root_id, root);
        Self {
            employees,
            root_id,
            next_id: 2,
        }
    }

    /// Returns the root owner's identifier.
    #[must_use]
    pub const fn root_id(&self) -> EmployeeId {
        self.root_id
    }

    /// Looks up an employee by identifier.
    #[must_use]
    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    /// Returns the number of employees, the root included.
    #[must_use]
    pub fn employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Iterates over all employees in identifier order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Returns the ancestor chain of an employee, from the immediate
    /// parent up to and including the root.
    ///
    /// The root (or an unknown identifier) yields an empty chain. The
    /// traversal stops at the first unresolvable or repeated parent
    /// reference and returns the chain built so far; a well-formed tree
    /// never hits either case.
    #[must_use]
    pub fn ancestor_chain(&self, id: EmployeeId) -> Vec<&Employee> {
        let mut chain: Vec<&Employee> = Vec::new();
        let Some(start) = self.employees.get(&id) else {
            return chain;
        };

        let mut visited: HashSet<EmployeeId> = HashSet::new();
        visited.insert(id);

        let mut current: Option<EmployeeId> = start.parent_id;
        while let Some(parent_id) = current {
            let Some(parent) = self.employees.get(&parent_id) else {
                break;
            };
            if !visited.insert(parent_id) {
                break;
            }
            chain.push(parent);
            current = parent.parent_id;
        }
        chain
    }

    /// Adds a new employee under an existing parent.
    ///
    /// On success the new node is created with level = parent level + 1,
    /// zeroed totals, and no children, and its identifier is appended to
    /// the parent's `children_ids`. Both mutations land in the same call,
    /// so no caller ever observes one without the other.
    ///
    /// # Arguments
    ///
    /// * `name` - The display name
    /// * `role` - The display role
    /// * `parent_id` - The owning ancestor
    /// * `max_stages` - The configured maximum stage depth
    /// * `joined_at` - The creation timestamp
    ///
    /// # Returns
    ///
    /// The identifier assigned to the new employee.
    ///
    /// # Errors
    ///
    /// Returns an error, with no state change, if:
    /// - `parent_id` does not resolve to an existing employee
    /// - The parent's level has reached `max_stages`
    pub fn add_employee(
        &mut self,
        name: String,
        role: String,
        parent_id: EmployeeId,
        max_stages: u8,
        joined_at: DateTime<Utc>,
    ) -> Result<EmployeeId, DomainError> {
        let parent_level: u8 = match self.employees.get(&parent_id) {
            Some(parent) => parent.level,
            None => return Err(DomainError::EmployeeNotFound(parent_id)),
        };

        if parent_level >= max_stages {
            return Err(DomainError::DepthExceeded {
                parent_id,
                level: parent_level,
                max_stages,
            });
        }

        let id: EmployeeId = EmployeeId::new(self.next_id);
        self.next_id += 1;

        let employee: Employee =
            Employee::new(id, name, role, parent_level + 1, Some(parent_id), joined_at);
        self.employees.insert(id, employee);
        if let Some(parent) = self.employees.get_mut(&parent_id) {
            parent.children_ids.push(id);
        }
        Ok(id)
    }

    /// Credits a commission amount to an employee's running total.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee does not exist.
    pub fn credit_commission(
        &mut self,
        id: EmployeeId,
        amount: Decimal,
    ) -> Result<(), DomainError> {
        match self.employees.get_mut(&id) {
            Some(employee) => {
                employee.commissions_earned += amount;
                Ok(())
            }
            None => Err(DomainError::EmployeeNotFound(id)),
        }
    }

    /// Credits a sale amount to an employee's `total_sales`.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee does not exist.
    pub fn credit_sale(&mut self, id: EmployeeId, amount: Decimal) -> Result<(), DomainError> {
        match self.employees.get_mut(&id) {
            Some(employee) => {
                employee.total_sales += amount;
                Ok(())
            }
            None => Err(DomainError::EmployeeNotFound(id)),
        }
    }

    /// Test-only mutable access, used to stage malformed trees that the
    /// public API cannot produce.
    #[cfg(test)]
    pub(crate) fn employee_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.get_mut(&id)
    }
}
