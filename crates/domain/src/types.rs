// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee identifier.
///
/// Identifiers are opaque, stable, and immutable once assigned. They are
/// allocated sequentially by the hierarchy arena, never reused, and carry
/// no meaning beyond identity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EmployeeId(u64);

impl EmployeeId {
    /// Creates an `EmployeeId` from its raw value.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw identifier value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "emp-{}", self.0)
    }
}

/// Represents a sale record identifier.
///
/// Allocated sequentially by the ledger state, never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SaleId(u64);

impl SaleId {
    /// Creates a `SaleId` from its raw value.
    ///
    /// # Arguments
    ///
    /// * `value` - The raw identifier value
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sale-{}", self.0)
    }
}

/// Classification of a commission breakdown line.
///
/// The serialized forms are the display strings consumed by presentation
/// layers, so they carry spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommissionRole {
    /// The employee who made the sale.
    Seller,
    /// An ancestor manager credited for a sale further down the chain.
    #[serde(rename = "Manager Override")]
    ManagerOverride,
    /// The root owner credited for any sale in the organization.
    #[serde(rename = "Owner Override")]
    OwnerOverride,
}

impl CommissionRole {
    /// Parses a commission role from its display string.
    ///
    /// # Arguments
    ///
    /// * `s` - The string to parse
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match a valid role.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Seller" => Ok(Self::Seller),
            "Manager Override" => Ok(Self::ManagerOverride),
            "Owner Override" => Ok(Self::OwnerOverride),
            _ => Err(DomainError::InvalidCommissionRole(format!(
                "Unknown commission role: {s}"
            ))),
        }
    }

    /// Returns the display string for this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Seller => "Seller",
            Self::ManagerOverride => "Manager Override",
            Self::OwnerOverride => "Owner Override",
        }
    }
}

impl std::fmt::Display for CommissionRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of a commission breakdown.
///
/// The recipient name is denormalized at computation time so the line
/// stays readable even after later hierarchy changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionPart {
    /// The recipient of this commission amount.
    pub employee_id: EmployeeId,
    /// The recipient's name, captured when the breakdown was computed.
    pub employee_name: String,
    /// The rate applied, as a whole-number percentage of the sale amount.
    pub percentage: u8,
    /// The credited amount: sale amount scaled by `percentage`.
    pub amount: Decimal,
    /// Why this recipient is credited.
    pub role: CommissionRole,
}

impl CommissionPart {
    /// Creates a new `CommissionPart`.
    ///
    /// # Arguments
    ///
    /// * `employee_id` - The recipient
    /// * `employee_name` - The recipient's name at computation time
    /// * `percentage` - The whole-number percentage applied
    /// * `amount` - The credited amount
    /// * `role` - The recipient's relationship to the sale
    #[must_use]
    pub const fn new(
        employee_id: EmployeeId,
        employee_name: String,
        percentage: u8,
        amount: Decimal,
        role: CommissionRole,
    ) -> Self {
        Self {
            employee_id,
            employee_name,
            percentage,
            amount,
            role,
        }
    }
}

/// A node in the organization tree.
///
/// Tree edges are stored as identifier links (`parent_id`, `children_ids`)
/// into the hierarchy arena, never as native references, so snapshots stay
/// cheap to clone and share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, immutable once created.
    pub id: EmployeeId,
    /// Display name. No computation semantics.
    pub name: String,
    /// Display role or title. No computation semantics.
    pub role: String,
    /// Depth in the tree. The root owner is level 0; every other
    /// employee's level is its parent's level plus one.
    pub level: u8,
    /// The owning ancestor, absent only for the root.
    pub parent_id: Option<EmployeeId>,
    /// Direct descendants in insertion order. Used for display only.
    pub children_ids: Vec<EmployeeId>,
    /// Cumulative sum of sale amounts where this employee was the seller.
    /// Monotonically non-decreasing.
    pub total_sales: Decimal,
    /// Cumulative sum of all commission amounts ever credited to this
    /// employee, as seller or as ancestor. Monotonically non-decreasing.
    pub commissions_earned: Decimal,
    /// Creation timestamp, immutable.
    pub date_joined: DateTime<Utc>,
}

impl Employee {
    /// Creates a new `Employee` with zeroed totals and no children.
    ///
    /// # Arguments
    ///
    /// * `id` - The assigned identifier
    /// * `name` - The display name
    /// * `role` - The display role
    /// * `level` - The depth in the tree
    /// * `parent_id` - The owning ancestor, `None` only for the root
    /// * `date_joined` - The creation timestamp
    #[must_use]
    pub const fn new(
        id: EmployeeId,
        name: String,
        role: String,
        level: u8,
        parent_id: Option<EmployeeId>,
        date_joined: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            role,
            level,
            parent_id,
            children_ids: Vec::new(),
            total_sales: Decimal::ZERO,
            commissions_earned: Decimal::ZERO,
            date_joined,
        }
    }

    /// Returns whether this employee is the organization root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// An immutable record of one sale event.
///
/// The breakdown is computed once at creation time against the hierarchy
/// snapshot of that moment and is never recomputed; later hierarchy
/// changes must not retroactively alter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Unique identifier.
    pub id: SaleId,
    /// The employee who made the sale.
    pub seller_id: EmployeeId,
    /// The sale amount. Strictly positive for recorded sales.
    pub amount: Decimal,
    /// Descriptive label for the plot sold. No computation semantics.
    pub plot_name: String,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
    /// The commission breakdown, seller first, then ancestors
    /// nearest-to-farthest. A historical snapshot.
    pub commission_breakdown: Vec<CommissionPart>,
}

impl SaleRecord {
    /// Creates a new `SaleRecord`.
    ///
    /// # Arguments
    ///
    /// * `id` - The assigned identifier
    /// * `seller_id` - The employee who made the sale
    /// * `amount` - The sale amount
    /// * `plot_name` - The plot label
    /// * `date` - The creation timestamp
    /// * `commission_breakdown` - The breakdown computed at creation time
    #[must_use]
    pub const fn new(
        id: SaleId,
        seller_id: EmployeeId,
        amount: Decimal,
        plot_name: String,
        date: DateTime<Utc>,
        commission_breakdown: Vec<CommissionPart>,
    ) -> Self {
        Self {
            id,
            seller_id,
            amount,
            plot_name,
            date,
            commission_breakdown,
        }
    }
}
