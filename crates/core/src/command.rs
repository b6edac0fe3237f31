// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};
use plotledger_domain::EmployeeId;
use rust_decimal::Decimal;

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes. Timestamps travel
/// inside the command — the boundary stamps the clock — so `apply` stays
/// pure and a command stream can be replayed byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new member under an existing employee.
    AddEmployee {
        /// The new member's display name.
        name: String,
        /// The new member's display role.
        role: String,
        /// The owning ancestor.
        parent_id: EmployeeId,
        /// The creation timestamp, stamped by the boundary.
        joined_at: DateTime<Utc>,
    },
    /// Record a plot sale and distribute its commissions.
    RecordSale {
        /// The employee who made the sale.
        seller_id: EmployeeId,
        /// The sale amount. Must be strictly positive.
        amount: Decimal,
        /// The plot's descriptive label.
        plot_name: String,
        /// The creation timestamp, stamped by the boundary.
        recorded_at: DateTime<Utc>,
    },
}
