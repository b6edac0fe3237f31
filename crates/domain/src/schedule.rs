// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The commission percentage schedule.
//!
//! Every rate the engine applies lives here as an isolated, tunable
//! field; nothing in the breakdown computation hard-codes a percentage.

use serde::{Deserialize, Serialize};

/// The fixed percentage schedule used to split a sale amount across the
/// seller and the seller's chain of ancestors.
///
/// All rates are whole-number percentages of the sale amount. The
/// defaults reproduce the production schedule; deployments may override
/// individual fields through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommissionSchedule {
    /// Maximum allowed employee level. Adding a member under a parent at
    /// this level is rejected.
    pub max_stages: u8,
    /// Rate credited to the seller on every sale.
    pub seller_rate: u8,
    /// Owner rate when the seller is a direct report (level 1).
    pub owner_direct_rate: u8,
    /// Owner rate for sellers at levels 2 through `owner_flat_through_stage`.
    pub owner_standard_rate: u8,
    /// The last stage at which the owner still earns `owner_standard_rate`.
    pub owner_flat_through_stage: u8,
    /// Additional owner percentage per stage beyond `owner_flat_through_stage`.
    pub owner_extra_stage_rate: u8,
    /// Rate for the seller's direct manager (non-root).
    pub direct_manager_rate: u8,
    /// Rate for every other non-root ancestor manager, regardless of
    /// depth. An extrapolated default rather than a stated business rule;
    /// see the project design notes before changing it.
    pub indirect_override_rate: u8,
}

impl CommissionSchedule {
    /// Returns the override percentage owed to one ancestor for a sale.
    ///
    /// The seller's level is held fixed across the whole ancestor walk;
    /// the rate depends on the original seller's depth, never on the
    /// depth of the node currently being visited.
    ///
    /// # Arguments
    ///
    /// * `seller_level` - The level of the employee who made the sale
    /// * `ancestor_level` - The level of the ancestor being credited
    /// * `is_direct_manager` - Whether the ancestor is the seller's parent
    #[must_use]
    pub const fn override_rate(
        &self,
        seller_level: u8,
        ancestor_level: u8,
        is_direct_manager: bool,
    ) -> u8 {
        if ancestor_level == 0 {
            if seller_level == 1 {
                self.owner_direct_rate
            } else if seller_level <= self.owner_flat_through_stage {
                self.owner_standard_rate
            } else {
                // +1% (by default) for every stage beyond the flat tier.
                self.owner_standard_rate.saturating_add(
                    (seller_level - self.owner_flat_through_stage)
                        .saturating_mul(self.owner_extra_stage_rate),
                )
            }
        } else if is_direct_manager {
            self.direct_manager_rate
        } else {
            self.indirect_override_rate
        }
    }
}

impl Default for CommissionSchedule {
    fn default() -> Self {
        Self {
            max_stages: 6,
            seller_rate: 5,
            owner_direct_rate: 5,
            owner_standard_rate: 2,
            owner_flat_through_stage: 6,
            owner_extra_stage_rate: 1,
            direct_manager_rate: 2,
            indirect_override_rate: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_matches_production_rates() {
        let schedule: CommissionSchedule = CommissionSchedule::default();

        assert_eq!(schedule.max_stages, 6);
        assert_eq!(schedule.seller_rate, 5);
        assert_eq!(schedule.owner_direct_rate, 5);
        assert_eq!(schedule.owner_standard_rate, 2);
        assert_eq!(schedule.owner_flat_through_stage, 6);
        assert_eq!(schedule.owner_extra_stage_rate, 1);
        assert_eq!(schedule.direct_manager_rate, 2);
        assert_eq!(schedule.indirect_override_rate, 1);
    }

    #[test]
    fn test_owner_rate_for_direct_report_seller() {
        let schedule: CommissionSchedule = CommissionSchedule::default();

        assert_eq!(schedule.override_rate(1, 0, true), 5);
    }

    #[test]
    fn test_owner_rate_flat_through_stage_six() {
        let schedule: CommissionSchedule = CommissionSchedule::default();

        assert_eq!(schedule.override_rate(2, 0, false), 2);
        assert_eq!(schedule.override_rate(3, 0, false), 2);
        assert_eq!(schedule.override_rate(6, 0, false), 2);
    }

    #[test]
    fn test_owner_rate_increments_beyond_stage_six() {
        let schedule: CommissionSchedule = CommissionSchedule::default();

        assert_eq!(schedule.override_rate(7, 0, false), 3);
        assert_eq!(schedule.override_rate(8, 0, false), 4);
        assert_eq!(schedule.override_rate(10, 0, false), 6);
    }

    #[test]
    fn test_direct_manager_rate() {
        let schedule: CommissionSchedule = CommissionSchedule::default();

        assert_eq!(schedule.override_rate(3, 2, true), 2);
    }

    #[test]
    fn test_indirect_ancestor_rate_is_depth_independent() {
        let schedule: CommissionSchedule = CommissionSchedule::default();

        assert_eq!(schedule.override_rate(4, 2, false), 1);
        assert_eq!(schedule.override_rate(6, 1, false), 1);
        assert_eq!(schedule.override_rate(6, 4, false), 1);
    }

    #[test]
    fn test_schedule_deserializes_from_partial_toml() {
        let schedule: CommissionSchedule =
            toml::from_str("max_stages = 8\nindirect_override_rate = 2\n").unwrap();

        assert_eq!(schedule.max_stages, 8);
        assert_eq!(schedule.indirect_override_rate, 2);
        // Unspecified fields keep their defaults.
        assert_eq!(schedule.seller_rate, 5);
        assert_eq!(schedule.direct_manager_rate, 2);
    }

    #[test]
    fn test_schedule_toml_round_trip() {
        let schedule: CommissionSchedule = CommissionSchedule::default();

        let rendered: String = toml::to_string(&schedule).unwrap();
        let parsed: CommissionSchedule = toml::from_str(&rendered).unwrap();

        assert_eq!(parsed, schedule);
    }
}
