// Copyright 2025 the Roster Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-day classification of assigned versus required headcount.

use crate::error::{CoverageError, Headcount};

/// Staffing category of a single day.
///
/// Variants are declared from most to least urgent, so the derived `Ord`
/// sorts by [`CoverageStatus::urgency_rank`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CoverageStatus {
    /// At least two people short.
    Understaffed,
    /// Exactly one person short.
    AtRisk,
    /// Exactly the required headcount.
    FullyCovered,
    /// More people than required.
    Overstaffed,
}

impl CoverageStatus {
    /// Every status, most urgent first.
    pub const ALL: [Self; 4] = [
        Self::Understaffed,
        Self::AtRisk,
        Self::FullyCovered,
        Self::Overstaffed,
    ];

    /// Human-readable label for badges and legends.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Understaffed => "Understaffed",
            Self::AtRisk => "At risk",
            Self::FullyCovered => "Fully covered",
            Self::Overstaffed => "Overstaffed",
        }
    }

    /// Priority for operator attention; lower is more urgent.
    #[must_use]
    pub const fn urgency_rank(self) -> u8 {
        match self {
            Self::Understaffed => 0,
            Self::AtRisk => 1,
            Self::FullyCovered => 2,
            Self::Overstaffed => 3,
        }
    }

    /// Stable machine-readable key (`"at-risk"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Understaffed => "understaffed",
            Self::AtRisk => "at-risk",
            Self::FullyCovered => "fully-covered",
            Self::Overstaffed => "overstaffed",
        }
    }

    /// Returns `true` for the statuses that are short of staff.
    #[must_use]
    pub const fn needs_attention(self) -> bool {
        matches!(self, Self::Understaffed | Self::AtRisk)
    }
}

impl core::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

bitflags::bitflags! {
    /// A set of [`CoverageStatus`] values, used to filter reports.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StatusSet: u8 {
        /// [`CoverageStatus::Understaffed`].
        const UNDERSTAFFED  = 0b0000_0001;
        /// [`CoverageStatus::AtRisk`].
        const AT_RISK       = 0b0000_0010;
        /// [`CoverageStatus::FullyCovered`].
        const FULLY_COVERED = 0b0000_0100;
        /// [`CoverageStatus::Overstaffed`].
        const OVERSTAFFED   = 0b0000_1000;
    }
}

impl StatusSet {
    /// Statuses that are short of staff.
    #[must_use]
    pub const fn needs_attention() -> Self {
        Self::UNDERSTAFFED.union(Self::AT_RISK)
    }

    /// Returns `true` if `status` is in this set.
    #[must_use]
    pub fn contains_status(self, status: CoverageStatus) -> bool {
        self.contains(Self::from(status))
    }
}

impl From<CoverageStatus> for StatusSet {
    fn from(status: CoverageStatus) -> Self {
        match status {
            CoverageStatus::Understaffed => Self::UNDERSTAFFED,
            CoverageStatus::AtRisk => Self::AT_RISK,
            CoverageStatus::FullyCovered => Self::FULLY_COVERED,
            CoverageStatus::Overstaffed => Self::OVERSTAFFED,
        }
    }
}

/// Classification of one day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Coverage {
    /// Category the day falls into.
    pub status: CoverageStatus,
    /// Display label of `status`.
    pub label: &'static str,
    /// Urgency rank of `status`; lower is more urgent.
    pub urgency_rank: u8,
    /// Staff scheduled.
    pub assigned: u64,
    /// Staff needed.
    pub required: u64,
}

impl Coverage {
    /// How many more people the day needs; zero when covered.
    #[must_use]
    pub const fn shortfall(&self) -> u64 {
        self.required.saturating_sub(self.assigned)
    }

    /// How many people beyond the requirement are scheduled.
    #[must_use]
    pub const fn surplus(&self) -> u64 {
        self.assigned.saturating_sub(self.required)
    }

    /// Assigned over required, or `None` when nothing is required.
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        reason = "Headcounts are far below 2^52"
    )]
    pub fn ratio(&self) -> Option<f64> {
        (self.required > 0).then(|| self.assigned as f64 / self.required as f64)
    }
}

/// Classifies a day with `assigned` staff against `required` staff.
///
/// The decision is taken in order: equal counts are fully covered, one short
/// is at risk, any larger shortage is understaffed, and anything above the
/// requirement is overstaffed. Zero required with zero assigned is fully
/// covered.
///
/// ```rust
/// use roster_coverage::{CoverageStatus, classify};
///
/// assert_eq!(classify(10, 10).unwrap().status, CoverageStatus::FullyCovered);
/// assert_eq!(classify(9, 10).unwrap().label, "At risk");
/// assert_eq!(classify(6, 10).unwrap().urgency_rank, 0);
/// assert!(classify(-1, 10).is_err());
/// ```
///
/// # Errors
///
/// [`CoverageError`] if either headcount is negative.
pub fn classify(assigned: i64, required: i64) -> Result<Coverage, CoverageError> {
    let assigned = u64::try_from(assigned).map_err(|_| CoverageError {
        field: Headcount::Assigned,
        value: assigned,
    })?;
    let required = u64::try_from(required).map_err(|_| CoverageError {
        field: Headcount::Required,
        value: required,
    })?;

    let status = if assigned == required {
        CoverageStatus::FullyCovered
    } else if assigned + 1 == required {
        CoverageStatus::AtRisk
    } else if assigned < required {
        CoverageStatus::Understaffed
    } else {
        CoverageStatus::Overstaffed
    };

    Ok(Coverage {
        status,
        label: status.label(),
        urgency_rank: status.urgency_rank(),
        assigned,
        required,
    })
}
