// Copyright 2025 the Roster Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coverage across a run of days, as shown on a coverage-by-day card.

use alloc::vec::Vec;

use crate::error::ReportError;
use crate::status::{Coverage, CoverageStatus, StatusSet, classify};

/// Raw headcounts for one day.
///
/// `D` is whatever the host uses to name a day: a weekday enum, a date, or a
/// plain label.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayCoverage<D> {
    /// The day.
    pub day: D,
    /// Staff scheduled.
    pub assigned: i64,
    /// Staff needed.
    pub required: i64,
}

impl<D> DayCoverage<D> {
    /// Bundles headcounts for `day`.
    pub const fn new(day: D, assigned: i64, required: i64) -> Self {
        Self {
            day,
            assigned,
            required,
        }
    }
}

/// A day together with its classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifiedDay<D> {
    /// The day.
    pub day: D,
    /// Its classification.
    pub coverage: Coverage,
}

/// Number of days in each status.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverageSummary {
    /// Days at least two people short.
    pub understaffed: usize,
    /// Days exactly one person short.
    pub at_risk: usize,
    /// Days with exactly the required headcount.
    pub fully_covered: usize,
    /// Days with more people than required.
    pub overstaffed: usize,
}

impl CoverageSummary {
    /// Count for a single status.
    #[must_use]
    pub const fn get(&self, status: CoverageStatus) -> usize {
        match status {
            CoverageStatus::Understaffed => self.understaffed,
            CoverageStatus::AtRisk => self.at_risk,
            CoverageStatus::FullyCovered => self.fully_covered,
            CoverageStatus::Overstaffed => self.overstaffed,
        }
    }

    fn bump(&mut self, status: CoverageStatus) {
        let slot = match status {
            CoverageStatus::Understaffed => &mut self.understaffed,
            CoverageStatus::AtRisk => &mut self.at_risk,
            CoverageStatus::FullyCovered => &mut self.fully_covered,
            CoverageStatus::Overstaffed => &mut self.overstaffed,
        };
        *slot += 1;
    }
}

/// Classified days in input order, with urgency-oriented queries.
///
/// ## Example
///
/// ```rust
/// use roster_coverage::{CoverageReport, CoverageStatus, DayCoverage, StatusSet};
///
/// let report = CoverageReport::from_days([
///     DayCoverage::new("Mon", 10, 10),
///     DayCoverage::new("Tue", 9, 10),
///     DayCoverage::new("Wed", 6, 10),
///     DayCoverage::new("Thu", 12, 10),
/// ])
/// .unwrap();
///
/// let order: Vec<_> = report.by_urgency().iter().map(|d| d.day).collect();
/// assert_eq!(order, ["Wed", "Tue", "Mon", "Thu"]);
/// assert_eq!(report.most_urgent().unwrap().day, "Wed");
/// assert_eq!(report.filter(StatusSet::needs_attention()).count(), 2);
/// assert_eq!(report.total_shortfall(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageReport<D> {
    days: Vec<ClassifiedDay<D>>,
    summary: CoverageSummary,
}

impl<D> CoverageReport<D> {
    /// Classifies every day.
    ///
    /// # Errors
    ///
    /// [`ReportError`] naming the first day with a negative headcount.
    pub fn from_days<I>(days: I) -> Result<Self, ReportError>
    where
        I: IntoIterator<Item = DayCoverage<D>>,
    {
        let mut summary = CoverageSummary::default();
        let days = days
            .into_iter()
            .enumerate()
            .map(|(day_index, raw)| {
                let coverage = classify(raw.assigned, raw.required)
                    .map_err(|error| ReportError { day_index, error })?;
                summary.bump(coverage.status);
                Ok(ClassifiedDay {
                    day: raw.day,
                    coverage,
                })
            })
            .collect::<Result<Vec<_>, ReportError>>()?;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            days = days.len(),
            understaffed = summary.understaffed,
            at_risk = summary.at_risk,
            fully_covered = summary.fully_covered,
            overstaffed = summary.overstaffed,
            "classified coverage"
        );

        Ok(Self { days, summary })
    }

    /// Days in input order.
    #[must_use]
    pub fn days(&self) -> &[ClassifiedDay<D>] {
        &self.days
    }

    /// Number of days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if the report covers no days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days sorted most urgent first; ties keep input order.
    #[must_use]
    pub fn by_urgency(&self) -> Vec<&ClassifiedDay<D>> {
        let mut sorted: Vec<_> = self.days.iter().collect();
        sorted.sort_by_key(|d| d.coverage.urgency_rank);
        sorted
    }

    /// Days whose status is in `statuses`, in input order.
    pub fn filter(&self, statuses: StatusSet) -> impl Iterator<Item = &ClassifiedDay<D>> + '_ {
        self.days
            .iter()
            .filter(move |d| statuses.contains_status(d.coverage.status))
    }

    /// Per-status day counts.
    #[must_use]
    pub fn summary(&self) -> CoverageSummary {
        self.summary
    }

    /// Number of days with `status`.
    #[must_use]
    pub fn count(&self, status: CoverageStatus) -> usize {
        self.summary.get(status)
    }

    /// People missing across all days.
    #[must_use]
    pub fn total_shortfall(&self) -> u64 {
        self.days.iter().map(|d| d.coverage.shortfall()).sum()
    }

    /// The earliest day with the lowest urgency rank.
    #[must_use]
    pub fn most_urgent(&self) -> Option<&ClassifiedDay<D>> {
        // `min_by_key` returns the first minimum, preserving input order on ties.
        self.days.iter().min_by_key(|d| d.coverage.urgency_rank)
    }

    /// Returns `true` if any day is short of staff.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.summary.understaffed + self.summary.at_risk > 0
    }
}
