// Copyright 2025 the Roster Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roster Coverage: staffing status for scheduling days.
//!
//! Scheduling screens compare how many people are assigned to a day with how
//! many the day requires and badge the result. This crate owns that decision:
//!
//! - [`classify`] maps one day's `(assigned, required)` pair to a [`Coverage`]:
//!   a [`CoverageStatus`], its display label, and an urgency rank.
//! - [`CoverageReport`] classifies a run of days ([`DayCoverage`]) and answers
//!   the questions a coverage-by-day card asks: which days need attention,
//!   in what order, and how many people are missing in total.
//! - [`StatusSet`] selects statuses when filtering a report.
//!
//! | Condition                     | Status         | Label           | Rank |
//! |-------------------------------|----------------|-----------------|------|
//! | `assigned == required`        | `FullyCovered` | "Fully covered" | 2    |
//! | `assigned == required - 1`    | `AtRisk`       | "At risk"       | 1    |
//! | `assigned < required - 1`     | `Understaffed` | "Understaffed"  | 0    |
//! | `assigned > required`         | `Overstaffed`  | "Overstaffed"   | 3    |
//!
//! Lower ranks are more urgent. Negative headcounts are rejected with a
//! [`CoverageError`] rather than classified.
//!
//! ## Minimal example
//!
//! ```rust
//! use roster_coverage::{CoverageStatus, classify};
//!
//! let day = classify(6, 10).unwrap();
//! assert_eq!(day.status, CoverageStatus::Understaffed);
//! assert_eq!(day.shortfall(), 4);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`CoverageStatus`] and
//!   [`DayCoverage`], and `Serialize` for [`Coverage`].
//! - `tracing`: a `trace` event summarizing each report.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod report;
mod status;

pub use error::{CoverageError, Headcount, ReportError};
pub use report::{ClassifiedDay, CoverageReport, CoverageSummary, DayCoverage};
pub use status::{Coverage, CoverageStatus, StatusSet, classify};
