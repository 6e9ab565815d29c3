// Copyright 2025 the Roster Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coverage by day: classify a mock week and list the days that need attention.
//!
//! Run:
//! - `cargo run -p roster_demos --example coverage_week`

use roster_coverage::{CoverageReport, CoverageStatus, StatusSet};
use roster_demos::{init_tracing, mock_week};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let report = CoverageReport::from_days(mock_week()?)?;

    println!("Week at a glance:");
    for day in report.days() {
        let c = &day.coverage;
        println!(
            "  {:<3} {:>2}/{:<2} {}",
            day.day, c.assigned, c.required, c.label
        );
    }

    println!("Most urgent first:");
    for day in report.by_urgency() {
        println!("  {} ({})", day.day, day.coverage.status.as_str());
    }

    for status in CoverageStatus::ALL {
        println!("{:>14}: {}", status.label(), report.count(status));
    }

    if report.needs_attention() {
        let flagged: Vec<_> = report
            .filter(StatusSet::needs_attention())
            .map(|d| d.day.as_str())
            .collect();
        println!(
            "Needs attention: {} ({} people short)",
            flagged.join(", "),
            report.total_shortfall()
        );
    }

    Ok(())
}
