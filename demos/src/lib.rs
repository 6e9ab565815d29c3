// Copyright 2025 the Roster Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mock data and logging setup shared by the Roster demos.
//!
//! Run:
//! - `cargo run -p roster_demos --example org_chart`
//! - `cargo run -p roster_demos --example coverage_week`
//!
//! Set `RUST_LOG=debug` to see the events emitted by the library crates.

use roster_coverage::DayCoverage;
use roster_org_chart::Employee;
use tracing_subscriber::EnvFilter;

/// Demo employee directory, one record per person.
pub const ROSTER_JSON: &str = include_str!("../data/roster.json");

/// Demo staffing numbers for one week.
pub const COVERAGE_WEEK_JSON: &str = include_str!("../data/coverage_week.json");

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Parses [`ROSTER_JSON`].
pub fn mock_roster() -> Result<Vec<Employee>, serde_json::Error> {
    let staff: Vec<Employee> = serde_json::from_str(ROSTER_JSON)?;
    tracing::info!(employees = staff.len(), "loaded mock roster");
    Ok(staff)
}

/// Parses [`COVERAGE_WEEK_JSON`].
pub fn mock_week() -> Result<Vec<DayCoverage<String>>, serde_json::Error> {
    let days: Vec<DayCoverage<String>> = serde_json::from_str(COVERAGE_WEEK_JSON)?;
    tracing::info!(days = days.len(), "loaded mock week");
    Ok(days)
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use roster_org_chart::{EmployeeId, OrgTree, RootSelector};
    use tracing_subscriber::fmt::MakeWriter;

    /// Collects formatted log output in memory.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn mock_roster_forms_one_tree() {
        let staff = mock_roster().unwrap();
        assert_eq!(staff.len(), 11);
        assert_eq!(staff[1].reports_to, Some(EmployeeId(1)));
        assert_eq!(staff[0].avatar.as_deref(), Some("avatars/maria.png"));
        assert_eq!(staff[1].avatar, None);
        let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        assert_eq!(tree.len(), staff.len());
    }

    #[test]
    fn mock_week_has_seven_days() {
        let week = mock_week().unwrap();
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].day, "Mon");
    }

    #[test]
    fn loading_mock_data_logs_counts() {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            mock_roster().unwrap();
            mock_week().unwrap();
        });

        let out = capture.text();
        assert!(out.contains("loaded mock roster"), "{out}");
        assert!(out.contains("employees=11"), "{out}");
        assert!(out.contains("loaded mock week"), "{out}");
        assert!(out.contains("days=7"), "{out}");
    }
}
