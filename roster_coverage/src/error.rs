// Copyright 2025 the Roster Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input validation errors.

/// Which headcount a [`CoverageError`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Headcount {
    /// Staff scheduled for the day.
    Assigned,
    /// Staff the day calls for.
    Required,
}

impl Headcount {
    /// Field name as it appears in day records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
            Self::Required => "required",
        }
    }
}

/// A headcount that cannot be classified.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CoverageError {
    /// The offending field.
    pub field: Headcount,
    /// The value that was passed in.
    pub value: i64,
}

impl core::fmt::Display for CoverageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "invalid {} headcount {}: must not be negative",
            self.field.as_str(),
            self.value
        )
    }
}

impl core::error::Error for CoverageError {}

/// A day in a report failed validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReportError {
    /// Position of the day in the input sequence.
    pub day_index: usize,
    /// What was wrong with it.
    pub error: CoverageError,
}

impl core::fmt::Display for ReportError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "day {}: {}", self.day_index, self.error)
    }
}

impl core::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}
