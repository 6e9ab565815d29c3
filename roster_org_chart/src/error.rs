// Copyright 2025 the Roster Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while building a tree from records.

use crate::types::EmployeeId;

/// Why a set of records could not be turned into a tree.
///
/// A missing root is not an error: [`crate::OrgTree::build`] returns
/// `Ok(None)` for it, which callers treat as "nothing to render".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Two records share the same id.
    DuplicateId(EmployeeId),
    /// More than one record reports to nobody while selecting the whole organization.
    MultipleRoots {
        /// First root-like record, in input order.
        first: EmployeeId,
        /// Second root-like record, in input order.
        second: EmployeeId,
    },
    /// Descending from the root reached a record a second time.
    ///
    /// This happens for self-managed records and for manager cycles that
    /// contain the selected root.
    CycleDetected {
        /// The record that was reached twice.
        employee: EmployeeId,
    },
}

impl core::fmt::Display for BuildError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate employee id {id}"),
            Self::MultipleRoots { first, second } => {
                write!(f, "multiple root employees: {first} and {second}")
            }
            Self::CycleDetected { employee } => {
                write!(f, "reporting cycle detected at employee {employee}")
            }
        }
    }
}

impl core::error::Error for BuildError {}
