// Copyright 2025 the Roster Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types: employee records, node identifiers, and selection knobs.

use alloc::string::String;

/// Identifier of an employee record.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EmployeeId(pub u32);

impl core::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Access to the manager relationship of a record.
///
/// The tree builder only ever looks at these two fields; everything else a
/// record carries (names, titles, avatars, ...) is opaque payload that is
/// handed back unchanged through [`crate::OrgTree::employee`].
pub trait Reporting {
    /// Unique identifier of this record.
    fn id(&self) -> EmployeeId;
    /// Manager of this record, or `None` for the head of the organization.
    fn reports_to(&self) -> Option<EmployeeId>;
}

impl<R: Reporting + ?Sized> Reporting for &R {
    fn id(&self) -> EmployeeId {
        (**self).id()
    }

    fn reports_to(&self) -> Option<EmployeeId> {
        (**self).reports_to()
    }
}

/// A person in the organization.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Employee {
    /// Unique identifier.
    pub id: EmployeeId,
    /// Manager, or `None` for the organizational root.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reports_to: Option<EmployeeId>,
    /// Display name.
    pub name: String,
    /// Job title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Avatar image reference, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avatar: Option<String>,
}

impl Employee {
    /// Creates a record with an empty title and no avatar.
    pub fn new(id: u32, reports_to: Option<u32>, name: impl Into<String>) -> Self {
        Self {
            id: EmployeeId(id),
            reports_to: reports_to.map(EmployeeId),
            name: name.into(),
            title: String::new(),
            avatar: None,
        }
    }

    /// Sets the job title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Reporting for Employee {
    fn id(&self) -> EmployeeId {
        self.id
    }

    fn reports_to(&self) -> Option<EmployeeId> {
        self.reports_to
    }
}

/// Which record anchors a tree.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RootSelector {
    /// The whole organization: the single record that reports to nobody.
    #[default]
    All,
    /// The sub-organization headed by a specific employee.
    Employee(EmployeeId),
}

/// How many levels below the root take part in layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MaxDepth {
    /// Every level.
    #[default]
    All,
    /// Levels `0..=n`; deeper nodes stay in the tree but are not placed.
    Level(u32),
}

impl MaxDepth {
    /// Returns `true` if nodes at `level` are placed under this limit.
    #[must_use]
    pub const fn includes(self, level: u32) -> bool {
        match self {
            Self::All => true,
            Self::Level(max) => level <= max,
        }
    }
}

/// Index of a node inside an [`crate::OrgTree`].
///
/// Ids are only meaningful for the tree (and the charts laid out from it)
/// that handed them out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: usize) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Trees are built from in-memory rosters, far below u32::MAX records"
        )]
        let idx = idx as u32;
        Self(idx)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Position of this node in the tree's pre-order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.idx()
    }
}
