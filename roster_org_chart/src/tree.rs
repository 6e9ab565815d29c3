// Copyright 2025 the Roster Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction from flat manager-relationship records.

use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::error::BuildError;
use crate::types::{EmployeeId, NodeId, Reporting, RootSelector};

type Reports = SmallVec<[usize; 4]>;

/// A rooted organization tree borrowed from a slice of records.
///
/// Nodes are stored in an arena in pre-order, so the root is always the first
/// node and every subtree occupies a contiguous run of [`NodeId`]s. Records are
/// shared with the caller, never copied.
///
/// ## Example
///
/// ```rust
/// use roster_org_chart::{Employee, OrgTree, RootSelector};
///
/// let staff = [
///     Employee::new(1, None, "Ada"),
///     Employee::new(2, Some(1), "Brian"),
///     Employee::new(3, Some(1), "Chen"),
/// ];
/// let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
///
/// assert_eq!(tree.len(), 3);
/// let names: Vec<_> = tree
///     .children_of(tree.root())
///     .iter()
///     .map(|&c| tree.employee(c).unwrap().name.as_str())
///     .collect();
/// assert_eq!(names, ["Brian", "Chen"]);
/// ```
#[derive(Clone, Debug)]
pub struct OrgTree<'a, R> {
    records: &'a [R],
    nodes: Vec<Node>,
}

#[derive(Clone, Debug)]
struct Node {
    record: usize,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    level: u32,
}

/// Builds the tree for `root` out of `records`.
///
/// This is a free-function spelling of [`OrgTree::build`].
pub fn build_tree<R: Reporting>(
    records: &[R],
    root: RootSelector,
) -> Result<Option<OrgTree<'_, R>>, BuildError> {
    OrgTree::build(records, root)
}

impl<'a, R: Reporting> OrgTree<'a, R> {
    /// Builds the tree for `root` out of `records`.
    ///
    /// Children of a node are the records reporting to it, in the order they
    /// appear in `records`. Returns `Ok(None)` when there is nothing to
    /// render: no record reports to nobody ([`RootSelector::All`]) or the
    /// selected employee is not present.
    ///
    /// # Errors
    ///
    /// - [`BuildError::DuplicateId`] if two records share an id.
    /// - [`BuildError::MultipleRoots`] if [`RootSelector::All`] finds more
    ///   than one record without a manager.
    /// - [`BuildError::CycleDetected`] if descending from the root revisits a
    ///   record.
    pub fn build(records: &'a [R], root: RootSelector) -> Result<Option<Self>, BuildError> {
        let mut by_id: HashMap<EmployeeId, usize> = HashMap::with_capacity(records.len());
        let mut reports: HashMap<EmployeeId, Reports> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            if by_id.insert(record.id(), idx).is_some() {
                return Err(BuildError::DuplicateId(record.id()));
            }
            if let Some(manager) = record.reports_to() {
                reports.entry(manager).or_default().push(idx);
            }
        }

        let root_idx = match root {
            RootSelector::All => {
                let mut candidates = records
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| r.reports_to().is_none());
                let Some((idx, first)) = candidates.next() else {
                    return Ok(None);
                };
                if let Some((_, second)) = candidates.next() {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(
                        first = first.id().0,
                        second = second.id().0,
                        "multiple root employees"
                    );
                    return Err(BuildError::MultipleRoots {
                        first: first.id(),
                        second: second.id(),
                    });
                }
                idx
            }
            RootSelector::Employee(id) => match by_id.get(&id) {
                Some(&idx) => idx,
                None => return Ok(None),
            },
        };

        let mut nodes: Vec<Node> = Vec::new();
        let mut visited: HashSet<EmployeeId> = HashSet::new();
        // Pre-order walk; reports are pushed in reverse so they pop in input order.
        let mut stack: Vec<(usize, Option<NodeId>, u32)> = alloc::vec![(root_idx, None, 0)];
        while let Some((record, parent, level)) = stack.pop() {
            let id = records[record].id();
            if !visited.insert(id) {
                #[cfg(feature = "tracing")]
                tracing::warn!(employee = id.0, "reporting cycle detected");
                return Err(BuildError::CycleDetected { employee: id });
            }
            let node = NodeId::new(nodes.len());
            nodes.push(Node {
                record,
                parent,
                children: SmallVec::new(),
                level,
            });
            if let Some(parent) = parent {
                nodes[parent.idx()].children.push(node);
            }
            if let Some(direct) = reports.get(&id) {
                stack.extend(direct.iter().rev().map(|&r| (r, Some(node), level + 1)));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            root = records[root_idx].id().0,
            nodes = nodes.len(),
            "built org tree"
        );

        Ok(Some(Self { records, nodes }))
    }
}

impl<'a, R> OrgTree<'a, R> {
    /// The root node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes. A built tree always holds its root, so
    /// this is `false` for any tree returned by [`OrgTree::build`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The record a node represents.
    #[must_use]
    pub fn employee(&self, id: NodeId) -> Option<&'a R> {
        let records = self.records;
        self.nodes.get(id.idx()).map(|n| &records[n.record])
    }

    /// Depth of a node below the root (root = 0).
    #[must_use]
    pub fn level(&self, id: NodeId) -> Option<u32> {
        self.nodes.get(id.idx()).map(|n| n.level)
    }

    /// Parent of a node, or `None` for the root (or an unknown id).
    #[must_use]
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.idx()).and_then(|n| n.parent)
    }

    /// Children of a node in input order. Empty for leaves and unknown ids.
    #[must_use]
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.idx())
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Deepest level present in the tree.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.nodes.iter().map(|n| n.level).max().unwrap_or(0)
    }

    /// Number of nodes strictly below `id`.
    #[must_use]
    pub fn descendant_count(&self, id: NodeId) -> usize {
        let Some(node) = self.nodes.get(id.idx()) else {
            return 0;
        };
        // Subtrees are contiguous in pre-order: the run ends at the next node
        // that is not deeper than `id`.
        self.nodes[id.idx() + 1..]
            .iter()
            .take_while(|n| n.level > node.level)
            .count()
    }

    /// Node ids in pre-order (parents before children, siblings in input order).
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }
}

impl<'a, R: Reporting> OrgTree<'a, R> {
    /// Finds the node representing `employee`, if it is part of this tree.
    #[must_use]
    pub fn find(&self, employee: EmployeeId) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| self.records[n.record].id() == employee)
            .map(NodeId::new)
    }
}

/// Records that report to nobody, in input order.
///
/// A well-formed roster has exactly one; hosts can use this to offer a choice
/// when [`OrgTree::build`] reports [`BuildError::MultipleRoots`].
pub fn roots<R: Reporting>(records: &[R]) -> impl Iterator<Item = &R> {
    records.iter().filter(|r| r.reports_to().is_none())
}

/// The management chain of `employee`: the employee first, then their manager,
/// and so on up to the top.
///
/// The walk stops at a record without a manager or at a manager id that is
/// not present in `records`. An unknown `employee` yields an empty chain.
///
/// # Errors
///
/// [`BuildError::CycleDetected`] if the chain loops back on itself.
pub fn chain_of_command<R: Reporting>(
    records: &[R],
    employee: EmployeeId,
) -> Result<Vec<&R>, BuildError> {
    let by_id: HashMap<EmployeeId, &R> = records.iter().map(|r| (r.id(), r)).collect();
    let mut chain = Vec::new();
    let mut seen = HashSet::new();
    let mut next = by_id.get(&employee).copied();
    while let Some(record) = next {
        if !seen.insert(record.id()) {
            return Err(BuildError::CycleDetected {
                employee: record.id(),
            });
        }
        chain.push(record);
        next = record.reports_to().and_then(|m| by_id.get(&m).copied());
    }
    Ok(chain)
}
