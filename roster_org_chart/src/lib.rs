// Copyright 2025 the Roster Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roster Org Chart: organization trees from flat reporting records, with a tidy 2D layout.
//!
//! The crate takes the employee list an HR screen already has (each record
//! knowing its manager) and turns it into something a renderer can draw:
//!
//! - [`OrgTree::build`] resolves a root ([`RootSelector`]) and collects reports
//!   depth first into an arena-backed tree. Children keep the order of the
//!   input records.
//! - [`compute_layout`] (or [`OrgTree::layout`]) assigns each card a position:
//!   sibling subtrees never overlap, parents sit centred over their children,
//!   and each level maps to a fixed row.
//! - [`OrgChart`] holds the result together with the render-side helpers a
//!   chart view needs: card rectangles, elbow [`Connector`]s, and hit testing.
//!
//! ## Minimal example
//!
//! ```rust
//! use roster_org_chart::{Employee, LayoutConfig, MaxDepth, OrgTree, RootSelector};
//!
//! let staff = [
//!     Employee::new(1, None, "Ada").with_title("CEO"),
//!     Employee::new(2, Some(1), "Brian").with_title("CTO"),
//!     Employee::new(3, Some(1), "Chen").with_title("CFO"),
//! ];
//!
//! let tree = OrgTree::build(&staff, RootSelector::All)
//!     .expect("well-formed roster")
//!     .expect("roster has a root");
//! let chart = tree.layout(MaxDepth::All, &LayoutConfig::default());
//!
//! for node in chart.nodes() {
//!     let card = chart.node_rect(node.id).unwrap();
//!     // Draw `node.employee` inside `card`.
//!     assert!(card.width() > 0.0);
//! }
//! ```
//!
//! ## Layout model
//!
//! The layout is a simplified tidy tree: a post-order pass sums subtree
//! widths (a leaf is one card wide, siblings are separated by
//! [`LayoutConfig::horizontal_spacing`]), then a pre-order pass places leaves
//! left to right and centres each parent between its first and last child.
//! There is no contour matching, so a narrow subtree next to a wide one keeps
//! its full slot rather than tucking under its neighbour.
//!
//! Vertical position depends only on depth:
//! `y = level * (node_size.height + vertical_spacing)`.
//! [`MaxDepth::Level`] hides deeper levels without removing them from the tree.
//!
//! ## Malformed rosters
//!
//! A roster without a root (or a selected employee that is missing) builds to
//! `Ok(None)`. Duplicate ids, several roots when the whole organization is
//! requested, and reporting cycles reachable from the root are reported as
//! [`BuildError`]s instead of being resolved silently.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for [`Employee`] and [`EmployeeId`].
//! - `tracing`: `debug`/`warn` events from tree building and layout.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod layout;
mod tree;
mod types;

pub use error::BuildError;
pub use layout::{
    Connector, HORIZONTAL_SPACING, LayoutConfig, NODE_HEIGHT, NODE_WIDTH, OrgChart, PlacedNode,
    VERTICAL_SPACING, compute_layout,
};
pub use tree::{OrgTree, build_tree, chain_of_command, roots};
pub use types::{Employee, EmployeeId, MaxDepth, NodeId, Reporting, RootSelector};
