// Copyright 2025 the Roster Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tidy layout: subtree-width accumulation followed by left-to-right placement.

use alloc::vec::Vec;

use kurbo::{Line, Point, Rect, Size};

use crate::tree::OrgTree;
use crate::types::{MaxDepth, NodeId};

/// Default card width in logical pixels.
pub const NODE_WIDTH: f64 = 220.0;
/// Default card height in logical pixels.
pub const NODE_HEIGHT: f64 = 120.0;
/// Default gap between neighbouring subtrees.
pub const HORIZONTAL_SPACING: f64 = 40.0;
/// Default gap between rows.
pub const VERTICAL_SPACING: f64 = 80.0;

/// Card size and spacing used by [`compute_layout`].
///
/// The default reproduces the stock chart geometry ([`NODE_WIDTH`],
/// [`NODE_HEIGHT`], [`HORIZONTAL_SPACING`], [`VERTICAL_SPACING`]).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Size of every card.
    pub node_size: Size,
    /// Gap between neighbouring sibling subtrees.
    pub horizontal_spacing: f64,
    /// Gap between the bottom of one row of cards and the top of the next.
    pub vertical_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_size: Size::new(NODE_WIDTH, NODE_HEIGHT),
            horizontal_spacing: HORIZONTAL_SPACING,
            vertical_spacing: VERTICAL_SPACING,
        }
    }
}

impl LayoutConfig {
    /// Vertical distance between the tops of consecutive rows.
    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.node_size.height + self.vertical_spacing
    }

    /// Horizontal distance between the centres of two neighbouring leaves.
    #[must_use]
    pub fn leaf_pitch(&self) -> f64 {
        self.node_size.width + self.horizontal_spacing
    }
}

/// A node that received a position.
#[derive(Debug)]
pub struct PlacedNode<'a, R> {
    /// The node in the source tree.
    pub id: NodeId,
    /// Its parent, `None` for the chart root.
    pub parent: Option<NodeId>,
    /// The record this card shows.
    pub employee: &'a R,
    /// Depth below the root.
    pub level: u32,
    /// Card anchor: `x` is the horizontal centre, `y` the top edge.
    pub position: Point,
}

impl<R> Clone for PlacedNode<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for PlacedNode<'_, R> {}

/// An elbow connector from a parent card down to one of its children.
///
/// The connector leaves the bottom centre of the parent, runs along a rail
/// halfway through the row gap, and drops onto the top centre of the child.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Connector {
    /// Upper end.
    pub parent: NodeId,
    /// Lower end.
    pub child: NodeId,
    /// Drop from the parent, rail, drop into the child.
    pub segments: [Line; 3],
}

/// Positions computed for a tree.
///
/// Produced by [`compute_layout`] or [`OrgTree::layout`]. The tree itself is
/// left untouched, so laying out the same tree twice gives identical charts.
#[derive(Debug)]
pub struct OrgChart<'a, R> {
    nodes: Vec<PlacedNode<'a, R>>,
    /// `NodeId` → slot in `nodes`, `None` for nodes cut by the depth limit.
    slots: Vec<Option<usize>>,
    width: f64,
    height: f64,
    config: LayoutConfig,
}

impl<R> Clone for OrgChart<'_, R> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            slots: self.slots.clone(),
            width: self.width,
            height: self.height,
            config: self.config,
        }
    }
}

/// Lays out `tree`, placing every node whose level is within `max_depth`.
///
/// Returns an empty chart (no nodes, zero width and height, no root) when
/// `tree` is `None`.
///
/// ## Example
///
/// ```rust
/// use roster_org_chart::{Employee, LayoutConfig, MaxDepth, OrgTree, RootSelector, compute_layout};
///
/// let staff = [
///     Employee::new(1, None, "Ada"),
///     Employee::new(2, Some(1), "Brian"),
///     Employee::new(3, Some(1), "Chen"),
/// ];
/// let tree = OrgTree::build(&staff, RootSelector::All).unwrap();
/// let chart = compute_layout(tree.as_ref(), MaxDepth::All, &LayoutConfig::default());
///
/// assert_eq!(chart.len(), 3);
/// assert_eq!(chart.width(), 480.0);
/// assert_eq!(chart.height(), 400.0);
/// let root = chart.root().unwrap();
/// assert_eq!(chart.position(root).unwrap().x, 240.0);
/// ```
pub fn compute_layout<'a, R>(
    tree: Option<&OrgTree<'a, R>>,
    max_depth: MaxDepth,
    config: &LayoutConfig,
) -> OrgChart<'a, R> {
    let Some(tree) = tree else {
        return OrgChart::empty(*config);
    };

    let visited: Vec<NodeId> = tree
        .iter()
        .filter(|&id| tree.level(id).is_some_and(|l| max_depth.includes(l)))
        .collect();
    let mut pass = Pass {
        tree,
        max_depth,
        config,
        visited,
        widths: alloc::vec![0.0; tree.len()],
        lefts: alloc::vec![0.0; tree.len()],
        positions: alloc::vec![None; tree.len()],
    };
    let width = pass.measure();
    pass.place();

    let Pass {
        visited, positions, ..
    } = pass;

    let mut slots = alloc::vec![None; tree.len()];
    let mut nodes = Vec::with_capacity(visited.len());
    let mut max_level = 0;
    for id in visited {
        let (Some(employee), Some(level), Some(position)) =
            (tree.employee(id), tree.level(id), positions[id.idx()])
        else {
            continue;
        };
        max_level = max_level.max(level);
        slots[id.idx()] = Some(nodes.len());
        nodes.push(PlacedNode {
            id,
            parent: tree.parent_of(id),
            employee,
            level,
            position,
        });
    }
    let height = if nodes.is_empty() {
        0.0
    } else {
        f64::from(max_level + 1) * config.row_height()
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(nodes = nodes.len(), width, height, "laid out org chart");

    OrgChart {
        nodes,
        slots,
        width,
        height,
        config: *config,
    }
}

impl<'a, R> OrgTree<'a, R> {
    /// Lays out this tree. See [`compute_layout`].
    #[must_use]
    pub fn layout(&self, max_depth: MaxDepth, config: &LayoutConfig) -> OrgChart<'a, R> {
        compute_layout(Some(self), max_depth, config)
    }
}

/// Both passes walk the arena iteratively: it is already in pre-order, so a
/// reverse sweep sees every child before its parent.
struct Pass<'t, 'a, R> {
    tree: &'t OrgTree<'a, R>,
    max_depth: MaxDepth,
    config: &'t LayoutConfig,
    /// Placed nodes in pre-order.
    visited: Vec<NodeId>,
    /// Subtree width per `NodeId`.
    widths: Vec<f64>,
    /// Left edge of each subtree's span per `NodeId`.
    lefts: Vec<f64>,
    positions: Vec<Option<Point>>,
}

impl<'t, 'a, R> Pass<'t, 'a, R> {
    /// Children that take part in layout; all or none, since siblings share a level.
    fn placed_children(&self, id: NodeId) -> &'t [NodeId] {
        let tree = self.tree;
        let level = tree.level(id).unwrap_or(0);
        if self.max_depth.includes(level + 1) {
            tree.children_of(id)
        } else {
            &[]
        }
    }

    /// Subtree widths, children before parents. Returns the root's width.
    fn measure(&mut self) -> f64 {
        let leaf = self.config.node_size.width;
        for i in (0..self.visited.len()).rev() {
            let id = self.visited[i];
            let children = self.placed_children(id);
            self.widths[id.idx()] = if children.is_empty() {
                leaf
            } else {
                let sum: f64 = children.iter().map(|c| self.widths[c.idx()]).sum();
                sum + self.config.horizontal_spacing * gaps(children.len())
            };
        }
        self.visited.first().map_or(0.0, |root| self.widths[root.idx()])
    }

    /// Hands each child its span's left edge, then centres parents over their children.
    fn place(&mut self) {
        let spacing = self.config.horizontal_spacing;
        for i in 0..self.visited.len() {
            let id = self.visited[i];
            let mut offset = self.lefts[id.idx()];
            for &child in self.placed_children(id) {
                self.lefts[child.idx()] = offset;
                offset += self.widths[child.idx()] + spacing;
            }
        }

        let half = self.config.node_size.width / 2.0;
        for i in (0..self.visited.len()).rev() {
            let id = self.visited[i];
            let level = self.tree.level(id).unwrap_or(0);
            let y = f64::from(level) * self.config.row_height();
            let children = self.placed_children(id);
            let x = match (children.first(), children.last()) {
                (Some(first), Some(last)) => {
                    let first_x = self.positions[first.idx()].map_or(0.0, |p| p.x);
                    let last_x = self.positions[last.idx()].map_or(0.0, |p| p.x);
                    (first_x + last_x) / 2.0
                }
                _ => self.lefts[id.idx()] + half,
            };
            self.positions[id.idx()] = Some(Point::new(x, y));
        }
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "Sibling counts are far below 2^52"
)]
fn gaps(children: usize) -> f64 {
    children.saturating_sub(1) as f64
}

impl<'a, R> OrgChart<'a, R> {
    fn empty(config: LayoutConfig) -> Self {
        Self {
            nodes: Vec::new(),
            slots: Vec::new(),
            width: 0.0,
            height: 0.0,
            config,
        }
    }

    /// Placed nodes in pre-order.
    #[must_use]
    pub fn nodes(&self) -> &[PlacedNode<'a, R>] {
        &self.nodes
    }

    /// Number of placed nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing was placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total width: the root's subtree width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Total height: one row height per placed level.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The root node, if anything was placed.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.nodes.first().map(|n| n.id)
    }

    /// Geometry used to produce this chart.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// The placed node for `id`, `None` if it was cut by the depth limit.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&PlacedNode<'a, R>> {
        let slot = (*self.slots.get(id.idx())?)?;
        self.nodes.get(slot)
    }

    /// Card anchor of `id`: horizontal centre and top edge.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<Point> {
        self.node(id).map(|n| n.position)
    }

    /// Card rectangle of `id`.
    #[must_use]
    pub fn node_rect(&self, id: NodeId) -> Option<Rect> {
        self.position(id).map(|p| self.card_rect(p))
    }

    /// The whole chart area, anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// One elbow connector per placed parent/child pair, in pre-order of the child.
    #[must_use]
    pub fn connectors(&self) -> Vec<Connector> {
        let size = self.config.node_size;
        let rail_gap = self.config.vertical_spacing / 2.0;
        self.nodes
            .iter()
            .filter_map(|child| {
                let parent = self.node(child.parent?)?;
                let from = Point::new(parent.position.x, parent.position.y + size.height);
                let rail_y = from.y + rail_gap;
                let to = child.position;
                Some(Connector {
                    parent: parent.id,
                    child: child.id,
                    segments: [
                        Line::new(from, Point::new(from.x, rail_y)),
                        Line::new(Point::new(from.x, rail_y), Point::new(to.x, rail_y)),
                        Line::new(Point::new(to.x, rail_y), to),
                    ],
                })
            })
            .collect()
    }

    /// The card under `point`, if any.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|n| self.card_rect(n.position).contains(point))
            .map(|n| n.id)
    }

    fn card_rect(&self, anchor: Point) -> Rect {
        let size = self.config.node_size;
        Rect::new(
            anchor.x - size.width / 2.0,
            anchor.y,
            anchor.x + size.width / 2.0,
            anchor.y + size.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Employee, RootSelector};
    use alloc::vec;

    fn three_levels() -> Vec<Employee> {
        vec![
            Employee::new(1, None, "CEO"),
            Employee::new(2, Some(1), "CTO"),
            Employee::new(3, Some(1), "CFO"),
            Employee::new(4, Some(2), "Eng 1"),
            Employee::new(5, Some(2), "Eng 2"),
            Employee::new(6, Some(3), "Accountant"),
        ]
    }

    fn x_of(chart: &OrgChart<'_, Employee>, tree: &OrgTree<'_, Employee>, id: u32) -> f64 {
        let node = tree.find(crate::EmployeeId(id)).unwrap();
        chart.position(node).unwrap().x
    }

    #[test]
    fn empty_tree_gives_empty_chart() {
        let chart = compute_layout::<Employee>(None, MaxDepth::All, &LayoutConfig::default());
        assert!(chart.is_empty());
        assert_eq!(chart.width(), 0.0);
        assert_eq!(chart.height(), 0.0);
        assert_eq!(chart.root(), None);
        assert!(chart.connectors().is_empty());
    }

    #[test]
    fn single_node() {
        let staff = [Employee::new(1, None, "Solo")];
        let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        let chart = tree.layout(MaxDepth::All, &LayoutConfig::default());
        assert_eq!(chart.len(), 1);
        assert_eq!(chart.position(tree.root()), Some(Point::new(110.0, 0.0)));
        assert_eq!(chart.width(), NODE_WIDTH);
        assert_eq!(chart.height(), NODE_HEIGHT + VERTICAL_SPACING);
    }

    #[test]
    fn root_with_two_leaves() {
        let staff = [
            Employee::new(1, None, "Root"),
            Employee::new(2, Some(1), "Left"),
            Employee::new(3, Some(1), "Right"),
        ];
        let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        let chart = tree.layout(MaxDepth::All, &LayoutConfig::default());

        let root = chart.node(tree.root()).unwrap();
        assert_eq!(root.level, 0);
        assert_eq!(root.position.y, 0.0);

        let kids = tree.children_of(tree.root());
        let left = chart.node(kids[0]).unwrap();
        let right = chart.node(kids[1]).unwrap();
        assert_eq!(left.level, 1);
        assert_eq!(left.position.y, 200.0);
        assert_eq!(right.position.y, 200.0);
        assert_eq!(right.position.x - left.position.x, 260.0);
        assert_eq!(right.position.x - left.position.x, LayoutConfig::default().leaf_pitch());
        assert_eq!(root.position.x, (left.position.x + right.position.x) / 2.0);
        assert_eq!(chart.width(), 480.0);
    }

    #[test]
    fn three_level_positions() {
        let staff = three_levels();
        let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        let chart = tree.layout(MaxDepth::All, &LayoutConfig::default());

        assert_eq!(chart.len(), 6);
        // Leaves at 110, 370 and 630; CTO centred over its two engineers.
        assert_eq!(x_of(&chart, &tree, 4), 110.0);
        assert_eq!(x_of(&chart, &tree, 5), 370.0);
        assert_eq!(x_of(&chart, &tree, 6), 630.0);
        assert_eq!(x_of(&chart, &tree, 2), 240.0);
        assert_eq!(x_of(&chart, &tree, 3), 630.0);
        assert_eq!(x_of(&chart, &tree, 1), 435.0);
        assert_eq!(chart.width(), 740.0);
        assert_eq!(chart.height(), 600.0);
    }

    #[test]
    fn depth_zero_places_only_the_root() {
        let staff = three_levels();
        let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        let chart = tree.layout(MaxDepth::Level(0), &LayoutConfig::default());

        assert_eq!(chart.len(), 1);
        assert_eq!(chart.root(), Some(tree.root()));
        assert_eq!(chart.height(), NODE_HEIGHT + VERTICAL_SPACING);
        assert_eq!(chart.width(), NODE_WIDTH);
        // Truncated nodes are still part of the tree, just not placed.
        assert_eq!(tree.children_of(tree.root()).len(), 2);
        assert_eq!(chart.position(tree.children_of(tree.root())[0]), None);
    }

    #[test]
    fn depth_one_treats_managers_as_leaves() {
        let staff = three_levels();
        let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        let chart = tree.layout(MaxDepth::Level(1), &LayoutConfig::default());

        assert_eq!(chart.len(), 3);
        assert_eq!(chart.width(), 480.0);
        assert_eq!(chart.height(), 400.0);
        assert_eq!(x_of(&chart, &tree, 2), 110.0);
        assert_eq!(x_of(&chart, &tree, 3), 370.0);
    }

    #[test]
    fn custom_geometry_scales_layout() {
        let staff = [
            Employee::new(1, None, "Root"),
            Employee::new(2, Some(1), "A"),
            Employee::new(3, Some(1), "B"),
        ];
        let config = LayoutConfig {
            node_size: Size::new(10.0, 5.0),
            horizontal_spacing: 2.0,
            vertical_spacing: 3.0,
        };
        let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        let chart = tree.layout(MaxDepth::All, &config);
        assert_eq!(chart.width(), 22.0);
        assert_eq!(chart.height(), 16.0);
        assert_eq!(chart.position(tree.root()), Some(Point::new(11.0, 0.0)));
    }

    #[test]
    fn layout_is_repeatable() {
        let staff = three_levels();
        let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        let a = tree.layout(MaxDepth::All, &LayoutConfig::default());
        let rebuilt = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        let b = rebuilt.layout(MaxDepth::All, &LayoutConfig::default());
        let pa: Vec<_> = a.nodes().iter().map(|n| n.position).collect();
        let pb: Vec<_> = b.nodes().iter().map(|n| n.position).collect();
        assert_eq!(pa, pb);
    }

    #[test]
    fn connectors_join_parent_bottom_to_child_top() {
        let staff = [
            Employee::new(1, None, "Root"),
            Employee::new(2, Some(1), "Left"),
            Employee::new(3, Some(1), "Right"),
        ];
        let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        let chart = tree.layout(MaxDepth::All, &LayoutConfig::default());
        let connectors = chart.connectors();
        assert_eq!(connectors.len(), 2);

        let first = connectors[0];
        assert_eq!(first.parent, tree.root());
        assert_eq!(first.segments[0].p0, Point::new(240.0, 120.0));
        assert_eq!(first.segments[0].p1, Point::new(240.0, 160.0));
        assert_eq!(first.segments[1].p1, Point::new(110.0, 160.0));
        assert_eq!(first.segments[2].p1, Point::new(110.0, 200.0));
    }

    #[test]
    fn truncated_children_have_no_connectors() {
        let staff = three_levels();
        let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        let chart = tree.layout(MaxDepth::Level(1), &LayoutConfig::default());
        assert_eq!(chart.connectors().len(), 2);
    }

    #[test]
    fn long_chain_does_not_exhaust_the_stack() {
        let staff: Vec<_> = (1..=20_000_u32)
            .map(|i| Employee::new(i, (i > 1).then_some(i - 1), "link"))
            .collect();
        let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        let chart = tree.layout(MaxDepth::All, &LayoutConfig::default());

        assert_eq!(chart.len(), 20_000);
        assert_eq!(chart.width(), NODE_WIDTH);
        assert_eq!(chart.height(), 20_000.0 * 200.0);
        let last = chart.nodes().last().unwrap();
        assert_eq!(last.level, 19_999);
        assert_eq!(last.position, Point::new(110.0, 19_999.0 * 200.0));
        assert!(chart.nodes().iter().all(|n| n.position.x == 110.0));
    }

    #[test]
    fn hit_test_finds_cards() {
        let staff = three_levels();
        let tree = OrgTree::build(&staff, RootSelector::All).unwrap().unwrap();
        let chart = tree.layout(MaxDepth::All, &LayoutConfig::default());

        let cfo = tree.find(crate::EmployeeId(3)).unwrap();
        assert_eq!(chart.hit_test(Point::new(630.0, 250.0)), Some(cfo));
        assert_eq!(chart.node_rect(cfo), Some(Rect::new(520.0, 200.0, 740.0, 320.0)));
        // The gap between rows is empty.
        assert_eq!(chart.hit_test(Point::new(630.0, 150.0)), None);
        assert_eq!(chart.bounds(), Rect::new(0.0, 0.0, 740.0, 600.0));
    }
}
