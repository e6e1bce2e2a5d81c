// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Junction routing: every edge becomes a short list of lane points on the
//! doubled grid.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BTreeSet};

use smallvec::SmallVec;

use super::error::LayoutError;
use super::grid::{
    bottom_line, left_line, right_line, top_line, GridLayout, JunctionPoint, LayoutNode,
};
use crate::config::LayoutConfig;
use crate::model::graph::ControlFlowGraph;
use crate::model::ids::{Address, EdgeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Left,
    Right,
    Still,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Up,
    Down,
    Still,
}

/// Which vertical lane a route uses to reach its destination row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    /// Straight into the lane above the next row.
    Direct,
    /// Right of every vertex in the spanned rows.
    RightBand,
    /// Left lane of the destination column.
    DestinationLeft,
}

/// An edge with both endpoints placed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlacedEdge {
    pub(crate) id: EdgeId,
    pub(crate) from: LayoutNode,
    pub(crate) to: LayoutNode,
}

impl PlacedEdge {
    fn order_key(&self) -> (usize, Reverse<usize>, usize, usize, EdgeId) {
        (self.to.row(), Reverse(self.from.row()), self.to.column(), self.from.column(), self.id)
    }
}

/// Total processing order for edges: destination row ascending, source row
/// descending, destination column ascending, source column ascending, then
/// insertion order.
pub(crate) fn compare_edges(a: &PlacedEdge, b: &PlacedEdge) -> Ordering {
    a.order_key().cmp(&b.order_key())
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRoute {
    edge: EdgeId,
    from: Address,
    to: Address,
    horizontal: Horizontal,
    vertical: Vertical,
    lane: Lane,
    points: SmallVec<[JunctionPoint; 4]>,
    emphasis: Option<f64>,
}

impl EdgeRoute {
    pub fn edge(&self) -> EdgeId {
        self.edge
    }

    pub fn from(&self) -> Address {
        self.from
    }

    pub fn to(&self) -> Address {
        self.to
    }

    pub fn horizontal(&self) -> Horizontal {
        self.horizontal
    }

    pub fn vertical(&self) -> Vertical {
        self.vertical
    }

    pub fn lane(&self) -> Lane {
        self.lane
    }

    /// Junction points from source to destination.
    pub fn points(&self) -> &[JunctionPoint] {
        &self.points
    }

    /// Rendering emphasis requested for this edge, set on non-descending edges.
    pub fn emphasis(&self) -> Option<f64> {
        self.emphasis
    }
}

/// Reverse lookup from a junction point to the edges passing through it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReverseJunctionIndex {
    points: BTreeMap<JunctionPoint, BTreeSet<EdgeId>>,
}

impl ReverseJunctionIndex {
    fn insert(&mut self, point: JunctionPoint, edge: EdgeId) {
        self.points.entry(point).or_default().insert(edge);
    }

    pub fn edges_at(&self, point: JunctionPoint) -> Option<&BTreeSet<EdgeId>> {
        self.points.get(&point)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&JunctionPoint, &BTreeSet<EdgeId>)> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Output of the junction router.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeRoutes {
    routes: BTreeMap<EdgeId, EdgeRoute>,
    order: Vec<EdgeId>,
    reverse: ReverseJunctionIndex,
}

impl EdgeRoutes {
    pub fn route(&self, edge: EdgeId) -> Option<&EdgeRoute> {
        self.routes.get(&edge)
    }

    pub fn routes(&self) -> &BTreeMap<EdgeId, EdgeRoute> {
        &self.routes
    }

    /// Edges in processing order.
    pub fn order(&self) -> &[EdgeId] {
        &self.order
    }

    pub fn reverse_junctions(&self) -> &ReverseJunctionIndex {
        &self.reverse
    }

    pub fn in_order(&self) -> impl Iterator<Item = &EdgeRoute> {
        self.order.iter().filter_map(|id| self.routes.get(id))
    }

    fn record(&mut self, route: EdgeRoute) {
        for point in route.points() {
            self.reverse.insert(*point, route.edge);
        }
        self.order.push(route.edge);
        self.routes.insert(route.edge, route);
    }
}

/// Looks up both endpoints of every edge and sorts them into processing order.
pub(crate) fn place_edges(
    graph: &ControlFlowGraph,
    grid: &GridLayout,
) -> Result<Vec<PlacedEdge>, LayoutError> {
    let mut placed = Vec::with_capacity(graph.edges().len());
    for edge in graph.edges() {
        let node = |address: Address| {
            grid.node(address)
                .copied()
                .ok_or(LayoutError::UnplacedVertex { edge: edge.id(), address })
        };
        placed.push(PlacedEdge { id: edge.id(), from: node(edge.from())?, to: node(edge.to())? });
    }
    placed.sort_by(compare_edges);
    Ok(placed)
}

/// True when another edge enters the row right below `edge`'s source at or
/// left of its column, coming from an earlier row or from a later column of
/// the same row. A long descent along the right band would cross it.
pub(crate) fn detect_edge_clash(edges: &[PlacedEdge], edge: &PlacedEdge) -> bool {
    let source = edge.from;
    edges.iter().any(|other| {
        let from_before = other.from.row() < source.row()
            || (other.from.row() == source.row() && other.from.column() > source.column());
        from_before
            && other.to.row() == source.row() + 1
            && other.to.column() <= source.column()
    })
}

fn directions(from: &LayoutNode, to: &LayoutNode) -> (Horizontal, Vertical) {
    let horizontal = match from.column().cmp(&to.column()) {
        Ordering::Equal => Horizontal::Still,
        Ordering::Less => Horizontal::Right,
        Ordering::Greater => Horizontal::Left,
    };
    let vertical = match from.row().cmp(&to.row()) {
        Ordering::Equal => Vertical::Still,
        Ordering::Greater => Vertical::Up,
        Ordering::Less => Vertical::Down,
    };
    (horizontal, vertical)
}

fn route_edge(
    edges: &[PlacedEdge],
    edge: &PlacedEdge,
    grid: &GridLayout,
    config: &LayoutConfig,
) -> EdgeRoute {
    let (from, to) = (&edge.from, &edge.to);
    let (horizontal, vertical) = directions(from, to);

    let mut points = SmallVec::<[JunctionPoint; 4]>::new();
    points.push(JunctionPoint::below(from));

    let (lane, emphasis) = if vertical == Vertical::Down {
        let lane = if to.row() - from.row() > 1 {
            let (lane, x) = if detect_edge_clash(edges, edge) {
                log::trace!("edge {} clashes below {}, jogging left", edge.id, from.address());
                (Lane::DestinationLeft, left_line(to.column()))
            } else {
                let column = grid.max_column_in_rows(from.row(), to.row());
                (Lane::RightBand, right_line(column))
            };
            points.push(JunctionPoint::new(x, bottom_line(from.row())));
            points.push(JunctionPoint::new(x, top_line(to.row())));
            lane
        } else {
            Lane::Direct
        };
        (lane, None)
    } else {
        // Loops and back edges always climb along the destination's left lane.
        let x = left_line(to.column());
        points.push(JunctionPoint::new(x, bottom_line(from.row())));
        points.push(JunctionPoint::new(x, top_line(to.row())));
        (Lane::DestinationLeft, Some(config.back_edge_emphasis))
    };

    points.push(JunctionPoint::above(to));

    EdgeRoute {
        edge: edge.id,
        from: from.address(),
        to: to.address(),
        horizontal,
        vertical,
        lane,
        points,
        emphasis,
    }
}

/// Routes all edges in processing order and indexes their junction points.
pub(crate) fn route_edges(
    edges: &[PlacedEdge],
    grid: &GridLayout,
    config: &LayoutConfig,
) -> EdgeRoutes {
    let mut routes = EdgeRoutes::default();
    for edge in edges {
        routes.record(route_edge(edges, edge, grid, config));
    }
    routes
}
