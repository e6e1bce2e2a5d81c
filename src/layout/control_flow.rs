// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::articulation::articulate_edges;
use super::cancel::Cancellation;
use super::columns::assign_columns;
use super::error::LayoutError;
use super::grid::{GridLayout, JunctionPoint};
use super::padding::{resolve_padding, JunctionPaddings};
use super::routing::{place_edges, route_edges, EdgeRoutes, ReverseJunctionIndex};
use super::rows::assign_rows;
use super::space::{LayoutSpace, Point};
use crate::config::LayoutConfig;
use crate::model::graph::ControlFlowGraph;
use crate::model::ids::{Address, EdgeId};

/// Grid placement, junction routes and lane paddings of one graph snapshot.
///
/// Built by [`layout_control_flow`] and immutable afterwards. Continuous edge
/// polylines are derived on demand with [`ControlFlowLayout::articulate`] once
/// the host knows where its vertices are.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlFlowLayout {
    grid: GridLayout,
    routes: EdgeRoutes,
    paddings: JunctionPaddings,
}

impl ControlFlowLayout {
    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    pub fn routes(&self) -> &EdgeRoutes {
        &self.routes
    }

    pub fn paddings(&self) -> &JunctionPaddings {
        &self.paddings
    }

    pub fn reverse_junctions(&self) -> &ReverseJunctionIndex {
        self.routes.reverse_junctions()
    }

    pub fn edge_order(&self) -> &[EdgeId] {
        self.routes.order()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Doubled-grid cell of every placed vertex.
    pub fn vertex_cells(&self) -> BTreeMap<Address, JunctionPoint> {
        self.grid.nodes().iter().map(|(address, node)| (*address, node.cell())).collect()
    }

    /// Junction points of every edge.
    pub fn junctions(&self) -> BTreeMap<EdgeId, Vec<JunctionPoint>> {
        self.routes
            .routes()
            .iter()
            .map(|(edge, route)| (*edge, route.points().to_vec()))
            .collect()
    }

    /// Continuous polylines for every edge, given host vertex positions.
    pub fn articulate<S, C>(
        &self,
        space: &S,
        cancel: &C,
    ) -> Result<BTreeMap<EdgeId, Vec<Point>>, LayoutError>
    where
        S: LayoutSpace + ?Sized,
        C: Cancellation + ?Sized,
    {
        articulate_edges(&self.routes, &self.paddings, space, cancel)
    }

    /// Writes the emphasis requested by each route back onto the graph's edges.
    pub fn apply_emphasis(&self, graph: &mut ControlFlowGraph) {
        for route in self.routes.routes().values() {
            if let Some(emphasis) = route.emphasis() {
                graph.set_emphasis(route.edge(), Some(emphasis));
            }
        }
    }
}

/// Deterministic orthogonal layout of a control-flow graph.
///
/// - Rows: longest acyclic depth from the lowest-address vertex.
/// - Columns: rows ordered by subtree score and centered on the widest row.
/// - Routes: lane points on the doubled grid, descending edges jog right of the
///   spanned rows unless that would clash; everything else climbs the
///   destination's left lane.
/// - Paddings: stacked offsets for edges sharing a grid line.
///
/// Vertices not reachable from the root are left out of the grid; an edge
/// touching one is reported as [`LayoutError::UnplacedVertex`].
pub fn layout_control_flow<C>(
    graph: &ControlFlowGraph,
    config: &LayoutConfig,
    cancel: &C,
) -> Result<ControlFlowLayout, LayoutError>
where
    C: Cancellation + ?Sized,
{
    let Some(root) = graph.root() else {
        log::debug!("empty graph, nothing to lay out");
        return Ok(ControlFlowLayout::default());
    };
    log::debug!(
        "laying out {} vertices and {} edges from root {root}",
        graph.vertices().len(),
        graph.edges().len()
    );

    cancel.checkpoint()?;
    let rows = assign_rows(graph, root);

    cancel.checkpoint()?;
    let grid = assign_columns(graph, root, rows);
    log::debug!(
        "placed {} vertices on {} rows, max column {:?}",
        grid.nodes().len(),
        grid.row_count(),
        grid.max_column()
    );
    if grid.nodes().len() < graph.vertices().len() {
        log::debug!(
            "{} vertices are not reachable from {root}",
            graph.vertices().len() - grid.nodes().len()
        );
    }

    cancel.checkpoint()?;
    let edges = place_edges(graph, &grid)?;
    let routes = route_edges(&edges, &grid, config);
    log::debug!(
        "routed {} edges through {} junction points",
        edges.len(),
        routes.reverse_junctions().len()
    );

    cancel.checkpoint()?;
    let paddings = resolve_padding(&routes, config);

    Ok(ControlFlowLayout { grid, routes, paddings })
}
