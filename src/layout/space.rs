// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::grid::{cell_line, GridLayout};
use crate::config::LayoutConfig;
use crate::model::graph::ControlFlowGraph;
use crate::model::ids::Address;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Continuous coordinates supplied by the host once the grid is known.
///
/// Grid lines are the doubled-grid coordinates used by junction points: odd
/// lines run through vertex cells, even lines are routing lanes.
pub trait LayoutSpace {
    /// Horizontal centerline of the vertical grid line `grid_x`.
    fn column_center(&self, grid_x: i32) -> f64;

    /// Vertical centerline of the horizontal grid line `grid_y`.
    fn row_center(&self, grid_y: i32) -> f64;

    fn vertex_location(&self, address: Address) -> Option<Point>;
}

/// Centerlines of consecutive grid lines with individual widths.
#[derive(Debug, Clone, PartialEq, Default)]
struct Track {
    centers: Vec<f64>,
    extent: f64,
    lane: f64,
}

impl Track {
    fn new(widths: impl IntoIterator<Item = f64>, lane: f64) -> Self {
        let mut centers = Vec::new();
        let mut extent = 0.0;
        for width in widths {
            centers.push(extent + width / 2.0);
            extent += width;
        }
        Self { centers, extent, lane }
    }

    /// Lines outside the track continue with lane-sized steps.
    fn center(&self, line: i32) -> f64 {
        if line < 0 {
            return f64::from(line) * self.lane + self.lane / 2.0;
        }
        match self.centers.get(line as usize) {
            Some(center) => *center,
            None => {
                let beyond = line as usize - self.centers.len();
                self.extent + beyond as f64 * self.lane + self.lane / 2.0
            }
        }
    }
}

/// Host-side space sized from the vertices themselves.
///
/// Each vertex column is as wide as its widest vertex and each vertex row as
/// tall as its tallest one; lanes have the configured size. Vertices sit at the
/// center of their cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridSpace {
    columns: Track,
    rows: Track,
    vertices: BTreeMap<Address, Point>,
}

impl GridSpace {
    pub fn new(graph: &ControlFlowGraph, grid: &GridLayout, config: &LayoutConfig) -> Self {
        let column_count = grid.max_column().map(|c| c + 1).unwrap_or(0);
        let mut widths = vec![config.min_cell_width; column_count];
        let mut heights = vec![config.min_cell_height; grid.row_count()];
        for node in grid.nodes().values() {
            let Some(vertex) = graph.vertex(node.address()) else {
                continue;
            };
            widths[node.column()] = widths[node.column()].max(vertex.width());
            heights[node.row()] = heights[node.row()].max(vertex.height());
        }

        let columns = Track::new(interleave_lanes(&widths, config.lane_width), config.lane_width);
        let rows = Track::new(interleave_lanes(&heights, config.lane_height), config.lane_height);

        let vertices = grid
            .nodes()
            .values()
            .map(|node| {
                let location = Point::new(
                    columns.center(cell_line(node.column())),
                    rows.center(cell_line(node.row())),
                );
                (node.address(), location)
            })
            .collect();

        Self { columns, rows, vertices }
    }

    /// Total width and height covered by the grid.
    pub fn extent(&self) -> (f64, f64) {
        (self.columns.extent, self.rows.extent)
    }
}

/// `lane, cell, lane, cell, ..., lane`.
fn interleave_lanes(cells: &[f64], lane: f64) -> Vec<f64> {
    let mut out = Vec::with_capacity(cells.len() * 2 + 1);
    out.push(lane);
    for cell in cells {
        out.push(*cell);
        out.push(lane);
    }
    out
}

impl LayoutSpace for GridSpace {
    fn column_center(&self, grid_x: i32) -> f64 {
        self.columns.center(grid_x)
    }

    fn row_center(&self, grid_y: i32) -> f64 {
        self.rows.center(grid_y)
    }

    fn vertex_location(&self, address: Address) -> Option<Point> {
        self.vertices.get(&address).copied()
    }
}
