// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::ids::Address;

/// A point on the doubled routing grid.
///
/// Vertex cells sit on odd coordinates `(2 * col + 1, 2 * row + 1)`. Even
/// coordinates are the lanes between cells, where edges turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JunctionPoint {
    x: i32,
    y: i32,
}

impl JunctionPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Center of a vertex cell.
    pub fn cell(row: usize, column: usize) -> Self {
        Self::new(cell_line(column), cell_line(row))
    }

    /// The lane point directly below a vertex, where outgoing edges leave it.
    pub fn below(node: &LayoutNode) -> Self {
        Self::new(cell_line(node.column), bottom_line(node.row))
    }

    /// The lane point directly above a vertex, where incoming edges enter it.
    pub fn above(node: &LayoutNode) -> Self {
        Self::new(cell_line(node.column), top_line(node.row))
    }
}

/// Doubled-grid line of a row or column index.
///
/// Grid coordinates are `i32`; a graph wider or deeper than `i32::MAX / 2 - 1`
/// cells is outside what the grid can address.
fn doubled(index: usize) -> i32 {
    i32::try_from(index)
        .ok()
        .and_then(|index| index.checked_mul(2))
        .filter(|line| *line < i32::MAX - 1)
        .unwrap_or_else(|| panic!("grid index {index} exceeds the doubled-grid range"))
}

pub(crate) fn cell_line(index: usize) -> i32 {
    doubled(index) + 1
}

pub(crate) fn top_line(row: usize) -> i32 {
    doubled(row)
}

pub(crate) fn bottom_line(row: usize) -> i32 {
    doubled(row) + 2
}

pub(crate) fn left_line(column: usize) -> i32 {
    doubled(column)
}

pub(crate) fn right_line(column: usize) -> i32 {
    doubled(column) + 2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutNode {
    address: Address,
    row: usize,
    column: usize,
}

impl LayoutNode {
    pub(crate) fn new(address: Address, row: usize, column: usize) -> Self {
        Self { address, row, column }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Position of the vertex on the doubled grid.
    pub fn cell(&self) -> JunctionPoint {
        JunctionPoint::cell(self.row, self.column)
    }
}

/// Row/column placement of every vertex reachable from the root.
///
/// Built once by the column assigner and read-only afterwards. Row buckets are
/// stored in column order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridLayout {
    rows: Vec<Vec<Address>>,
    nodes: BTreeMap<Address, LayoutNode>,
    max_column: Option<usize>,
    column_max: RowColumnMax,
}

impl GridLayout {
    pub(crate) fn from_rows(rows: Vec<Vec<Address>>, nodes: BTreeMap<Address, LayoutNode>) -> Self {
        let per_row = rows
            .iter()
            .map(|bucket| {
                bucket
                    .iter()
                    .filter_map(|address| nodes.get(address).map(|n| n.column))
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();
        let max_column = nodes.values().map(|n| n.column).max();
        Self { rows, nodes, max_column, column_max: RowColumnMax::new(per_row) }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Address>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn nodes(&self) -> &BTreeMap<Address, LayoutNode> {
        &self.nodes
    }

    pub fn node(&self, address: Address) -> Option<&LayoutNode> {
        self.nodes.get(&address)
    }

    /// Doubled-grid cell of a vertex, `(2 * col + 1, 2 * row + 1)`.
    pub fn cell_of(&self, address: Address) -> Option<JunctionPoint> {
        self.node(address).map(LayoutNode::cell)
    }

    pub fn max_column(&self) -> Option<usize> {
        self.max_column
    }

    /// Widest column used by any vertex in rows `row_min..=row_max`.
    pub fn max_column_in_rows(&self, row_min: usize, row_max: usize) -> usize {
        self.column_max.max_in_range(row_min, row_max)
    }
}

/// Sparse table over the per-row maximum column.
///
/// Empty rows count as column 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RowColumnMax {
    levels: Vec<Vec<usize>>,
}

impl RowColumnMax {
    pub(crate) fn new(per_row: Vec<usize>) -> Self {
        let len = per_row.len();
        let mut levels = vec![per_row];
        let mut width = 1usize;
        while width * 2 <= len {
            let prev = &levels[levels.len() - 1];
            let next = (0..=len - width * 2)
                .map(|start| prev[start].max(prev[start + width]))
                .collect::<Vec<_>>();
            levels.push(next);
            width *= 2;
        }
        Self { levels }
    }

    pub(crate) fn max_in_range(&self, row_min: usize, row_max: usize) -> usize {
        let len = self.levels.first().map(Vec::len).unwrap_or(0);
        if len == 0 || row_min >= len || row_min > row_max {
            return 0;
        }
        let row_max = row_max.min(len - 1);
        let span = row_max - row_min + 1;
        let level = (usize::BITS - 1 - span.leading_zeros()) as usize;
        let table = &self.levels[level];
        table[row_min].max(table[row_max + 1 - (1 << level)])
    }
}
