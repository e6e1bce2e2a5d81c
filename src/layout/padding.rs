// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lane padding: edges sharing a grid line get stacked offsets so their
//! parallel segments do not coincide.

use std::collections::{BTreeMap, BTreeSet};

use super::grid::JunctionPoint;
use super::routing::EdgeRoutes;
use crate::config::LayoutConfig;
use crate::model::ids::EdgeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineAxis {
    /// Lines of constant `x`; spans run along `y`.
    Vertical,
    /// Lines of constant `y`; spans run along `x`.
    Horizontal,
}

impl LineAxis {
    fn line(self, point: &JunctionPoint) -> i32 {
        match self {
            Self::Vertical => point.x(),
            Self::Horizontal => point.y(),
        }
    }

    fn along(self, point: &JunctionPoint) -> i32 {
        match self {
            Self::Vertical => point.y(),
            Self::Horizontal => point.x(),
        }
    }
}

/// Per-line offsets of every edge, keyed by `(line, edge)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JunctionPaddings {
    vertical: BTreeMap<(i32, EdgeId), f64>,
    horizontal: BTreeMap<(i32, EdgeId), f64>,
}

impl JunctionPaddings {
    /// Offset applied to the `x` of an edge's points on the vertical line `x`.
    pub fn x_offset(&self, x: i32, edge: EdgeId) -> Option<f64> {
        self.vertical.get(&(x, edge)).copied()
    }

    /// Offset applied to the `y` of an edge's points on the horizontal line `y`.
    pub fn y_offset(&self, y: i32, edge: EdgeId) -> Option<f64> {
        self.horizontal.get(&(y, edge)).copied()
    }

    pub fn vertical_lines(&self) -> &BTreeMap<(i32, EdgeId), f64> {
        &self.vertical
    }

    pub fn horizontal_lines(&self) -> &BTreeMap<(i32, EdgeId), f64> {
        &self.horizontal
    }
}

/// Greedy interval stacking over the unit positions of one line.
#[derive(Debug, Default)]
struct LineStack {
    heights: BTreeMap<i32, u32>,
}

impl LineStack {
    /// Places a span one level above everything it overlaps and returns that level.
    fn place(&mut self, min: i32, max: i32) -> u32 {
        let level = self.heights.range(min..=max).map(|(_, h)| *h).max().unwrap_or(0) + 1;
        for position in min..=max {
            self.heights.insert(position, level);
        }
        level
    }
}

pub(crate) fn resolve_padding(routes: &EdgeRoutes, config: &LayoutConfig) -> JunctionPaddings {
    let rank = routes
        .order()
        .iter()
        .enumerate()
        .map(|(idx, id)| (*id, idx))
        .collect::<BTreeMap<_, _>>();

    JunctionPaddings {
        vertical: stack_lines(routes, &rank, LineAxis::Vertical, config),
        horizontal: stack_lines(routes, &rank, LineAxis::Horizontal, config),
    }
}

fn stack_lines(
    routes: &EdgeRoutes,
    rank: &BTreeMap<EdgeId, usize>,
    axis: LineAxis,
    config: &LayoutConfig,
) -> BTreeMap<(i32, EdgeId), f64> {
    let mut lines = BTreeMap::<i32, BTreeSet<EdgeId>>::new();
    for (point, edges) in routes.reverse_junctions().iter() {
        lines.entry(axis.line(point)).or_default().extend(edges.iter().copied());
    }

    let mut offsets = BTreeMap::<(i32, EdgeId), f64>::new();
    for (line, edges) in lines {
        let mut edges = edges.into_iter().collect::<Vec<_>>();
        edges.sort_by_key(|id| rank.get(id).copied().unwrap_or(usize::MAX));

        let mut stack = LineStack::default();
        for edge in edges {
            let route = routes.route(edge).expect("indexed edges have routes");
            let (min, max) = route
                .points()
                .iter()
                .filter(|p| axis.line(p) == line)
                .map(|p| axis.along(p))
                .fold((i32::MAX, i32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)));
            debug_assert!(min <= max, "edge {edge} indexed on line {line} without a point on it");

            let level = stack.place(min, max);
            offsets.insert((line, edge), config.padding_offset(level));
        }
    }
    offsets
}
