// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::graph::{ControlFlowGraph, Vertex};
use super::ids::Address;

pub(crate) fn addr(offset: u64) -> Address {
    Address::new(offset)
}

fn graph(vertices: &[u64], edges: &[(u64, u64)]) -> ControlFlowGraph {
    let mut graph = ControlFlowGraph::new();
    for &offset in vertices {
        graph.add_vertex(Vertex::new(addr(offset))).expect("unique vertex");
    }
    for &(from, to) in edges {
        graph.add_edge(addr(from), addr(to)).expect("known endpoints");
    }
    graph
}

/// A -> B, A -> C, B -> D, C -> D.
pub(crate) fn diamond() -> ControlFlowGraph {
    graph(
        &[0x10, 0x20, 0x30, 0x40],
        &[(0x10, 0x20), (0x10, 0x30), (0x20, 0x40), (0x30, 0x40)],
    )
}

/// Complete binary tree in heap numbering: `n -> 2n`, `n -> 2n + 1`.
pub(crate) fn binary_tree(levels: u64) -> ControlFlowGraph {
    let count = (1u64 << levels) - 1;
    let vertices = (1..=count).collect::<Vec<_>>();
    let mut edges = Vec::new();
    for n in 1..=count {
        for child in [2 * n, 2 * n + 1] {
            if child <= count {
                edges.push((n, child));
            }
        }
    }
    graph(&vertices, &edges)
}

/// 1 -> 3 is discovered before the longer path 1 -> 2 -> 3.
pub(crate) fn shortcut() -> ControlFlowGraph {
    graph(&[1, 2, 3], &[(1, 3), (1, 2), (2, 3)])
}

/// A loop body 0x20 <-> 0x30 with an exit to 0x40.
pub(crate) fn loop_with_exit() -> ControlFlowGraph {
    graph(
        &[0x10, 0x20, 0x30, 0x40],
        &[(0x10, 0x20), (0x20, 0x30), (0x30, 0x20), (0x30, 0x40)],
    )
}

pub(crate) fn self_loop() -> ControlFlowGraph {
    graph(&[0x10, 0x20], &[(0x10, 0x20), (0x20, 0x20)])
}

/// 0x99 is not reachable from the root and has no edges.
pub(crate) fn with_orphan() -> ControlFlowGraph {
    graph(&[0x10, 0x20, 0x99], &[(0x10, 0x20)])
}

/// 0x99 is not reachable from the root but has an edge into the graph.
pub(crate) fn orphan_edge() -> ControlFlowGraph {
    graph(&[0x10, 0x20, 0x99], &[(0x10, 0x20), (0x99, 0x20)])
}

pub(crate) fn late_migration() -> ControlFlowGraph {
    graph(&[1, 2, 4, 5, 6], &[(1, 4), (1, 2), (2, 4), (4, 5), (5, 6)])
}

pub(crate) fn cycle_entered_late() -> ControlFlowGraph {
    graph(&[1, 2, 3, 4, 5], &[(1, 2), (2, 3), (3, 2), (1, 4), (4, 5), (5, 2)])
}

pub(crate) fn score_reorder() -> ControlFlowGraph {
    graph(
        &[0x10, 0x20, 0x21, 0x30],
        &[(0x10, 0x30), (0x10, 0x20), (0x20, 0x21), (0x21, 0x10)],
    )
}

/// Root 1 fans out to `width` blocks at 10.. which all join at 1000.
pub(crate) fn fan_out_fan_in(width: u64) -> ControlFlowGraph {
    let mut vertices = vec![1, 1000];
    let mut edges = Vec::new();
    for i in 0..width {
        vertices.push(10 + i);
        edges.push((1, 10 + i));
    }
    for i in 0..width {
        edges.push((10 + i, 1000));
    }
    graph(&vertices, &edges)
}

/// Rows: `[1] [2 3] [4 5] [6]`.
///
/// 3 -> 6 spans two rows while 1 -> 4 lands right below 3 on its left side,
/// so 3 -> 6 has to jog along the left lane of 6. 1 -> 4 spans two rows with
/// nothing in its way and jogs along the right lane instead.
pub(crate) fn clash() -> ControlFlowGraph {
    graph(
        &[1, 2, 3, 4, 5, 6],
        &[(1, 2), (1, 3), (1, 4), (2, 4), (3, 5), (5, 6), (3, 6)],
    )
}

/// Straight-line chain `1 -> 2 -> ... -> len`.
pub(crate) fn chain(len: u64) -> ControlFlowGraph {
    let vertices = (1..=len).collect::<Vec<_>>();
    let edges = (1..len).map(|n| (n, n + 1)).collect::<Vec<_>>();
    graph(&vertices, &edges)
}
