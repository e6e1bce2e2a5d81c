// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Row assignment: longest acyclic depth from the root.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::graph::ControlFlowGraph;
use crate::model::ids::Address;

/// Row buckets produced by [`assign_rows`].
///
/// Buckets keep discovery order; the column assigner reorders them. A bucket can
/// end up empty once all of its vertices migrated deeper.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RowAssignment {
    buckets: Vec<Vec<Address>>,
    rows: BTreeMap<Address, usize>,
}

impl RowAssignment {
    pub(crate) fn buckets(&self) -> &[Vec<Address>] {
        &self.buckets
    }

    pub(crate) fn row_of(&self, address: Address) -> Option<usize> {
        self.rows.get(&address).copied()
    }

    pub(crate) fn into_buckets(self) -> Vec<Vec<Address>> {
        self.buckets
    }

    fn ensure_row(&mut self, row: usize) {
        if self.buckets.len() <= row {
            self.buckets.resize_with(row + 1, Vec::new);
        }
    }

    fn migrate(&mut self, vertex: Address, from_row: usize, to_row: usize) {
        let bucket = &mut self.buckets[from_row];
        let idx = bucket
            .iter()
            .position(|address| *address == vertex)
            .unwrap_or_else(|| panic!("vertex {vertex} missing from its row bucket {from_row}"));
        bucket.remove(idx);
        self.buckets[to_row].push(vertex);
        self.rows.insert(vertex, to_row);
    }
}

/// Assigns every vertex reachable from `root` the deepest row at which a
/// non-cyclic path from the root reaches it.
///
/// A vertex found again deeper than its recorded row migrates down and its
/// successors are revisited from there. Descendants that were placed earlier and
/// are not revisited keep their rows, so a migrated vertex can end up below one
/// of its successors.
pub(crate) fn assign_rows(graph: &ControlFlowGraph, root: Address) -> RowAssignment {
    let mut assignment = RowAssignment::default();
    let mut path = BTreeSet::<Address>::new();
    let mut stack = Vec::<RowFrame>::new();

    if enter(root, 0, &mut path, &mut assignment) {
        stack.push(RowFrame { vertex: root, row: 0, next: 0 });
    }
    while let Some(frame) = stack.last_mut() {
        let RowFrame { vertex, row, next } = *frame;
        match graph.successors(vertex).get(next).copied() {
            Some(successor) => {
                frame.next += 1;
                if enter(successor, row + 1, &mut path, &mut assignment) {
                    stack.push(RowFrame { vertex: successor, row: row + 1, next: 0 });
                }
            }
            None => {
                path.remove(&vertex);
                stack.pop();
            }
        }
    }

    assignment
}

/// One vertex on the active DFS path and the index of its next successor.
#[derive(Debug, Clone, Copy)]
struct RowFrame {
    vertex: Address,
    row: usize,
    next: usize,
}

/// Places `vertex` at `row` unless it is on the active path or already at
/// least that deep. Returns whether its successors need a visit.
fn enter(
    vertex: Address,
    row: usize,
    path: &mut BTreeSet<Address>,
    assignment: &mut RowAssignment,
) -> bool {
    if path.contains(&vertex) {
        return false;
    }

    assignment.ensure_row(row);
    match assignment.row_of(vertex) {
        Some(current) if current < row => assignment.migrate(vertex, current, row),
        Some(_) => return false,
        None => {
            assignment.rows.insert(vertex, row);
            assignment.buckets[row].push(vertex);
        }
    }

    path.insert(vertex);
    true
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{assign_rows, RowAssignment};
    use crate::model::fixtures::{self, addr};
    use crate::model::graph::ControlFlowGraph;

    fn row(assignment: &RowAssignment, offset: u64) -> Option<usize> {
        assignment.row_of(addr(offset))
    }

    #[test]
    fn diamond_rows_follow_depth() {
        let graph = fixtures::diamond();
        let rows = assign_rows(&graph, graph.root().unwrap());

        assert_eq!(row(&rows, 0x10), Some(0));
        assert_eq!(row(&rows, 0x20), Some(1));
        assert_eq!(row(&rows, 0x30), Some(1));
        assert_eq!(row(&rows, 0x40), Some(2));
        assert_eq!(
            rows.buckets(),
            &[vec![addr(0x10)], vec![addr(0x20), addr(0x30)], vec![addr(0x40)]]
        );
    }

    #[rstest]
    #[case(1)]
    #[case(4)]
    #[case(9)]
    fn tree_rows_equal_path_length(#[case] depth: u64) {
        let graph = fixtures::binary_tree(depth);
        let rows = assign_rows(&graph, graph.root().unwrap());

        for address in graph.vertices().keys() {
            // Heap numbering: vertex n sits at depth floor(log2(n)).
            let n = address.offset();
            let expected = (u64::BITS - 1 - n.leading_zeros()) as usize;
            assert_eq!(rows.row_of(*address), Some(expected), "vertex {address}");
        }
    }

    #[test]
    fn vertex_reached_by_a_longer_path_migrates_down() {
        // 1 -> 3 directly and 1 -> 2 -> 3.
        let graph = fixtures::shortcut();
        let rows = assign_rows(&graph, graph.root().unwrap());

        assert_eq!(row(&rows, 3), Some(2));
        assert_eq!(rows.buckets()[1], vec![addr(2)]);
        assert_eq!(rows.buckets()[2], vec![addr(3)]);
    }

    #[test]
    fn cycles_terminate_with_finite_rows() {
        let graph = fixtures::loop_with_exit();
        let rows = assign_rows(&graph, graph.root().unwrap());

        for address in graph.vertices().keys() {
            assert!(rows.row_of(*address).is_some(), "vertex {address} has no row");
        }
        assert_eq!(row(&rows, 0x10), Some(0));
        assert_eq!(row(&rows, 0x20), Some(1));
        assert_eq!(row(&rows, 0x30), Some(2));
        assert_eq!(row(&rows, 0x40), Some(3));
    }

    #[test]
    fn self_loops_do_not_recurse() {
        let graph = fixtures::self_loop();
        let rows = assign_rows(&graph, graph.root().unwrap());

        assert_eq!(row(&rows, 0x10), Some(0));
        assert_eq!(row(&rows, 0x20), Some(1));
    }

    #[test]
    fn unreachable_vertices_get_no_row() {
        let graph = fixtures::with_orphan();
        let rows = assign_rows(&graph, graph.root().unwrap());

        assert_eq!(row(&rows, 0x99), None);
    }

    #[test]
    fn migration_cascades_to_descendants() {
        // Successor order of 1 is [4, 2]. 4 and its chain 5 -> 6 are placed first;
        // reaching 4 again through 2 moves it one row down and its descendants follow.
        let graph = fixtures::late_migration();
        let rows = assign_rows(&graph, graph.root().unwrap());

        assert_eq!(row(&rows, 2), Some(1));
        assert_eq!(row(&rows, 4), Some(2));
        assert_eq!(row(&rows, 5), Some(3));
        assert_eq!(row(&rows, 6), Some(4));
        assert!(rows.buckets()[1] == vec![addr(2)]);
    }

    #[test]
    fn migration_does_not_revalidate_cycle_successors() {
        // 2 <-> 3 is a cycle first entered from 1 at row 1. The path 1 -> 4 -> 5 -> 2
        // reaches it deeper, so 2 and then 3 migrate. The successor of 3 is 2, which
        // is on the active path and is never rechecked.
        let graph = fixtures::cycle_entered_late();
        let rows = assign_rows(&graph, graph.root().unwrap());

        assert_eq!(row(&rows, 4), Some(1));
        assert_eq!(row(&rows, 5), Some(2));
        assert_eq!(row(&rows, 2), Some(3));
        assert_eq!(row(&rows, 3), Some(4));
        assert_eq!(
            rows.buckets(),
            &[vec![addr(1)], vec![addr(4)], vec![addr(5)], vec![addr(2)], vec![addr(3)]]
        );
    }

    #[test]
    fn empty_successor_lists_are_fine() {
        let mut graph = ControlFlowGraph::new();
        graph.add_vertex(crate::model::graph::Vertex::new(addr(7))).unwrap();
        let rows = assign_rows(&graph, addr(7));

        assert_eq!(rows.buckets(), &[vec![addr(7)]]);
    }

    #[test]
    fn long_chains_do_not_exhaust_the_stack() {
        let graph = fixtures::chain(60_000);
        let rows = assign_rows(&graph, addr(1));

        assert_eq!(rows.buckets().len(), 60_000);
        assert_eq!(row(&rows, 60_000), Some(59_999));
        assert_eq!(row(&rows, 30_001), Some(30_000));
    }
}
