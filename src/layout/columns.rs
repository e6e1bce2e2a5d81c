// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Column assignment: subtree scores order each row, rows are centered
//! against the widest one.

use std::collections::{BTreeMap, BTreeSet};

use super::grid::{GridLayout, LayoutNode};
use super::rows::RowAssignment;
use crate::model::graph::ControlFlowGraph;
use crate::model::ids::Address;

/// Contribution of an edge that closes a cycle on the active path.
const BACK_EDGE_SCORE: i64 = -1000;

/// Computes a score for every vertex reachable from `root`.
///
/// Successors are scored in post-order; each vertex scores its visit position
/// plus what its successors contributed plus one. Back edges into the active
/// path contribute [`BACK_EDGE_SCORE`], edges to already scored vertices
/// contribute nothing.
pub(crate) fn subtree_scores(graph: &ControlFlowGraph, root: Address) -> BTreeMap<Address, i64> {
    let mut scores = BTreeMap::<Address, i64>::new();
    let mut visited = BTreeSet::<Address>::from([root]);
    let mut path = BTreeSet::<Address>::from([root]);
    let mut stack = vec![ScoreFrame { vertex: root, score: 0, subnodes: 0, next: 0 }];

    while let Some(frame) = stack.last_mut() {
        let current = *frame;
        match graph.successors(current.vertex).get(current.next).copied() {
            Some(successor) => {
                frame.next += 1;
                if visited.contains(&successor) {
                    if path.contains(&successor) {
                        frame.subnodes += BACK_EDGE_SCORE;
                    }
                    continue;
                }
                visited.insert(successor);
                path.insert(successor);
                let score = current.score + current.subnodes + 1;
                stack.push(ScoreFrame { vertex: successor, score, subnodes: 0, next: 0 });
            }
            None => {
                stack.pop();
                path.remove(&current.vertex);
                scores.insert(current.vertex, current.score + current.subnodes + 1);
                if let Some(parent) = stack.last_mut() {
                    parent.subnodes += current.subnodes;
                }
            }
        }
    }

    scores
}

/// A vertex being scored: the score it was entered with and what its
/// successors contributed so far.
#[derive(Debug, Clone, Copy)]
struct ScoreFrame {
    vertex: Address,
    score: i64,
    subnodes: i64,
    next: usize,
}

/// Orders every row by score and centers it against the widest row.
///
/// Columns within a row are a contiguous run starting at
/// `(widest - len) / 2`. Ties keep the row's discovery order.
pub(crate) fn assign_columns(
    graph: &ControlFlowGraph,
    root: Address,
    rows: RowAssignment,
) -> GridLayout {
    let scores = subtree_scores(graph, root);
    let max_row_len = rows.buckets().iter().map(Vec::len).max().unwrap_or(0);

    let mut buckets = rows.into_buckets();
    let mut nodes = BTreeMap::<Address, LayoutNode>::new();
    for (row, bucket) in buckets.iter_mut().enumerate() {
        bucket.sort_by_key(|address| {
            *scores.get(address).expect("every placed vertex is reachable and scored")
        });

        let offset = (max_row_len - bucket.len()) / 2;
        for (idx, address) in bucket.iter().enumerate() {
            nodes.insert(*address, LayoutNode::new(*address, row, offset + idx));
        }
    }

    GridLayout::from_rows(buckets, nodes)
}
