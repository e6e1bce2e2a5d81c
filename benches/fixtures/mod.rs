// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::collections::BTreeMap;

use cflayout::layout::Point;
use cflayout::model::{Address, ControlFlowGraph, EdgeId, Vertex};

pub fn checksum_points(polylines: &BTreeMap<EdgeId, Vec<Point>>) -> u64 {
    let mut acc = 0u64;
    for points in polylines.values() {
        acc = acc.wrapping_mul(131).wrapping_add(points.len() as u64);
        for point in points {
            acc = acc.wrapping_mul(131).wrapping_add(point.x.to_bits());
            acc = acc.wrapping_mul(131).wrapping_add(point.y.to_bits());
        }
    }
    acc
}

pub mod cfg {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CfgParams {
        pub layers: usize,
        pub blocks_per_layer: usize,
        pub fanout: usize,
        pub skip_edges_per_block: usize,
        /// Every n-th block gets an edge back to the previous layer; 0 disables loops.
        pub loop_every: usize,
    }

    impl CfgParams {
        pub const fn new(
            layers: usize,
            blocks_per_layer: usize,
            fanout: usize,
            skip_edges_per_block: usize,
            loop_every: usize,
        ) -> Self {
            Self { layers, blocks_per_layer, fanout, skip_edges_per_block, loop_every }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        MediumLoops,
        LargeDense,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::MediumLoops => "medium_loops",
                Self::LargeDense => "large_dense",
            }
        }

        pub const fn params(self) -> CfgParams {
            match self {
                Self::Small => CfgParams::new(6, 4, 2, 0, 0),
                Self::MediumLoops => CfgParams::new(16, 8, 2, 1, 5),
                Self::LargeDense => CfgParams::new(40, 16, 3, 2, 7),
            }
        }
    }

    const ENTRY: u64 = 0x1000;

    fn block_address(layer: usize, idx: usize) -> Address {
        Address::new(0x10_0000 + (layer as u64) * 0x1000 + (idx as u64) * 0x10)
    }

    /// Deterministic layered control-flow graph.
    ///
    /// - A single entry block at the lowest address reaches every layer-0 block.
    /// - Forward edges go one layer down, skip edges two or more layers down.
    /// - With `loop_every > 0` some blocks jump back one layer.
    pub fn graph(params: CfgParams) -> ControlFlowGraph {
        assert!(params.layers >= 2, "layers must be >= 2");
        assert!(params.blocks_per_layer >= 1, "blocks_per_layer must be >= 1");
        assert!(params.fanout >= 1, "fanout must be >= 1");

        let mut graph = ControlFlowGraph::new();
        let entry = Address::new(ENTRY);
        graph.add_vertex(Vertex::new(entry)).expect("entry vertex");
        for layer in 0..params.layers {
            for idx in 0..params.blocks_per_layer {
                let address = block_address(layer, idx);
                let label = format!("blk_{layer:02}_{idx:03}");
                let width = 120.0 + ((layer * 7 + idx * 13) % 5) as f64 * 20.0;
                graph
                    .add_vertex(Vertex::new_with(address, label, width, 80.0))
                    .expect("block vertex");
            }
        }

        for idx in 0..params.blocks_per_layer {
            graph.add_edge(entry, block_address(0, idx)).expect("entry edge");
        }

        let fanout = params.fanout.min(params.blocks_per_layer);
        for layer in 0..params.layers - 1 {
            for idx in 0..params.blocks_per_layer {
                let from = block_address(layer, idx);
                for k in 0..fanout {
                    let to = block_address(layer + 1, (idx + k) % params.blocks_per_layer);
                    graph.add_edge(from, to).expect("forward edge");
                }

                if layer + 2 < params.layers {
                    let max_target_layers = params.layers - (layer + 2);
                    for k in 0..params.skip_edges_per_block {
                        let target_layer = layer + 2 + (k % max_target_layers);
                        let to_idx = (idx + 1 + k * 3) % params.blocks_per_layer;
                        graph
                            .add_edge(from, block_address(target_layer, to_idx))
                            .expect("skip edge");
                    }
                }

                if params.loop_every > 0 && layer > 0 && (layer + idx) % params.loop_every == 0 {
                    graph.add_edge(from, block_address(layer - 1, idx)).expect("loop edge");
                }
            }
        }

        graph
    }

    pub fn fixture(case: Case) -> ControlFlowGraph {
        graph(case.params())
    }
}
