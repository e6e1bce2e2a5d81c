// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use smol_str::SmolStr;

use super::ids::{Address, EdgeId};

pub const DEFAULT_VERTEX_WIDTH: f64 = 200.0;
pub const DEFAULT_VERTEX_HEIGHT: f64 = 120.0;

/// Snapshot of a function's control-flow graph, as supplied by the host.
///
/// Vertices are keyed by [`Address`], so lookups never depend on handle identity.
/// Successor lists keep edge insertion order with parallel edges collapsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControlFlowGraph {
    vertices: BTreeMap<Address, Vertex>,
    edges: Vec<Edge>,
    successors: BTreeMap<Address, Vec<Address>>,
}

impl ControlFlowGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, vertex: Vertex) -> Result<(), GraphError> {
        let address = vertex.address();
        if self.vertices.contains_key(&address) {
            return Err(GraphError::DuplicateVertex { address });
        }
        self.vertices.insert(address, vertex);
        self.successors.insert(address, Vec::new());
        Ok(())
    }

    pub fn add_edge(&mut self, from: Address, to: Address) -> Result<EdgeId, GraphError> {
        let id = next_edge_id(self.edges.len())?;
        if !self.vertices.contains_key(&from) {
            return Err(GraphError::UnknownVertex {
                edge: id,
                endpoint: EdgeEndpoint::From,
                address: from,
            });
        }
        if !self.vertices.contains_key(&to) {
            return Err(GraphError::UnknownVertex {
                edge: id,
                endpoint: EdgeEndpoint::To,
                address: to,
            });
        }

        let successors = self.successors.entry(from).or_default();
        if !successors.contains(&to) {
            successors.push(to);
        }
        self.edges.push(Edge { id, from, to, emphasis: None });
        Ok(id)
    }

    pub fn vertices(&self) -> &BTreeMap<Address, Vertex> {
        &self.vertices
    }

    pub fn vertex(&self, address: Address) -> Option<&Vertex> {
        self.vertices.get(&address)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub fn successors(&self, address: Address) -> &[Address] {
        self.successors.get(&address).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// The entry vertex: the one with the lowest address.
    pub fn root(&self) -> Option<Address> {
        self.vertices.keys().next().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Sets the rendering emphasis of an edge. Returns `false` for unknown edges.
    pub fn set_emphasis(&mut self, id: EdgeId, emphasis: Option<f64>) -> bool {
        match self.edges.get_mut(id.index()) {
            Some(edge) => {
                edge.emphasis = emphasis;
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    address: Address,
    label: SmolStr,
    width: f64,
    height: f64,
}

impl Vertex {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            label: SmolStr::new(address.to_string()),
            width: DEFAULT_VERTEX_WIDTH,
            height: DEFAULT_VERTEX_HEIGHT,
        }
    }

    pub fn new_with(address: Address, label: impl AsRef<str>, width: f64, height: f64) -> Self {
        Self { address, label: SmolStr::new(label), width, height }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    id: EdgeId,
    from: Address,
    to: Address,
    emphasis: Option<f64>,
}

impl Edge {
    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn from(&self) -> Address {
        self.from
    }

    pub fn to(&self) -> Address {
        self.to
    }

    pub fn emphasis(&self) -> Option<f64> {
        self.emphasis
    }
}

/// Edge ids are dense `u32` indices.
fn next_edge_id(count: usize) -> Result<EdgeId, GraphError> {
    u32::try_from(count).map(EdgeId::new).map_err(|_| GraphError::TooManyEdges { count })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEndpoint {
    From,
    To,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    DuplicateVertex { address: Address },
    UnknownVertex { edge: EdgeId, endpoint: EdgeEndpoint, address: Address },
    TooManyEdges { count: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateVertex { address } => write!(f, "duplicate vertex {address}"),
            Self::UnknownVertex { edge, endpoint, address } => {
                let endpoint = match endpoint {
                    EdgeEndpoint::From => "from",
                    EdgeEndpoint::To => "to",
                };
                write!(f, "edge {edge} references unknown {endpoint} vertex {address}")
            }
            Self::TooManyEdges { count } => {
                write!(f, "graph already holds {count} edges, the most an edge id can index")
            }
        }
    }
}

impl std::error::Error for GraphError {}
