// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON documents for graphs going in and layouts coming out.
//!
//! Addresses are strings so 64-bit values survive JSON number handling; both
//! `0x` hex and decimal are accepted on input, output is always hex.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::{ControlFlowLayout, Lane, LayoutSpace, Point};
use crate::model::graph::{
    ControlFlowGraph, GraphError, Vertex, DEFAULT_VERTEX_HEIGHT, DEFAULT_VERTEX_WIDTH,
};
use crate::model::ids::{Address, AddressError, EdgeId};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    pub vertices: Vec<VertexDoc>,
    #[serde(default)]
    pub edges: Vec<EdgeDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct VertexDoc {
    /// `0x`-prefixed hex or decimal.
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EdgeDoc {
    pub from: String,
    pub to: String,
}

impl GraphDocument {
    pub fn from_json_str(raw: &str) -> Result<Self, DocumentError> {
        serde_json::from_str(raw).map_err(DocumentError::Json)
    }

    /// Builds the graph. Edge ids follow the order of `edges`.
    pub fn into_graph(self) -> Result<ControlFlowGraph, DocumentError> {
        let mut graph = ControlFlowGraph::new();

        for (index, doc) in self.vertices.into_iter().enumerate() {
            let address: Address = doc
                .address
                .parse()
                .map_err(|source| DocumentError::VertexAddress { index, source })?;
            let width = doc.width.unwrap_or(DEFAULT_VERTEX_WIDTH);
            let height = doc.height.unwrap_or(DEFAULT_VERTEX_HEIGHT);
            if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
                return Err(DocumentError::VertexSize { address, width, height });
            }
            let vertex = match doc.label {
                Some(label) => Vertex::new_with(address, label, width, height),
                None => Vertex::new_with(address, address.to_string(), width, height),
            };
            graph.add_vertex(vertex).map_err(DocumentError::Graph)?;
        }

        for (index, doc) in self.edges.into_iter().enumerate() {
            let from: Address = doc
                .from
                .parse()
                .map_err(|source| DocumentError::EdgeAddress { index, source })?;
            let to: Address =
                doc.to.parse().map_err(|source| DocumentError::EdgeAddress { index, source })?;
            graph.add_edge(from, to).map_err(DocumentError::Graph)?;
        }

        Ok(graph)
    }
}

/// JSON schema of [`GraphDocument`].
pub fn graph_schema() -> schemars::Schema {
    schemars::schema_for!(GraphDocument)
}

#[derive(Debug)]
pub enum DocumentError {
    Json(serde_json::Error),
    VertexAddress { index: usize, source: AddressError },
    EdgeAddress { index: usize, source: AddressError },
    VertexSize { address: Address, width: f64, height: f64 },
    Graph(GraphError),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid graph document: {err}"),
            Self::VertexAddress { index, source } => {
                write!(f, "vertices[{index}]: {source}")
            }
            Self::EdgeAddress { index, source } => write!(f, "edges[{index}]: {source}"),
            Self::VertexSize { address, width, height } => {
                write!(f, "vertex {address} has invalid size {width}x{height}")
            }
            Self::Graph(err) => write!(f, "invalid graph: {err}"),
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::VertexAddress { source, .. } | Self::EdgeAddress { source, .. } => Some(source),
            Self::VertexSize { .. } => None,
            Self::Graph(err) => Some(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, JsonSchema)]
pub struct LayoutDocument {
    pub vertices: Vec<PlacedVertexDoc>,
    /// Edges in routing order.
    pub edges: Vec<RoutedEdgeDoc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct PlacedVertexDoc {
    pub address: String,
    pub row: usize,
    pub column: usize,
    /// Doubled-grid cell, `[x, y]`.
    pub cell: [i32; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Point>,
    #[serde(skip)]
    key: Address,
}

impl PlacedVertexDoc {
    pub fn vertex(&self) -> Address {
        self.key
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RoutedEdgeDoc {
    pub id: u32,
    pub from: String,
    pub to: String,
    pub lane: String,
    /// Junction points on the doubled grid, `[x, y]`.
    pub junctions: Vec<[i32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<Point>>,
}

impl LayoutDocument {
    /// Grid-only view: cells and junctions, no continuous coordinates.
    pub fn from_layout(layout: &ControlFlowLayout) -> Self {
        let vertices = layout
            .grid()
            .nodes()
            .values()
            .map(|node| {
                let cell = node.cell();
                PlacedVertexDoc {
                    address: node.address().to_string(),
                    row: node.row(),
                    column: node.column(),
                    cell: [cell.x(), cell.y()],
                    location: None,
                    key: node.address(),
                }
            })
            .collect();

        let edges = layout
            .routes()
            .in_order()
            .map(|route| RoutedEdgeDoc {
                id: route.edge().index() as u32,
                from: route.from().to_string(),
                to: route.to().to_string(),
                lane: lane_name(route.lane()).to_owned(),
                junctions: route.points().iter().map(|p| [p.x(), p.y()]).collect(),
                emphasis: route.emphasis(),
                points: None,
            })
            .collect();

        Self { vertices, edges }
    }

    /// Fills in vertex locations and edge polylines.
    pub fn with_articulation<S>(
        mut self,
        space: &S,
        polylines: &BTreeMap<EdgeId, Vec<Point>>,
    ) -> Self
    where
        S: LayoutSpace + ?Sized,
    {
        for vertex in &mut self.vertices {
            vertex.location = space.vertex_location(vertex.key);
        }
        for edge in &mut self.edges {
            edge.points = polylines.get(&EdgeId::new(edge.id)).cloned();
        }
        self
    }
}

fn lane_name(lane: Lane) -> &'static str {
    match lane {
        Lane::Direct => "direct",
        Lane::RightBand => "right_band",
        Lane::DestinationLeft => "destination_left",
    }
}
