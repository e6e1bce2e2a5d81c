// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::ids::{Address, EdgeId};

/// Failures surfaced by the layout engine.
///
/// `Cancelled` is the only condition worth retrying. The other variants mean
/// the input graph or the host-supplied positions are inconsistent with the
/// layout being computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    Cancelled,
    /// The edge touches a vertex that is not reachable from the root.
    UnplacedVertex { edge: EdgeId, address: Address },
    /// The host has no position for a vertex the grid placed.
    MissingVertexLocation { address: Address },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("layout cancelled"),
            Self::UnplacedVertex { edge, address } => {
                write!(f, "edge {edge} references vertex {address}, which is not reachable from the root")
            }
            Self::MissingVertexLocation { address } => {
                write!(f, "no layout location for vertex {address}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
