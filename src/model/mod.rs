// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Control-flow graph snapshot handed to the layout engine.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;

pub use graph::{ControlFlowGraph, Edge, EdgeEndpoint, GraphError, Vertex};
pub use ids::{Address, AddressError, EdgeId};
