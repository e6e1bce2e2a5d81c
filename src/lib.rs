// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! cflayout: orthogonal layered layout for control-flow graphs.
//!
//! Vertices are placed on a row/column grid, edges are routed through the
//! lanes between cells, and edges sharing a lane are spread apart. The grid
//! result is mapped into continuous coordinates by a host-supplied
//! [`layout::LayoutSpace`].

pub mod config;
pub mod format;
pub mod layout;
pub mod model;
