// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms for control-flow graphs.
//!
//! The pipeline runs rows, columns, junction routing and lane padding on a
//! doubled grid, then maps the result into continuous coordinates supplied by
//! the host.

mod articulation;
pub mod cancel;
mod columns;
pub mod control_flow;
pub mod error;
pub mod grid;
pub mod padding;
pub mod routing;
mod rows;
pub mod space;

pub use cancel::{CancelFlag, Cancellation, NeverCancel};
pub use control_flow::{layout_control_flow, ControlFlowLayout};
pub use error::LayoutError;
pub use grid::{GridLayout, JunctionPoint, LayoutNode};
pub use padding::JunctionPaddings;
pub use routing::{EdgeRoute, EdgeRoutes, Horizontal, Lane, ReverseJunctionIndex, Vertical};
pub use space::{GridSpace, LayoutSpace, Point};
