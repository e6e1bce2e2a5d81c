// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Maps junction points into continuous coordinates.

use std::collections::BTreeMap;

use super::cancel::Cancellation;
use super::error::LayoutError;
use super::padding::JunctionPaddings;
use super::routing::{EdgeRoute, EdgeRoutes};
use super::space::{LayoutSpace, Point};
use crate::model::ids::EdgeId;

/// Produces the final polyline of every edge, in processing order.
///
/// Each junction point lands on the centerlines of its grid lines, shifted by
/// the edge's padding on those lines. The polyline is then anchored to the
/// vertical position of both endpoint vertices. The cancellation signal is
/// polled before every edge.
pub(crate) fn articulate_edges<S, C>(
    routes: &EdgeRoutes,
    paddings: &JunctionPaddings,
    space: &S,
    cancel: &C,
) -> Result<BTreeMap<EdgeId, Vec<Point>>, LayoutError>
where
    S: LayoutSpace + ?Sized,
    C: Cancellation + ?Sized,
{
    let mut articulated = BTreeMap::<EdgeId, Vec<Point>>::new();
    for route in routes.in_order() {
        cancel.checkpoint()?;
        articulated.insert(route.edge(), articulate_route(route, paddings, space)?);
    }
    Ok(articulated)
}

fn articulate_route<S: LayoutSpace + ?Sized>(
    route: &EdgeRoute,
    paddings: &JunctionPaddings,
    space: &S,
) -> Result<Vec<Point>, LayoutError> {
    let location = |address| {
        space.vertex_location(address).ok_or(LayoutError::MissingVertexLocation { address })
    };
    let source = location(route.from())?;
    let destination = location(route.to())?;

    let edge = route.edge();
    let mut points = Vec::with_capacity(route.points().len() + 2);
    for junction in route.points() {
        let dx = paddings.x_offset(junction.x(), edge).expect("junction padded on its x line");
        let dy = paddings.y_offset(junction.y(), edge).expect("junction padded on its y line");
        points.push(Point::new(
            space.column_center(junction.x()) + dx,
            space.row_center(junction.y()) + dy,
        ));
    }

    let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) else {
        return Ok(points);
    };
    points.insert(0, Point::new(first.x, source.y));
    points.push(Point::new(last.x, destination.y));
    Ok(points)
}
