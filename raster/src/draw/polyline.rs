/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::line::*;
use crate::pixel::*;

use itertools::*;

///
/// Returns the edges of a polyline as pairs of points. If `closed` is set, the last point is joined back to
/// the first
///
pub fn polyline_edges(points: &[(i32, i32)], closed: bool) -> Vec<((i32, i32), (i32, i32))> {
    let mut edges = points.iter().copied().tuple_windows().collect::<Vec<_>>();

    if closed && points.len() > 2 {
        edges.push((points[points.len() - 1], points[0]));
    }

    edges
}

///
/// Rasterizes a sequence of points joined by straight lines
///
/// Pixels where two lines meet are emitted by both lines.
///
pub fn draw_polyline(points: &[(i32, i32)], closed: bool, color: Rgb) -> PixelPath {
    let mut path = PixelPath::new();

    if points.len() == 1 {
        path.push(points[0].0, points[0].1, color);
        return path;
    }

    for ((x0, y0), (x1, y1)) in polyline_edges(points, closed) {
        path.append(draw_line(x0, y0, x1, y1, color));
    }

    path
}
