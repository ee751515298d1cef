/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::bezier::*;

use itertools::*;

///
/// Splits a chain of control points into its segments: windows of 4 points starting at every anchor
///
/// Consecutive windows share their end points. Trailing points that don't make up a whole segment are ignored.
///
pub fn chain_windows(points: &[Coord2]) -> impl '_ + Iterator<Item = [Coord2; 4]> {
    points
        .windows(4)
        .step_by(3)
        .map(|window| [window[0], window[1], window[2], window[3]])
}

///
/// Converts a chain of control points to a series of bezier curves
///
pub fn chain_to_curves<TCurve: BezierCurveFactory>(points: &[Coord2]) -> impl '_ + Iterator<Item = TCurve> {
    chain_windows(points).map(|[start, cp1, cp2, end]| TCurve::from_points(start, (cp1, cp2), end))
}

///
/// Flattens a list of points into the `x, y` pairs that are uploaded to the renderer
///
pub fn points_to_buffer(points: &[Coord2]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|point| [point.0 as f32, point.1 as f32])
        .collect()
}

///
/// Returns the points of a polyline (eg, the control polygon of a spline) as pairs of line end points
///
pub fn polyline_lines(points: &[Coord2]) -> impl '_ + Iterator<Item = (Coord2, Coord2)> {
    points.iter().copied().tuple_windows()
}
