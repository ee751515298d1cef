/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::line::*;
use crate::bezier::*;

///
/// Returns the handles that make a bezier curve follow a straight line (the points one third and two
/// thirds of the way along it)
///
#[inline]
pub fn line_handles(line: &impl Line) -> (Coord2, Coord2) {
    (line.point_at_pos(1.0 / 3.0), line.point_at_pos(2.0 / 3.0))
}

///
/// Changes a line to a bezier curve
///
pub fn line_to_bezier<Curve: BezierCurveFactory>(line: &impl Line) -> Curve {
    let (start, end) = line.points();

    Curve::from_points(start, line_handles(line), end)
}
