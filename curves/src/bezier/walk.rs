/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve::*;
use crate::geo::*;

///
/// Walks a bezier curve by dividing it into `subdivisions` equal steps in `t`
///
/// Returns `subdivisions + 1` points, including both end points. This is the host-side equivalent of a fixed
/// tessellation level: the points can be joined with straight lines to approximate the curve.
///
pub fn walk_curve<'a, Curve: BezierCurve>(
    curve: &'a Curve,
    subdivisions: usize,
) -> impl 'a + Iterator<Item = Coord2> {
    let subdivisions = subdivisions.max(1);

    (0..=subdivisions).map(move |step| {
        if step == subdivisions {
            // Avoid rounding errors at the end of the curve
            curve.end_point()
        } else {
            curve.point_at_pos((step as f64) / (subdivisions as f64))
        }
    })
}

///
/// Chooses a number of subdivisions for a curve so that the steps are no longer than `max_step` (based on the
/// length of the control polygon, which is never shorter than the curve itself)
///
pub fn subdivisions_for_curve<Curve: BezierCurve>(curve: &Curve, max_step: f64) -> usize {
    let [w1, w2, w3, w4] = curve.as_points();
    let polygon_length = w1.distance_to(&w2) + w2.distance_to(&w3) + w3.distance_to(&w4);

    if !polygon_length.is_finite() || max_step <= 0.0 {
        1
    } else {
        ((polygon_length / max_step).ceil() as usize).clamp(1, 4096)
    }
}
