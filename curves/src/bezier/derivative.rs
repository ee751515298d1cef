/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::*;

///
/// Returns the 3 weights of the derivative of a cubic Bezier (which is itself a quadratic Bezier)
///
/// Works on any weight type that supports the vector operations, so both `f64` and `Coord2` weights are accepted.
///
#[inline]
pub fn derivative4<Point>(w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point)
where
    Point: Copy + Sub<Point, Output = Point> + Mul<f64, Output = Point>,
{
    ((w2 - w1) * 3.0, (w3 - w2) * 3.0, (w4 - w3) * 3.0)
}

///
/// Returns the 2 weights of the second derivative of a cubic Bezier (a straight line)
///
#[inline]
pub fn second_derivative4<Point>(w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point)
where
    Point: Copy + Add<Point, Output = Point> + Sub<Point, Output = Point> + Mul<f64, Output = Point>,
{
    let (d1, d2, d3) = derivative4(w1, w2, w3, w4);

    ((d2 - d1) * 2.0, (d3 - d2) * 2.0)
}
