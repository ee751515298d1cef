/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Computes the value of a cubic Bezier at the position `t` (in the range 0..1) using the Bernstein basis
///
#[inline]
pub fn basis(t: f64, w1: Coord2, w2: Coord2, w3: Coord2, w4: Coord2) -> Coord2 {
    let t_squared = t * t;
    let t_cubed = t_squared * t;

    let one_minus_t = 1.0 - t;
    let one_minus_t_squared = one_minus_t * one_minus_t;
    let one_minus_t_cubed = one_minus_t_squared * one_minus_t;

    w1 * one_minus_t_cubed
        + w2 * (3.0 * one_minus_t_squared * t)
        + w3 * (3.0 * one_minus_t * t_squared)
        + w4 * t_cubed
}

///
/// Evaluates a cubic Bezier at `t` by repeated linear interpolation (de Casteljau's algorithm)
///
/// This produces the same point as `basis()` but is better behaved numerically when the control points are
/// far from the origin.
///
pub fn de_casteljau4(t: f64, w1: Coord2, w2: Coord2, w3: Coord2, w4: Coord2) -> Coord2 {
    let lerp = |a: Coord2, b: Coord2| a + (b - a) * t;

    let (wn1, wn2, wn3) = (lerp(w1, w2), lerp(w2, w3), lerp(w3, w4));
    let (wnn1, wnn2) = (lerp(wn1, wn2), lerp(wn2, wn3));

    lerp(wnn1, wnn2)
}
