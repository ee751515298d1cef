/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sketchpad_curves::spline::*;
use sketchpad_curves::*;

mod delete_node;
mod insert_node;
mod move_node;
mod select_node;

///
/// Draws a finished C2 spline by placing each of the points in turn
///
pub fn draw_spline(points: &[Coord2]) -> C2Spline {
    let mut spline = C2Spline::new();

    for (index, point) in points.iter().enumerate() {
        spline.append_point(*point, index == points.len() - 1);
    }

    spline
}

///
/// The spline used by most of the editing tests: 4 anchors and 10 control points
///
/// Control points are (0,0) (10,5) (20,5) (30,0) (40,-5) (50,-15) (45,10) (40,35) (20,95) (60,0)
///
pub fn sample_spline() -> C2Spline {
    draw_spline(&[
        Coord2(0.0, 0.0),
        Coord2(10.0, 5.0),
        Coord2(20.0, 5.0),
        Coord2(30.0, 0.0),
        Coord2(45.0, 10.0),
        Coord2(60.0, 0.0),
    ])
}

///
/// Fails if any join in a list of control points is not C2
///
pub fn assert_c2(points: &[Coord2]) {
    let broken = broken_joins(points);
    assert!(broken.is_empty(), "Joins at {:?} are not C2: {:?}", broken, points);
}

///
/// Fails if two lists of points differ by more than a small relative amount
///
pub fn assert_points_near(actual: &[Coord2], expected: &[Coord2]) {
    assert!(actual.len() == expected.len(), "{:?} != {:?}", actual, expected);

    for (a, b) in actual.iter().zip(expected.iter()) {
        let scale = 1.0f64.max(b.0.abs()).max(b.1.abs());
        assert!(a.is_near_to(b, 1e-9 * scale), "{:?} != {:?}", actual, expected);
    }
}
