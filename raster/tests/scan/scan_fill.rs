/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sketchpad_raster::*;

use std::collections::HashSet;

///
/// Even-odd point in polygon test, for checking points that are well away from the edges
///
fn inside(polygon: &[(i32, i32)], x: f64, y: f64) -> bool {
    let mut result = false;

    for index in 0..polygon.len() {
        let (x1, y1) = (polygon[index].0 as f64, polygon[index].1 as f64);
        let next = polygon[(index + 1) % polygon.len()];
        let (x2, y2) = (next.0 as f64, next.1 as f64);

        if (y1 > y) != (y2 > y) {
            let crossing = x1 + (y - y1) * (x2 - x1) / (y2 - y1);
            if x < crossing {
                result = !result;
            }
        }
    }

    result
}

///
/// Checks that every point strictly inside a polygon is filled and no point strictly outside it is
///
fn check_fill(polygon: &[(i32, i32)]) {
    let filled = scan_fill(polygon, Rgb::WHITE).positions().collect::<HashSet<_>>();
    let offsets = [(-0.01, -0.01), (-0.01, 0.01), (0.01, -0.01), (0.01, 0.01)];

    for x in -5..30 {
        for y in -5..30 {
            let (fx, fy) = (x as f64, y as f64);
            let strictly_inside = offsets.iter().all(|(dx, dy)| inside(polygon, fx + dx, fy + dy));
            let strictly_outside = offsets.iter().all(|(dx, dy)| !inside(polygon, fx + dx, fy + dy));

            if strictly_inside {
                assert!(filled.contains(&(x, y)), "{:?} should be filled", (x, y));
            }
            if strictly_outside {
                assert!(!filled.contains(&(x, y)), "{:?} should not be filled", (x, y));
            }
        }
    }
}

#[test]
fn fill_square() {
    let square = [(0, 0), (4, 0), (4, 4), (0, 4)];
    let filled = scan_fill(&square, Rgb::RED);

    // The top edge is excluded as edges don't include their upper end
    let mut positions = filled.positions().collect::<Vec<_>>();
    positions.sort();

    let mut expected = (0..=4).flat_map(|x| (0..4).map(move |y| (x, y))).collect::<Vec<_>>();
    expected.sort();

    assert!(positions == expected, "{:?}", positions);
    assert!(filled.iter().all(|pixel| pixel.color == Rgb::RED));
}

#[test]
fn fill_triangle() {
    let triangle = [(0, 0), (6, 0), (3, 3)];
    let filled = scan_fill(&triangle, Rgb::WHITE).positions().collect::<HashSet<_>>();

    assert!(filled.len() == 15);
    assert!(filled.contains(&(0, 0)));
    assert!(filled.contains(&(6, 0)));
    assert!(filled.contains(&(3, 2)));
    assert!(!filled.contains(&(1, 2)));
}

#[test]
fn fill_is_correct_for_convex_polygons() {
    check_fill(&[(0, 0), (10, 0), (10, 10), (0, 10)]);
    check_fill(&[(0, 0), (20, 0), (10, 15)]);
    check_fill(&[(2, 1), (17, 4), (22, 18), (9, 25), (1, 12)]);
}

#[test]
fn fill_concave_polygon() {
    let notch = [(0, 0), (20, 0), (20, 20), (10, 5), (0, 20)];
    check_fill(&notch);

    let row = scan_fill(&notch, Rgb::WHITE)
        .positions()
        .filter(|(_, y)| *y == 10)
        .map(|(x, _)| x)
        .collect::<Vec<_>>();
    assert!(row == vec![0, 1, 2, 3, 4, 5, 6, 14, 15, 16, 17, 18, 19, 20]);
}

#[test]
fn fill_does_not_depend_on_winding() {
    let clockwise = [(0, 0), (0, 10), (10, 10), (10, 0)];
    let anticlockwise = [(0, 0), (10, 0), (10, 10), (0, 10)];

    let a = scan_fill(&clockwise, Rgb::WHITE).positions().collect::<HashSet<_>>();
    let b = scan_fill(&anticlockwise, Rgb::WHITE).positions().collect::<HashSet<_>>();

    assert!(a == b);
}

#[test]
fn degenerate_polygons_are_empty() {
    assert!(scan_fill(&[], Rgb::WHITE).is_empty());
    assert!(scan_fill(&[(3, 3)], Rgb::WHITE).is_empty());
    assert!(scan_fill(&[(0, 0), (10, 0), (20, 0)], Rgb::WHITE).is_empty());
}
