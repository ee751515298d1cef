/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sketchpad_raster::*;

#[test]
fn open_polyline() {
    let polyline = draw_polyline(&[(0, 0), (4, 0), (4, 4)], false, Rgb::WHITE);

    // Two lines of 5 pixels that share a corner
    assert!(polyline.len() == 10);
    assert!(polyline.contains(2, 0));
    assert!(polyline.contains(4, 2));
    assert!(!polyline.contains(2, 2));
}

#[test]
fn closed_polyline() {
    let polyline = draw_polyline(&[(0, 0), (4, 0), (4, 4)], true, Rgb::WHITE);

    assert!(polyline.len() == 15);
    assert!(polyline.contains(2, 2));
}

#[test]
fn closing_a_single_line_does_not_repeat_it() {
    let open = draw_polyline(&[(0, 0), (4, 0)], false, Rgb::WHITE);
    let closed = draw_polyline(&[(0, 0), (4, 0)], true, Rgb::WHITE);

    assert!(open == closed);
}

#[test]
fn single_point_polyline() {
    let polyline = draw_polyline(&[(3, 3)], false, Rgb::WHITE);

    assert!(polyline.positions().collect::<Vec<_>>() == vec![(3, 3)]);
    assert!(draw_polyline(&[], true, Rgb::WHITE).is_empty());
}

#[test]
fn polyline_edges_wrap_when_closed() {
    let edges = polyline_edges(&[(0, 0), (1, 0), (1, 1)], true);

    assert!(edges == vec![((0, 0), (1, 0)), ((1, 0), (1, 1)), ((1, 1), (0, 0))]);
}
