/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

#[test]
fn select_nearest_point() {
    let mut spline = sample_spline();

    assert!(spline.select_node(Coord2(41.0, -4.0)));
    assert!(spline.selected() == Some(4));
}

#[test]
fn nothing_selected_outside_radius() {
    let mut spline = sample_spline();

    assert!(spline.select_node(Coord2(30.0, 0.0)));
    assert!(!spline.select_node(Coord2(300.0, 300.0)));
    assert!(spline.selected() == None);
}

#[test]
fn radius_is_exclusive() {
    let mut spline = draw_spline(&[Coord2(0.0, 0.0), Coord2(100.0, 100.0), Coord2(200.0, 100.0), Coord2(300.0, 0.0)]);

    assert!(!spline.select_node(Coord2(10.0, 0.0)));
    assert!(spline.select_node(Coord2(9.5, 0.0)));
    assert!(spline.selected() == Some(0));
}

#[test]
fn ties_go_to_lowest_index() {
    let mut spline = draw_spline(&[Coord2(0.0, 0.0), Coord2(4.0, 0.0), Coord2(200.0, 100.0), Coord2(300.0, 0.0)]);

    assert!(spline.select_node(Coord2(2.0, 0.0)));
    assert!(spline.selected() == Some(0));
}

#[test]
fn custom_selection_radius() {
    let mut spline = C2Spline::with_settings(SplineSettings { selection_radius: 50.0 });

    spline.append_point(Coord2(0.0, 0.0), false);
    spline.append_point(Coord2(100.0, 100.0), false);
    spline.append_point(Coord2(200.0, 100.0), false);
    spline.append_point(Coord2(300.0, 0.0), true);

    assert!(spline.select_node(Coord2(30.0, 30.0)));
    assert!(spline.selected() == Some(0));
}

#[test]
fn select_needs_a_finished_spline() {
    let mut spline = C2Spline::new();
    spline.append_point(Coord2(0.0, 0.0), false);

    assert!(!spline.select_node(Coord2(0.0, 0.0)));
    assert!(spline.selected() == None);
}

#[test]
fn deselect() {
    let mut spline = sample_spline();

    spline.select_node(Coord2(60.0, 0.0));
    assert!(spline.selected() == Some(9));

    spline.deselect();
    assert!(spline.selected() == None);
}
