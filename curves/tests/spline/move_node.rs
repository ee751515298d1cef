/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

#[test]
fn move_start_point_moves_nothing_else() {
    let mut spline = sample_spline();
    let before = spline.control_points().to_vec();

    assert!(spline.move_node(0, Coord2(-5.0, -5.0)));

    let after = spline.control_points();
    assert!(after[0] == Coord2(-5.0, -5.0));
    assert!(after[1..] == before[1..]);
}

#[test]
fn move_end_point_moves_nothing_else() {
    let mut spline = sample_spline();
    let before = spline.control_points().to_vec();

    assert!(spline.move_node(9, Coord2(70.0, 10.0)));

    let after = spline.control_points();
    assert!(after[9] == Coord2(70.0, 10.0));
    assert!(after[..9] == before[..9]);
}

#[test]
fn move_middle_anchor() {
    let mut spline = sample_spline();

    assert!(spline.move_node(6, Coord2(45.0, 20.0)));

    assert!(
        spline.control_points()
            == &[
                Coord2(0.0, 0.0),
                Coord2(10.0, 5.0),
                Coord2(20.0, 5.0),
                Coord2(30.0, 0.0),
                Coord2(40.0, -5.0),
                Coord2(50.0, -15.0),
                Coord2(45.0, 20.0),
                Coord2(40.0, 55.0),
                Coord2(20.0, 135.0),
                Coord2(60.0, 0.0),
            ]
    );
    assert_c2(spline.control_points());
}

#[test]
fn moving_anchor_leaves_points_before_it_alone() {
    let mut spline = sample_spline();
    let before = spline.control_points().to_vec();

    spline.move_node(3, Coord2(33.0, 7.0));

    let after = spline.control_points();
    assert!(after[..3] == before[..3]);
    assert!(after[9] == before[9]);
    assert_c2(after);
}

#[test]
fn move_handle_propagates_both_ways() {
    let mut spline = sample_spline();

    assert!(spline.move_node(4, Coord2(42.0, -2.0)));

    assert!(
        spline.control_points()
            == &[
                Coord2(0.0, 0.0),
                Coord2(2.0, -7.0),
                Coord2(18.0, 2.0),
                Coord2(30.0, 0.0),
                Coord2(42.0, -2.0),
                Coord2(50.0, -15.0),
                Coord2(45.0, 10.0),
                Coord2(40.0, 35.0),
                Coord2(22.0, 98.0),
                Coord2(60.0, 0.0),
            ]
    );
    assert_c2(spline.control_points());
}

#[test]
fn moving_handles_keeps_anchors_in_place() {
    for index in [1, 2, 4, 5, 7, 8].iter() {
        let mut spline = sample_spline();
        let anchors = spline.anchors().collect::<Vec<_>>();

        spline.move_node(*index, Coord2(25.0, 25.0));

        assert!(spline.control_points()[*index] == Coord2(25.0, 25.0));
        assert!(spline.anchors().collect::<Vec<_>>() == anchors, "Moved {}", index);
        assert_c2(spline.control_points());
    }
}

#[test]
fn move_out_of_range() {
    let mut spline = sample_spline();
    let before = spline.control_points().to_vec();

    assert!(!spline.move_node(10, Coord2(1.0, 1.0)));
    assert!(spline.control_points() == &before[..]);
}

#[test]
fn move_needs_a_finished_spline() {
    let mut spline = C2Spline::new();
    spline.append_point(Coord2(0.0, 0.0), false);
    spline.append_point(Coord2(10.0, 0.0), false);

    assert!(!spline.move_node(0, Coord2(5.0, 5.0)));
    assert!(spline.control_points()[0] == Coord2(0.0, 0.0));
}

#[test]
fn move_selected_node() {
    let mut spline = sample_spline();

    assert!(!spline.move_selected(Coord2(1.0, 1.0)));

    assert!(spline.select_node(Coord2(44.0, 11.0)));
    assert!(spline.selected() == Some(6));
    assert!(spline.move_selected(Coord2(45.0, 20.0)));
    assert!(spline.control_points()[7] == Coord2(40.0, 55.0));
}

#[test]
fn move_in_single_segment_spline() {
    let mut spline = draw_spline(&[Coord2(0.0, 0.0), Coord2(10.0, 10.0), Coord2(20.0, 10.0), Coord2(30.0, 0.0)]);

    assert!(spline.control_points().len() == 4);
    assert!(spline.move_node(1, Coord2(5.0, 20.0)));
    assert!(spline.move_node(2, Coord2(25.0, 20.0)));

    assert!(
        spline.control_points()
            == &[Coord2(0.0, 0.0), Coord2(5.0, 20.0), Coord2(25.0, 20.0), Coord2(30.0, 0.0)]
    );
}
