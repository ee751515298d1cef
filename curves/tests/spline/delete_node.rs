/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

#[test]
fn cannot_delete_end_points() {
    let mut spline = sample_spline();
    let before = spline.control_points().to_vec();

    assert!(!spline.delete_node(0));
    assert!(!spline.delete_node(9));
    assert!(!spline.delete_node(10));
    assert!(spline.control_points() == &before[..]);
}

#[test]
fn delete_anchor_merges_segments() {
    let mut spline = sample_spline();

    assert!(spline.delete_node(3));

    assert!(
        spline.control_points()
            == &[
                Coord2(0.0, 0.0),
                Coord2(10.0, 5.0),
                Coord2(20.0, 5.0),
                Coord2(45.0, 10.0),
                Coord2(70.0, 15.0),
                Coord2(110.0, 25.0),
                Coord2(60.0, 0.0),
            ]
    );
    assert_c2(spline.control_points());
}

#[test]
fn delete_first_handle_deletes_the_next_anchor() {
    let mut spline = sample_spline();
    let mut deleted_anchor = sample_spline();

    assert!(spline.delete_node(1));
    deleted_anchor.delete_node(3);

    assert!(spline.control_points() == deleted_anchor.control_points());
}

#[test]
fn delete_last_handle_deletes_the_previous_anchor() {
    let mut spline = sample_spline();

    assert!(spline.delete_node(8));

    assert!(
        spline.control_points()
            == &[
                Coord2(0.0, 0.0),
                Coord2(10.0, 5.0),
                Coord2(20.0, 5.0),
                Coord2(30.0, 0.0),
                Coord2(40.0, -5.0),
                Coord2(50.0, -15.0),
                Coord2(60.0, 0.0),
            ]
    );
}

#[test]
fn delete_handle_deletes_its_anchor() {
    // 4 is the handle after anchor 3, 5 is the handle before anchor 6
    let mut outgoing = sample_spline();
    let mut anchor_3 = sample_spline();
    outgoing.delete_node(4);
    anchor_3.delete_node(3);
    assert!(outgoing.control_points() == anchor_3.control_points());

    let mut incoming = sample_spline();
    let mut anchor_6 = sample_spline();
    incoming.delete_node(5);
    anchor_6.delete_node(6);
    assert!(incoming.control_points() == anchor_6.control_points());
}

#[test]
fn every_deletion_removes_one_segment() {
    let original = sample_spline();

    for index in 1..9 {
        let mut spline = original.clone();

        assert!(spline.delete_node(index));
        assert!(spline.control_points().len() == 7, "Deleting {}", index);
        assert!(spline.control_points()[0] == Coord2(0.0, 0.0));
        assert!(spline.control_points()[6] == Coord2(60.0, 0.0));
        assert_c2(spline.control_points());
    }
}

#[test]
fn delete_from_single_segment_clears_the_spline() {
    let mut spline = draw_spline(&[Coord2(0.0, 0.0), Coord2(10.0, 10.0), Coord2(20.0, 10.0), Coord2(30.0, 0.0)]);

    assert!(spline.delete_node(2));
    assert!(spline.control_points().is_empty());
    assert!(spline.state() == SplineState::Empty);
}

#[test]
fn delete_clears_the_selection() {
    let mut spline = sample_spline();

    spline.select_node(Coord2(30.0, 1.0));
    assert!(spline.selected() == Some(3));

    assert!(spline.delete_selected());
    assert!(spline.selected() == None);
    assert!(!spline.delete_selected());
}

#[test]
fn delete_needs_a_finished_spline() {
    let mut spline = C2Spline::new();
    spline.append_point(Coord2(0.0, 0.0), false);
    spline.append_point(Coord2(10.0, 0.0), false);
    spline.append_point(Coord2(20.0, 0.0), false);
    spline.append_point(Coord2(30.0, 0.0), false);

    assert!(!spline.delete_node(3));
    assert!(spline.control_points().len() == 6);
}

#[test]
fn delete_down_to_nothing() {
    let mut spline = sample_spline();

    assert!(spline.delete_node(3));
    assert!(spline.delete_node(3));
    assert!(spline.control_points().len() == 4);
    assert!(spline.delete_node(1));
    assert!(spline.state() == SplineState::Empty);
    assert!(!spline.delete_node(1));
}
