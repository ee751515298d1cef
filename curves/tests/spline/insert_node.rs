/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

#[test]
fn insert_needs_a_selection() {
    let mut spline = sample_spline();

    assert!(!spline.insert_node(Coord2(35.0, 5.0)));
    assert!(spline.control_points().len() == 10);
}

#[test]
fn insert_after_end_point_extends_the_curve() {
    let mut spline = sample_spline();
    let before = spline.control_points().to_vec();

    assert!(spline.select_node(Coord2(60.0, 0.0)));
    assert!(spline.selected() == Some(9));
    assert!(spline.insert_node(Coord2(80.0, 10.0)));

    let after = spline.control_points();
    assert!(after.len() == 13);
    assert!(after[..10] == before[..]);
    assert!(after[12] == Coord2(80.0, 10.0));
    assert!(after[10] == Coord2(100.0, -95.0));
    assert_c2(after);
}

#[test]
fn insert_splits_the_selected_segment() {
    let mut spline = sample_spline();

    // Handle 4 is in the segment that starts at anchor 3
    spline.select_node(Coord2(40.0, -5.0));
    assert!(spline.selected() == Some(4));
    assert!(spline.insert_node(Coord2(38.0, 2.0)));

    let after = spline.control_points();
    assert!(after.len() == 13);
    assert!(after[3] == Coord2(30.0, 0.0));
    assert!(after[6] == Coord2(38.0, 2.0));
    assert!(after[9] == Coord2(45.0, 10.0));
    assert!(after[12] == Coord2(60.0, 0.0));
    assert_c2(after);
}

#[test]
fn insert_into_first_segment_keeps_its_handles() {
    let mut spline = sample_spline();

    spline.select_node(Coord2(0.0, 0.0));
    assert!(spline.insert_node(Coord2(15.0, 30.0)));

    let after = spline.control_points();
    assert!(after.len() == 13);
    assert!(after[1] == Coord2(10.0, 5.0));
    assert!(after[2] == Coord2(20.0, 5.0));
    assert!(after[3] == Coord2(15.0, 30.0));
    assert!(after[6] == Coord2(30.0, 0.0));
    assert_c2(after);
}

#[test]
fn insert_clears_the_selection() {
    let mut spline = sample_spline();

    spline.select_node(Coord2(30.0, 0.0));
    assert!(spline.insert_node(Coord2(35.0, 5.0)));
    assert!(spline.selected() == None);
    assert!(!spline.insert_node(Coord2(36.0, 5.0)));
}

#[test]
fn insert_then_delete_restores_the_chain() {
    let original = sample_spline();

    for selected in 0..9 {
        let mut spline = original.clone();

        spline.select_node(original.control_points()[selected]);
        let selected = spline.selected().unwrap();
        let inserted_at = (selected / 3) * 3 + 3;

        assert!(spline.insert_node(Coord2(123.0, 45.0)));
        assert!(spline.control_points()[inserted_at] == Coord2(123.0, 45.0));

        assert!(spline.delete_node(inserted_at));
        assert_points_near(spline.control_points(), original.control_points());
    }
}
