/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sketchpad_editor::curves::*;
use sketchpad_editor::events::*;
use sketchpad_editor::*;

use std::env;
use std::path::PathBuf;
use std::process;

mod random_events;

///
/// Moves the cursor to a point and clicks a button there
///
pub fn click_at(x: f64, y: f64, button: Button) -> Vec<InputEvent> {
    vec![InputEvent::CursorMoved(x, y), InputEvent::press(button), InputEvent::release(button)]
}

///
/// Events that draw a C2 spline through a list of points: left clicks, then a right click on the last point
///
pub fn draw_through(points: &[(f64, f64)]) -> Vec<InputEvent> {
    points
        .iter()
        .enumerate()
        .flat_map(|(index, &(x, y))| {
            let button = if index == points.len() - 1 { Button::Right } else { Button::Left };
            click_at(x, y, button)
        })
        .collect()
}

///
/// The points placed for the sample spline: its control points are
/// (0,0) (10,5) (20,5) (30,0) (40,-5) (50,-15) (45,10) (40,35) (20,95) (60,0)
///
pub fn sample_points() -> Vec<(f64, f64)> {
    vec![(0.0, 0.0), (10.0, 5.0), (20.0, 5.0), (30.0, 0.0), (45.0, 10.0), (60.0, 0.0)]
}

pub fn sample_control_points() -> Vec<Coord2> {
    vec![
        Coord2(0.0, 0.0),
        Coord2(10.0, 5.0),
        Coord2(20.0, 5.0),
        Coord2(30.0, 0.0),
        Coord2(40.0, -5.0),
        Coord2(50.0, -15.0),
        Coord2(45.0, 10.0),
        Coord2(40.0, 35.0),
        Coord2(20.0, 95.0),
        Coord2(60.0, 0.0),
    ]
}

///
/// A spline editor with the sample spline drawn and finished
///
pub fn sample_editor(settings: EditorSettings) -> SplineEditor {
    let mut editor = SplineEditor::new(settings);
    run_frame(&mut editor, draw_through(&sample_points()));

    editor
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

///
/// A path in a directory that's private to this test run
///
pub fn test_file(name: &str) -> PathBuf {
    env::temp_dir()
        .join(format!("sketchpad_editor_tests_{}", process::id()))
        .join(name)
}
