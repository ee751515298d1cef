/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

use sketchpad_editor::curves::spline::*;

use rand::prelude::*;

fn random_event(rng: &mut StdRng) -> InputEvent {
    match rng.gen_range(0..6) {
        0 | 1 => InputEvent::CursorMoved(rng.gen_range(-10.0..80.0), rng.gen_range(-20.0..100.0)),
        2 => InputEvent::press(Button::Left),
        3 => InputEvent::release(Button::Left),
        4 => InputEvent::key_down(Key::I),
        _ => InputEvent::key_down(Key::D),
    }
}

#[test]
fn random_editing_keeps_joins_c2() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut rng = StdRng::seed_from_u64(42);
    let mut editor = sample_editor(EditorSettings::default());

    for _ in 0..60 {
        let events = (0..3).map(|_| random_event(&mut rng)).collect::<Vec<_>>();
        let frame = run_frame(&mut editor, events);

        let broken = broken_joins(editor.control_points());
        assert!(broken.is_empty(), "Joins at {:?} are not C2: {:?}", broken, editor.control_points());
        assert!(frame.control_points == editor.control_points());
        assert!(frame.pixels.len() >= frame.control_points.len());
    }
}

#[test]
fn random_polylines_stay_in_step_with_placed_points() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut editor = RasterEditor::new(EditorSettings::default());
    run_frame(&mut editor, vec![InputEvent::key_down(Key::Num3)]);

    for _ in 0..20 {
        let num_points = rng.gen_range(1..6);
        let mut events = vec![];

        for _ in 0..num_points {
            events.extend(click_at(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0), Button::Left));
        }
        let frame = run_frame(&mut editor, events);
        assert!(editor.placed_points().len() == num_points);
        assert!(frame.control_points.len() == num_points);

        let frame = run_frame(&mut editor, click_at(50.0, 50.0, Button::Right));
        assert!(!editor.is_drawing());
        assert!(frame.control_points.is_empty());
    }
}
