/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate_origin::*;
use super::key_event::*;
use super::pointer_event::*;

use serde_derive::{Deserialize, Serialize};

///
/// Events that can arrive from the host window
///
/// Cursor positions are in canvas coordinates (bottom-left origin): hosts with a different origin convert
/// them with `CoordinateOrigin` or `InputEvent::cursor_from_host` first.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum InputEvent {
    /// The cursor has moved to a new position
    CursorMoved(f64, f64),

    /// A mouse button has changed state
    Button(Button, Action),

    /// A key has changed state
    Key(Key, Action),

    /// A new frame is starting, with the number of seconds since the last one
    Tick(f64),
}

impl InputEvent {
    ///
    /// Creates a cursor event from a position reported by the host
    ///
    pub fn cursor_from_host(point: (f64, f64), origin: CoordinateOrigin, window_height: f64) -> InputEvent {
        let (x, y) = origin.to_canvas(point, window_height);
        InputEvent::CursorMoved(x, y)
    }

    ///
    /// Shorthand for a button press event
    ///
    pub fn press(button: Button) -> InputEvent {
        InputEvent::Button(button, Action::Press)
    }

    ///
    /// Shorthand for a button release event
    ///
    pub fn release(button: Button) -> InputEvent {
        InputEvent::Button(button, Action::Release)
    }

    ///
    /// Shorthand for a key press event
    ///
    pub fn key_down(key: Key) -> InputEvent {
        InputEvent::Key(key, Action::Press)
    }

    ///
    /// Shorthand for a key release event
    ///
    pub fn key_up(key: Key) -> InputEvent {
        InputEvent::Key(key, Action::Release)
    }
}
