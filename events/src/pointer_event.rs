/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coordinate_origin::*;

use serde_derive::{Deserialize, Serialize};

///
/// The button on a mouse or other device
///
/// If a device only has one means of input (eg, a pen being pressed against the screen),
/// this is considered to be the 'Left' button.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Button {
    Left,
    Middle,
    Right,
    Other(u64),
}

///
/// The action associated with a button or key event
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Action {
    /// The button or key has been pressed
    Press,

    /// The button or key has been released
    Release,

    /// A key is being held down and the host is repeating it
    Repeat,
}

impl Action {
    ///
    /// True if this action leaves the button or key held down
    ///
    #[inline]
    pub fn is_down(&self) -> bool {
        match self {
            Action::Press | Action::Repeat => true,
            Action::Release => false,
        }
    }
}

///
/// Describes where the pointer is
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct PointerState {
    /// The x and y coordinates of the pointer's location in the window, as the host reported them
    pub location_in_window: (f64, f64),

    /// The location of the pointer with the origin at the bottom-left of the window and y increasing upwards
    pub location_in_canvas: (f64, f64),
}

impl PointerState {
    ///
    /// Creates a pointer state from a position reported by the host
    ///
    pub fn new(point: (f64, f64), origin: CoordinateOrigin, window_height: f64) -> PointerState {
        PointerState {
            location_in_window: point,
            location_in_canvas: origin.to_canvas(point, window_height),
        }
    }

    ///
    /// The canvas location rounded to the nearest pixel
    ///
    pub fn pixel(&self) -> (i32, i32) {
        let (x, y) = self.location_in_canvas;
        (x.round() as i32, y.round() as i32)
    }
}

impl Default for PointerState {
    fn default() -> PointerState {
        PointerState {
            location_in_window: (0.0, 0.0),
            location_in_canvas: (0.0, 0.0),
        }
    }
}
