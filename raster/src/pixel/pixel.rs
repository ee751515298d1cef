/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::rgb::*;

use serde_derive::{Deserialize, Serialize};

///
/// A single coloured pixel at an integer position (bottom-left origin, y increasing upwards)
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
    pub color: Rgb,
}

impl Pixel {
    #[inline]
    pub fn new(x: i32, y: i32, color: Rgb) -> Pixel {
        Pixel { x, y, color }
    }

    ///
    /// The position of this pixel
    ///
    #[inline]
    pub fn pos(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
