/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde_derive::{Deserialize, Serialize};

///
/// A colour, with red, green and blue components in the range 0.0 to 1.0
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const WHITE: Rgb = Rgb(1.0, 1.0, 1.0);
    pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);
    pub const RED: Rgb = Rgb(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb(0.0, 1.0, 0.0);
    pub const BLUE: Rgb = Rgb(0.0, 0.0, 1.0);

    ///
    /// Converts this colour to 8-bit components
    ///
    #[inline]
    pub fn to_u8(&self) -> [u8; 3] {
        let component = |value: f32| (value.max(0.0).min(1.0) * 255.0).round() as u8;

        [component(self.0), component(self.1), component(self.2)]
    }

    ///
    /// Creates a colour from 8-bit components
    ///
    #[inline]
    pub fn from_u8(rgb: [u8; 3]) -> Rgb {
        Rgb(
            (rgb[0] as f32) / 255.0,
            (rgb[1] as f32) / 255.0,
            (rgb[2] as f32) / 255.0,
        )
    }
}

impl Default for Rgb {
    /// Shapes are drawn in white unless another colour is requested
    fn default() -> Self {
        Rgb::WHITE
    }
}
