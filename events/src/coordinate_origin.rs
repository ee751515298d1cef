/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde_derive::{Deserialize, Serialize};

///
/// Where the host puts (0, 0) when it reports cursor positions
///
/// The editors always work with the origin at the bottom-left and y increasing upwards, so positions
/// from a host that uses a top-left origin are flipped on the way in.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CoordinateOrigin {
    TopLeft,
    BottomLeft,
}

impl CoordinateOrigin {
    ///
    /// Converts a y coordinate from this origin to a bottom-left origin for a window of the given height
    ///
    #[inline]
    pub fn flip(&self, y: f64, window_height: f64) -> f64 {
        match self {
            CoordinateOrigin::TopLeft => window_height - y,
            CoordinateOrigin::BottomLeft => y,
        }
    }

    ///
    /// Converts a point reported by the host to canvas coordinates
    ///
    #[inline]
    pub fn to_canvas(&self, (x, y): (f64, f64), window_height: f64) -> (f64, f64) {
        (x, self.flip(y, window_height))
    }
}

impl Default for CoordinateOrigin {
    fn default() -> CoordinateOrigin {
        CoordinateOrigin::BottomLeft
    }
}
