/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Represents a straight line segment
///
pub trait Line {
    ///
    /// Returns the two end points of this line
    ///
    fn points(&self) -> (Coord2, Coord2);

    ///
    /// Given a value t from 0 to 1, returns a point on this line
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Coord2 {
        let (start, end) = self.points();

        start + (end - start) * t
    }
}

impl Line for (Coord2, Coord2) {
    #[inline]
    fn points(&self) -> (Coord2, Coord2) {
        *self
    }
}
