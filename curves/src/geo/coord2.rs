/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde_derive::{Deserialize, Serialize};

use std::ops::*;

///
/// Represents a point in the plane
///
/// Points are in a bottom-left origin, y-up coordinate scheme. Hosts that deliver cursor positions with a
/// top-left origin must flip them before passing them in.
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Coord2(pub f64, pub f64);

///
/// Trait implemented by types that describe a two-dimensional coordinate
///
pub trait Coordinate2D {
    ///
    /// X component of this coordinate
    ///
    fn x(&self) -> f64;

    ///
    /// Y component of this coordinate
    ///
    fn y(&self) -> f64;
}

impl Coordinate2D for Coord2 {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coord2 {
    ///
    /// The origin of the coordinate scheme
    ///
    #[inline]
    pub fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    ///
    /// The euclidean distance between this point and another
    ///
    #[inline]
    pub fn distance_to(&self, target: &Coord2) -> f64 {
        let offset = *self - *target;

        offset.magnitude()
    }

    ///
    /// The length of the vector from the origin to this point
    ///
    #[inline]
    pub fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }

    #[inline]
    pub fn dot(&self, target: &Coord2) -> f64 {
        self.0 * target.0 + self.1 * target.1
    }

    ///
    /// True if both components are finite numbers
    ///
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }

    ///
    /// True if this point is within `max_distance` of another point (component-wise)
    ///
    pub fn is_near_to(&self, target: &Coord2, max_distance: f64) -> bool {
        f64::abs(self.0 - target.0) <= max_distance && f64::abs(self.1 - target.1) <= max_distance
    }

    ///
    /// Rounds this point to the nearest pixel
    ///
    #[inline]
    pub fn to_pixel(&self) -> (i32, i32) {
        (self.0.round() as i32, self.1.round() as i32)
    }
}

impl From<(f64, f64)> for Coord2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Coord2 {
        Coord2(x, y)
    }
}

impl From<Coord2> for (f64, f64) {
    #[inline]
    fn from(point: Coord2) -> (f64, f64) {
        (point.0, point.1)
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Div<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn div(self, rhs: f64) -> Coord2 {
        Coord2(self.0 / rhs, self.1 / rhs)
    }
}

impl Neg for Coord2 {
    type Output = Coord2;

    #[inline]
    fn neg(self) -> Coord2 {
        Coord2(-self.0, -self.1)
    }
}
