/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::basis::*;
use super::derivative::*;
use crate::geo::*;

use serde_derive::{Deserialize, Serialize};

///
/// Trait implemented by things that represent a cubic bezier curve
///
pub trait BezierCurve: Sized {
    ///
    /// The start point of this curve
    ///
    fn start_point(&self) -> Coord2;

    ///
    /// The end point of this curve
    ///
    fn end_point(&self) -> Coord2;

    ///
    /// The control points (handles) in this curve
    ///
    fn control_points(&self) -> (Coord2, Coord2);

    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    #[inline]
    fn point_at_pos(&self, t: f64) -> Coord2 {
        let control_points = self.control_points();

        de_casteljau4(
            t,
            self.start_point(),
            control_points.0,
            control_points.1,
            self.end_point(),
        )
    }

    ///
    /// The first derivative of this curve at the specified position
    ///
    fn tangent_at_pos(&self, t: f64) -> Coord2 {
        let (cp1, cp2) = self.control_points();
        let (d1, d2, d3) = derivative4(self.start_point(), cp1, cp2, self.end_point());

        // The derivative is a quadratic bezier
        let one_minus_t = 1.0 - t;
        d1 * (one_minus_t * one_minus_t) + d2 * (2.0 * one_minus_t * t) + d3 * (t * t)
    }

    ///
    /// The second derivative of this curve at the specified position
    ///
    fn curvature_at_pos(&self, t: f64) -> Coord2 {
        let (cp1, cp2) = self.control_points();
        let (dd1, dd2) = second_derivative4(self.start_point(), cp1, cp2, self.end_point());

        dd1 * (1.0 - t) + dd2 * t
    }

    ///
    /// The 4 points that describe this curve, in the order they're sent to the renderer
    ///
    fn as_points(&self) -> [Coord2; 4] {
        let (cp1, cp2) = self.control_points();

        [self.start_point(), cp1, cp2, self.end_point()]
    }
}

///
/// Trait implemented by bezier curves that can be created from their points
///
pub trait BezierCurveFactory: BezierCurve {
    ///
    /// Creates a new bezier curve from its start point, handles and end point
    ///
    fn from_points(start: Coord2, control_points: (Coord2, Coord2), end: Coord2) -> Self;
}

///
/// Represents a cubic Bezier curve
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Curve {
    pub start_point: Coord2,
    pub end_point: Coord2,
    pub control_points: (Coord2, Coord2),
}

impl Curve {
    ///
    /// Creates a curve from a window of 4 consecutive control points
    ///
    pub fn from_window(window: &[Coord2; 4]) -> Curve {
        Curve::from_points(window[0], (window[1], window[2]), window[3])
    }
}

impl BezierCurve for Curve {
    #[inline]
    fn start_point(&self) -> Coord2 {
        self.start_point
    }

    #[inline]
    fn end_point(&self) -> Coord2 {
        self.end_point
    }

    #[inline]
    fn control_points(&self) -> (Coord2, Coord2) {
        self.control_points
    }
}

impl BezierCurveFactory for Curve {
    #[inline]
    fn from_points(start: Coord2, control_points: (Coord2, Coord2), end: Coord2) -> Curve {
        Curve {
            start_point: start,
            end_point: end,
            control_points,
        }
    }
}
