/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Routines for describing and evaluating cubic Bezier curves
//!
//! ```
//! # use sketchpad_curves::*;
//! # use sketchpad_curves::bezier::*;
//! #
//! let curve           = Curve::from_points(Coord2(1.0, 2.0), (Coord2(2.0, 0.0), Coord2(3.0, 5.0)), Coord2(4.0, 2.0));
//!
//! let mid_point       = curve.point_at_pos(0.5);
//! let samples         = walk_curve(&curve, 16).collect::<Vec<_>>();
//! ```
//!
//! A spline is drawn as a chain of these curves: the renderer receives them as windows of 4 control points
//! (start, two handles, end) and tessellates each one independently. The functions here let the same thing
//! happen on the host, for previews and software rendering.
//!

mod basis;
mod curve;
mod derivative;
mod walk;

pub use basis::*;
pub use curve::*;
pub use derivative::*;
pub use walk::*;

pub use super::geo::*;
