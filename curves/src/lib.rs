/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # sketchpad_curves
//!
//! Cubic bezier curves and the piecewise splines built from them.
//!
//! The `spline` module contains `C2Spline`, a chain of bezier segments that is drawn by placing points and
//! can then be edited node by node while staying smooth (C2 continuous) at every join, along with the
//! simpler `CatmullRomSpline`. The `io` module saves and loads the control points of a spline as text.
//!
//! ```
//! # use sketchpad_curves::*;
//! # use sketchpad_curves::spline::*;
//! let chain   = c2_chain_through_points(&[Coord2(0.0, 0.0), Coord2(30.0, 0.0), Coord2(60.0, 20.0)]);
//! let spline  = C2Spline::from_control_points(chain, SplineSettings::default()).unwrap();
//!
//! let segments = spline.segments().collect::<Vec<_>>();
//! assert!(segments.len() == 2);
//! assert!(segments[1].point_at_pos(1.0).is_near_to(&Coord2(60.0, 20.0), 1e-9));
//! ```
//!

#![warn(bare_trait_objects)]

#[macro_use]
mod test_assert;

pub mod consts;
pub mod geo;
pub mod bezier;
pub mod line;
pub mod spline;
pub mod io;

pub use self::geo::*;

pub use self::bezier::{BezierCurve, BezierCurveFactory, Curve};
pub use self::line::Line;
pub use self::spline::{C2Spline, CatmullRomSpline, SplineSettings, SplineState};
pub use self::io::{load_spline, save_spline, LoadedSpline, SplineIoError};
