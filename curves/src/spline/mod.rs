/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Piecewise cubic splines
//!
//! A `C2Spline` is a chain of cubic bezier segments stored as a single list of control points, where every
//! third point (indices 0, 3, 6, ...) is an anchor the curve passes through and the two points between each
//! pair of anchors are handles. The handles are kept so that both the first and second derivatives are
//! continuous at every join, even as points are moved, inserted or deleted.
//!
//! ```
//! # use sketchpad_curves::*;
//! # use sketchpad_curves::spline::*;
//! let mut spline = C2Spline::new();
//!
//! spline.append_point(Coord2(0.0, 0.0), false);
//! spline.append_point(Coord2(10.0, 5.0), false);
//! spline.append_point(Coord2(20.0, 5.0), false);
//! spline.append_point(Coord2(30.0, 0.0), false);
//! spline.append_point(Coord2(60.0, 0.0), true);
//!
//! assert!(spline.state() == SplineState::Editing);
//! assert!(spline.control_points().len() == 7);
//! assert!(broken_joins(spline.control_points()).is_empty());
//! ```
//!
//! `CatmullRomSpline` is the simpler alternative where every point placed is on the curve.
//!

mod catmull_rom;
mod c2_spline;
mod chain;
mod continuity;
mod segments;
mod settings;
mod state;

pub use self::catmull_rom::*;
pub use self::c2_spline::*;
pub use self::chain::*;
pub use self::continuity::*;
pub use self::segments::*;
pub use self::settings::*;
pub use self::state::*;
