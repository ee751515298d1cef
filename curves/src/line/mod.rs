/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Straight line segments
//!
//! A line is any type that can report its two end points. `(Coord2, Coord2)` is the usual representation.
//!

mod line;
mod to_curve;

pub use self::line::*;
pub use self::to_curve::*;
