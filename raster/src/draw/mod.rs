/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! Integer-only rasterization of outlines: lines (Bresenham), circles and ellipses (midpoint algorithms) and
//! polylines built from lines.
//!

pub use circle::*;
pub use ellipse::*;
pub use line::*;
pub use polyline::*;

mod circle;
mod ellipse;
mod line;
mod polyline;
