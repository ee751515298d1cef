/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! Polygon scan conversion: filling simple polygons scanline by scanline, and finding the crossing edges that
//! make a polygon unsuitable for filling.
//!

pub use polygon::*;
pub use scan_fill::*;
pub use self_intersection::*;

mod polygon;
mod scan_fill;
mod self_intersection;
