/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # sketchpad_raster
//!
//! Rasterizes shapes into lists of integer pixels using only integer arithmetic where possible: lines with
//! Bresenham's algorithm, circles and ellipses with the midpoint algorithms, and polygons with an active edge
//! table scanline fill.
//!
//! ```
//! # use sketchpad_raster::*;
//! let line = draw_line(0, 0, 5, 0, Rgb::WHITE);
//! assert!(line.positions().collect::<Vec<_>>() == vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]);
//!
//! let square = [(0, 0), (10, 0), (10, 10), (0, 10)];
//! assert!(detect_self_intersections(&square).is_empty());
//! let filled = scan_fill(&square, Rgb::RED);
//! ```
//!
//! The results are `PixelPath`s, which can be flattened into the render buffer format (5 values per pixel) or
//! painted into a `PixelFrame`.
//!

#![warn(bare_trait_objects)]

pub mod draw;
pub mod pixel;
pub mod render;
pub mod scan;

pub use self::draw::*;
pub use self::pixel::*;
pub use self::render::*;
pub use self::scan::*;
