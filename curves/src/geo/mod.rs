/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic geometric definitions
//!
//! `Coord2` is the point type used throughout this crate: a pair of `f64` values in a bottom-left origin,
//! y-up plane. It supports the usual vector arithmetic so that the spline formulas can be written directly
//! (`p * 2.0 - q` and so on).
//!

mod coord2;

pub use self::coord2::*;
