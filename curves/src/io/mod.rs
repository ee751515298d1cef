/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Saving and loading splines
//!
//! Splines are stored as plain text: a header line `<dimensions> <continuity> <count>` (continuity is 2 for
//! a C2 spline and 1 otherwise) followed by one `x y` line for each control point.
//!
//! ```text
//! 2 2 4
//! 0.0 0.0
//! 10.0 5.0
//! 20.0 5.0
//! 30.0 0.0
//! ```
//!

mod spline_io;
mod spline_io_error;

pub use self::spline_io::*;
pub use self::spline_io_error::*;
