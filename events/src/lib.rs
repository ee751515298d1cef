/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # sketchpad_events
//!
//! The input events a host window delivers to the sketchpad editors: cursor movement, mouse buttons,
//! keys and frame ticks. Every button and key event carries a press, release or repeat action.
//!
//! Editors work with the origin at the bottom-left of the window. Hosts that report positions from the
//! top-left convert them with `CoordinateOrigin`:
//!
//! ```
//! # use sketchpad_events::*;
//! let event = InputEvent::cursor_from_host((10.0, 30.0), CoordinateOrigin::TopLeft, 100.0);
//! assert!(event == InputEvent::CursorMoved(10.0, 70.0));
//! ```
//!

#![warn(bare_trait_objects)]

mod coordinate_origin;
mod input_event;
mod key_event;
mod pointer_event;

pub use self::coordinate_origin::*;
pub use self::input_event::*;
pub use self::key_event::*;
pub use self::pointer_event::*;
