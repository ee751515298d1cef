/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # sketchpad_editor
//!
//! Interactive editors built on `sketchpad_raster` and `sketchpad_curves`. A host window forwards its input
//! as `InputEvent`s and draws whatever `FrameOutput` the editor produces for each frame.
//!
//! * `RasterEditor` draws lines, polylines, polygons, circles and ellipses one pixel at a time
//! * `SplineEditor` draws C2 and Catmull-Rom splines, then lets their nodes be selected, dragged, inserted,
//!   deleted, saved and loaded
//!
//! Each frame, every pending event is handled before anything is drawn:
//!
//! ```
//! # use sketchpad_editor::*;
//! # use sketchpad_editor::events::*;
//! let mut editor = RasterEditor::new(EditorSettings::default());
//!
//! let frame = run_frame(&mut editor, vec![
//!     InputEvent::CursorMoved(10.0, 10.0),
//!     InputEvent::press(Button::Left),
//!     InputEvent::CursorMoved(20.0, 10.0),
//!     InputEvent::press(Button::Right),
//! ]);
//!
//! assert!(frame.pixels.len() == 11);
//! ```
//!

#![warn(bare_trait_objects)]

pub use sketchpad_curves as curves;
pub use sketchpad_events as events;
pub use sketchpad_raster as raster;

pub use self::curve_pixels::*;
pub use self::editor_error::*;
pub use self::frame::*;
pub use self::raster_editor::*;
pub use self::settings::*;
pub use self::spline_editor::*;

mod curve_pixels;
mod editor_error;
mod frame;
mod raster_editor;
mod settings;
mod spline_editor;
