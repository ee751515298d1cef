/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sketchpad_curves::bezier::*;
use sketchpad_curves::spline::points_to_buffer;
use sketchpad_events::*;
use sketchpad_raster::*;

///
/// Trait implemented by the editors: they process input events and describe what to draw
///
pub trait Editor {
    ///
    /// Updates the editor in response to an input event
    ///
    fn handle_event(&mut self, event: InputEvent);

    ///
    /// Describes what should be drawn for the editor in its current state
    ///
    fn frame_output(&self) -> FrameOutput;
}

///
/// What the renderer should draw for a single frame
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FrameOutput {
    /// Pixels to plot directly
    pub pixels: PixelPath,

    /// Control points to draw as markers
    pub control_points: Vec<Coord2>,

    /// Cubic bezier segments to tessellate, as windows of start, two handles, end
    pub segment_windows: Vec<[Coord2; 4]>,
}

impl FrameOutput {
    ///
    /// The pixels as a flat list of `x, y, r, g, b` values
    ///
    pub fn pixel_buffer(&self) -> Vec<f32> {
        self.pixels.to_buffer()
    }

    ///
    /// The control points as a flat list of `x, y` values
    ///
    pub fn control_buffer(&self) -> Vec<f32> {
        points_to_buffer(&self.control_points)
    }

    ///
    /// The segment windows as a flat list of `x, y` values, 4 points per segment
    ///
    pub fn segment_buffer(&self) -> Vec<f32> {
        self.segment_windows
            .iter()
            .flat_map(|window| points_to_buffer(window))
            .collect()
    }

    ///
    /// The segments as bezier curves
    ///
    pub fn segments(&self) -> impl '_ + Iterator<Item = Curve> {
        self.segment_windows.iter().map(Curve::from_window)
    }

    ///
    /// Paints the pixels for this frame into a pixel frame
    ///
    pub fn paint(&self, frame: &mut PixelFrame) {
        frame.draw_path(&self.pixels);
    }
}

///
/// Runs a single frame: every pending event is processed before the frame's output is generated
///
pub fn run_frame(editor: &mut impl Editor, events: impl IntoIterator<Item = InputEvent>) -> FrameOutput {
    for event in events {
        editor.handle_event(event);
    }

    editor.frame_output()
}
