/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::frame::*;
use super::settings::*;

use sketchpad_curves::Coord2;
use sketchpad_events::*;
use sketchpad_raster::*;

use log::{debug, info};

///
/// The kinds of shape the raster editor can draw
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RasterMode {
    /// A single line from the clicked point to the cursor (key 1)
    Line,

    /// A chain of lines through every clicked point, optionally closed into a polygon (key 3)
    Polyline,

    /// A circle (shift held when clicking) or an axis-aligned ellipse centred on the clicked point (key 4)
    Conic,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ConicKind {
    Circle,
    Ellipse,
}

///
/// Editor that draws lines, polylines, polygons, circles and ellipses pixel by pixel
///
/// A left click starts a shape (or adds a point to a polyline), the shape follows the cursor as a preview, and a
/// right click commits it. Holding `C` while committing a polyline closes it into a polygon, which is filled if
/// its edges don't cross. Switching mode discards everything that has been drawn.
///
#[derive(Clone, Debug)]
pub struct RasterEditor {
    settings: EditorSettings,
    mode: RasterMode,

    /// The cursor position, rounded to the nearest pixel
    cursor: (i32, i32),

    /// The points placed for the shape that's being drawn
    points: Vec<(i32, i32)>,

    conic: ConicKind,
    shift_down: bool,
    close_down: bool,

    /// The shapes that have been committed
    shapes: PixelPath,
}

impl RasterEditor {
    ///
    /// Creates a raster editor in line mode
    ///
    pub fn new(settings: EditorSettings) -> RasterEditor {
        RasterEditor {
            settings,
            mode: RasterMode::Line,
            cursor: (0, 0),
            points: vec![],
            conic: ConicKind::Ellipse,
            shift_down: false,
            close_down: false,
            shapes: PixelPath::new(),
        }
    }

    #[inline]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    #[inline]
    pub fn mode(&self) -> RasterMode {
        self.mode
    }

    #[inline]
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    ///
    /// True while a shape has been started but not committed
    ///
    #[inline]
    pub fn is_drawing(&self) -> bool {
        !self.points.is_empty()
    }

    ///
    /// The points placed so far for the current shape
    ///
    #[inline]
    pub fn placed_points(&self) -> &[(i32, i32)] {
        &self.points
    }

    ///
    /// The pixels of every shape that has been committed
    ///
    #[inline]
    pub fn shapes(&self) -> &PixelPath {
        &self.shapes
    }

    ///
    /// Switches to a new mode, discarding the current shape and everything drawn so far
    ///
    pub fn set_mode(&mut self, mode: RasterMode) {
        info!("Raster editor mode: {:?}", mode);

        self.mode = mode;
        self.points.clear();
        self.shapes = PixelPath::new();
    }

    ///
    /// The shape that would be committed if the right button was pressed now
    ///
    pub fn preview(&self) -> PixelPath {
        let color = self.settings.draw_color;

        match (self.mode, self.points.first()) {
            (_, None) => PixelPath::new(),

            (RasterMode::Line, Some(&(x0, y0))) => draw_line(x0, y0, self.cursor.0, self.cursor.1, color),

            (RasterMode::Polyline, Some(_)) => {
                let mut points = self.points.clone();
                points.push(self.cursor);
                draw_polyline(&points, false, color)
            }

            (RasterMode::Conic, Some(&center)) => self.conic_to_cursor(center),
        }
    }

    fn conic_to_cursor(&self, (cx, cy): (i32, i32)) -> PixelPath {
        let (dx, dy) = (self.cursor.0 - cx, self.cursor.1 - cy);
        let color = self.settings.draw_color;

        match self.conic {
            ConicKind::Circle => {
                let radius = ((dx as f64).hypot(dy as f64)) as i32;
                draw_circle(cx, cy, radius, color)
            }

            ConicKind::Ellipse => draw_ellipse(cx, cy, dx.abs(), dy.abs(), color),
        }
    }

    ///
    /// Starts a shape at the cursor, or adds the cursor to the polyline being drawn
    ///
    fn place_point(&mut self) {
        match self.mode {
            RasterMode::Polyline => self.points.push(self.cursor),

            RasterMode::Line => self.points = vec![self.cursor],

            RasterMode::Conic => {
                self.conic = if self.shift_down {
                    ConicKind::Circle
                } else {
                    ConicKind::Ellipse
                };
                self.points = vec![self.cursor];
            }
        }
    }

    ///
    /// Finishes the current shape at the cursor and adds it to the committed shapes
    ///
    fn commit(&mut self) {
        if self.points.is_empty() {
            return;
        }

        let shape = match self.mode {
            RasterMode::Polyline => {
                self.points.push(self.cursor);

                if self.close_down && self.points.len() > 2 {
                    render_polygon(
                        &self.points,
                        self.settings.draw_color,
                        self.settings.draw_color,
                        self.settings.highlight_color,
                    )
                } else {
                    draw_polyline(&self.points, false, self.settings.draw_color)
                }
            }

            RasterMode::Line | RasterMode::Conic => self.preview(),
        };

        debug!("Committed {:?} shape with {} pixels", self.mode, shape.len());

        self.shapes.append(shape);
        self.points.clear();
    }
}

impl Editor for RasterEditor {
    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved(x, y) => self.cursor = (x.round() as i32, y.round() as i32),

            InputEvent::Key(Key::Num1, Action::Press) => self.set_mode(RasterMode::Line),
            InputEvent::Key(Key::Num3, Action::Press) => self.set_mode(RasterMode::Polyline),
            InputEvent::Key(Key::Num4, Action::Press) => self.set_mode(RasterMode::Conic),
            InputEvent::Key(Key::Shift, action) => self.shift_down = action.is_down(),
            InputEvent::Key(Key::C, action) => self.close_down = action.is_down(),

            InputEvent::Button(Button::Left, Action::Press) => self.place_point(),
            InputEvent::Button(Button::Right, Action::Press) => self.commit(),

            _ => {}
        }
    }

    fn frame_output(&self) -> FrameOutput {
        let mut pixels = self.shapes.clone();
        pixels.append(self.preview());

        FrameOutput {
            pixels,
            control_points: self
                .points
                .iter()
                .map(|&(x, y)| Coord2(x as f64, y as f64))
                .collect(),
            segment_windows: vec![],
        }
    }
}
