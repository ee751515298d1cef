/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::curve_pixels::*;
use super::editor_error::*;
use super::frame::*;
use super::settings::*;

use sketchpad_curves::bezier::*;
use sketchpad_curves::io::*;
use sketchpad_curves::spline::*;
use sketchpad_events::*;
use sketchpad_raster::*;

use log::{debug, info, warn};

///
/// The kinds of spline the spline editor can draw
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SplineMode {
    /// A C2 chain of cubic bezier segments (key 1)
    C2,

    /// A Catmull-Rom spline through every point placed (key 3)
    CatmullRom,
}

///
/// The operations the editor needs from a spline
///
trait EditableSpline {
    fn state(&self) -> SplineState;
    fn control_points(&self) -> &[Coord2];
    fn selected(&self) -> Option<usize>;

    /// The complete segments of the spline, as bezier curves
    fn segments(&self) -> Vec<Curve>;

    /// The segment that the cursor would complete while the spline is being drawn
    fn preview_segments(&self, cursor: Coord2) -> Vec<Curve>;

    fn append_point(&mut self, point: Coord2, is_last: bool);
    fn select_node(&mut self, cursor: Coord2) -> bool;
    fn move_selected(&mut self, new_position: Coord2) -> bool;
    fn insert_node(&mut self, new_position: Coord2) -> bool;
    fn delete_selected(&mut self) -> bool;
    fn deselect(&mut self);
}

macro_rules! editable_spline {
    ($spline: ty) => {
        impl EditableSpline for $spline {
            fn state(&self) -> SplineState {
                <$spline>::state(self)
            }
            fn control_points(&self) -> &[Coord2] {
                <$spline>::control_points(self)
            }
            fn selected(&self) -> Option<usize> {
                <$spline>::selected(self)
            }
            fn segments(&self) -> Vec<Curve> {
                <$spline>::segments(self).collect()
            }
            fn preview_segments(&self, cursor: Coord2) -> Vec<Curve> {
                <$spline>::preview_segments(self, cursor).into_vec()
            }
            fn append_point(&mut self, point: Coord2, is_last: bool) {
                <$spline>::append_point(self, point, is_last);
            }
            fn select_node(&mut self, cursor: Coord2) -> bool {
                <$spline>::select_node(self, cursor)
            }
            fn move_selected(&mut self, new_position: Coord2) -> bool {
                <$spline>::move_selected(self, new_position)
            }
            fn insert_node(&mut self, new_position: Coord2) -> bool {
                <$spline>::insert_node(self, new_position)
            }
            fn delete_selected(&mut self) -> bool {
                <$spline>::delete_selected(self)
            }
            fn deselect(&mut self) {
                <$spline>::deselect(self)
            }
        }
    };
}

editable_spline!(C2Spline);
editable_spline!(CatmullRomSpline);

///
/// Editor that draws a spline by placing points, then lets its nodes be dragged, inserted and deleted
///
/// While drawing, a left click places a point and a right click places the final point. Once the spline is
/// finished, a left click selects the nearest node and dragging moves it, `I` inserts a node at the cursor after
/// the selection, `D` or `Delete` removes the selection, and `S`/`L` save and load the spline file.
///
pub struct SplineEditor {
    settings: EditorSettings,
    mode: SplineMode,
    spline: Box<dyn EditableSpline>,
    cursor: Coord2,

    /// True while the left button is held on a selected node
    dragging: bool,

    /// The last save or load error, cleared when a save or load succeeds
    last_error: Option<EditorError>,
}

impl SplineEditor {
    ///
    /// Creates a spline editor in C2 mode
    ///
    pub fn new(settings: EditorSettings) -> SplineEditor {
        let spline = Box::new(C2Spline::with_settings(settings.spline_settings()));

        SplineEditor {
            settings,
            mode: SplineMode::C2,
            spline,
            cursor: Coord2::origin(),
            dragging: false,
            last_error: None,
        }
    }

    #[inline]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    #[inline]
    pub fn mode(&self) -> SplineMode {
        self.mode
    }

    #[inline]
    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    #[inline]
    pub fn state(&self) -> SplineState {
        self.spline.state()
    }

    #[inline]
    pub fn control_points(&self) -> &[Coord2] {
        self.spline.control_points()
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.spline.selected()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    ///
    /// The error from the last save or load, if it failed
    ///
    #[inline]
    pub fn last_error(&self) -> Option<&EditorError> {
        self.last_error.as_ref()
    }

    ///
    /// Switches mode, starting a new empty spline
    ///
    pub fn set_mode(&mut self, mode: SplineMode) {
        info!("Spline editor mode: {:?}", mode);

        self.mode = mode;
        self.spline = self.empty_spline(mode);
        self.dragging = false;
    }

    fn empty_spline(&self, mode: SplineMode) -> Box<dyn EditableSpline> {
        let settings = self.settings.spline_settings();

        match mode {
            SplineMode::C2 => Box::new(C2Spline::with_settings(settings)),
            SplineMode::CatmullRom => Box::new(CatmullRomSpline::with_settings(settings)),
        }
    }

    ///
    /// The complete segments of the spline
    ///
    pub fn segments(&self) -> Vec<Curve> {
        self.spline.segments()
    }

    ///
    /// The complete segments, followed by the segment the cursor would complete while drawing
    ///
    pub fn visible_segments(&self) -> Vec<Curve> {
        let mut segments = self.spline.segments();
        segments.extend(self.spline.preview_segments(self.cursor));
        segments
    }

    ///
    /// Rasterizes the visible segments, for hosts that don't tessellate curves themselves
    ///
    pub fn curve_pixels(&self) -> PixelPath {
        rasterize_curves(
            self.visible_segments(),
            self.settings.curve_step,
            self.settings.draw_color,
        )
    }

    ///
    /// The control points as pixels, with the selected node highlighted
    ///
    pub fn control_point_pixels(&self) -> PixelPath {
        let mut pixels = control_point_pixels(self.spline.control_points(), self.settings.control_point_color);

        if let Some(selected) = self.spline.selected() {
            let (x, y) = pixels.pixels()[selected].pos();
            pixels.push(x, y, self.settings.highlight_color);
        }

        pixels
    }

    ///
    /// Saves the control points to the configured file
    ///
    pub fn save(&self) -> Result<(), EditorError> {
        let path = &self.settings.save_path;
        save_spline(path, self.spline.control_points(), self.mode == SplineMode::C2)?;

        info!("Saved spline to {}", path.display());
        Ok(())
    }

    ///
    /// Replaces the spline with the one in the configured file
    ///
    /// The file's continuity decides the mode: C2 files load into a C2 spline, C1 files into a Catmull-Rom one.
    /// A C2 file whose joins are not C2 is refused rather than having its handles changed. The loaded spline is
    /// finished, so it can be edited straight away.
    ///
    pub fn load(&mut self) -> Result<(), EditorError> {
        let loaded = load_spline(&self.settings.save_path)?;
        let count = loaded.points.len();
        let settings = self.settings.spline_settings();

        let (mode, spline): (SplineMode, Box<dyn EditableSpline>) = if loaded.is_c2 {
            let broken = broken_joins(&loaded.points);
            if !broken.is_empty() {
                return Err(SplineIoError::BrokenJoins { anchors: broken }.into());
            }

            let spline = C2Spline::from_control_points(loaded.points, settings)
                .ok_or(SplineIoError::MalformedSpline { count })?;
            (SplineMode::C2, Box::new(spline))
        } else {
            let mut spline = CatmullRomSpline::with_settings(settings);
            for (index, point) in loaded.points.into_iter().enumerate() {
                spline.append_point(point, index + 1 == count);
            }
            (SplineMode::CatmullRom, Box::new(spline))
        };

        info!("Loaded {:?} spline with {} control points", mode, count);

        self.mode = mode;
        self.spline = spline;
        self.dragging = false;

        Ok(())
    }

    fn record_result(&mut self, result: Result<(), EditorError>) {
        match result {
            Ok(()) => self.last_error = None,
            Err(err) => {
                warn!("{}", err);
                self.last_error = Some(err);
            }
        }
    }

    fn left_press(&mut self) {
        if self.spline.state().is_drawing() {
            self.spline.append_point(self.cursor, false);
        } else {
            self.dragging = self.spline.select_node(self.cursor);

            if let Some(selected) = self.spline.selected() {
                debug!("Selected node {}", selected);
            }
        }
    }

    fn right_press(&mut self) {
        if self.spline.state() != SplineState::Empty && self.spline.state().is_drawing() {
            self.spline.append_point(self.cursor, true);
        }
    }
}

impl Editor for SplineEditor {
    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::CursorMoved(x, y) => {
                self.cursor = Coord2(x, y);

                if self.dragging {
                    self.spline.move_selected(self.cursor);
                }
            }

            InputEvent::Key(Key::Num1, Action::Press) => self.set_mode(SplineMode::C2),
            InputEvent::Key(Key::Num3, Action::Press) => self.set_mode(SplineMode::CatmullRom),

            InputEvent::Button(Button::Left, Action::Press) => self.left_press(),
            InputEvent::Button(Button::Left, Action::Release) => self.dragging = false,
            InputEvent::Button(Button::Right, Action::Press) => self.right_press(),

            InputEvent::Key(Key::I, Action::Press) => {
                if self.spline.insert_node(self.cursor) {
                    debug!("Inserted node at {:?}", self.cursor);
                }
            }

            InputEvent::Key(Key::D, Action::Press) | InputEvent::Key(Key::Delete, Action::Press) => {
                if self.spline.delete_selected() {
                    debug!("Deleted node");
                }
                self.dragging = false;
            }

            InputEvent::Key(Key::Escape, Action::Press) => {
                self.spline.deselect();
                self.dragging = false;
            }

            InputEvent::Key(Key::S, Action::Press) => {
                let result = self.save();
                self.record_result(result);
            }

            InputEvent::Key(Key::L, Action::Press) => {
                let result = self.load();
                self.record_result(result);
            }

            _ => {}
        }
    }

    fn frame_output(&self) -> FrameOutput {
        FrameOutput {
            pixels: self.control_point_pixels(),
            control_points: self.spline.control_points().to_vec(),
            segment_windows: self
                .visible_segments()
                .iter()
                .map(|segment| segment.as_points())
                .collect(),
        }
    }
}
