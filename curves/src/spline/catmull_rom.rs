/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::segments::*;
use super::settings::*;
use super::state::*;
use crate::bezier::*;

use log::debug;
use smallvec::*;

///
/// Converts a Catmull-Rom window of 4 points to the cubic bezier curve running between the middle two
///
/// The curve passes through `p1` and `p2`: its tangents there are set by the points either side.
///
pub fn catmull_rom_to_bezier<TCurve: BezierCurveFactory>(window: &[Coord2; 4]) -> TCurve {
    let [p0, p1, p2, p3] = *window;

    let cp1 = p1 + (p2 - p0) / 6.0;
    let cp2 = p2 - (p3 - p1) / 6.0;

    TCurve::from_points(p1, (cp1, cp2), p2)
}

///
/// A Catmull-Rom spline: every point placed is on the curve, and every group of 4 consecutive points
/// describes one segment
///
/// Unlike `C2Spline`, no handles are derived: the control points are just the points that were placed.
///
#[derive(Clone, Debug, Default)]
pub struct CatmullRomSpline {
    control_points: Vec<Coord2>,
    finished: bool,
    selected: Option<usize>,
    settings: SplineSettings,
}

impl CatmullRomSpline {
    ///
    /// Creates a new, empty spline
    ///
    pub fn new() -> CatmullRomSpline {
        CatmullRomSpline::default()
    }

    ///
    /// Creates an empty spline with custom settings
    ///
    pub fn with_settings(settings: SplineSettings) -> CatmullRomSpline {
        CatmullRomSpline {
            control_points: vec![],
            finished: false,
            selected: None,
            settings,
        }
    }

    ///
    /// Where this spline is in its lifecycle
    ///
    pub fn state(&self) -> SplineState {
        if self.finished {
            SplineState::Editing
        } else {
            match self.control_points.len() {
                0 => SplineState::Empty,
                1 | 2 => SplineState::Collecting,
                _ => SplineState::Active,
            }
        }
    }

    #[inline]
    pub fn control_points(&self) -> &[Coord2] {
        &self.control_points
    }

    ///
    /// The windows of 4 consecutive control points that make up the segments of this spline
    ///
    pub fn windows(&self) -> impl '_ + Iterator<Item = [Coord2; 4]> {
        self.control_points
            .windows(4)
            .map(|window| [window[0], window[1], window[2], window[3]])
    }

    ///
    /// The segments of this spline as bezier curves (there are none until 4 points have been placed)
    ///
    pub fn segments(&self) -> impl '_ + Iterator<Item = Curve> {
        self.windows().map(|window| catmull_rom_to_bezier(&window))
    }

    pub fn control_buffer(&self) -> Vec<f32> {
        points_to_buffer(&self.control_points)
    }

    pub fn clear(&mut self) {
        self.control_points.clear();
        self.finished = false;
        self.selected = None;
    }

    ///
    /// Places a point on the curve. Setting `is_last` finishes the spline
    ///
    pub fn append_point(&mut self, point: Coord2, is_last: bool) -> &[Coord2] {
        if self.finished {
            return &self.control_points;
        }

        self.control_points.push(point);

        if is_last {
            debug!(
                "Finished Catmull-Rom spline with {} control points",
                self.control_points.len()
            );
            self.finished = true;
        }

        &self.control_points
    }

    #[inline]
    pub fn finish(&mut self, point: Coord2) -> &[Coord2] {
        self.append_point(point, true)
    }

    ///
    /// The control points this spline would have if the cursor position was placed next
    ///
    pub fn preview_points(&self, cursor: Coord2) -> Vec<Coord2> {
        let mut points = self.control_points.clone();
        if !self.finished {
            points.push(cursor);
        }

        points
    }

    ///
    /// The segment that would be added if the cursor position was placed next
    ///
    pub fn preview_segments(&self, cursor: Coord2) -> SmallVec<[Curve; 1]> {
        let len = self.control_points.len();

        if self.finished || len < 3 {
            return smallvec![];
        }

        let window = [
            self.control_points[len - 3],
            self.control_points[len - 2],
            self.control_points[len - 1],
            cursor,
        ];

        smallvec![catmull_rom_to_bezier(&window)]
    }

    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    ///
    /// Selects the control point nearest to the cursor within the selection radius (lowest index on ties)
    ///
    pub fn select_node(&mut self, cursor: Coord2) -> bool {
        self.selected = None;

        if !self.finished {
            return false;
        }

        let mut nearest_distance = self.settings.selection_radius;
        for (index, point) in self.control_points.iter().enumerate() {
            let distance = point.distance_to(&cursor);

            if distance < nearest_distance {
                nearest_distance = distance;
                self.selected = Some(index);
            }
        }

        self.selected.is_some()
    }

    ///
    /// Moves a control point. Nothing else needs to change as every point is placed directly on the curve
    ///
    pub fn move_node(&mut self, index: usize, new_position: Coord2) -> bool {
        if !self.finished || index >= self.control_points.len() {
            return false;
        }

        self.control_points[index] = new_position;
        true
    }

    pub fn move_selected(&mut self, new_position: Coord2) -> bool {
        match self.selected {
            Some(index) => self.move_node(index, new_position),
            None => false,
        }
    }

    ///
    /// Inserts a point after the selected one
    ///
    pub fn insert_node(&mut self, new_position: Coord2) -> bool {
        match self.selected {
            Some(selected) if self.finished && selected < self.control_points.len() => {
                self.control_points.insert(selected + 1, new_position);
                self.selected = None;
                true
            }

            _ => false,
        }
    }

    ///
    /// Removes a point. The end points can't be removed
    ///
    pub fn delete_node(&mut self, index: usize) -> bool {
        let len = self.control_points.len();

        if !self.finished || len < 3 || index == 0 || index >= len - 1 {
            return false;
        }

        self.control_points.remove(index);
        self.selected = None;
        true
    }

    pub fn delete_selected(&mut self) -> bool {
        match self.selected {
            Some(index) => self.delete_node(index),
            None => false,
        }
    }
}
