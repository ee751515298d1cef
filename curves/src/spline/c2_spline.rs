/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::continuity::*;
use super::segments::*;
use super::settings::*;
use super::state::*;
use crate::bezier::*;

use log::{debug, warn};
use smallvec::*;

///
/// A chain of cubic bezier segments with C2 joins, built up from points placed by the user
///
/// The chain is stored as a single list of control points. The first three points placed are used as they
/// are (they are the start and handles of the first segment). Every point placed after that becomes an anchor
/// and is followed by two handles derived from the points before it, so the list grows by three each time.
/// The final point is the end anchor, leaving `3·anchors - 2` control points. Anchors are at indices 0, 3, 6...
///
/// Once finished, nodes can be selected, moved, inserted and deleted. Every edit re-derives the handles around
/// it so that the first and second derivatives stay continuous at every join.
///
#[derive(Clone, Debug)]
pub struct C2Spline {
    /// The control points for this spline
    control_points: Vec<Coord2>,

    /// Set once the final point has been placed
    finished: bool,

    /// The index of the selected control point, if there is one
    selected: Option<usize>,

    settings: SplineSettings,
}

impl Default for C2Spline {
    fn default() -> Self {
        C2Spline::new()
    }
}

impl C2Spline {
    ///
    /// Creates a new, empty spline
    ///
    pub fn new() -> C2Spline {
        C2Spline::with_settings(SplineSettings::default())
    }

    ///
    /// Creates an empty spline with custom settings
    ///
    pub fn with_settings(settings: SplineSettings) -> C2Spline {
        C2Spline {
            control_points: vec![],
            finished: false,
            selected: None,
            settings,
        }
    }

    ///
    /// Creates a finished spline from a complete list of control points (eg, one loaded from a file)
    ///
    /// The list must contain `3k + 1` points for some `k ≥ 1`. If any join is not C2, the handles after the
    /// first segment are re-derived to repair it and a warning naming the broken joins is logged. Callers that
    /// need to reject such lists instead can check them with `broken_joins()` first.
    ///
    pub fn from_control_points(control_points: Vec<Coord2>, settings: SplineSettings) -> Option<C2Spline> {
        if !is_complete_chain_length(control_points.len()) {
            return None;
        }

        let mut control_points = control_points;
        let broken = broken_joins(&control_points);

        if !broken.is_empty() {
            warn!("Re-deriving handles of C2 spline: joins at anchors {:?} were not C2", broken);
            propagate_forward(&mut control_points, 4);
        }

        Some(C2Spline {
            control_points,
            finished: true,
            selected: None,
            settings,
        })
    }

    ///
    /// The settings for this spline
    ///
    #[inline]
    pub fn settings(&self) -> &SplineSettings {
        &self.settings
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

    ///
    /// The control points for this spline
    ///
    #[inline]
    pub fn control_points(&self) -> &[Coord2] {
        &self.control_points
    }

    ///
    /// The anchors (the points the curve passes through) of a finished spline
    ///
    pub fn anchors(&self) -> impl '_ + Iterator<Item = Coord2> {
        self.control_points.iter().copied().step_by(3)
    }

    ///
    /// The number of complete bezier segments in this spline
    ///
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.control_points.len().saturating_sub(1) / 3
    }

    ///
    /// The complete bezier segments in this spline
    ///
    pub fn segments(&self) -> impl '_ + Iterator<Item = Curve> {
        chain_to_curves(&self.control_points)
    }

    ///
    /// The control points as a flat list of `x, y` values for uploading to the renderer
    ///
    pub fn control_buffer(&self) -> Vec<f32> {
        points_to_buffer(&self.control_points)
    }

    ///
    /// Removes every point from this spline and returns it to the empty state
    ///
    pub fn clear(&mut self) {
        self.control_points.clear();
        self.finished = false;
        self.selected = None;
    }

    ///
    /// Places a point while drawing the spline, returning the updated control points
    ///
    /// The first three points and the last point (`is_last`) are added as they are. Other points become
    /// anchors followed by two handles derived using the C1 and C2 relations. Placing the last point finishes
    /// the spline, unless fewer than 3 points have been placed before it: a chain that short has no complete
    /// segment, so the point is placed as an ordinary point and the spline stays unfinished. Has no effect once
    /// the spline is finished.
    ///
    pub fn append_point(&mut self, point: Coord2, is_last: bool) -> &[Coord2] {
        if self.finished {
            return &self.control_points;
        }

        let is_last = if is_last && self.control_points.len() < 3 {
            debug!(
                "Not finishing C2 spline with {} control points",
                self.control_points.len() + 1
            );
            false
        } else {
            is_last
        };

        if self.control_points.len() < 3 || is_last {
            self.control_points.push(point);
        } else {
            // The list always ends in an anchor's trailing handles here, so the new point lands on an anchor index
            let anchor_index = self.control_points.len();
            self.control_points.push(point);
            self.control_points.push(point);
            self.control_points.push(point);
            propagate_forward(&mut self.control_points, anchor_index + 1);
        }

        if is_last {
            debug!(
                "Finished C2 spline with {} control points",
                self.control_points.len()
            );
            self.finished = true;
        }

        check_c2_joins!(self.control_points);

        &self.control_points
    }

    ///
    /// Places the final point of the spline (equivalent to `append_point(point, true)`)
    ///
    #[inline]
    pub fn finish(&mut self, point: Coord2) -> &[Coord2] {
        self.append_point(point, true)
    }

    ///
    /// The control points this spline would have if the cursor position was placed as the final point
    ///
    pub fn preview_points(&self, cursor: Coord2) -> Vec<Coord2> {
        let mut points = self.control_points.clone();
        if !self.finished {
            points.push(cursor);
        }

        points
    }

    ///
    /// The segments that would be completed if the cursor position was placed as the final point
    ///
    /// This leaves the spline unchanged: it's used to rubber-band the curve while it is being drawn.
    ///
    pub fn preview_segments(&self, cursor: Coord2) -> SmallVec<[Curve; 1]> {
        let len = self.control_points.len();

        if self.finished || len < 3 || len % 3 != 0 {
            return smallvec![];
        }

        let (start, cp1, cp2) = (
            self.control_points[len - 3],
            self.control_points[len - 2],
            self.control_points[len - 1],
        );

        smallvec![Curve::from_points(start, (cp1, cp2), cursor)]
    }

    ///
    /// The index of the selected control point
    ///
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    ///
    /// Clears the selection
    ///
    #[inline]
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    ///
    /// Selects the control point nearest to the cursor, if one is within the selection radius
    ///
    /// When two points are equally close, the one with the lower index wins. Returns false (and clears the
    /// selection) if no point is close enough or the spline is not finished.
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
    /// Moves a control point, re-deriving the handles that depend on it
    ///
    /// End points move on their own. Moving an anchor re-derives every handle after it. Moving a handle
    /// re-derives the handles after its segment and the handles before its segment. Returns false if the index
    /// is out of range or the spline is not finished.
    ///
    pub fn move_node(&mut self, index: usize, new_position: Coord2) -> bool {
        if !self.finished || index >= self.control_points.len() {
            return false;
        }

        let last_index = self.control_points.len() - 1;
        self.control_points[index] = new_position;

        if index != 0 && index != last_index {
            match NodeKind::at_index(index) {
                NodeKind::Anchor => {
                    propagate_forward(&mut self.control_points, index + 1);
                }

                NodeKind::OutgoingHandle | NodeKind::IncomingHandle => {
                    let segment_start = (index / 3) * 3;

                    propagate_forward(&mut self.control_points, segment_start + 4);
                    if segment_start > 0 {
                        propagate_backward(&mut self.control_points, segment_start - 1);
                    }
                }
            }
        }

        check_c2_joins!(self.control_points);

        true
    }

    ///
    /// Moves the selected control point
    ///
    pub fn move_selected(&mut self, new_position: Coord2) -> bool {
        match self.selected {
            Some(index) => self.move_node(index, new_position),
            None => false,
        }
    }

    ///
    /// Inserts a new anchor after the selected node, returning true if it was added
    ///
    /// If the selection is the end point, the new point becomes the new end of the curve. Otherwise the new
    /// point splits the segment containing the selection. The selection is cleared afterwards.
    ///
    pub fn insert_node(&mut self, new_position: Coord2) -> bool {
        let selected = match self.selected {
            Some(selected) => selected,
            None => return false,
        };

        if !self.finished || !is_complete_chain_length(self.control_points.len()) {
            return false;
        }

        let last_index = self.control_points.len() - 1;
        if selected > last_index {
            return false;
        }

        if selected == last_index {
            // The old end point becomes a join: its handles are fully determined by the C2 relations
            self.control_points.extend([new_position, new_position, new_position].iter());
            propagate_forward(&mut self.control_points, last_index + 1);
        } else {
            // The new anchor's incoming segment keeps the split segment's handles
            let new_index = (selected / 3) * 3 + 3;

            self.control_points.splice(
                new_index..new_index,
                vec![new_position, new_position, new_position],
            );

            propagate_forward(&mut self.control_points, new_index + 1);
        }

        self.selected = None;
        check_c2_joins!(self.control_points);

        true
    }

    ///
    /// Deletes a node from the spline, returning true if anything was removed
    ///
    /// The end points can't be deleted. Deleting an anchor removes it along with its two outgoing handles,
    /// merging its two segments. Deleting a handle deletes the anchor it belongs to (or the other anchor of its
    /// segment if that one is an end point). Deleting from a spline with a single segment clears it entirely.
    ///
    pub fn delete_node(&mut self, index: usize) -> bool {
        let len = self.control_points.len();

        if !self.finished || len < 4 || index == 0 || index >= len - 1 {
            return false;
        }

        self.selected = None;

        if len <= 4 {
            debug!("Deleting from a single-segment spline: clearing it");
            self.clear();
            return true;
        }

        let last_index = len - 1;
        let anchor_index = match NodeKind::at_index(index) {
            NodeKind::Anchor => index,
            NodeKind::OutgoingHandle => {
                if index - 1 > 0 {
                    index - 1
                } else {
                    index + 2
                }
            }
            NodeKind::IncomingHandle => {
                if index + 1 < last_index {
                    index + 1
                } else {
                    index - 2
                }
            }
        };

        self.control_points.drain(anchor_index..(anchor_index + 3));
        propagate_forward(&mut self.control_points, anchor_index + 1);

        check_c2_joins!(self.control_points);

        true
    }

    ///
    /// Deletes the selected node
    ///
    pub fn delete_selected(&mut self) -> bool {
        match self.selected {
            Some(index) => self.delete_node(index),
            None => false,
        }
    }
}
