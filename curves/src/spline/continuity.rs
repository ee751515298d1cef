/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::geo::*;

///
/// The role a control point plays in a chain of cubic bezier segments
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum NodeKind {
    /// A point the curve passes through (indices 0, 3, 6, ...)
    Anchor,

    /// The handle leaving the anchor before it (indices 1, 4, 7, ...)
    OutgoingHandle,

    /// The handle arriving at the anchor after it (indices 2, 5, 8, ...)
    IncomingHandle,
}

impl NodeKind {
    ///
    /// The kind of node found at a particular index in a control point list
    ///
    #[inline]
    pub fn at_index(index: usize) -> NodeKind {
        match index % 3 {
            0 => NodeKind::Anchor,
            1 => NodeKind::OutgoingHandle,
            _ => NodeKind::IncomingHandle,
        }
    }
}

///
/// The outgoing handle that gives a C1 join at `anchor`, given the incoming handle
///
#[inline]
pub fn c1_handle(anchor: Coord2, incoming: Coord2) -> Coord2 {
    anchor * 2.0 - incoming
}

///
/// The handle two places after an anchor that gives a C2 join, given the two handles either side of the
/// anchor and the handle before those (`P[i] = P[i-4] + 2·(P[i-1] - P[i-3])`)
///
#[inline]
pub fn c2_handle(far_handle: Coord2, incoming: Coord2, outgoing: Coord2) -> Coord2 {
    far_handle + (outgoing - incoming) * 2.0
}

///
/// Re-derives every handle from `start` to the end of the list so that each join satisfies the C1 and C2
/// relations with the points before it
///
/// Anchors are never moved. The handles of the first segment (indices 1 and 2) have nothing before them to
/// be derived from, so they are left alone.
///
pub fn propagate_forward(points: &mut [Coord2], start: usize) {
    for index in start.max(4)..points.len() {
        match NodeKind::at_index(index) {
            NodeKind::Anchor => {}
            NodeKind::OutgoingHandle => {
                points[index] = c1_handle(points[index - 1], points[index - 2]);
            }
            NodeKind::IncomingHandle => {
                points[index] = c2_handle(points[index - 4], points[index - 3], points[index - 1]);
            }
        }
    }
}

///
/// Re-derives every handle from `start` back to the start of the list so that each join satisfies the C1 and
/// C2 relations with the points after it
///
/// This is the mirror image of `propagate_forward()`: `P[i] = 2·P[i+1] - P[i+2]` for incoming handles and
/// `P[i] = P[i+4] + 2·(P[i+1] - P[i+3])` for outgoing handles. Stops at the bounds of the list.
///
pub fn propagate_backward(points: &mut [Coord2], start: usize) {
    let len = points.len();
    if len < 5 {
        return;
    }

    let start = start.min(len - 3);

    for index in (1..=start).rev() {
        match NodeKind::at_index(index) {
            NodeKind::Anchor => {}
            NodeKind::IncomingHandle => {
                points[index] = c1_handle(points[index + 1], points[index + 2]);
            }
            NodeKind::OutgoingHandle => {
                if index + 4 < len {
                    points[index] = c2_handle(points[index + 4], points[index + 3], points[index + 1]);
                }
            }
        }
    }
}

///
/// Returns the indices of the anchors where the C1 or C2 relations do not hold
///
/// Only joins with a complete set of handles on both sides are checked, so a chain that is still being drawn
/// (which ends in an anchor and two trailing handles) can be checked too.
///
pub fn broken_joins(points: &[Coord2]) -> Vec<usize> {
    let mut broken = vec![];
    let mut anchor = 3;

    while anchor + 2 < points.len() {
        let window = &points[(anchor - 2)..=(anchor + 2)];
        let scale = window
            .iter()
            .fold(1.0f64, |scale, point| scale.max(point.0.abs()).max(point.1.abs()));
        let tolerance = CONTINUITY_TOLERANCE * scale;

        // First derivative: the handles either side of the anchor are reflections of each other
        let c1_error = points[anchor - 1] + points[anchor + 1] - points[anchor] * 2.0;

        // Second derivative: both segments bend by the same amount at the anchor
        let incoming_bend = points[anchor] - points[anchor - 1] * 2.0 + points[anchor - 2];
        let outgoing_bend = points[anchor + 2] - points[anchor + 1] * 2.0 + points[anchor];
        let c2_error = incoming_bend - outgoing_bend;

        if !c1_error.is_near_to(&Coord2::origin(), tolerance)
            || !c2_error.is_near_to(&Coord2::origin(), tolerance)
        {
            broken.push(anchor);
        }

        anchor += 3;
    }

    broken
}

///
/// True if a number of control points describes a complete chain of cubic segments (`3k + 1` for `k ≥ 1`)
///
#[inline]
pub fn is_complete_chain_length(count: usize) -> bool {
    count >= 4 && (count - 1) % 3 == 0
}
