/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// The stages a spline passes through while it is drawn and edited
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SplineState {
    /// No points have been placed
    Empty,

    /// One or two points have been placed: there is nothing to draw yet
    Collecting,

    /// Enough points have been placed to draw at least one segment (with the cursor as the next point)
    Active,

    /// The curve has been finished: its nodes can be selected, moved, inserted and deleted
    Editing,
}

impl SplineState {
    ///
    /// True if points can still be appended in this state
    ///
    #[inline]
    pub fn is_drawing(&self) -> bool {
        match self {
            SplineState::Empty | SplineState::Collecting | SplineState::Active => true,
            SplineState::Editing => false,
        }
    }
}
