/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//
// Checks that a control point list still has C2 joins after an edit. Compiled out unless
// testing or the `extra_checks` feature is on, as the check walks the whole chain.
//

#[cfg(not(any(test, feature = "extra_checks")))]
macro_rules! check_c2_joins {
    ($points:expr) => {{}};
}

#[cfg(any(test, feature = "extra_checks"))]
macro_rules! check_c2_joins {
    ($points:expr) => {{
        let points: &[$crate::geo::Coord2] = &$points;
        assert!(
            $crate::spline::broken_joins(points).is_empty(),
            "C2 joins broken at anchors {:?}",
            $crate::spline::broken_joins(points)
        );
    }};
}
