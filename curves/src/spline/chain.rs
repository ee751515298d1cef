/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::continuity::*;
use crate::geo::*;
use crate::line::*;

///
/// Builds a complete chain of control points passing through a list of anchors
///
/// The handles of the first segment are placed a third of the way along the line between the first two
/// anchors. Every later handle is derived from the ones before it so all the joins are C2. The result has
/// `3·anchors - 2` points. Fewer than 2 anchors are returned as they are.
///
pub fn c2_chain_through_points(anchors: &[Coord2]) -> Vec<Coord2> {
    if anchors.len() < 2 {
        return anchors.to_vec();
    }

    let mut points = Vec::with_capacity(anchors.len() * 3 - 2);
    let (handle1, handle2) = line_handles(&(anchors[0], anchors[1]));

    points.extend([anchors[0], handle1, handle2, anchors[1]].iter());

    for anchor in anchors.iter().skip(2) {
        points.extend([*anchor, *anchor, *anchor].iter());
    }

    propagate_forward(&mut points, 4);

    check_c2_joins!(points);

    points
}
