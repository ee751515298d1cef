/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::draw::*;

use std::collections::BTreeSet;

///
/// True if the points `a`, `b`, `c` are in counter-clockwise order
///
#[inline]
fn ccw(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> bool {
    let (ax, ay) = (a.0 as i64, a.1 as i64);
    let (bx, by) = (b.0 as i64, b.1 as i64);
    let (cx, cy) = (c.0 as i64, c.1 as i64);

    (cy - ay) * (bx - ax) > (by - ay) * (cx - ax)
}

///
/// True if the line segments `p1-p2` and `p3-p4` cross
///
#[inline]
pub fn segments_intersect(p1: (i32, i32), p2: (i32, i32), p3: (i32, i32), p4: (i32, i32)) -> bool {
    ccw(p1, p3, p4) != ccw(p2, p3, p4) && ccw(p1, p2, p3) != ccw(p1, p2, p4)
}

///
/// Finds the pairs of edges that cross each other in a closed polygon
///
/// Edge `i` runs from point `i` to point `i + 1` (the last edge runs back to point 0). Adjacent edges share
/// a point so are never compared, and neither are the first and last edges. Each pair is reported once, as
/// `(i, j)` with `i < j`.
///
pub fn detect_self_intersections(polygon: &[(i32, i32)]) -> BTreeSet<(usize, usize)> {
    let edges = polyline_edges(polygon, true);
    let num_edges = edges.len();
    let mut crossings = BTreeSet::new();

    for i in 0..num_edges {
        for j in (i + 2)..num_edges {
            if i == 0 && j == num_edges - 1 {
                continue;
            }

            let ((p1, p2), (p3, p4)) = (edges[i], edges[j]);
            if segments_intersect(p1, p2, p3, p4) {
                crossings.insert((i, j));
            }
        }
    }

    crossings
}
