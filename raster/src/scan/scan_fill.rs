/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::draw::*;
use crate::pixel::*;

use smallvec::*;

///
/// A non-horizontal polygon edge, oriented so that `low` has the smaller y coordinate
///
#[derive(Clone, Copy, PartialEq, Debug)]
struct ScanEdge {
    low: (i32, i32),
    high: (i32, i32),
}

impl ScanEdge {
    ///
    /// Creates an edge between two points, or returns None if the edge is horizontal
    ///
    fn new(from: (i32, i32), to: (i32, i32)) -> Option<ScanEdge> {
        if from.1 == to.1 {
            None
        } else if from.1 < to.1 {
            Some(ScanEdge { low: from, high: to })
        } else {
            Some(ScanEdge { low: to, high: from })
        }
    }

    ///
    /// The x coordinate where this edge crosses the scanline `y`
    ///
    #[inline]
    fn x_at(&self, y: i32) -> f64 {
        let (x0, y0) = (self.low.0 as f64, self.low.1 as f64);
        let (x1, y1) = (self.high.0 as f64, self.high.1 as f64);

        x0 + ((y as f64) - y0) * (x1 - x0) / (y1 - y0)
    }
}

///
/// Fills the interior of a simple polygon using an active edge table
///
/// The polygon is always treated as closed (the last point joins back to the first). Each edge covers the
/// scanlines from its lower end up to but not including its upper end, and each span covers the pixels from
/// `ceil(x_left)` to `floor(x_right)` inclusive, with spans taken between alternate pairs of crossings.
///
/// The result is only meaningful for polygons with no self-intersections: check with
/// `detect_self_intersections()` first.
///
pub fn scan_fill(polygon: &[(i32, i32)], color: Rgb) -> PixelPath {
    let mut path = PixelPath::new();

    let mut edges = polyline_edges(polygon, true)
        .into_iter()
        .filter_map(|(from, to)| ScanEdge::new(from, to))
        .collect::<Vec<_>>();

    if edges.is_empty() {
        return path;
    }

    edges.sort_by_key(|edge| edge.low.1);

    let min_y = edges[0].low.1;
    let max_y = edges.iter().map(|edge| edge.high.1).max().unwrap_or(min_y);

    let mut active: Vec<ScanEdge> = vec![];
    let mut next_edge = 0;

    for y in min_y..=max_y {
        while next_edge < edges.len() && edges[next_edge].low.1 == y {
            active.push(edges[next_edge]);
            next_edge += 1;
        }

        active.retain(|edge| edge.high.1 > y);

        let mut crossings = active.iter().map(|edge| edge.x_at(y)).collect::<SmallVec<[f64; 8]>>();
        crossings.sort_by(|a, b| a.total_cmp(b));

        for span in crossings.chunks_exact(2) {
            let (start, end) = (span[0].ceil() as i32, span[1].floor() as i32);

            for x in start..=end {
                path.push(x, y, color);
            }
        }
    }

    path
}
