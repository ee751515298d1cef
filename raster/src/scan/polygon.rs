/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::scan_fill::*;
use super::self_intersection::*;
use crate::draw::*;
use crate::pixel::*;

use log::debug;

///
/// Rasterizes a closed polygon
///
/// A simple polygon is filled with `fill` and then outlined with `outline`. A polygon whose edges cross can't
/// be filled, so its edges are drawn one at a time instead: edges involved in a crossing are drawn with
/// `highlight` and the rest with `outline`.
///
pub fn render_polygon(polygon: &[(i32, i32)], fill: Rgb, outline: Rgb, highlight: Rgb) -> PixelPath {
    let crossings = detect_self_intersections(polygon);

    if crossings.is_empty() {
        let mut path = scan_fill(polygon, fill);
        path.append(draw_polyline(polygon, true, outline));

        path
    } else {
        debug!("Polygon has {} self-intersections: not filling", crossings.len());

        let mut path = PixelPath::new();

        for (index, ((x0, y0), (x1, y1))) in polyline_edges(polygon, true).into_iter().enumerate() {
            let crosses = crossings.iter().any(|(i, j)| *i == index || *j == index);
            let color = if crosses { highlight } else { outline };

            path.append(draw_line(x0, y0, x1, y1, color));
        }

        path
    }
}
