/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sketchpad_curves::bezier::*;
use sketchpad_raster::*;

use itertools::*;

///
/// Rasterizes a set of bezier curves by sampling them and joining the samples with lines
///
/// Each curve is divided so that no step is longer than `max_step` pixels, which keeps the result connected.
///
pub fn rasterize_curves(curves: impl IntoIterator<Item = Curve>, max_step: f64, color: Rgb) -> PixelPath {
    let mut path = PixelPath::new();

    for curve in curves {
        let subdivisions = subdivisions_for_curve(&curve, max_step);

        for ((x0, y0), (x1, y1)) in walk_curve(&curve, subdivisions)
            .map(|point| point.to_pixel())
            .tuple_windows()
        {
            path.append(draw_line(x0, y0, x1, y1, color));
        }
    }

    path
}

///
/// One pixel for each control point
///
pub fn control_point_pixels(points: &[Coord2], color: Rgb) -> PixelPath {
    points
        .iter()
        .map(|point| {
            let (x, y) = point.to_pixel();
            Pixel::new(x, y, color)
        })
        .collect()
}
