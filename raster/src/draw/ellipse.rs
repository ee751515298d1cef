/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::line::*;
use crate::pixel::*;

///
/// The 4 points that are symmetric to `(x, y)` on an axis-aligned ellipse centred at the origin
///
#[inline]
fn quadrants(x: i64, y: i64) -> [(i64, i64); 4] {
    [(x, y), (-x, y), (x, -y), (-x, -y)]
}

///
/// Rasterizes the outline of an axis-aligned ellipse with semi-axes `a` (along x) and `b` (along y) using the
/// two-region midpoint algorithm
///
/// The first region runs from the top of the ellipse while the slope is shallower than -1, stepping in x. The
/// second region steps down in y until the ellipse reaches the x axis. Both decision variables are scaled by 4
/// so they stay integers. Points are mirrored into all four quadrants, so points on the axes are emitted more
/// than once.
///
/// An ellipse with a semi-axis of 0 is drawn as a straight line (or a single pixel if both are 0).
///
pub fn draw_ellipse(center_x: i32, center_y: i32, a: i32, b: i32, color: Rgb) -> PixelPath {
    let (a, b) = (a.abs(), b.abs());

    if a == 0 || b == 0 {
        return draw_line(center_x - a, center_y - b, center_x + a, center_y + b, color);
    }

    let (cx, cy) = (center_x as i64, center_y as i64);
    let (a, b) = (a as i64, b as i64);
    let (a2, b2) = (a * a, b * b);

    let mut path = PixelPath::new();
    let mut emit = |x: i64, y: i64| {
        for (px, py) in quadrants(x, y).iter() {
            path.push((cx + px) as i32, (cy + py) as i32, color);
        }
    };

    let mut x = 0i64;
    let mut y = b;
    let mut dx = 2 * b2 * x;
    let mut dy = 2 * a2 * y;

    // Region 1: the slope is shallow, so x always steps
    let mut d1 = 4 * b2 - 4 * a2 * b + a2;
    while dx < dy {
        emit(x, y);

        x += 1;
        dx += 2 * b2;

        if d1 < 0 {
            d1 += 4 * (dx + b2);
        } else {
            y -= 1;
            dy -= 2 * a2;
            d1 += 4 * (dx - dy + b2);
        }
    }

    // Region 2: the slope is steep, so y always steps
    let mut d2 = b2 * (2 * x + 1) * (2 * x + 1) + 4 * a2 * (y - 1) * (y - 1) - 4 * a2 * b2;
    while y >= 0 {
        emit(x, y);

        y -= 1;
        dy -= 2 * a2;

        if d2 > 0 {
            d2 += 4 * (a2 - dy);
        } else {
            x += 1;
            dx += 2 * b2;
            d2 += 4 * (dx - dy + a2);
        }
    }

    path
}
