/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::pixel::*;

///
/// The 8 points that are symmetric to `(x, y)` on a circle centred at the origin
///
#[inline]
fn octants(x: i32, y: i32) -> [(i32, i32); 8] {
    [
        (x, y),
        (-x, y),
        (x, -y),
        (-x, -y),
        (y, x),
        (-y, x),
        (y, -x),
        (-y, -x),
    ]
}

///
/// Rasterizes the outline of a circle using the midpoint algorithm
///
/// Points are generated for the octant from 90° to 45° and mirrored into the other 7, so points on the
/// boundaries between octants are emitted more than once. A radius of 0 produces a single pixel.
///
pub fn draw_circle(center_x: i32, center_y: i32, radius: i32, color: Rgb) -> PixelPath {
    if radius == 0 {
        let mut path = PixelPath::new();
        path.push(center_x, center_y, color);
        return path;
    }

    let mut path = PixelPath::with_capacity((radius.max(0) as usize) * 8);
    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;

    while x <= y {
        for (px, py) in octants(x, y).iter() {
            path.push(center_x + px, center_y + py, color);
        }

        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }

    path
}
