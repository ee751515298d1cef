/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::pixel::*;

use std::mem;

///
/// Rasterizes the line from `(x0, y0)` to `(x1, y1)` using Bresenham's algorithm
///
/// The result has `max(|dx|, |dy|) + 1` pixels and every pixel touches the one before it (8-connected). Steep
/// lines are generated by swapping the roles of x and y, and the end points are swapped if needed so that the
/// major coordinate always increases: the pixels are not always in the order `(x0, y0)` to `(x1, y1)`.
///
pub fn draw_line(x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) -> PixelPath {
    let (mut x0, mut y0, mut x1, mut y1) = (x0, y0, x1, y1);

    if x0 == x1 {
        // Vertical lines (and single points) are just a list of pixels
        let (min_y, max_y) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };

        return (min_y..=max_y).map(|y| Pixel::new(x0, y, color)).collect();
    }

    let steep = (y1 - y0).abs() > (x1 - x0).abs();
    if steep {
        mem::swap(&mut x0, &mut y0);
        mem::swap(&mut x1, &mut y1);
    }

    if x0 > x1 {
        mem::swap(&mut x0, &mut x1);
        mem::swap(&mut y0, &mut y1);
    }

    let dx = x1 - x0;
    let dy = y1 - y0;
    let y_step = if dy > 0 { 1 } else { -1 };
    let dy = dy.abs();

    let mut path = PixelPath::with_capacity((dx + 1) as usize);
    let mut d = 2 * dy - dx;
    let mut y = y0;

    for x in x0..=x1 {
        if steep {
            path.push(y, x, color);
        } else {
            path.push(x, y, color);
        }

        if d > 0 {
            y += y_step;
            d -= 2 * dx;
        }
        d += 2 * dy;
    }

    path
}
