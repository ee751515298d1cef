/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::pixel::*;

///
/// An in-memory RGB image that pixel paths can be painted into
///
/// Coordinates have their origin at the bottom-left, matching the rasterizers. Pixels outside of the frame
/// are clipped.
///
#[derive(Clone, PartialEq, Debug)]
pub struct PixelFrame {
    width: usize,
    height: usize,

    /// RGB8 data, stored a row at a time starting from the bottom row
    pixels: Vec<u8>,
}

impl PixelFrame {
    ///
    /// Creates a new frame filled with a background colour
    ///
    pub fn new(width: usize, height: usize, background: Rgb) -> PixelFrame {
        let mut frame = PixelFrame {
            width,
            height,
            pixels: vec![0; width * height * 3],
        };

        frame.clear(background);
        frame
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// The offset of a pixel in the data, or None if it's outside the frame
    ///
    #[inline]
    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) * 3)
        }
    }

    ///
    /// Fills the whole frame with a colour
    ///
    pub fn clear(&mut self, color: Rgb) {
        let rgb = color.to_u8();

        for pixel in self.pixels.chunks_exact_mut(3) {
            pixel.copy_from_slice(&rgb);
        }
    }

    ///
    /// Sets a single pixel, returning false if it's outside the frame
    ///
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        match self.offset(x, y) {
            Some(offset) => {
                self.pixels[offset..(offset + 3)].copy_from_slice(&color.to_u8());
                true
            }

            None => false,
        }
    }

    ///
    /// Reads the 8-bit colour of a pixel
    ///
    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 3]> {
        self.offset(x, y)
            .map(|offset| [self.pixels[offset], self.pixels[offset + 1], self.pixels[offset + 2]])
    }

    ///
    /// Paints every pixel in a path into this frame (later pixels replace earlier ones)
    ///
    pub fn draw_path(&mut self, path: &PixelPath) {
        for pixel in path.iter() {
            self.set_pixel(pixel.x, pixel.y, pixel.color);
        }
    }

    ///
    /// The RGB8 data for this frame with the top row first, as image formats expect
    ///
    pub fn to_top_down_rgb(&self) -> Vec<u8> {
        let row_length = self.width * 3;

        if row_length == 0 {
            return vec![];
        }

        self.pixels
            .chunks_exact(row_length)
            .rev()
            .flat_map(|row| row.iter().copied())
            .collect()
    }
}
