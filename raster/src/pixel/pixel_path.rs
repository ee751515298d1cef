/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::pixel::*;
use super::rgb::*;

use std::iter::FromIterator;
use std::slice;
use std::vec;

/// Number of values written to a render buffer for each pixel (x, y, r, g, b)
pub const PIXEL_BUFFER_STRIDE: usize = 5;

///
/// The pixels generated by rasterizing a shape, in the order they were generated
///
/// Pixels may be repeated: the symmetric algorithms emit the points where octants or quadrants meet more than
/// once.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct PixelPath {
    pixels: Vec<Pixel>,
}

impl PixelPath {
    ///
    /// Creates an empty pixel path
    ///
    pub fn new() -> PixelPath {
        PixelPath { pixels: vec![] }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> PixelPath {
        PixelPath {
            pixels: Vec::with_capacity(capacity),
        }
    }

    ///
    /// Adds a pixel to the end of this path
    ///
    #[inline]
    pub fn push(&mut self, x: i32, y: i32, color: Rgb) {
        self.pixels.push(Pixel::new(x, y, color));
    }

    ///
    /// Adds all of the pixels from another path to the end of this one
    ///
    pub fn append(&mut self, other: PixelPath) {
        self.pixels.extend(other.pixels);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Pixel> {
        self.pixels.iter()
    }

    ///
    /// The positions of the pixels in this path
    ///
    pub fn positions(&self) -> impl '_ + Iterator<Item = (i32, i32)> {
        self.pixels.iter().map(|pixel| pixel.pos())
    }

    ///
    /// True if this path has a pixel at the specified position
    ///
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.pixels.iter().any(|pixel| pixel.x == x && pixel.y == y)
    }

    ///
    /// Changes the colour of every pixel in this path
    ///
    pub fn set_color(&mut self, color: Rgb) {
        self.pixels.iter_mut().for_each(|pixel| pixel.color = color);
    }

    ///
    /// Flattens this path into the buffer format used by the renderer: 5 values per pixel (x, y, r, g, b)
    ///
    pub fn to_buffer(&self) -> Vec<f32> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * PIXEL_BUFFER_STRIDE);

        for pixel in self.pixels.iter() {
            let Rgb(r, g, b) = pixel.color;
            buffer.extend_from_slice(&[pixel.x as f32, pixel.y as f32, r, g, b]);
        }

        buffer
    }
}

impl FromIterator<Pixel> for PixelPath {
    fn from_iter<T: IntoIterator<Item = Pixel>>(iter: T) -> Self {
        PixelPath {
            pixels: iter.into_iter().collect(),
        }
    }
}

impl Extend<Pixel> for PixelPath {
    fn extend<T: IntoIterator<Item = Pixel>>(&mut self, iter: T) {
        self.pixels.extend(iter)
    }
}

impl IntoIterator for PixelPath {
    type Item = Pixel;
    type IntoIter = vec::IntoIter<Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.into_iter()
    }
}

impl<'a> IntoIterator for &'a PixelPath {
    type Item = &'a Pixel;
    type IntoIter = slice::Iter<'a, Pixel>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixels.iter()
    }
}

impl From<Vec<Pixel>> for PixelPath {
    fn from(pixels: Vec<Pixel>) -> PixelPath {
        PixelPath { pixels }
    }
}
