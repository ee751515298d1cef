/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[cfg(feature = "render_png")]
mod png_output {
    use super::super::pixel_frame::*;

    use std::fs;
    use std::io::{BufWriter, Write};
    use std::path::Path;

    impl PixelFrame {
        ///
        /// Writes this frame as a PNG image
        ///
        pub fn write_png(&self, target: impl Write) -> Result<(), png::EncodingError> {
            let mut encoder = png::Encoder::new(target, self.width() as u32, self.height() as u32);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.to_top_down_rgb())?;
            writer.finish()?;

            Ok(())
        }

        ///
        /// Saves this frame to a PNG file
        ///
        pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), png::EncodingError> {
            let file = fs::File::create(path)?;
            let mut writer = BufWriter::new(file);

            self.write_png(&mut writer)?;
            writer.flush()?;

            Ok(())
        }
    }
}
