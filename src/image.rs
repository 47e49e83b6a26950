use crate::error::IcoError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

//===========================================================================//

/// A decoded image: a width, a height, and straight (non-premultiplied)
/// RGBA pixels in row-major order from top to bottom, with no row padding.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct IconImage {
    width: u32,
    height: u32,
    rgba_data: Vec<u8>,
}

impl IconImage {
    /// Creates a new image with the given dimensions and RGBA data.
    /// `rgba_data` must have `4 * width * height` bytes and be in row-major
    /// order from top to bottom.  Panics if `rgba_data` is the wrong length.
    pub fn from_rgba_data(
        width: u32,
        height: u32,
        rgba_data: Vec<u8>,
    ) -> IconImage {
        let expected_data_len = 4 * (width as u64) * (height as u64);
        if (rgba_data.len() as u64) != expected_data_len {
            panic!(
                "Invalid data length (was {}, but must be {} for {}x{} image)",
                rgba_data.len(),
                expected_data_len,
                width,
                height
            );
        }
        IconImage { width, height, rgba_data }
    }

    /// Returns the width of the image, in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image, in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the RGBA data for this image, in row-major order from top to
    /// bottom.
    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }

    /// Consumes the image and returns its RGBA data.
    pub fn into_rgba_data(self) -> Vec<u8> {
        self.rgba_data
    }

    /// Decodes an image from a PNG stream.  Returns an error if the PNG
    /// data is malformed or can't be decoded.
    pub fn read_png<R: Read>(reader: R) -> Result<IconImage, IcoError> {
        let decoder = png::Decoder::new(reader);
        let mut png_reader = match decoder.read_info() {
            Ok(png_reader) => png_reader,
            Err(error) => format_err!("Malformed PNG data: {}", error),
        };
        if png_reader.info().bit_depth != png::BitDepth::Eight {
            format_err!(
                "Unsupported PNG bit depth: {:?}",
                png_reader.info().bit_depth
            );
        }
        let mut buffer = vec![0u8; png_reader.output_buffer_size()];
        match png_reader.next_frame(&mut buffer) {
            Ok(_) => {}
            Err(error) => format_err!("Malformed PNG data: {}", error),
        }
        let rgba_data = match png_reader.info().color_type {
            png::ColorType::Rgba => buffer,
            png::ColorType::Rgb => {
                let num_pixels = buffer.len() / 3;
                let mut rgba = Vec::with_capacity(num_pixels * 4);
                for i in 0..num_pixels {
                    rgba.extend_from_slice(&buffer[(3 * i)..][..3]);
                    rgba.push(u8::MAX);
                }
                rgba
            }
            png::ColorType::GrayscaleAlpha => {
                let num_pixels = buffer.len() / 2;
                let mut rgba = Vec::with_capacity(num_pixels * 4);
                for i in 0..num_pixels {
                    let gray = buffer[2 * i];
                    let alpha = buffer[2 * i + 1];
                    rgba.push(gray);
                    rgba.push(gray);
                    rgba.push(gray);
                    rgba.push(alpha);
                }
                rgba
            }
            png::ColorType::Grayscale => {
                let mut rgba = Vec::with_capacity(buffer.len() * 4);
                for value in buffer.into_iter() {
                    rgba.push(value);
                    rgba.push(value);
                    rgba.push(value);
                    rgba.push(u8::MAX);
                }
                rgba
            }
            png::ColorType::Indexed => {
                format_err!(
                    "Unsupported PNG color type: {:?}",
                    png_reader.info().color_type
                );
            }
        };
        Ok(IconImage::from_rgba_data(
            png_reader.info().width,
            png_reader.info().height,
            rgba_data,
        ))
    }

    /// Encodes the image as a PNG stream.
    pub fn write_png<W: Write>(&self, writer: W) -> Result<(), IcoError> {
        match self.write_png_internal(writer) {
            Ok(()) => Ok(()),
            Err(png::EncodingError::IoError(error)) => {
                Err(IcoError::Io(error))
            }
            Err(error) => format_err!("PNG encoding error: {}", error),
        }
    }

    fn write_png_internal<W: Write>(
        &self,
        writer: W,
    ) -> Result<(), png::EncodingError> {
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_depth(png::BitDepth::Eight);
        // Images with no transparency are written as RGB; decoding restores
        // an alpha of 255 for every pixel, so round-trips stay exact.
        if self.has_transparency() {
            encoder.set_color(png::ColorType::Rgba);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.rgba_data)?;
        } else {
            encoder.set_color(png::ColorType::Rgb);
            let mut rgb_data =
                Vec::<u8>::with_capacity((self.rgba_data.len() / 4) * 3);
            for pixel in self.rgba_data.chunks_exact(4) {
                rgb_data.extend_from_slice(&pixel[..3]);
            }
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&rgb_data)?;
        }
        Ok(())
    }

    /// Encodes the image as an in-memory PNG stream.
    pub(crate) fn png_data(&self) -> Result<Vec<u8>, IcoError> {
        let mut data = Vec::<u8>::new();
        self.write_png(&mut data)?;
        Ok(data)
    }

    fn has_transparency(&self) -> bool {
        self.rgba_data.chunks_exact(4).any(|pixel| pixel[3] != u8::MAX)
    }
}

//===========================================================================//
