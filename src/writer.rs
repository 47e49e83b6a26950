use crate::bmp;
use crate::error::IcoError;
use crate::icon::Icon;
use crate::icondir::{self, DirEntry};
use crate::image::IconImage;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::io::Write;

//===========================================================================//

// The largest dimension a directory entry can record.
const MAX_DIMENSION: u32 = 256;

//===========================================================================//

/// Options controlling how [`Icon::write`] encodes each image.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct WriteOptions {
    /// Write an image as PNG whenever the PNG stream is strictly smaller
    /// than the bitmap form.  Off by default.
    pub prefer_png: bool,
    /// Write 256x256 images as PNG.  On by default.  The option is accepted
    /// for compatibility, but the writer always uses PNG for such images: a
    /// bitmap entry cannot record a 256-pixel dimension in the directory's
    /// single-byte size fields.
    pub large_png: bool,
}

impl WriteOptions {
    /// Returns the default options: bitmap encoding except for 256x256
    /// images, which are written as PNG.
    pub fn new() -> WriteOptions {
        WriteOptions { prefer_png: false, large_png: true }
    }
}

impl Default for WriteOptions {
    fn default() -> WriteOptions {
        WriteOptions::new()
    }
}

//===========================================================================//

// The encoded payload for one directory entry.
enum ImageData {
    Png(Vec<u8>),
    Bmp(Vec<u8>),
}

impl ImageData {
    fn bytes(&self) -> &[u8] {
        match self {
            ImageData::Png(data) => data,
            ImageData::Bmp(data) => data,
        }
    }

    fn len(&self) -> usize {
        self.bytes().len()
    }
}

//===========================================================================//

impl Icon {
    /// Writes the icon as an ICO file.
    ///
    /// Fails with [`IcoError::Empty`] if the icon contains no images, and
    /// with [`IcoError::ImageTooLarge`] if any image exceeds 256 pixels in
    /// either dimension; in both cases nothing is written.  The icon itself
    /// is never modified.
    pub fn write<W: Write>(
        &self,
        mut writer: W,
        options: WriteOptions,
    ) -> Result<(), IcoError> {
        if self.is_empty() {
            return Err(IcoError::Empty);
        }
        if self.len() > u16::MAX as usize {
            format_err!(
                "Too many images in icon (was {}, but max is {})",
                self.len(),
                u16::MAX
            );
        }
        for image in self.images() {
            if image.width() > MAX_DIMENSION || image.height() > MAX_DIMENSION
            {
                return Err(IcoError::ImageTooLarge {
                    width: image.width(),
                    height: image.height(),
                });
            }
        }

        // Encode every payload before emitting anything; each directory
        // entry's offset is the total length of the payloads before it.
        let mut payloads = Vec::<ImageData>::with_capacity(self.len());
        for (index, image) in self.images().iter().enumerate() {
            let payload = encode_image(image, options)
                .map_err(|err| err.in_image(index))?;
            payloads.push(payload);
        }

        icondir::write_header(&mut writer, self.len() as u16)?;
        let mut data_offset = icondir::header_region_len(self.len()) as u32;
        for (image, payload) in self.images().iter().zip(payloads.iter()) {
            let entry = DirEntry {
                width: image.width(),
                height: image.height(),
                data_size: payload.len() as u32,
                data_offset,
            };
            entry.write(&mut writer)?;
            data_offset += payload.len() as u32;
        }
        for payload in payloads.iter() {
            writer.write_all(payload.bytes())?;
        }
        Ok(())
    }
}

fn encode_image(
    image: &IconImage,
    options: WriteOptions,
) -> Result<ImageData, IcoError> {
    // The directory's size byte stores 256 as 0, so a 256x256 bitmap entry
    // would be indistinguishable from a zero-size one; such images are
    // written as PNG even when `large_png` is off.
    if image.width() >= MAX_DIMENSION && image.height() >= MAX_DIMENSION {
        return Ok(ImageData::Png(image.png_data()?));
    }
    let bmp = bmp::encode_bmp(image)?;
    if options.prefer_png {
        let png = image.png_data()?;
        if png.len() < bmp.len() {
            return Ok(ImageData::Png(png));
        }
    }
    Ok(ImageData::Bmp(bmp))
}

//===========================================================================//
