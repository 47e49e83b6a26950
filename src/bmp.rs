use crate::error::IcoError;
use crate::image::IconImage;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

//===========================================================================//

// The size of a BITMAPINFOHEADER struct, in bytes.
pub(crate) const BMP_HEADER_LEN: usize = 40;

//===========================================================================//

/// Decodes an embedded 32-bpp bitmap (BITMAPINFOHEADER followed by a BGRA
/// pixel array) into an RGBA image.  The trailing 1-bit alpha mask, if
/// present, is ignored; alpha comes from the 32-bit channel.
pub(crate) fn read_bmp(data: &[u8]) -> Result<IconImage, IcoError> {
    if data.len() < BMP_HEADER_LEN {
        truncated_err!(
            "BMP header requires {} bytes, but only {} are present",
            BMP_HEADER_LEN,
            data.len()
        );
    }
    let mut header = &data[..BMP_HEADER_LEN];
    let header_size = header.read_u32::<LittleEndian>()?;
    if header_size != BMP_HEADER_LEN as u32 {
        format_err!(
            "Invalid BMP header size (was {}, but must be {})",
            header_size,
            BMP_HEADER_LEN
        );
    }
    let width = header.read_i32::<LittleEndian>()?;
    if width < 0 {
        format_err!("Invalid BMP width (was {})", width);
    }
    let width = width as usize;
    let doubled_height = header.read_i32::<LittleEndian>()?;
    if doubled_height % 2 != 0 {
        // The height is stored doubled, counting the rows of both the color
        // data and the alpha mask.
        format_err!(
            "Invalid height field in BMP header \
             (was {}, but must be divisible by 2)",
            doubled_height
        );
    }
    // A negative height marks a top-down pixel array with no mask rows.
    let top_down = doubled_height < 0;
    let height = (doubled_height / 2).unsigned_abs() as usize;
    let planes = header.read_u16::<LittleEndian>()?;
    let bits_per_pixel = header.read_u16::<LittleEndian>()?;
    let compression = header.read_u32::<LittleEndian>()?;
    if planes != 1 || bits_per_pixel != 32 || compression != 0 {
        unsupported_err!(
            "BMP variant with {} planes, {} bits per pixel, \
             and compression {}",
            planes,
            bits_per_pixel,
            compression
        );
    }

    let pixel_bytes = 4 * (width as u64) * (height as u64);
    if (data.len() as u64) < BMP_HEADER_LEN as u64 + pixel_bytes {
        truncated_err!(
            "BMP pixel data requires {} bytes, but only {} are present",
            pixel_bytes,
            data.len() - BMP_HEADER_LEN
        );
    }

    let mut rgba = vec![0u8; pixel_bytes as usize];
    if width == 0 || height == 0 {
        return Ok(IconImage::from_rgba_data(
            width as u32,
            height as u32,
            rgba,
        ));
    }

    // Pixels are stored row by row, starting from the *bottom* row unless
    // the top-down flag is set, with channels in B,G,R,A order.
    let row_bytes = 4 * width;
    for row in 0..height {
        let src_row = if top_down { row } else { height - 1 - row };
        let src = BMP_HEADER_LEN + src_row * row_bytes;
        let mut dst = row * row_bytes;
        for x in 0..width {
            let pixel = &data[src + 4 * x..src + 4 * x + 4];
            rgba[dst] = pixel[2];
            rgba[dst + 1] = pixel[1];
            rgba[dst + 2] = pixel[0];
            rgba[dst + 3] = pixel[3];
            dst += 4;
        }
    }
    Ok(IconImage::from_rgba_data(width as u32, height as u32, rgba))
}

//===========================================================================//

/// Encodes an image as an embedded 32-bpp bitmap: a BITMAPINFOHEADER, the
/// BGRA pixel array stored bottom-up, and a 1-bit alpha mask with rows
/// padded to a 4-byte boundary.
pub(crate) fn encode_bmp(image: &IconImage) -> Result<Vec<u8>, IcoError> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let rgba = image.rgba_data();

    let image_row_bytes = 4 * width;
    let mask_row_bytes = ((width + 31) / 32) * 4;
    let pixel_bytes = (image_row_bytes + mask_row_bytes) * height;

    let mut data = Vec::<u8>::with_capacity(BMP_HEADER_LEN + pixel_bytes);
    data.write_u32::<LittleEndian>(BMP_HEADER_LEN as u32)?;
    data.write_i32::<LittleEndian>(width as i32)?;
    // The height field counts both the image rows and the mask rows.
    data.write_i32::<LittleEndian>(2 * height as i32)?;
    data.write_u16::<LittleEndian>(1)?; // planes
    data.write_u16::<LittleEndian>(32)?; // bits per pixel
    data.write_u32::<LittleEndian>(0)?; // compression
    data.write_u32::<LittleEndian>(pixel_bytes as u32)?; // image size
    data.write_i32::<LittleEndian>(0)?; // horz ppm
    data.write_i32::<LittleEndian>(0)?; // vert ppm
    data.write_u32::<LittleEndian>(0)?; // colors used
    data.write_u32::<LittleEndian>(0)?; // colors important
    debug_assert_eq!(data.len(), BMP_HEADER_LEN);

    let mut mask = vec![0u8; mask_row_bytes * height];
    for row in 0..height {
        let src_row = height - 1 - row; // rows are stored bottom-to-top
        let mut src = 4 * src_row * width;
        let mask_row = &mut mask[row * mask_row_bytes..][..mask_row_bytes];
        for x in 0..width {
            let alpha = rgba[src + 3];
            data.push(rgba[src + 2]);
            data.push(rgba[src + 1]);
            data.push(rgba[src]);
            data.push(alpha);
            // The mask bit marks a pixel as opaque; consumers that honor
            // the mask instead of the alpha channel get a binary cutover.
            if alpha > 128 {
                mask_row[x / 8] |= 1 << (7 - (x % 8));
            }
            src += 4;
        }
    }
    data.extend_from_slice(&mask);
    debug_assert_eq!(data.len(), BMP_HEADER_LEN + pixel_bytes);
    Ok(data)
}

//===========================================================================//
