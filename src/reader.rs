use crate::bmp;
use crate::error::IcoError;
use crate::icon::Icon;
use crate::icondir::{self, DirEntry};
use crate::image::IconImage;
use std::io::{self, Read};

//===========================================================================//

// Hard cap on total input size, bounding memory use against malformed or
// adversarial inputs.
const MAX_ICO_LEN: u64 = 1 << 20; // 1 MiB

//===========================================================================//

impl Icon {
    /// Reads an ICO file into memory.
    ///
    /// The input is buffered in full and may be at most 1 MiB; larger
    /// inputs fail with [`IcoError::SizeLimit`].  One malformed directory
    /// entry or payload fails the whole decode; there is no partial result.
    pub fn read<R: Read>(mut reader: R) -> Result<Icon, IcoError> {
        let mut header = [0u8; icondir::HEADER_LEN];
        reader.read_exact(&mut header).map_err(read_failed)?;
        let num_entries = icondir::parse_header(&header)?;

        let max_rest = MAX_ICO_LEN - icondir::HEADER_LEN as u64;
        let mut rest = Vec::<u8>::new();
        reader
            .take(max_rest + 1)
            .read_to_end(&mut rest)
            .map_err(read_failed)?;
        if (rest.len() as u64) > max_rest {
            return Err(IcoError::SizeLimit { limit: MAX_ICO_LEN });
        }

        let dir_len = icondir::ENTRY_LEN * num_entries;
        if rest.len() < dir_len {
            truncated_err!(
                "Directory requires {} bytes, but only {} are present",
                dir_len,
                rest.len()
            );
        }
        let (directory, payload) = rest.split_at(dir_len);

        // Directory offsets are measured from the start of the file; re-base
        // them to the payload region that follows the directory.
        let header_region_len = icondir::header_region_len(num_entries) as u64;

        let mut icon = Icon::new();
        for index in 0..num_entries {
            let entry = DirEntry::read(
                &directory[index * icondir::ENTRY_LEN..][..icondir::ENTRY_LEN],
            )?;
            let start = (entry.data_offset as u64)
                .checked_sub(header_region_len)
                .unwrap_or(u64::MAX);
            let end = start.saturating_add(entry.data_size as u64);
            if end > payload.len() as u64 {
                truncated_err!(
                    "image {}: payload at offset {} with {} bytes falls \
                     outside the file",
                    index,
                    entry.data_offset,
                    entry.data_size
                );
            }
            let data = &payload[start as usize..end as usize];
            let image = decode_image(data).map_err(|err| err.in_image(index))?;
            icon.add(image);
        }
        Ok(icon)
    }
}

/// Decodes one payload, dispatching on the PNG signature.
fn decode_image(data: &[u8]) -> Result<IconImage, IcoError> {
    if data.starts_with(icondir::PNG_SIGNATURE) {
        IconImage::read_png(data)
    } else {
        bmp::read_bmp(data)
    }
}

fn read_failed(error: io::Error) -> IcoError {
    if error.kind() == io::ErrorKind::UnexpectedEof {
        IcoError::Truncated("Unexpected end of input".to_string())
    } else {
        IcoError::Io(error)
    }
}

//===========================================================================//
