use crate::error::IcoError;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::Write;

//===========================================================================//

// The size of an ICONDIR header, in bytes.
pub(crate) const HEADER_LEN: usize = 6;

// The size of an ICONDIRENTRY struct, in bytes.
pub(crate) const ENTRY_LEN: usize = 16;

// The resource type number of ICO files (CUR files use 2, which this crate
// does not support).
pub(crate) const ICO_RESOURCE_TYPE: u16 = 1;

// The signature that all PNG files start with.
pub(crate) const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G'];

//===========================================================================//

/// Returns the total size of the header and directory for the given entry
/// count, which is also the file offset of the first payload byte.
pub(crate) fn header_region_len(num_entries: usize) -> usize {
    HEADER_LEN + ENTRY_LEN * num_entries
}

/// Parses an ICONDIR header and returns the number of directory entries.
pub(crate) fn parse_header(
    header: &[u8; HEADER_LEN],
) -> Result<usize, IcoError> {
    let mut header: &[u8] = header;
    let reserved = header.read_u16::<LittleEndian>()?;
    let restype = header.read_u16::<LittleEndian>()?;
    let num_entries = header.read_u16::<LittleEndian>()?;
    if reserved != 0 {
        format_err!(
            "Invalid reserved field value in ICONDIR \
             (was {}, but must be 0)",
            reserved
        );
    }
    if restype != ICO_RESOURCE_TYPE {
        format_err!(
            "Invalid resource type (was {}, but must be {})",
            restype,
            ICO_RESOURCE_TYPE
        );
    }
    Ok(num_entries as usize)
}

/// Writes an ICONDIR header for the given entry count.
pub(crate) fn write_header<W: Write>(
    mut writer: W,
    num_entries: u16,
) -> Result<(), IcoError> {
    writer.write_u16::<LittleEndian>(0)?; // reserved
    writer.write_u16::<LittleEndian>(ICO_RESOURCE_TYPE)?;
    writer.write_u16::<LittleEndian>(num_entries)?;
    Ok(())
}

//===========================================================================//

/// One ICONDIRENTRY; a transient projection of a single image, valid only
/// for the duration of one read or write call.
pub(crate) struct DirEntry {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data_size: u32,
    pub(crate) data_offset: u32,
}

impl DirEntry {
    /// Parses a 16-byte ICONDIRENTRY.
    pub(crate) fn read(mut entry: &[u8]) -> Result<DirEntry, IcoError> {
        let width_byte = entry.read_u8()?;
        let height_byte = entry.read_u8()?;
        let _num_colors = entry.read_u8()?;
        let _reserved = entry.read_u8()?;
        let _color_planes = entry.read_u16::<LittleEndian>()?;
        let _bits_per_pixel = entry.read_u16::<LittleEndian>()?;
        let data_size = entry.read_u32::<LittleEndian>()?;
        let data_offset = entry.read_u32::<LittleEndian>()?;
        // A width/height byte of zero indicates a size of 256.
        Ok(DirEntry {
            width: if width_byte == 0 { 256 } else { width_byte as u32 },
            height: if height_byte == 0 { 256 } else { height_byte as u32 },
            data_size,
            data_offset,
        })
    }

    /// Writes this entry as a 16-byte ICONDIRENTRY.
    pub(crate) fn write<W: Write>(&self, mut writer: W) -> Result<(), IcoError> {
        // A width/height byte of zero indicates a size of 256.
        let width = if self.width > 255 { 0 } else { self.width as u8 };
        writer.write_u8(width)?;
        let height = if self.height > 255 { 0 } else { self.height as u8 };
        writer.write_u8(height)?;
        writer.write_u8(0)?; // number of palette colors
        writer.write_u8(0)?; // reserved
        writer.write_u16::<LittleEndian>(1)?; // color planes
        writer.write_u16::<LittleEndian>(32)?; // bits per pixel
        writer.write_u32::<LittleEndian>(self.data_size)?;
        writer.write_u32::<LittleEndian>(self.data_offset)?;
        Ok(())
    }
}

//===========================================================================//

#[cfg(test)]
mod tests {
    use super::{parse_header, write_header, DirEntry, ENTRY_LEN, HEADER_LEN};
    use crate::error::IcoError;

    #[test]
    fn header_round_trip() {
        let mut header = Vec::<u8>::new();
        write_header(&mut header, 3).unwrap();
        assert_eq!(header.len(), HEADER_LEN);
        let header: &[u8; HEADER_LEN] = header.as_slice().try_into().unwrap();
        assert_eq!(parse_header(header).unwrap(), 3);
    }

    #[test]
    fn header_with_bad_reserved_field() {
        let header = b"\x01\x00\x01\x00\x00\x00";
        let result = parse_header(header);
        assert!(matches!(result, Err(IcoError::Format(_))));
    }

    #[test]
    fn header_with_cursor_resource_type() {
        let header = b"\x00\x00\x02\x00\x00\x00";
        let result = parse_header(header);
        assert!(matches!(result, Err(IcoError::Format(_))));
    }

    #[test]
    fn entry_round_trip() {
        let entry = DirEntry {
            width: 48,
            height: 32,
            data_size: 1000,
            data_offset: 22,
        };
        let mut bytes = Vec::<u8>::new();
        entry.write(&mut bytes).unwrap();
        assert_eq!(bytes.len(), ENTRY_LEN);
        let entry = DirEntry::read(&bytes).unwrap();
        assert_eq!(entry.width, 48);
        assert_eq!(entry.height, 32);
        assert_eq!(entry.data_size, 1000);
        assert_eq!(entry.data_offset, 22);
    }

    #[test]
    fn entry_size_byte_stores_256_as_zero() {
        let entry = DirEntry {
            width: 256,
            height: 256,
            data_size: 0,
            data_offset: 22,
        };
        let mut bytes = Vec::<u8>::new();
        entry.write(&mut bytes).unwrap();
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[1], 0);
        let entry = DirEntry::read(&bytes).unwrap();
        assert_eq!(entry.width, 256);
        assert_eq!(entry.height, 256);
    }
}

//===========================================================================//
