use winicon::{Icon, IcoError};

//===========================================================================//

#[test]
fn read_empty_icon_set() {
    let input: &[u8] = b"\x00\x00\x01\x00\x00\x00";
    let icon = Icon::read(input).unwrap();
    assert_eq!(icon.len(), 0);
    assert!(icon.is_empty());
}

#[test]
fn reject_bad_reserved_field() {
    let input: &[u8] = b"\x01\x00\x01\x00\x00\x00";
    let result = Icon::read(input);
    assert!(matches!(result, Err(IcoError::Format(_))));
}

#[test]
fn reject_cursor_file() {
    let input: &[u8] = b"\x00\x00\x02\x00\x00\x00";
    let result = Icon::read(input);
    assert!(matches!(result, Err(IcoError::Format(_))));
}

#[test]
fn reject_truncated_directory() {
    // The header promises two entries, but only one is present.
    let mut input = b"\x00\x00\x01\x00\x02\x00".to_vec();
    input.extend_from_slice(&[0u8; 16]);
    let result = Icon::read(input.as_slice());
    assert!(matches!(result, Err(IcoError::Truncated(_))));
}

#[test]
fn reject_payload_beyond_end_of_file() {
    let mut input = b"\x00\x00\x01\x00\x01\x00\
                      \x02\x02\x00\x00\x01\x00\x20\x00"
        .to_vec();
    input.extend_from_slice(&100u32.to_le_bytes()); // payload size
    input.extend_from_slice(&22u32.to_le_bytes()); // payload offset
    input.extend_from_slice(&[0u8; 10]);
    let result = Icon::read(input.as_slice());
    assert!(matches!(result, Err(IcoError::Truncated(_))));
}

#[test]
fn reject_payload_offset_inside_directory() {
    let mut input = b"\x00\x00\x01\x00\x01\x00\
                      \x02\x02\x00\x00\x01\x00\x20\x00"
        .to_vec();
    input.extend_from_slice(&4u32.to_le_bytes()); // payload size
    input.extend_from_slice(&6u32.to_le_bytes()); // offset inside directory
    input.extend_from_slice(&[0u8; 40]);
    let result = Icon::read(input.as_slice());
    assert!(matches!(result, Err(IcoError::Truncated(_))));
}

//===========================================================================//

#[test]
fn read_bmp_icon() {
    // A 2x2 image whose top row is red then green, and whose bottom row is
    // blue then half-transparent white.  Pixel rows are stored bottom-up in
    // B,G,R,A order, followed by the 1-bit alpha mask.
    let input: &[u8] = b"\x00\x00\x01\x00\x01\x00\
        \x02\x02\x00\x00\x01\x00\x20\x00\
        \x40\x00\x00\x00\x16\x00\x00\x00\
        \x28\x00\x00\x00\x02\x00\x00\x00\x04\x00\x00\x00\
        \x01\x00\x20\x00\x00\x00\x00\x00\x18\x00\x00\x00\
        \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
        \x00\x00\x00\x00\
        \xff\x00\x00\xff\xff\xff\xff\x80\
        \x00\x00\xff\xff\x00\xff\x00\xff\
        \x80\x00\x00\x00\xc0\x00\x00\x00";
    let icon = Icon::read(input).unwrap();
    assert_eq!(icon.len(), 1);
    let image = &icon.images()[0];
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 2);
    let rgba: &[u8] = b"\xff\x00\x00\xff\x00\xff\x00\xff\
                        \x00\x00\xff\xff\xff\xff\xff\x80";
    assert_eq!(image.rgba_data(), rgba);
}

#[test]
fn read_top_down_bmp_icon() {
    // Same image as read_bmp_icon, but with a negative height field: rows
    // are stored top-down and no mask follows the pixel array.
    let input: &[u8] = b"\x00\x00\x01\x00\x01\x00\
        \x02\x02\x00\x00\x01\x00\x20\x00\
        \x38\x00\x00\x00\x16\x00\x00\x00\
        \x28\x00\x00\x00\x02\x00\x00\x00\xfc\xff\xff\xff\
        \x01\x00\x20\x00\x00\x00\x00\x00\x10\x00\x00\x00\
        \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
        \x00\x00\x00\x00\
        \x00\x00\xff\xff\x00\xff\x00\xff\
        \xff\x00\x00\xff\xff\xff\xff\x80";
    let icon = Icon::read(input).unwrap();
    assert_eq!(icon.len(), 1);
    let image = &icon.images()[0];
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 2);
    let rgba: &[u8] = b"\xff\x00\x00\xff\x00\xff\x00\xff\
                        \x00\x00\xff\xff\xff\xff\xff\x80";
    assert_eq!(image.rgba_data(), rgba);
}

#[test]
fn read_zero_area_bmp_icon() {
    let input: &[u8] = b"\x00\x00\x01\x00\x01\x00\
        \x00\x00\x00\x00\x01\x00\x20\x00\
        \x28\x00\x00\x00\x16\x00\x00\x00\
        \x28\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
        \x01\x00\x20\x00\x00\x00\x00\x00\x00\x00\x00\x00\
        \x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\
        \x00\x00\x00\x00";
    let icon = Icon::read(input).unwrap();
    assert_eq!(icon.len(), 1);
    let image = &icon.images()[0];
    assert_eq!(image.width(), 0);
    assert_eq!(image.height(), 0);
    assert!(image.rgba_data().is_empty());
}

//===========================================================================//

fn single_entry_ico(payload: &[u8]) -> Vec<u8> {
    let mut input = b"\x00\x00\x01\x00\x01\x00\
                      \x02\x02\x00\x00\x01\x00\x20\x00"
        .to_vec();
    input.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    input.extend_from_slice(&22u32.to_le_bytes());
    input.extend_from_slice(payload);
    input
}

fn bmp_header(
    width: i32,
    doubled_height: i32,
    planes: u16,
    bits_per_pixel: u16,
    compression: u32,
) -> Vec<u8> {
    let mut header = Vec::<u8>::with_capacity(40);
    header.extend_from_slice(&40u32.to_le_bytes());
    header.extend_from_slice(&width.to_le_bytes());
    header.extend_from_slice(&doubled_height.to_le_bytes());
    header.extend_from_slice(&planes.to_le_bytes());
    header.extend_from_slice(&bits_per_pixel.to_le_bytes());
    header.extend_from_slice(&compression.to_le_bytes());
    header.extend_from_slice(&[0u8; 20]);
    header
}

#[test]
fn reject_wrong_bmp_header_size() {
    let mut payload = bmp_header(2, 4, 1, 32, 0);
    payload[0] = 12; // BITMAPCOREHEADER size
    let result = Icon::read(single_entry_ico(&payload).as_slice());
    assert!(matches!(result, Err(IcoError::Format(_))));
}

#[test]
fn reject_odd_bmp_height() {
    let payload = bmp_header(2, 3, 1, 32, 0);
    let result = Icon::read(single_entry_ico(&payload).as_slice());
    assert!(matches!(result, Err(IcoError::Format(_))));
}

#[test]
fn reject_unsupported_bits_per_pixel() {
    let mut payload = bmp_header(2, 4, 1, 24, 0);
    payload.extend_from_slice(&[0u8; 32]);
    let result = Icon::read(single_entry_ico(&payload).as_slice());
    assert!(matches!(result, Err(IcoError::Unsupported(_))));
}

#[test]
fn reject_unsupported_compression() {
    let mut payload = bmp_header(2, 4, 1, 32, 1); // BI_RLE8
    payload.extend_from_slice(&[0u8; 32]);
    let result = Icon::read(single_entry_ico(&payload).as_slice());
    assert!(matches!(result, Err(IcoError::Unsupported(_))));
}

#[test]
fn reject_multi_plane_bmp() {
    let mut payload = bmp_header(2, 4, 0, 32, 0);
    payload.extend_from_slice(&[0u8; 32]);
    let result = Icon::read(single_entry_ico(&payload).as_slice());
    assert!(matches!(result, Err(IcoError::Unsupported(_))));
}

#[test]
fn reject_truncated_bmp_pixels() {
    // A 2x2 32-bpp image needs 16 pixel bytes; only 8 are present.
    let mut payload = bmp_header(2, 4, 1, 32, 0);
    payload.extend_from_slice(&[0u8; 8]);
    let result = Icon::read(single_entry_ico(&payload).as_slice());
    assert!(matches!(result, Err(IcoError::Truncated(_))));
}

//===========================================================================//

#[test]
fn read_png_icon() {
    let input: &[u8] = b"\x00\x00\x01\x00\x01\x00\
        \x02\x02\x00\x00\x00\x00\x00\x00\
        \x47\x00\x00\x00\x16\x00\x00\x00\
        \x89\x50\x4e\x47\x0d\x0a\x1a\x0a\x00\x00\x00\x0d\x49\x48\x44\x52\
        \x00\x00\x00\x02\x00\x00\x00\x02\x08\x00\x00\x00\x00\x57\xdd\x52\
        \xf8\x00\x00\x00\x0e\x49\x44\x41\x54\x78\x9c\x63\xb4\x77\x60\xdc\
        \xef\x00\x00\x04\x08\x01\x81\x86\x2e\xc9\x8d\x00\x00\x00\x00\x49\
        \x45\x4e\x44\xae\x42\x60\x82";
    let icon = Icon::read(input).unwrap();
    assert_eq!(icon.len(), 1);
    let image = &icon.images()[0];
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 2);
    let rgba: &[u8] = b"\x3f\x3f\x3f\xff\x7f\x7f\x7f\xff\
                        \xbf\xbf\xbf\xff\xff\xff\xff\xff";
    assert_eq!(image.rgba_data(), rgba);
}

#[test]
fn malformed_png_reports_image_index() {
    let mut payload = b"\x89PNG\x0d\x0a\x1a\x0a".to_vec();
    payload.extend_from_slice(&[0u8; 16]);
    let error =
        Icon::read(single_entry_ico(&payload).as_slice()).unwrap_err();
    assert!(matches!(error, IcoError::Format(_)));
    assert!(error.to_string().contains("image 0"));
}

//===========================================================================//

#[test]
fn read_input_at_size_limit() {
    // 1 MiB total is still accepted.
    let mut input = vec![0u8; 1 << 20];
    input[2] = 1; // ICO resource type
    let icon = Icon::read(input.as_slice()).unwrap();
    assert_eq!(icon.len(), 0);
}

#[test]
fn reject_input_over_size_limit() {
    let mut input = vec![0u8; (1 << 20) + 6];
    input[2] = 1; // ICO resource type
    let result = Icon::read(input.as_slice());
    assert!(matches!(result, Err(IcoError::SizeLimit { .. })));
}

//===========================================================================//
