//! Image header probing.
//!
//! Reads pixel dimensions straight out of format headers (PNG, JPEG, GIF,
//! BMP) without decoding any pixel data. Unknown or truncated input falls
//! back to a fixed size instead of failing; image handling is best-effort
//! by design.

/// Dimensions reported for unrecognized or truncated image data.
pub const FALLBACK_DIMENSIONS: (u32, u32) = (800, 600);

const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8];
const GIF_MAGIC: &[u8] = b"GIF";
const BMP_MAGIC: &[u8] = b"BM";

/// Probe pixel width and height from raw image bytes.
pub fn dimensions(data: &[u8]) -> (u32, u32) {
    png_dimensions(data)
        .or_else(|| jpeg_dimensions(data))
        .or_else(|| gif_dimensions(data))
        .or_else(|| bmp_dimensions(data))
        .unwrap_or_else(|| {
            log::debug!("unrecognized image header, using fallback dimensions");
            FALLBACK_DIMENSIONS
        })
}

/// Sniff a MIME content type from the magic bytes.
pub fn sniff_content_type(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(PNG_MAGIC) {
        Some("image/png")
    } else if data.starts_with(JPEG_MAGIC) {
        Some("image/jpeg")
    } else if data.starts_with(GIF_MAGIC) {
        Some("image/gif")
    } else if data.starts_with(BMP_MAGIC) {
        Some("image/bmp")
    } else {
        None
    }
}

// PNG: IHDR is always the first chunk; width and height are big-endian
// 32-bit fields at byte offsets 16 and 20.
fn png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if !data.starts_with(PNG_MAGIC) || data.len() < 24 {
        return None;
    }
    let width = u32::from_be_bytes(data[16..20].try_into().ok()?);
    let height = u32::from_be_bytes(data[20..24].try_into().ok()?);
    Some((width, height))
}

// JPEG: walk the segment chain until a start-of-frame marker, which holds
// big-endian 16-bit height then width after the precision byte.
fn jpeg_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if !data.starts_with(JPEG_MAGIC) {
        return None;
    }
    let mut pos = 2;
    while pos + 1 < data.len() {
        if data[pos] != 0xFF {
            pos += 1;
            continue;
        }
        let marker = data[pos + 1];
        if marker == 0xFF {
            // fill byte
            pos += 1;
            continue;
        }
        if (0xD0..=0xD9).contains(&marker) {
            // standalone markers (RST/SOI/EOI) carry no length
            pos += 2;
            continue;
        }
        if pos + 3 >= data.len() {
            return None;
        }
        let is_sof = (0xC0..=0xCF).contains(&marker) && !matches!(marker, 0xC4 | 0xC8 | 0xCC);
        if is_sof {
            if pos + 9 > data.len() {
                return None;
            }
            let height = u16::from_be_bytes([data[pos + 5], data[pos + 6]]) as u32;
            let width = u16::from_be_bytes([data[pos + 7], data[pos + 8]]) as u32;
            return Some((width, height));
        }
        if marker == 0xDA {
            // start of scan; no frame header found before image data
            return None;
        }
        let length = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        pos += 2 + length;
    }
    None
}

// GIF: little-endian 16-bit logical screen dimensions at offsets 6 and 8.
fn gif_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if !data.starts_with(GIF_MAGIC) || data.len() < 10 {
        return None;
    }
    let width = u16::from_le_bytes([data[6], data[7]]) as u32;
    let height = u16::from_le_bytes([data[8], data[9]]) as u32;
    Some((width, height))
}

// BMP: little-endian 32-bit fields at offsets 18 and 22; a negative height
// means top-down row order and is discarded via absolute value.
fn bmp_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    if !data.starts_with(BMP_MAGIC) || data.len() < 26 {
        return None;
    }
    let width = i32::from_le_bytes(data[18..22].try_into().ok()?);
    let height = i32::from_le_bytes(data[22..26].try_into().ok()?);
    Some((width.unsigned_abs(), height.unsigned_abs()))
}
