use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;

use crate::radar::raster::Canvas;

const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Encodes the canvas as an 8-bit RGBA PNG (color type 6, filter 0 rows,
/// single IDAT chunk).
pub fn encode_png(canvas: &Canvas) -> std::io::Result<Vec<u8>> {
    let width = canvas.width();
    let height = canvas.height();
    let pixels = canvas.pixels();
    let row_bytes = width as usize * 4;

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, 6, 0, 0, 0]);

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    for row in 0..height as usize {
        encoder.write_all(&[0])?;
        encoder.write_all(&pixels[row * row_bytes..(row + 1) * row_bytes])?;
    }
    let idat = encoder.finish()?;

    let mut out = Vec::with_capacity(idat.len() + 64);
    out.extend_from_slice(&SIGNATURE);
    push_chunk(&mut out, b"IHDR", &ihdr);
    push_chunk(&mut out, b"IDAT", &idat);
    push_chunk(&mut out, b"IEND", &[]);
    Ok(out)
}

fn push_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    let crc_start = out.len();
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    let crc = crc32(&out[crc_start..]);
    out.extend_from_slice(&crc.to_be_bytes());
}

fn crc32(data: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            let mask = (crc & 1).wrapping_neg();
            crc = (crc >> 1) ^ (0xEDB8_8320 & mask);
        }
    }
    !crc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radar::raster::Color;

    #[test]
    fn test_crc32_check_value() {
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
        assert_eq!(crc32(b"IEND"), 0xAE42_6082);
    }

    #[test]
    fn test_png_signature_and_header() {
        let canvas = Canvas::new(3, 2);
        let png = encode_png(&canvas).unwrap();
        assert_eq!(&png[..8], &SIGNATURE);
        // IHDR: length 13, then tag, then width/height big-endian.
        assert_eq!(&png[8..12], &13u32.to_be_bytes());
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(&png[16..20], &3u32.to_be_bytes());
        assert_eq!(&png[20..24], &2u32.to_be_bytes());
        // Bit depth 8, color type 6 (RGBA).
        assert_eq!(png[24], 8);
        assert_eq!(png[25], 6);
    }

    #[test]
    fn test_png_ends_with_iend() {
        let canvas = Canvas::new(1, 1);
        let png = encode_png(&canvas).unwrap();
        let tail = &png[png.len() - 12..];
        assert_eq!(&tail[..4], &0u32.to_be_bytes());
        assert_eq!(&tail[4..8], b"IEND");
        assert_eq!(&tail[8..], &0xAE42_6082u32.to_be_bytes());
    }

    #[test]
    fn test_same_canvas_encodes_identically() {
        let mut a = Canvas::new(16, 16);
        let mut b = Canvas::new(16, 16);
        a.fill_rect(2, 2, 5, 5, Color::rgb(224, 31, 45));
        b.fill_rect(2, 2, 5, 5, Color::rgb(224, 31, 45));
        assert_eq!(encode_png(&a).unwrap(), encode_png(&b).unwrap());
    }
}
