use crate::error::Result;
use image::GrayImage;
use std::path::Path;

const BLACK: u8 = 0;
const WHITE: u8 = 255;

/// Loads an image, thresholds it to bilevel, and flattens it row-major into
/// a `'0'`/`'1'` string. Returns the bit-string and the image dimensions.
pub fn load_bilevel(path: &Path) -> Result<(String, u32, u32)> {
    let img = image::open(path)?.to_luma8();
    let (width, height) = img.dimensions();
    let mut bits = String::with_capacity((width as usize) * (height as usize));
    for pixel in img.pixels() {
        bits.push(if pixel.0[0] >= 128 { '1' } else { '0' });
    }
    Ok((bits, width, height))
}

/// Writes a bit-string back out as an 8-bit grayscale image.
///
/// A reconstruction shorter than `width * height` is padded with black
/// pixels and a longer one is truncated; length drift is policy here, not an
/// error. Any character other than `'1'` (including residual grammar
/// symbols) maps to black.
pub fn save_bilevel(bits: &str, width: u32, height: u32, path: &Path) -> Result<()> {
    let expected = (width as usize) * (height as usize);
    let mut pixels: Vec<u8> = bits
        .bytes()
        .take(expected)
        .map(|b| if b == b'1' { WHITE } else { BLACK })
        .collect();
    pixels.resize(expected, BLACK);

    let img = GrayImage::from_raw(width, height, pixels)
        .expect("pixel buffer sized to width * height");
    img.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.png");
        save_bilevel("0110", 2, 2, &path).unwrap();
        let (bits, width, height) = load_bilevel(&path).unwrap();
        assert_eq!((width, height), (2, 2));
        assert_eq!(bits, "0110");
    }

    #[test]
    fn test_short_reconstruction_padded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("padded.png");
        save_bilevel("11", 2, 2, &path).unwrap();
        let (bits, _, _) = load_bilevel(&path).unwrap();
        assert_eq!(bits, "1100");
    }

    #[test]
    fn test_long_reconstruction_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.png");
        save_bilevel("111110", 2, 2, &path).unwrap();
        let (bits, _, _) = load_bilevel(&path).unwrap();
        assert_eq!(bits, "1111");
    }

    #[test]
    fn test_residual_symbols_map_to_black() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("residue.png");
        save_bilevel("1A1C", 2, 2, &path).unwrap();
        let (bits, _, _) = load_bilevel(&path).unwrap();
        assert_eq!(bits, "1010");
    }

    #[test]
    fn test_missing_input_errors() {
        let err = load_bilevel(Path::new("no-such-image.png")).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }
}
