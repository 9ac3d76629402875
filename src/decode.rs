//! Source image loading.
//!
//! Any format the `image` crate was built with can be read. The format is
//! sniffed from the content first; the file extension is the fallback.

use crate::error::{Error, Result};
use crate::types::SourceImage;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Seek};
use std::path::Path;
use whereat::*;

/// Decode the image file at `path`.
///
/// A missing file is reported as an [`Error::Io`] with kind `NotFound`.
///
/// # Example
///
/// ```rust,no_run
/// let source = rewebp::load("gym_photo.jpg")?;
/// println!("{}x{}", source.width(), source.height());
/// # Ok::<(), rewebp::At<rewebp::Error>>(())
/// ```
pub fn load(path: impl AsRef<Path>) -> Result<SourceImage> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| at!(Error::io(&e, path)))?;

    let mut reader = ImageReader::new(BufReader::new(file));
    if let Ok(format) = ImageFormat::from_path(path) {
        reader.set_format(format);
    }

    debug!("loading {}", path.display());
    read(reader)
}

/// Decode an image held in memory.
pub fn load_from_memory(data: &[u8]) -> Result<SourceImage> {
    read(ImageReader::new(Cursor::new(data)))
}

fn read<R: BufRead + Seek>(reader: ImageReader<R>) -> Result<SourceImage> {
    let reader = reader
        .with_guessed_format()
        .map_err(|e| at!(Error::from(e)))?;
    let format = reader.format();

    let mut decoder = reader.into_decoder().map_err(|e| at!(Error::from(e)))?;
    let icc_profile = decoder.icc_profile().map_err(|e| at!(Error::from(e)))?;
    let image = DynamicImage::from_decoder(decoder).map_err(|e| at!(Error::from(e)))?;

    debug!(
        "decoded {:?} {}x{} {:?}, icc: {}",
        format,
        image.width(),
        image.height(),
        image.color(),
        icc_profile.as_ref().map_or(0, Vec::len)
    );

    let mut source = SourceImage::from_dynamic(image).with_format(format);
    if let Some(icc) = icc_profile.filter(|p| !p.is_empty()) {
        source = source.with_icc_profile(icc);
    }
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, Rgb([200, 100, 50]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut out, ImageFormat::Png)
            .unwrap();
        out.into_inner()
    }

    #[test]
    fn test_load_from_memory_sniffs_png() {
        let source = load_from_memory(&png_bytes(7, 5)).unwrap();
        assert_eq!(source.format(), Some(ImageFormat::Png));
        assert_eq!((source.width(), source.height()), (7, 5));
        assert!(!source.has_alpha());
    }

    #[test]
    fn test_unknown_bytes_are_unsupported() {
        let err = load_from_memory(b"\x00\x01\x02 not an image").unwrap_err();
        assert!(matches!(err.error(), Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load("this/path/does/not/exist.jpg").unwrap_err();
        assert!(err.error().is_not_found());
    }
}
