//! WebP encoding functionality.

use crate::config::EncoderConfig;
use crate::error::{EncodingError, Error, Result};
use crate::types::{SourceImage, SourcePixels};
use log::debug;
use rgb::{RGB8, RGBA8};
use whereat::*;

const MAX_DIMENSION: u32 = 16383;

/// Encode a decoded source image to lossy WebP.
///
/// RGBA sources keep their alpha plane. When the configuration keeps ICC
/// and the source has a profile, it is embedded in the output.
///
/// # Example
///
/// ```rust
/// use imgref::ImgVec;
/// use rgb::RGB8;
/// use rewebp::{EncoderConfig, SourceImage};
///
/// let pixels = vec![RGB8::new(255, 0, 0); 4 * 4];
/// let source = SourceImage::from_rgb(ImgVec::new(pixels, 4, 4));
/// let webp = rewebp::encode(&source, &EncoderConfig::new().quality(95.0))?;
/// assert_eq!(&webp[..4], b"RIFF");
/// # Ok::<(), rewebp::At<rewebp::Error>>(())
/// ```
pub fn encode(image: &SourceImage, config: &EncoderConfig) -> Result<Vec<u8>> {
    let webp = match image.pixels() {
        SourcePixels::Rgb(img) => {
            // SAFETY: RGB8 is repr(C) and has the same layout as [u8; 3]
            let data = unsafe {
                core::slice::from_raw_parts(img.buf().as_ptr() as *const u8, img.buf().len() * 3)
            };
            encode_pixels(
                data,
                img.width() as u32,
                img.height() as u32,
                img.stride() as u32,
                3,
                config,
            )?
        }
        SourcePixels::Rgba(img) => {
            // SAFETY: RGBA8 is repr(C) and has the same layout as [u8; 4]
            let data = unsafe {
                core::slice::from_raw_parts(img.buf().as_ptr() as *const u8, img.buf().len() * 4)
            };
            encode_pixels(
                data,
                img.width() as u32,
                img.height() as u32,
                img.stride() as u32,
                4,
                config,
            )?
        }
    };

    match image.icc_profile() {
        Some(icc) if config.keep_icc => {
            debug!("embedding {} byte ICC profile", icc.len());
            crate::mux::embed_icc(&webp, icc)
        }
        _ => Ok(webp),
    }
}

/// Encode RGB pixels to WebP at the given quality.
pub fn encode_rgb(data: &[RGB8], width: u32, height: u32, quality: f32) -> Result<Vec<u8>> {
    validate_dimensions(width, height)?;
    validate_buffer_size(data.len() * 3, (width * height) as usize, 3)?;
    let data = &data[..(width * height) as usize];
    let source = SourceImage::from_rgb(imgref::ImgVec::new(
        data.to_vec(),
        width as usize,
        height as usize,
    ));
    encode(&source, &EncoderConfig::new().quality(quality))
}

/// Encode RGBA pixels to WebP at the given quality.
pub fn encode_rgba(data: &[RGBA8], width: u32, height: u32, quality: f32) -> Result<Vec<u8>> {
    validate_dimensions(width, height)?;
    validate_buffer_size(data.len() * 4, (width * height) as usize, 4)?;
    let data = &data[..(width * height) as usize];
    let source = SourceImage::from_rgba(imgref::ImgVec::new(
        data.to_vec(),
        width as usize,
        height as usize,
    ));
    encode(&source, &EncoderConfig::new().quality(quality))
}

fn encode_pixels(
    data: &[u8],
    width: u32,
    height: u32,
    stride: u32,
    bpp: u32,
    config: &EncoderConfig,
) -> Result<Vec<u8>> {
    validate_dimensions(width, height)?;
    if stride < width {
        return Err(at!(Error::InvalidInput(format!(
            "stride {} smaller than width {}",
            stride, width
        ))));
    }
    // The last row only needs `width` pixels.
    let rows = (stride as usize).saturating_mul(height as usize - 1) + width as usize;
    validate_buffer_size(data.len(), rows, bpp)?;

    let webp_config = config.to_libwebp()?;
    debug!(
        "encoding {}x{} ({} channels) at quality {}, method {}",
        width, height, bpp, config.quality, config.method
    );

    let mut picture = libwebp_sys::WebPPicture::new()
        .map_err(|_| at!(Error::InvalidConfig("failed to init picture".into())))?;

    picture.width = width as i32;
    picture.height = height as i32;
    picture.use_argb = 1;

    let stride_bytes = (stride * bpp) as i32;
    let import_ok = if bpp == 4 {
        unsafe { libwebp_sys::WebPPictureImportRGBA(&mut picture, data.as_ptr(), stride_bytes) }
    } else {
        unsafe { libwebp_sys::WebPPictureImportRGB(&mut picture, data.as_ptr(), stride_bytes) }
    };

    if import_ok == 0 {
        unsafe { libwebp_sys::WebPPictureFree(&mut picture) };
        return Err(at!(Error::EncodeFailed(EncodingError::OutOfMemory)));
    }

    let mut writer = core::mem::MaybeUninit::<libwebp_sys::WebPMemoryWriter>::uninit();
    unsafe { libwebp_sys::WebPMemoryWriterInit(writer.as_mut_ptr()) };
    let mut writer = unsafe { writer.assume_init() };

    picture.writer = Some(libwebp_sys::WebPMemoryWrite);
    picture.custom_ptr = &mut writer as *mut _ as *mut _;

    let ok = unsafe { libwebp_sys::WebPEncode(&webp_config, &mut picture) };

    let result = if ok == 0 {
        Err(at!(Error::EncodeFailed(EncodingError::from(
            picture.error_code as i32
        ))))
    } else if writer.mem.is_null() || writer.size == 0 {
        Err(at!(Error::OutOfMemory))
    } else {
        Ok(unsafe { core::slice::from_raw_parts(writer.mem, writer.size) }.to_vec())
    };

    unsafe {
        libwebp_sys::WebPPictureFree(&mut picture);
        libwebp_sys::WebPMemoryWriterClear(&mut writer);
    }

    result
}

pub(crate) fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(at!(Error::InvalidInput(
            "width and height must be non-zero".into(),
        )));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(at!(Error::InvalidInput(format!(
            "{}x{} exceeds the WebP maximum of {} x {}",
            width, height, MAX_DIMENSION, MAX_DIMENSION
        ))));
    }
    Ok(())
}

pub(crate) fn validate_buffer_size(size: usize, pixels: usize, bpp: u32) -> Result<()> {
    let expected = pixels.saturating_mul(bpp as usize);

    if size < expected {
        return Err(at!(Error::InvalidInput(format!(
            "buffer too small: got {}, expected {}",
            size, expected
        ))));
    }
    Ok(())
}
