//! Core types for decoded sources and encoded outputs.

use image::{DynamicImage, ImageFormat};
use imgref::ImgVec;
use rgb::{RGB8, RGBA8};
use whereat::*;

/// Pixels of a decoded source image.
///
/// Alpha is kept only when the source color type has it.
#[derive(Debug, Clone)]
pub enum SourcePixels {
    /// 3-channel RGB.
    Rgb(ImgVec<RGB8>),
    /// 4-channel RGBA.
    Rgba(ImgVec<RGBA8>),
}

/// A decoded source image, ready to be encoded.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: SourcePixels,
    format: Option<ImageFormat>,
    icc_profile: Option<Vec<u8>>,
}

impl SourceImage {
    /// Wrap RGB pixels.
    #[must_use]
    pub fn from_rgb(img: ImgVec<RGB8>) -> Self {
        Self {
            pixels: SourcePixels::Rgb(img),
            format: None,
            icc_profile: None,
        }
    }

    /// Wrap RGBA pixels.
    #[must_use]
    pub fn from_rgba(img: ImgVec<RGBA8>) -> Self {
        Self {
            pixels: SourcePixels::Rgba(img),
            format: None,
            icc_profile: None,
        }
    }

    /// Convert an `image` crate buffer, narrowing to 8 bits per channel.
    ///
    /// Grey becomes RGB, grey with alpha becomes RGBA.
    #[must_use]
    pub fn from_dynamic(image: DynamicImage) -> Self {
        if image.color().has_alpha() {
            let buf = image.into_rgba8();
            let (width, height) = buf.dimensions();
            let pixels: Vec<RGBA8> = buf.pixels().map(|p| RGBA8::from(p.0)).collect();
            Self::from_rgba(ImgVec::new(pixels, width as usize, height as usize))
        } else {
            let buf = image.into_rgb8();
            let (width, height) = buf.dimensions();
            let pixels: Vec<RGB8> = buf.pixels().map(|p| RGB8::from(p.0)).collect();
            Self::from_rgb(ImgVec::new(pixels, width as usize, height as usize))
        }
    }

    /// Attach an ICC profile.
    #[must_use]
    pub fn with_icc_profile(mut self, profile: impl Into<Vec<u8>>) -> Self {
        self.icc_profile = Some(profile.into());
        self
    }

    pub(crate) fn with_format(mut self, format: Option<ImageFormat>) -> Self {
        self.format = format;
        self
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        match &self.pixels {
            SourcePixels::Rgb(img) => img.width() as u32,
            SourcePixels::Rgba(img) => img.width() as u32,
        }
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        match &self.pixels {
            SourcePixels::Rgb(img) => img.height() as u32,
            SourcePixels::Rgba(img) => img.height() as u32,
        }
    }

    /// Whether the pixels carry an alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self.pixels, SourcePixels::Rgba(_))
    }

    /// The decoded pixels.
    pub fn pixels(&self) -> &SourcePixels {
        &self.pixels
    }

    /// Format the source was decoded from, if it came from a file or buffer.
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    /// Embedded ICC profile, if any.
    pub fn icc_profile(&self) -> Option<&[u8]> {
        self.icc_profile.as_deref()
    }
}

/// Information about a WebP image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Whether the image has an alpha channel.
    pub has_alpha: bool,
    /// Whether the image is animated.
    pub has_animation: bool,
    /// Bitstream format (lossy or lossless).
    pub format: BitstreamFormat,
}

impl ImageInfo {
    /// Get info from WebP data without decoding.
    pub fn from_webp(data: &[u8]) -> crate::Result<Self> {
        let mut width: i32 = 0;
        let mut height: i32 = 0;

        let result =
            unsafe { libwebp_sys::WebPGetInfo(data.as_ptr(), data.len(), &mut width, &mut height) };

        if result == 0 {
            return Err(at!(crate::Error::InvalidWebP));
        }

        let mut features = core::mem::MaybeUninit::<libwebp_sys::WebPBitstreamFeatures>::uninit();
        let status = unsafe {
            libwebp_sys::WebPGetFeatures(data.as_ptr(), data.len(), features.as_mut_ptr())
        };

        if status != libwebp_sys::VP8StatusCode::VP8_STATUS_OK {
            return Err(at!(crate::Error::DecodeFailed(
                crate::error::DecodingError::from(status as i32),
            )));
        }
        let features = unsafe { features.assume_init() };

        let format = match features.format {
            1 => BitstreamFormat::Lossy,
            2 => BitstreamFormat::Lossless,
            _ => BitstreamFormat::Undefined,
        };

        Ok(ImageInfo {
            width: width as u32,
            height: height as u32,
            has_alpha: features.has_alpha != 0,
            has_animation: features.has_animation != 0,
            format,
        })
    }
}

/// Bitstream format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum BitstreamFormat {
    /// Format not determined (mixed, or animated).
    #[default]
    Undefined,
    /// Lossy compression (VP8).
    Lossy,
    /// Lossless compression (VP8L).
    Lossless,
}
