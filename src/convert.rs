//! One-shot file conversion: decode a source image, write it back as WebP.

use crate::config::EncoderConfig;
use crate::error::{Error, Result};
use crate::types::ImageInfo;
use image::ImageFormat;
use log::info;
use std::fs;
use std::path::Path;
use whereat::*;

/// What a conversion did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    /// Format the source was decoded from.
    pub source_format: Option<ImageFormat>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Whether the output carries an alpha channel.
    ///
    /// Fully opaque alpha is dropped by the encoder, so an RGBA source can
    /// still produce an output without alpha.
    pub has_alpha: bool,
    /// Whether an ICC profile was carried over.
    pub icc_embedded: bool,
    /// Size of the written WebP file.
    pub bytes_written: usize,
}

/// Convert the image at `input` to a lossy WebP file at `output`.
///
/// The output is created or truncated, and only once encoding has
/// succeeded: a source that fails to load never touches `output`.
///
/// # Example
///
/// ```rust,no_run
/// let report = rewebp::convert("gym_photo.jpg", "Rep_Club_Gym.webp", 95.0)?;
/// println!("{} bytes", report.bytes_written);
/// # Ok::<(), rewebp::At<rewebp::Error>>(())
/// ```
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    quality: f32,
) -> Result<ConvertReport> {
    convert_with(input, output, &EncoderConfig::new().quality(quality))
}

/// Convert with a full encoder configuration.
pub fn convert_with(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &EncoderConfig,
) -> Result<ConvertReport> {
    let input = input.as_ref();
    let output = output.as_ref();

    let source = crate::decode::load(input)?;
    let webp = crate::encode::encode(&source, config)?;
    let info = ImageInfo::from_webp(&webp)?;
    fs::write(output, &webp).map_err(|e| at!(Error::io(&e, output)))?;

    let report = ConvertReport {
        source_format: source.format(),
        width: source.width(),
        height: source.height(),
        has_alpha: info.has_alpha,
        icc_embedded: config.keeps_icc() && source.icc_profile().is_some(),
        bytes_written: webp.len(),
    };

    info!(
        "{} -> {}: {}x{}, quality {}, {} bytes",
        input.display(),
        output.display(),
        report.width,
        report.height,
        config.get_quality(),
        report.bytes_written
    );

    Ok(report)
}
