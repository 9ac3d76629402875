//! Encoder configuration.

use crate::error::{Error, Result};
use crate::types::SourceImage;
use whereat::*;

/// Content-aware encoding presets.
///
/// These presets tune libwebp's internal parameters for different types of
/// content before quality and method are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum Preset {
    /// Default preset, balanced for general use.
    #[default]
    Default = 0,
    /// Digital picture (portrait, indoor shot).
    Picture = 1,
    /// Outdoor photograph with natural lighting.
    Photo = 2,
    /// Hand or line drawing with high-contrast details.
    Drawing = 3,
    /// Small-sized colorful images like icons or sprites.
    Icon = 4,
    /// Text-heavy images.
    Text = 5,
}

impl Preset {
    pub(crate) fn to_libwebp(self) -> libwebp_sys::WebPPreset {
        match self {
            Preset::Default => libwebp_sys::WebPPreset::WEBP_PRESET_DEFAULT,
            Preset::Picture => libwebp_sys::WebPPreset::WEBP_PRESET_PICTURE,
            Preset::Photo => libwebp_sys::WebPPreset::WEBP_PRESET_PHOTO,
            Preset::Drawing => libwebp_sys::WebPPreset::WEBP_PRESET_DRAWING,
            Preset::Icon => libwebp_sys::WebPPreset::WEBP_PRESET_ICON,
            Preset::Text => libwebp_sys::WebPPreset::WEBP_PRESET_TEXT,
        }
    }
}

/// Lossy WebP encoder configuration.
///
/// Out-of-range values are clamped by the setters; the final combination is
/// checked by libwebp when encoding starts.
///
/// # Example
///
/// ```rust
/// use rewebp::{EncoderConfig, Preset};
///
/// let config = EncoderConfig::new()
///     .quality(95.0)
///     .preset(Preset::Photo)
///     .method(4);
/// assert_eq!(config.get_quality(), 95.0);
/// ```
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    pub(crate) quality: f32,
    pub(crate) preset: Preset,
    pub(crate) method: u8,
    pub(crate) alpha_quality: u8,
    pub(crate) exact: bool,
    pub(crate) use_sharp_yuv: bool,
    pub(crate) keep_icc: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            quality: 75.0,
            preset: Preset::Default,
            method: 4,
            alpha_quality: 100,
            exact: false,
            use_sharp_yuv: false,
            keep_icc: true,
        }
    }
}

impl EncoderConfig {
    /// Create a configuration with default settings.
    ///
    /// Default: lossy at quality 75, method 4, source ICC profile kept.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set encoding quality (0.0 = smallest, 100.0 = best).
    #[must_use]
    pub fn quality(mut self, quality: f32) -> Self {
        self.quality = if quality.is_nan() {
            Self::default().quality
        } else {
            quality.clamp(0.0, 100.0)
        };
        self
    }

    /// Set content-aware preset.
    #[must_use]
    pub fn preset(mut self, preset: Preset) -> Self {
        self.preset = preset;
        self
    }

    /// Set quality/speed tradeoff (0 = fast, 6 = slower but better).
    #[must_use]
    pub fn method(mut self, method: u8) -> Self {
        self.method = method.min(6);
        self
    }

    /// Set alpha plane quality (0-100, default 100).
    #[must_use]
    pub fn alpha_quality(mut self, quality: u8) -> Self {
        self.alpha_quality = quality.min(100);
        self
    }

    /// Preserve exact RGB values under transparent areas.
    #[must_use]
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Use sharp YUV conversion (slower, sharper color edges).
    #[must_use]
    pub fn sharp_yuv(mut self, enable: bool) -> Self {
        self.use_sharp_yuv = enable;
        self
    }

    /// Carry the source image's ICC profile into the output.
    #[must_use]
    pub fn keep_icc(mut self, enable: bool) -> Self {
        self.keep_icc = enable;
        self
    }

    /// Encode a decoded source image with this configuration.
    pub fn encode(&self, image: &SourceImage) -> Result<Vec<u8>> {
        crate::encode::encode(image, self)
    }

    /// Validate the configuration against libwebp.
    pub fn validate(&self) -> Result<()> {
        let _ = self.to_libwebp()?;
        Ok(())
    }

    pub(crate) fn to_libwebp(&self) -> Result<libwebp_sys::WebPConfig> {
        let mut config =
            libwebp_sys::WebPConfig::new_with_preset(self.preset.to_libwebp(), self.quality)
                .map_err(|_| at!(Error::InvalidConfig("failed to initialize config".into())))?;

        config.lossless = 0;
        config.method = self.method as i32;
        config.alpha_quality = self.alpha_quality as i32;
        config.exact = self.exact as i32;
        config.use_sharp_yuv = self.use_sharp_yuv as i32;

        if unsafe { libwebp_sys::WebPValidateConfig(&config) } == 0 {
            return Err(at!(Error::InvalidConfig("config validation failed".into())));
        }

        Ok(config)
    }

    /// Get the quality setting.
    #[must_use]
    pub fn get_quality(&self) -> f32 {
        self.quality
    }

    /// Get the preset.
    #[must_use]
    pub fn get_preset(&self) -> Preset {
        self.preset
    }

    /// Get the method (quality/speed tradeoff).
    #[must_use]
    pub fn get_method(&self) -> u8 {
        self.method
    }

    /// Whether the source ICC profile is carried over.
    #[must_use]
    pub fn keeps_icc(&self) -> bool {
        self.keep_icc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_is_clamped() {
        assert_eq!(EncoderConfig::new().quality(150.0).get_quality(), 100.0);
        assert_eq!(EncoderConfig::new().quality(-3.0).get_quality(), 0.0);
        assert_eq!(EncoderConfig::new().quality(f32::NAN).get_quality(), 75.0);
    }

    #[test]
    fn test_method_is_clamped() {
        assert_eq!(EncoderConfig::new().method(9).get_method(), 6);
    }

    #[test]
    fn test_alpha_quality_is_clamped() {
        let config = EncoderConfig::new().alpha_quality(200);
        assert_eq!(config.alpha_quality, 100);
        assert_eq!(config.to_libwebp().unwrap().alpha_quality, 100);
    }

    #[test]
    fn test_alpha_and_yuv_flags_reach_libwebp() {
        let config = EncoderConfig::new()
            .alpha_quality(40)
            .exact(true)
            .sharp_yuv(true);
        let webp_config = config.to_libwebp().unwrap();
        assert_eq!(webp_config.alpha_quality, 40);
        assert_eq!(webp_config.exact, 1);
        assert_eq!(webp_config.use_sharp_yuv, 1);
        assert_eq!(webp_config.lossless, 0);

        let pixels = vec![rgb::RGBA8::new(200, 10, 10, 0); 8 * 8];
        let source = SourceImage::from_rgba(imgref::ImgVec::new(pixels, 8, 8));
        let webp = config.encode(&source).unwrap();
        assert_eq!(crate::ImageInfo::from_webp(&webp).unwrap().width, 8);
    }

    #[test]
    fn test_defaults_validate() {
        let config = EncoderConfig::new();
        assert!(config.keeps_icc());
        assert_eq!(config.get_preset(), Preset::Default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_every_preset_validates() {
        for preset in [
            Preset::Default,
            Preset::Picture,
            Preset::Photo,
            Preset::Drawing,
            Preset::Icon,
            Preset::Text,
        ] {
            let config = EncoderConfig::new().preset(preset).quality(95.0);
            assert!(config.validate().is_ok(), "{:?} failed", preset);
        }
    }
}
