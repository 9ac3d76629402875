//! # rewebp
//!
//! Re-encode a single image file as WebP.
//!
//! Source images are decoded with the `image` crate (whatever formats it was
//! built with) and encoded with libwebp via FFI. This crate provides:
//! - One-shot file conversion at a given quality
//! - Lossy WebP encoding of RGB and RGBA pixels
//! - ICC profile carry-over from the source
//! - WebP header inspection for verifying outputs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let report = rewebp::convert("gym_photo.jpg", "Rep_Club_Gym.webp", 95.0)?;
//! assert!(report.bytes_written > 0);
//! # Ok::<(), rewebp::At<rewebp::Error>>(())
//! ```
//!
//! ## Step by step
//!
//! ```rust,no_run
//! use rewebp::{EncoderConfig, ImageInfo, Preset};
//!
//! let source = rewebp::load("gym_photo.jpg")?;
//! let webp = EncoderConfig::new()
//!     .preset(Preset::Photo)
//!     .quality(95.0)
//!     .encode(&source)?;
//! let info = ImageInfo::from_webp(&webp)?;
//! assert_eq!(info.width, source.width());
//! # Ok::<(), rewebp::At<rewebp::Error>>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

mod config;
mod convert;
mod decode;
mod encode;
mod error;
mod mux;
mod types;

whereat::define_at_crate_info!();

pub use config::{EncoderConfig, Preset};
pub use convert::{convert, convert_with, ConvertReport};
pub use decode::{load, load_from_memory};
pub use encode::{encode, encode_rgb, encode_rgba};
pub use error::{DecodingError, EncodingError, Error, MuxError, Result};
pub use mux::{embed_icc, get_icc_profile};
pub use types::{BitstreamFormat, ImageInfo, SourceImage, SourcePixels};
pub use whereat::At;

/// libwebp encoder version as (major, minor, patch).
pub fn version() -> (u32, u32, u32) {
    let v = unsafe { libwebp_sys::WebPGetEncoderVersion() } as u32;
    ((v >> 16) & 0xff, (v >> 8) & 0xff, v & 0xff)
}
