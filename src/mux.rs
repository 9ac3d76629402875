//! ICC profile chunk handling through libwebp's mux/demux API.

use crate::error::{Error, MuxError, Result};
use core::ffi::c_char;
use core::mem::MaybeUninit;
use whereat::*;

const ICCP: &[u8; 4] = b"ICCP";

/// Extract the ICC profile from WebP data.
///
/// Returns `None` if no ICC profile is present.
///
/// # Example
///
/// ```rust,no_run
/// let webp = std::fs::read("Rep_Club_Gym.webp").unwrap();
/// if let Some(icc) = rewebp::get_icc_profile(&webp)? {
///     println!("ICC profile: {} bytes", icc.len());
/// }
/// # Ok::<(), rewebp::At<rewebp::Error>>(())
/// ```
pub fn get_icc_profile(webp_data: &[u8]) -> Result<Option<Vec<u8>>> {
    let data = libwebp_sys::WebPData {
        bytes: webp_data.as_ptr(),
        size: webp_data.len(),
    };
    let demux = unsafe {
        libwebp_sys::WebPDemuxInternal(
            &data,
            0,
            core::ptr::null_mut(),
            libwebp_sys::WEBP_DEMUX_ABI_VERSION as i32,
        )
    };

    if demux.is_null() {
        return Err(at!(Error::InvalidWebP));
    }

    let mut chunk_iter = MaybeUninit::<libwebp_sys::WebPChunkIterator>::zeroed();
    let found = unsafe {
        libwebp_sys::WebPDemuxGetChunk(
            demux,
            ICCP.as_ptr() as *const c_char,
            1,
            chunk_iter.as_mut_ptr(),
        )
    };

    let result = if found != 0 {
        let mut chunk_iter = unsafe { chunk_iter.assume_init() };
        let profile = if !chunk_iter.chunk.bytes.is_null() && chunk_iter.chunk.size > 0 {
            Some(
                unsafe { core::slice::from_raw_parts(chunk_iter.chunk.bytes, chunk_iter.chunk.size) }
                    .to_vec(),
            )
        } else {
            None
        };
        unsafe { libwebp_sys::WebPDemuxReleaseChunkIterator(&mut chunk_iter) };
        profile
    } else {
        None
    };

    unsafe { libwebp_sys::WebPDemuxDelete(demux) };

    Ok(result)
}

/// Embed an ICC profile into WebP data, replacing any existing one.
pub fn embed_icc(webp_data: &[u8], icc_profile: &[u8]) -> Result<Vec<u8>> {
    if icc_profile.is_empty() {
        return Err(at!(Error::InvalidInput("empty ICC profile".into())));
    }

    let data = libwebp_sys::WebPData {
        bytes: webp_data.as_ptr(),
        size: webp_data.len(),
    };
    let mux = unsafe {
        libwebp_sys::WebPMuxCreateInternal(&data, 1, libwebp_sys::WEBP_MUX_ABI_VERSION as i32)
    };

    if mux.is_null() {
        return Err(at!(Error::MuxError(MuxError::BadData)));
    }

    let chunk = libwebp_sys::WebPData {
        bytes: icc_profile.as_ptr(),
        size: icc_profile.len(),
    };
    let err = unsafe { libwebp_sys::WebPMuxSetChunk(mux, ICCP.as_ptr() as *const c_char, &chunk, 1) };

    if err != libwebp_sys::WebPMuxError::WEBP_MUX_OK {
        unsafe { libwebp_sys::WebPMuxDelete(mux) };
        return Err(at!(Error::MuxError(MuxError::from(err as i32))));
    }

    let mut output_data = libwebp_sys::WebPData::default();
    let err = unsafe { libwebp_sys::WebPMuxAssemble(mux, &mut output_data) };
    unsafe { libwebp_sys::WebPMuxDelete(mux) };

    if err != libwebp_sys::WebPMuxError::WEBP_MUX_OK {
        return Err(at!(Error::MuxError(MuxError::from(err as i32))));
    }
    if output_data.bytes.is_null() || output_data.size == 0 {
        return Err(at!(Error::MuxError(MuxError::MemoryError)));
    }

    let result = unsafe {
        let vec = core::slice::from_raw_parts(output_data.bytes, output_data.size).to_vec();
        libwebp_sys::WebPDataClear(&mut output_data);
        vec
    };

    Ok(result)
}
