//! Error types for rewebp operations.

use core::fmt;
use std::io;
use std::path::Path;
use whereat::At;

/// Result type for rewebp operations.
///
/// Errors carry the source location they were raised at.
pub type Result<T> = core::result::Result<T, At<Error>>;

/// Error type for rewebp operations.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Reading the source or writing the destination failed.
    Io {
        /// Kind reported by the operating system.
        kind: io::ErrorKind,
        /// Human-readable description, including the path when known.
        message: String,
    },
    /// The source file was recognised but could not be decoded.
    Decode(String),
    /// The source format is unknown or not compiled in.
    UnsupportedFormat(String),
    /// Invalid input parameters (dimensions, buffer size, etc.)
    InvalidInput(String),
    /// Configuration validation failed
    InvalidConfig(String),
    /// Encoding failed
    EncodeFailed(EncodingError),
    /// WebP inspection failed
    DecodeFailed(DecodingError),
    /// Mux/demux operation failed
    MuxError(MuxError),
    /// Memory allocation failed
    OutOfMemory,
    /// Invalid WebP data
    InvalidWebP,
}

impl Error {
    /// Build an I/O error that names the path involved.
    pub(crate) fn io(err: &io::Error, path: &Path) -> Self {
        Error::Io {
            kind: err.kind(),
            message: format!("{}: {}", path.display(), err),
        }
    }

    /// Whether this error means a file did not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::Io {
                kind: io::ErrorKind::NotFound,
                ..
            }
        )
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::from(e),
            image::ImageError::Unsupported(e) => Error::UnsupportedFormat(e.to_string()),
            image::ImageError::Limits(e) => Error::InvalidInput(e.to_string()),
            image::ImageError::Parameter(e) => Error::InvalidInput(e.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io { message, .. } => write!(f, "I/O error: {}", message),
            Error::Decode(msg) => write!(f, "cannot decode source image: {}", msg),
            Error::UnsupportedFormat(msg) => write!(f, "unsupported source format: {}", msg),
            Error::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            Error::EncodeFailed(e) => write!(f, "encode failed: {}", e),
            Error::DecodeFailed(e) => write!(f, "decode failed: {}", e),
            Error::MuxError(e) => write!(f, "mux error: {}", e),
            Error::OutOfMemory => write!(f, "out of memory"),
            Error::InvalidWebP => write!(f, "invalid WebP data"),
        }
    }
}

impl std::error::Error for Error {}

/// Encoding error codes from libwebp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum EncodingError {
    /// No error
    Ok = 0,
    /// Memory allocation error
    OutOfMemory = 1,
    /// Bitstream out of memory
    BitstreamOutOfMemory = 2,
    /// NULL parameter
    NullParameter = 3,
    /// Invalid configuration
    InvalidConfiguration = 4,
    /// Bad dimension (width or height is 0 or > 16383)
    BadDimension = 5,
    /// Partition is bigger than 512k
    Partition0Overflow = 6,
    /// Partition is bigger than 16M
    PartitionOverflow = 7,
    /// Bad write callback
    BadWrite = 8,
    /// File is bigger than 4G
    FileTooBig = 9,
    /// User abort
    UserAbort = 10,
    /// Last error (unknown)
    Last = 11,
}

impl From<i32> for EncodingError {
    fn from(code: i32) -> Self {
        match code {
            0 => EncodingError::Ok,
            1 => EncodingError::OutOfMemory,
            2 => EncodingError::BitstreamOutOfMemory,
            3 => EncodingError::NullParameter,
            4 => EncodingError::InvalidConfiguration,
            5 => EncodingError::BadDimension,
            6 => EncodingError::Partition0Overflow,
            7 => EncodingError::PartitionOverflow,
            8 => EncodingError::BadWrite,
            9 => EncodingError::FileTooBig,
            10 => EncodingError::UserAbort,
            _ => EncodingError::Last,
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            EncodingError::Ok => "ok",
            EncodingError::OutOfMemory => "out of memory",
            EncodingError::BitstreamOutOfMemory => "bitstream out of memory",
            EncodingError::NullParameter => "null parameter",
            EncodingError::InvalidConfiguration => "invalid configuration",
            EncodingError::BadDimension => "bad dimension",
            EncodingError::Partition0Overflow => "partition0 overflow",
            EncodingError::PartitionOverflow => "partition overflow",
            EncodingError::BadWrite => "bad write",
            EncodingError::FileTooBig => "file too big",
            EncodingError::UserAbort => "user abort",
            EncodingError::Last => "unknown error",
        };
        f.write_str(msg)
    }
}

/// Status codes libwebp reports when inspecting a bitstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DecodingError {
    /// No error
    Ok = 0,
    /// Memory allocation error
    OutOfMemory = 1,
    /// Invalid parameter
    InvalidParam = 2,
    /// Bitstream error
    BitstreamError = 3,
    /// Unsupported feature
    UnsupportedFeature = 4,
    /// Suspended (need more data)
    Suspended = 5,
    /// User abort
    UserAbort = 6,
    /// Not enough data
    NotEnoughData = 7,
}

impl From<i32> for DecodingError {
    fn from(code: i32) -> Self {
        match code {
            0 => DecodingError::Ok,
            1 => DecodingError::OutOfMemory,
            2 => DecodingError::InvalidParam,
            3 => DecodingError::BitstreamError,
            4 => DecodingError::UnsupportedFeature,
            5 => DecodingError::Suspended,
            6 => DecodingError::UserAbort,
            _ => DecodingError::NotEnoughData,
        }
    }
}

impl fmt::Display for DecodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DecodingError::Ok => "ok",
            DecodingError::OutOfMemory => "out of memory",
            DecodingError::InvalidParam => "invalid param",
            DecodingError::BitstreamError => "bitstream error",
            DecodingError::UnsupportedFeature => "unsupported feature",
            DecodingError::Suspended => "suspended",
            DecodingError::UserAbort => "user abort",
            DecodingError::NotEnoughData => "not enough data",
        };
        f.write_str(msg)
    }
}

/// Mux error codes from libwebp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum MuxError {
    /// Operation completed successfully
    Ok = 1,
    /// Object not present
    NotFound = 0,
    /// Invalid argument
    InvalidArgument = -1,
    /// Bad data
    BadData = -2,
    /// Memory error
    MemoryError = -3,
    /// Not enough data
    NotEnoughData = -4,
}

impl From<i32> for MuxError {
    fn from(code: i32) -> Self {
        match code {
            1 => MuxError::Ok,
            0 => MuxError::NotFound,
            -1 => MuxError::InvalidArgument,
            -2 => MuxError::BadData,
            -3 => MuxError::MemoryError,
            _ => MuxError::NotEnoughData,
        }
    }
}

impl fmt::Display for MuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MuxError::Ok => "ok",
            MuxError::NotFound => "not found",
            MuxError::InvalidArgument => "invalid argument",
            MuxError::BadData => "bad data",
            MuxError::MemoryError => "memory error",
            MuxError::NotEnoughData => "not enough data",
        };
        f.write_str(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_keeps_kind_and_path() {
        let err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let e = Error::io(&err, Path::new("missing.jpg"));
        assert!(e.is_not_found());
        assert!(e.to_string().contains("missing.jpg"));
    }

    #[test]
    fn test_permission_denied_is_not_not_found() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(!Error::from(err).is_not_found());
    }

    #[test]
    fn test_encoding_error_codes() {
        assert_eq!(EncodingError::from(5), EncodingError::BadDimension);
        assert_eq!(EncodingError::from(99), EncodingError::Last);
        assert_eq!(MuxError::from(-2), MuxError::BadData);
        assert_eq!(DecodingError::from(3), DecodingError::BitstreamError);
    }
}
