//! Error types for lexcloud.

use thiserror::Error;

/// Main error type for lexcloud operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Text extraction failed
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractError),

    /// Cloud layout failed
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Export serialization failed
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Text extraction errors.
///
/// All variants are terminal for the current run; nothing downstream of a
/// failed extraction is produced.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The declared upload type is not one of the accepted formats. Raised
    /// before any extraction is attempted.
    #[error("unsupported file type: {0}")]
    UnsupportedType(String),

    /// The bytes could not be decoded as text (invalid UTF-8).
    #[error("decode error: {0}")]
    Decode(String),

    /// The bytes are not a well-formed document of the declared type.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Cloud layout errors.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("layout failed: {0}")]
    Failed(String),
}

/// Export errors.
///
/// An export failure leaves the already-computed frequency table and cloud
/// untouched; only the export step is aborted.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The requested format token is not in the recognized set.
    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Serialization to the chosen format failed.
    #[error("encode error: {0}")]
    Encode(String),
}

/// Result type alias for lexcloud operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    // ========== ExtractError Tests ==========

    #[test]
    fn test_extract_error_unsupported_type_display() {
        let err = ExtractError::UnsupportedType("application/json".to_string());
        assert_eq!(err.to_string(), "unsupported file type: application/json");
    }

    #[test]
    fn test_extract_error_decode_display() {
        let err = ExtractError::Decode("invalid UTF-8 at byte 7".to_string());
        assert_eq!(err.to_string(), "decode error: invalid UTF-8 at byte 7");
    }

    #[test]
    fn test_extract_error_parse_display() {
        let err = ExtractError::Parse("not a PDF".to_string());
        assert_eq!(err.to_string(), "parse error: not a PDF");
    }

    // ========== ExportError Tests ==========

    #[test]
    fn test_export_error_unsupported_format_display() {
        let err = ExportError::UnsupportedFormat("bmp".to_string());
        assert_eq!(err.to_string(), "unsupported export format: bmp");
    }

    #[test]
    fn test_export_error_encode_display() {
        let err = ExportError::Encode("jpeg encoder failed".to_string());
        assert_eq!(err.to_string(), "encode error: jpeg encoder failed");
    }

    // ========== Main Error Tests ==========

    #[test]
    fn test_error_from_extract_error() {
        let extract_err = ExtractError::UnsupportedType("video/mp4".to_string());
        let err: Error = extract_err.into();
        assert!(matches!(err, Error::Extraction(_)));
        assert!(err.to_string().contains("video/mp4"));
    }

    #[test]
    fn test_error_from_render_error() {
        let render_err = RenderError::Failed("empty canvas".to_string());
        let err: Error = render_err.into();
        assert!(matches!(err, Error::Render(_)));
        assert!(err.to_string().contains("empty canvas"));
    }

    #[test]
    fn test_error_from_export_error() {
        let export_err = ExportError::UnsupportedFormat("tiff".to_string());
        let err: Error = export_err.into();
        assert!(matches!(err, Error::Export(_)));
        assert!(err.to_string().contains("tiff"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_config_display() {
        let err = Error::Config("width 30 out of range".to_string());
        assert_eq!(err.to_string(), "config error: width 30 out of range");
    }

    #[test]
    fn test_result_type_alias() {
        fn ok_fn() -> Result<u32> {
            Ok(7)
        }

        fn err_fn() -> Result<u32> {
            Err(Error::Config("bad".to_string()))
        }

        assert!(ok_fn().is_ok());
        assert!(err_fn().is_err());
    }
}
