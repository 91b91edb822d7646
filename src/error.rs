pub type DekitResult<T> = std::result::Result<T, DekitError>;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum DekitError {
    /// A value handed to a constructor or generator is out of range or
    /// structurally wrong. This is a construction bug in the caller, never a
    /// condition worth retrying.
    #[error("Invalid parameter: {message}")]
    InvalidParam { message: String },
    /// The file content does not match the expected binary layout.
    #[error("Invalid file format: {filename}")]
    InvalidFileFormat { filename: String },
    #[error("I/O error on {filename}: {message}")]
    Io { filename: String, message: String },
}

impl DekitError {
    pub fn invalid_param<T: Into<String>>(message: T) -> Self {
        Self::InvalidParam {
            message: message.into(),
        }
    }

    pub fn invalid_file_format<T: AsRef<str>>(filename: T) -> Self {
        Self::InvalidFileFormat {
            filename: filename.as_ref().to_string(),
        }
    }

    pub fn io<T: AsRef<str>>(filename: T, error: &std::io::Error) -> Self {
        Self::Io {
            filename: filename.as_ref().to_string(),
            message: error.to_string(),
        }
    }
}
