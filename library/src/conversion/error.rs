use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("io problem while converting mesh: {what}")]
    IoError { what: String },
    #[error("format problem while converting mesh: {what}")]
    FormatError { what: String },
}

impl ConversionError {
    #[must_use]
    pub(crate) fn io(from: std::io::Error) -> Self {
        ConversionError::IoError { what: from.to_string() }
    }

    #[must_use]
    pub(crate) fn format(what: impl Into<String>) -> Self {
        ConversionError::FormatError { what: what.into() }
    }
}
