use std::path::PathBuf;

/// Crate-wide result alias.
pub type PicoutResult<T> = Result<T, PicoutError>;

/// Failure while turning a session document into an [`crate::Input`].
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    /// The document file could not be read.
    #[error("Cannot read XML file '{}': {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a well-formed XML document.
    #[error("Cannot read XML content in the file: {0}")]
    MalformedDocument(String),
}

impl ParseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDocument(msg.into())
    }
}

/// Consistency failure of a parsed session, in the order the checks run.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The document lists no `pic` entries.
    #[error("There is no source images")]
    NoSourceImages,

    /// At least one source image differs in size from the first one.
    #[error("Source image size mismatch")]
    SizeMismatch,

    /// The common source size has zero width or height.
    #[error("Source image size is empty")]
    EmptySourceSize,

    /// The frame rect does not overlap the source images.
    #[error("Real frame rect is empty")]
    EmptyFrameRect,
}

/// Top-level error returned by the session API.
#[derive(thiserror::Error, Debug)]
pub enum PicoutError {
    /// Reading or parsing the document failed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The parsed session is inconsistent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Collaborator failure (encoding, output directories).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PicoutError {
    /// The validation failure behind this error, if any.
    pub fn as_validation(&self) -> Option<ValidationError> {
        match self {
            Self::Validation(e) => Some(*e),
            _ => None,
        }
    }
}

impl From<PicoutError> for String {
    fn from(error: PicoutError) -> Self {
        error.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
