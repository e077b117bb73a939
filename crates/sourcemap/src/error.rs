//! Error types for sourcemap operations.
//!
//! All fallible operations return [`Result<T>`]. Construction problems are reported as
//! [`SourceError::InvalidArgument`], problems of an existing descriptor as
//! [`SourceError::InvalidSource`] and checker misconfiguration as [`SourceError::InvalidState`].

use crate::any::AnySource;
use crate::message::Message;
use sourcemap_reflect::ReflectionError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for sourcemap operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// Error type for all descriptor operations.
#[derive(Error, Debug)]
pub enum SourceError {
    /// A descriptor could not be created from the given arguments
    #[error("{message}")]
    InvalidArgument {
        /// What was wrong with the arguments
        message: Message,
    },

    /// An existing descriptor cannot do what was asked of it
    #[error("{message}")]
    InvalidSource {
        /// The descriptor that failed
        offender: Box<AnySource>,
        /// What went wrong
        message: Message,
        /// Lookup error captured when the descriptor was restored
        #[source]
        cause: Option<ReflectionError>,
    },

    /// No way to answer the question was configured
    #[error("{message}")]
    InvalidState {
        /// What was missing
        message: Message,
    },

    /// A source was handed to code that cannot handle its type
    #[error("Source '{source_type}' is not supported here")]
    Unsupported {
        /// Name of the unsupported source type
        source_type: String,
    },

    /// Filesystem error while reading a declaring file
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// Serialized form could not be produced or read
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl SourceError {
    pub fn invalid_argument(message: Message) -> Self {
        Self::InvalidArgument { message }
    }

    pub fn invalid_source(offender: impl Into<AnySource>, message: Message) -> Self {
        Self::InvalidSource {
            offender: Box::new(offender.into()),
            message,
            cause: None,
        }
    }

    /// Replay a lookup error captured while restoring `offender`.
    pub fn deserialization_failed(offender: impl Into<AnySource>, cause: ReflectionError) -> Self {
        Self::InvalidSource {
            offender: Box::new(offender.into()),
            message: Message::new(format!(
                "Deserialization failed due to following error:\n{cause}"
            )),
            cause: Some(cause),
        }
    }

    pub fn invalid_state(message: Message) -> Self {
        Self::InvalidState { message }
    }

    pub fn unsupported(source_type: impl Into<String>) -> Self {
        Self::Unsupported {
            source_type: source_type.into(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn serialization(message: impl Into<String>, source: Option<serde_json::Error>) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// The failing descriptor of an [`SourceError::InvalidSource`].
    pub fn offender(&self) -> Option<&AnySource> {
        match self {
            Self::InvalidSource { offender, .. } => Some(offender),
            _ => None,
        }
    }

    /// The structured message, for the variants that carry one.
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::InvalidArgument { message }
            | Self::InvalidSource { message, .. }
            | Self::InvalidState { message } => Some(message),
            _ => None,
        }
    }
}
