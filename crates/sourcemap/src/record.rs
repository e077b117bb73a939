//! Persisted form of descriptors.
//!
//! A descriptor is stored as the names that identify it, never as a live handle, so a
//! record can be restored in another process against a fresh [`Reflector`]. Records are
//! JSON objects tagged with `"type"`:
//!
//! ```json
//! {"type":"Method","class":"App\\Model","method":"save"}
//! ```

use crate::any::AnySource;
use crate::error::{Result, SourceError};
use crate::source::Source;
use log::trace;
use serde::{Deserialize, Serialize};
use sourcemap_reflect::Reflector;
use std::path::PathBuf;

/// Identity of a [`FileSource`](crate::FileSource).
///
/// Everything but the path is optional, so records written before lines and columns
/// were tracked still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub full_path: PathBuf,
    #[serde(default)]
    pub base_path: Option<PathBuf>,
    #[serde(default)]
    pub line: Option<usize>,
    #[serde(default)]
    pub column: Option<usize>,
}

/// Identity of any built-in descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SourceRecord {
    File(FileRecord),
    LineColumn {
        file: FileRecord,
        line: usize,
        #[serde(default)]
        column: Option<usize>,
    },
    Class {
        class: String,
    },
    Function {
        function: String,
    },
    Method {
        class: String,
        method: String,
    },
    Property {
        class: String,
        property: String,
    },
    ClassConstant {
        class: String,
        constant: String,
    },
    Parameter {
        #[serde(default)]
        class: Option<String>,
        function: String,
        parameter: String,
    },
    Annotation {
        target: Box<SourceRecord>,
    },
    Attribute {
        target: Box<SourceRecord>,
    },
    Empty {
        target: Box<SourceRecord>,
    },
}

impl SourceRecord {
    /// Name of the record's variant, as written to the `"type"` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::File(_) => "File",
            Self::LineColumn { .. } => "LineColumn",
            Self::Class { .. } => "Class",
            Self::Function { .. } => "Function",
            Self::Method { .. } => "Method",
            Self::Property { .. } => "Property",
            Self::ClassConstant { .. } => "ClassConstant",
            Self::Parameter { .. } => "Parameter",
            Self::Annotation { .. } => "Annotation",
            Self::Attribute { .. } => "Attribute",
            Self::Empty { .. } => "Empty",
        }
    }
}

/// Serialize a descriptor to JSON bytes.
///
/// # Errors
///
/// Fails if the descriptor was restored in a failed state or has no persisted form.
pub fn serialize(source: &dyn Source) -> Result<Vec<u8>> {
    let record = source.to_record()?;
    trace!("Serializing {} record", record.kind());
    serde_json::to_vec(&record)
        .map_err(|e| SourceError::serialization("Failed to encode source record", Some(e)))
}

/// Restore a descriptor from bytes produced by [`serialize`].
///
/// Declarations that no longer exist do not fail here; the descriptor is returned in a
/// failed state and reports the lookup error when used.
///
/// # Errors
///
/// Returns [`SourceError::Serialization`] if `bytes` is not a valid record.
pub fn deserialize(bytes: &[u8], reflector: &dyn Reflector) -> Result<AnySource> {
    let record: SourceRecord = serde_json::from_slice(bytes)
        .map_err(|e| SourceError::serialization("Failed to decode source record", Some(e)))?;
    Ok(AnySource::restore(record, reflector))
}
