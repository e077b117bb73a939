//! Filesystem locations.

use crate::any::AnySource;
use crate::error::{Result, SourceError};
use crate::message::Message;
use crate::path::make_relative;
use crate::record::{FileRecord, SourceRecord};
use crate::source::{modified_at, SelfCheckingSource, Source};
use std::any::Any;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A file, optionally narrowed to a line and column.
///
/// Lines and columns are 1-based. A column counts bytes within the line, the line terminator
/// included, so column 1 of an empty line is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    full_path: PathBuf,
    base_path: Option<PathBuf>,
    line: Option<usize>,
    column: Option<usize>,
}

impl FileSource {
    /// Describe `full_path`, rendered relative to `base_path` when one is given.
    ///
    /// A column without a line refers to the first line.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidArgument`] if the file does not exist or does not have
    /// the requested line or column.
    pub fn new(
        full_path: impl Into<PathBuf>,
        base_path: Option<&Path>,
        line: Option<usize>,
        column: Option<usize>,
    ) -> Result<Self> {
        let source = Self {
            full_path: full_path.into(),
            base_path: base_path.map(Path::to_path_buf),
            line: line.or(column.map(|_| 1)),
            column,
        };

        source.check().map_err(SourceError::invalid_argument)?;
        Ok(source)
    }

    /// Rebuild from a record without touching the filesystem.
    pub fn restore(record: FileRecord) -> Self {
        Self {
            full_path: record.full_path,
            base_path: record.base_path,
            line: record.line.or(record.column.map(|_| 1)),
            column: record.column,
        }
    }

    pub fn full_path(&self) -> &Path {
        &self.full_path
    }

    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }

    /// Path relative to the base path, `None` without a base path.
    pub fn relative_path(&self) -> Option<String> {
        self.base_path
            .as_deref()
            .map(|base| make_relative(&self.full_path, base))
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn column(&self) -> Option<usize> {
        self.column
    }

    pub fn record(&self) -> FileRecord {
        FileRecord {
            full_path: self.full_path.clone(),
            base_path: self.base_path.clone(),
            line: self.line,
            column: self.column,
        }
    }

    fn check(&self) -> std::result::Result<(), Message> {
        let path = self.full_path.display();

        if !self.full_path.is_file() {
            return Err(Message::new(format!("File '{path}' does not exist.")));
        }

        let Some(line) = self.line else {
            return Ok(());
        };

        let unreadable =
            |e: std::io::Error| Message::new(format!("File '{path}' could not be read: {e}."));
        let mut reader = BufReader::new(File::open(&self.full_path).map_err(unreadable)?);

        // Lines keep their terminator, so it counts as a column
        let mut line_content = Vec::new();
        let mut current = 0;
        while current < line {
            line_content.clear();
            if reader
                .read_until(b'\n', &mut line_content)
                .map_err(unreadable)?
                == 0
            {
                break;
            }
            current += 1;
        }

        if line == 0 || current < line {
            return Err(Message::new(format!(
                "File '{path}' does not have 'line {line}'."
            )));
        }

        if let Some(column) = self.column {
            if column == 0 || column > line_content.len() {
                return Err(Message::new(format!(
                    "File '{path}' at 'line {line}' does not have 'column {column}'."
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for FileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.relative_path() {
            Some(relative) => write!(f, ".../{relative}")?,
            None => write!(f, "{}", self.full_path.display())?,
        }
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(column) = self.column {
            write!(f, ":{column}")?;
        }
        Ok(())
    }
}

impl Source for FileSource {
    /// Never fails.
    fn describe(&self) -> Result<String> {
        Ok(self.to_string())
    }

    fn type_name(&self) -> &'static str {
        "FileSource"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_self_checking(&self) -> Option<&dyn SelfCheckingSource> {
        Some(self)
    }

    fn to_record(&self) -> Result<SourceRecord> {
        Ok(SourceRecord::File(self.record()))
    }
}

impl SelfCheckingSource for FileSource {
    fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    fn last_change(&self) -> Result<SystemTime> {
        self.check()
            .map_err(|message| SourceError::invalid_source(AnySource::File(self.clone()), message))?;
        modified_at(&self.full_path)
    }
}
