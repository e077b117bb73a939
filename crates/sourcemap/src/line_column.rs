use crate::error::Result;
use crate::file::FileSource;
use crate::record::SourceRecord;
use crate::source::{SelfCheckingSource, Source};
use std::any::Any;
use std::fmt;
use std::time::SystemTime;

/// A position inside a file, rendered `file:line[:column]`.
///
/// The position itself is not validated; validity is that of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineColumnSource {
    file: FileSource,
    line: usize,
    column: Option<usize>,
}

impl LineColumnSource {
    pub fn new(file: FileSource, line: usize, column: Option<usize>) -> Self {
        Self { file, line, column }
    }

    pub fn file(&self) -> &FileSource {
        &self.file
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> Option<usize> {
        self.column
    }
}

impl fmt::Display for LineColumnSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)?;
        if let Some(column) = self.column {
            write!(f, ":{column}")?;
        }
        Ok(())
    }
}

impl Source for LineColumnSource {
    fn describe(&self) -> Result<String> {
        Ok(self.to_string())
    }

    fn type_name(&self) -> &'static str {
        "LineColumnSource"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_self_checking(&self) -> Option<&dyn SelfCheckingSource> {
        Some(self)
    }

    fn to_record(&self) -> Result<SourceRecord> {
        Ok(SourceRecord::LineColumn {
            file: self.file.record(),
            line: self.line,
            column: self.column,
        })
    }
}

impl SelfCheckingSource for LineColumnSource {
    fn is_valid(&self) -> bool {
        self.file.is_valid()
    }

    fn last_change(&self) -> Result<SystemTime> {
        self.file.last_change()
    }
}
