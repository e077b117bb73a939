//! Capabilities shared by all descriptors.
//!
//! - [`Source`]: anything that can describe a location
//! - [`SelfCheckingSource`]: a source that knows whether it is still valid and when it changed
//! - [`ReflectorSource`]: a self-checking source backed by a declaration handle

use crate::error::{Result, SourceError};
use crate::record::SourceRecord;
use sourcemap_reflect::Reflection;
use std::any::Any;
use std::fmt;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// A descriptor of a code location.
///
/// Implementations outside this crate are supported by the
/// [`DefaultSourceChecker`](crate::check::DefaultSourceChecker), which dispatches on the
/// concrete type through [`Source::as_any`].
pub trait Source: fmt::Debug + Any {
    /// Human-readable description, e.g. `App\Model->save()` or `src/app.php:12:5`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidSource`] if the descriptor was restored in a failed state.
    fn describe(&self) -> Result<String>;

    /// Short name of the concrete type, used in diagnostics.
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    /// `Some` if the source can validate itself.
    fn as_self_checking(&self) -> Option<&dyn SelfCheckingSource> {
        None
    }

    /// Persistable identity of the source.
    ///
    /// Sources without a persisted form keep the default, which fails with
    /// [`SourceError::Unsupported`].
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidSource`] if the descriptor was restored in a failed state.
    fn to_record(&self) -> Result<SourceRecord> {
        Err(SourceError::unsupported(self.type_name()))
    }
}

/// A source that reports its own validity and last change.
pub trait SelfCheckingSource: Source {
    /// Whether the described location still exists. Never fails.
    fn is_valid(&self) -> bool;

    /// Modification time of the file backing the location.
    ///
    /// Built-in declarations, which have no file, report [`UNIX_EPOCH`].
    fn last_change(&self) -> Result<SystemTime>;
}

/// A self-checking source backed by a declaration handle.
pub trait ReflectorSource: SelfCheckingSource {
    /// The handle of the described declaration.
    fn reflection(&self) -> Result<Reflection>;
}

/// Modification time of a declaring file, [`UNIX_EPOCH`] when there is none.
pub(crate) fn declared_at(file: Option<&Path>) -> Result<SystemTime> {
    match file {
        Some(path) => modified_at(path),
        None => Ok(UNIX_EPOCH),
    }
}

pub(crate) fn modified_at(path: &Path) -> Result<SystemTime> {
    std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(|e| SourceError::io(path, e))
}
