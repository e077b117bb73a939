//! Validity and last-change queries for arbitrary sources.
//!
//! Self-checking sources answer for themselves. Anything else is handed to the first
//! registered [`SourceCheckHandler`] that declares support for its type.

mod default;

pub use default::DefaultSourceChecker;

use crate::error::Result;
use crate::source::Source;
use std::any::Any;
use std::fmt;
use std::time::SystemTime;

/// Answers validity questions about any source.
pub trait SourceChecker {
    fn is_valid(&self, source: &dyn Source) -> Result<bool>;

    fn last_change(&self, source: &dyn Source) -> Result<SystemTime>;
}

/// Checks sources of the types it declares in [`SourceCheckHandler::supported`].
///
/// Handlers may return [`SourceError::Unsupported`](crate::SourceError::Unsupported) when
/// given a source they did not declare.
pub trait SourceCheckHandler {
    fn supported(&self) -> Vec<SupportedType>;

    fn is_valid(&self, source: &dyn Source) -> Result<bool>;

    fn last_change(&self, source: &dyn Source) -> Result<SystemTime>;
}

/// A source type a handler accepts.
#[derive(Clone, Copy)]
pub struct SupportedType {
    name: &'static str,
    matches: fn(&dyn Source) -> bool,
}

impl SupportedType {
    /// Sources of the concrete type `T`.
    pub fn of<T: Source>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            matches: is_type::<T>,
        }
    }

    /// Any source that checks itself.
    pub fn self_checking() -> Self {
        Self {
            name: "SelfCheckingSource",
            matches: is_self_checking,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, source: &dyn Source) -> bool {
        (self.matches)(source)
    }
}

impl fmt::Debug for SupportedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SupportedType").field(&self.name).finish()
    }
}

fn is_type<T: Any>(source: &dyn Source) -> bool {
    source.as_any().is::<T>()
}

fn is_self_checking(source: &dyn Source) -> bool {
    source.as_self_checking().is_some()
}
