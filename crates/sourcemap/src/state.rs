use crate::any::AnySource;
use crate::error::{Result, SourceError};
use log::{debug, trace};
use sourcemap_reflect::{ReflectionError, ReflectionResult};

/// Handle of a descriptor, or the lookup error that prevented restoring it.
///
/// Decided once, when the descriptor is created or restored.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Resolution<H> {
    Valid(H),
    Failed(ReflectionError),
}

impl<H> Resolution<H> {
    pub(crate) fn lookup(kind: &str, result: ReflectionResult<H>) -> Self {
        match result {
            Ok(handle) => {
                trace!("Restored {kind}");
                Self::Valid(handle)
            }
            Err(e) => {
                debug!("Restoring {kind} failed: {e}");
                Self::Failed(e)
            }
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// The handle, or the captured failure replayed as [`SourceError::InvalidSource`].
    pub(crate) fn get(&self, offender: impl FnOnce() -> AnySource) -> Result<&H> {
        match self {
            Self::Valid(handle) => Ok(handle),
            Self::Failed(e) => Err(SourceError::deserialization_failed(offender(), e.clone())),
        }
    }
}
