//! Sources wrapping exactly one declaration-backed source.
//!
//! A decorator never wraps another decorator, nor a source that is not backed by a
//! declaration. Creating such a decorator fails with [`SourceError::InvalidArgument`];
//! restoring one from a record succeeds, and the violation is reported by every fallible
//! accessor as [`SourceError::InvalidSource`].

mod annotation;
mod attribute;
mod empty;

pub use annotation::AnnotationSource;
pub use attribute::AttributeSource;
pub use empty::EmptyWrapperSource;

use crate::any::AnySource;
use crate::error::{Result, SourceError};
use crate::message::Message;
use crate::record::SourceRecord;
use crate::source::Source;
use log::debug;
use sourcemap_reflect::Reflector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Creating,
    Deserializing,
}

impl Phase {
    /// Context line naming the decorator being built.
    pub(crate) fn context(self, decorator: &str) -> String {
        let action = match self {
            Self::Creating => "Creating",
            Self::Deserializing => "Deserializing",
        };
        format!("{action} '{decorator}'.")
    }
}

/// Target of a decorator, with the wrapping violation found while restoring it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Wrapped {
    target: Box<AnySource>,
    violation: Option<Message>,
}

impl Wrapped {
    pub(crate) fn create(decorator: &str, target: AnySource) -> Result<Self> {
        match wrapping_violation(decorator, &target, Phase::Creating) {
            Some(message) => Err(SourceError::invalid_argument(message)),
            None => Ok(Self {
                target: Box::new(target),
                violation: None,
            }),
        }
    }

    pub(crate) fn restore(decorator: &str, target: SourceRecord, reflector: &dyn Reflector) -> Self {
        let target = AnySource::restore(target, reflector);
        let violation = wrapping_violation(decorator, &target, Phase::Deserializing);
        if violation.is_some() {
            debug!(
                "Restored {decorator} wraps '{}', deferring the error",
                target.type_name()
            );
        }

        Self {
            target: Box::new(target),
            violation,
        }
    }

    pub(crate) fn target(&self) -> &AnySource {
        &self.target
    }

    pub(crate) fn is_intact(&self) -> bool {
        self.violation.is_none()
    }

    /// The target, unless the decorator was restored around a source it cannot wrap.
    pub(crate) fn checked(&self, offender: impl FnOnce() -> AnySource) -> Result<&AnySource> {
        match &self.violation {
            None => Ok(&self.target),
            Some(message) => Err(SourceError::invalid_source(offender(), message.clone())),
        }
    }

    pub(crate) fn record(&self, offender: impl FnOnce() -> AnySource) -> Result<Box<SourceRecord>> {
        Ok(Box::new(self.checked(offender)?.to_record()?))
    }
}

fn wrapping_violation(decorator: &str, target: &AnySource, phase: Phase) -> Option<Message> {
    let target_type = target.type_name();

    let problem = if target.is_wrapper() {
        format!(
            "Given source '{target_type}' is a decorator and cannot be wrapped in another decorator."
        )
    } else if target.as_reflector().is_none() {
        format!(
            "Given source '{target_type}' is not backed by a declaration and cannot be wrapped in '{decorator}'."
        )
    } else {
        return None;
    };

    Some(Message::new(problem).with_context(phase.context(decorator)))
}
