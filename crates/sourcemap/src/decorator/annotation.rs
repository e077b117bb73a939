use super::{Phase, Wrapped};
use crate::any::AnySource;
use crate::error::{Result, SourceError};
use crate::message::Message;
use crate::record::SourceRecord;
use crate::source::{ReflectorSource, SelfCheckingSource, Source};
use sourcemap_reflect::{Reflection, Reflector};
use std::any::Any;
use std::time::SystemTime;

const NAME: &str = "AnnotationSource";

/// The doc comment of a declaration, rendered `<target> annotation`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSource {
    wrapped: Wrapped,
}

impl AnnotationSource {
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidArgument`] if `target` is a decorator, is not backed by a
    /// declaration, or its declaration has no doc comment.
    pub fn new(target: impl Into<AnySource>) -> Result<Self> {
        let wrapped = Wrapped::create(NAME, target.into())?;
        if !has_doc_comment(&wrapped.target().reflection()?) {
            return Err(SourceError::invalid_argument(missing(Phase::Creating)));
        }
        Ok(Self { wrapped })
    }

    pub fn restore(target: SourceRecord, reflector: &dyn Reflector) -> Self {
        Self {
            wrapped: Wrapped::restore(NAME, target, reflector),
        }
    }

    pub fn target(&self) -> &AnySource {
        self.wrapped.target()
    }

    fn checked_target(&self) -> Result<&AnySource> {
        self.wrapped.checked(|| self.clone().into())
    }
}

fn has_doc_comment(reflection: &Reflection) -> bool {
    reflection.supports_doc_comment()
        && reflection
            .doc_comment()
            .is_some_and(|doc| !doc.trim().is_empty())
}

fn missing(phase: Phase) -> Message {
    Message::new("Targeted source does not have any annotations.").with_context(phase.context(NAME))
}

impl Source for AnnotationSource {
    /// Fails with [`SourceError::InvalidSource`] if the doc comment is gone.
    fn describe(&self) -> Result<String> {
        let target = self.checked_target()?;
        if !has_doc_comment(&target.reflection()?) {
            return Err(SourceError::invalid_source(
                self.clone(),
                missing(Phase::Deserializing),
            ));
        }
        Ok(format!("{} annotation", target.describe()?))
    }

    fn type_name(&self) -> &'static str {
        NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_self_checking(&self) -> Option<&dyn SelfCheckingSource> {
        Some(self)
    }

    fn to_record(&self) -> Result<SourceRecord> {
        Ok(SourceRecord::Annotation {
            target: self.wrapped.record(|| self.clone().into())?,
        })
    }
}

impl SelfCheckingSource for AnnotationSource {
    fn is_valid(&self) -> bool {
        let target = self.wrapped.target();
        self.wrapped.is_intact()
            && target.is_valid()
            && target.reflection().is_ok_and(|r| has_doc_comment(&r))
    }

    fn last_change(&self) -> Result<SystemTime> {
        self.checked_target()?.last_change()
    }
}

impl ReflectorSource for AnnotationSource {
    fn reflection(&self) -> Result<Reflection> {
        self.checked_target()?.reflection()
    }
}
