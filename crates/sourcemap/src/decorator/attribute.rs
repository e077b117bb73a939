use super::{Phase, Wrapped};
use crate::any::AnySource;
use crate::error::{Result, SourceError};
use crate::message::Message;
use crate::record::SourceRecord;
use crate::source::{ReflectorSource, SelfCheckingSource, Source};
use sourcemap_reflect::{Reflection, Reflector};
use std::any::Any;
use std::time::SystemTime;

const NAME: &str = "AttributeSource";

/// The attributes of a declaration, rendered `<target> attribute`.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSource {
    wrapped: Wrapped,
}

impl AttributeSource {
    /// # Errors
    ///
    /// Returns [`SourceError::InvalidArgument`] if `target` is a decorator, is not backed by a
    /// declaration, or its declaration has no attributes.
    pub fn new(target: impl Into<AnySource>) -> Result<Self> {
        let wrapped = Wrapped::create(NAME, target.into())?;
        let reflection = wrapped.target().reflection()?;
        if !has_attributes(&reflection) {
            return Err(SourceError::invalid_argument(missing(
                Phase::Creating,
                &reflection,
            )));
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

fn has_attributes(reflection: &Reflection) -> bool {
    reflection
        .attributes()
        .is_some_and(|attributes| !attributes.is_empty())
}

fn missing(phase: Phase, reflection: &Reflection) -> Message {
    let message = Message::new("Targeted source does not have any attributes.")
        .with_context(phase.context(NAME));

    if reflection.attributes().is_none() {
        message.with_hint("Attributes are not supported by the reflected runtime.")
    } else {
        message
    }
}

impl Source for AttributeSource {
    fn describe(&self) -> Result<String> {
        let target = self.checked_target()?;
        let reflection = target.reflection()?;
        if !has_attributes(&reflection) {
            return Err(SourceError::invalid_source(
                self.clone(),
                missing(Phase::Deserializing, &reflection),
            ));
        }
        Ok(format!("{} attribute", target.describe()?))
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
        Ok(SourceRecord::Attribute {
            target: self.wrapped.record(|| self.clone().into())?,
        })
    }
}

impl SelfCheckingSource for AttributeSource {
    fn is_valid(&self) -> bool {
        let target = self.wrapped.target();
        self.wrapped.is_intact()
            && target.is_valid()
            && target.reflection().is_ok_and(|r| has_attributes(&r))
    }

    fn last_change(&self) -> Result<SystemTime> {
        self.checked_target()?.last_change()
    }
}

impl ReflectorSource for AttributeSource {
    fn reflection(&self) -> Result<Reflection> {
        self.checked_target()?.reflection()
    }
}
