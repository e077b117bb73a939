use super::Wrapped;
use crate::any::AnySource;
use crate::error::Result;
use crate::record::SourceRecord;
use crate::source::{ReflectorSource, SelfCheckingSource, Source};
use sourcemap_reflect::{Reflection, Reflector};
use std::any::Any;
use std::time::SystemTime;

const NAME: &str = "EmptyWrapperSource";

/// Re-tags a source without adding meaning, rendered `<target> empty source`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyWrapperSource {
    wrapped: Wrapped,
}

impl EmptyWrapperSource {
    pub fn new(target: impl Into<AnySource>) -> Result<Self> {
        Ok(Self {
            wrapped: Wrapped::create(NAME, target.into())?,
        })
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

impl Source for EmptyWrapperSource {
    fn describe(&self) -> Result<String> {
        Ok(format!("{} empty source", self.checked_target()?.describe()?))
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
        Ok(SourceRecord::Empty {
            target: self.wrapped.record(|| self.clone().into())?,
        })
    }
}

impl SelfCheckingSource for EmptyWrapperSource {
    fn is_valid(&self) -> bool {
        self.wrapped.is_intact() && self.wrapped.target().is_valid()
    }

    fn last_change(&self) -> Result<SystemTime> {
        self.checked_target()?.last_change()
    }
}

impl ReflectorSource for EmptyWrapperSource {
    fn reflection(&self) -> Result<Reflection> {
        self.checked_target()?.reflection()
    }
}
