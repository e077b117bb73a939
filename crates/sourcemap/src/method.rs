use crate::class::ClassSource;
use crate::error::Result;
use crate::record::SourceRecord;
use crate::source::{ReflectorSource, SelfCheckingSource, Source};
use crate::state::Resolution;
use sourcemap_reflect::{MethodReflection, Reflection, Reflector};
use std::any::Any;
use std::time::SystemTime;

/// A method, rendered `Class->name()`, or `Class::name()` when static.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSource {
    state: Resolution<MethodReflection>,
}

impl MethodSource {
    pub fn new(method: MethodReflection) -> Self {
        Self {
            state: Resolution::Valid(method),
        }
    }

    pub fn restore(class: &str, method: &str, reflector: &dyn Reflector) -> Self {
        Self {
            state: Resolution::lookup("method", reflector.reflect_method(class, method)),
        }
    }

    pub fn handle(&self) -> Result<&MethodReflection> {
        self.state.get(|| self.clone().into())
    }

    /// The declaring class.
    pub fn class(&self) -> Result<ClassSource> {
        Ok(ClassSource::new(self.handle()?.declaring_class().clone()))
    }

    pub fn describe_with(&self, parameters: &[&str]) -> Result<String> {
        let method = self.handle()?;
        let symbol = if method.is_static() { "::" } else { "->" };

        Ok(format!(
            "{}{symbol}{}({})",
            self.class()?.describe()?,
            method.name(),
            parameters.join(", ")
        ))
    }
}

impl Source for MethodSource {
    fn describe(&self) -> Result<String> {
        self.describe_with(&[])
    }

    fn type_name(&self) -> &'static str {
        "MethodSource"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_self_checking(&self) -> Option<&dyn SelfCheckingSource> {
        Some(self)
    }

    fn to_record(&self) -> Result<SourceRecord> {
        let method = self.handle()?;
        Ok(SourceRecord::Method {
            class: method.declaring_class().name().to_string(),
            method: method.name().to_string(),
        })
    }
}

impl SelfCheckingSource for MethodSource {
    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn last_change(&self) -> Result<SystemTime> {
        self.class()?.last_change()
    }
}

impl ReflectorSource for MethodSource {
    fn reflection(&self) -> Result<Reflection> {
        Ok(Reflection::Method(self.handle()?.clone()))
    }
}
