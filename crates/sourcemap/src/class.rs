use crate::error::Result;
use crate::record::SourceRecord;
use crate::source::{declared_at, ReflectorSource, SelfCheckingSource, Source};
use crate::state::Resolution;
use sourcemap_reflect::{ClassReflection, Reflection, Reflector};
use std::any::Any;
use std::time::SystemTime;

/// A class, rendered by its fully qualified name.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSource {
    state: Resolution<ClassReflection>,
}

impl ClassSource {
    pub fn new(class: ClassReflection) -> Self {
        Self {
            state: Resolution::Valid(class),
        }
    }

    /// Look the class up again by name. A missing class yields a failed source.
    pub fn restore(class: &str, reflector: &dyn Reflector) -> Self {
        Self {
            state: Resolution::lookup("class", reflector.reflect_class(class)),
        }
    }

    pub fn handle(&self) -> Result<&ClassReflection> {
        self.state.get(|| self.clone().into())
    }
}

impl Source for ClassSource {
    fn describe(&self) -> Result<String> {
        Ok(self.handle()?.name().to_string())
    }

    fn type_name(&self) -> &'static str {
        "ClassSource"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_self_checking(&self) -> Option<&dyn SelfCheckingSource> {
        Some(self)
    }

    fn to_record(&self) -> Result<SourceRecord> {
        Ok(SourceRecord::Class {
            class: self.handle()?.name().to_string(),
        })
    }
}

impl SelfCheckingSource for ClassSource {
    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn last_change(&self) -> Result<SystemTime> {
        declared_at(self.handle()?.file_name())
    }
}

impl ReflectorSource for ClassSource {
    fn reflection(&self) -> Result<Reflection> {
        Ok(Reflection::Class(self.handle()?.clone()))
    }
}
