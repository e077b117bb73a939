use crate::class::ClassSource;
use crate::error::Result;
use crate::record::SourceRecord;
use crate::source::{ReflectorSource, SelfCheckingSource, Source};
use crate::state::Resolution;
use sourcemap_reflect::{PropertyReflection, Reflection, Reflector};
use std::any::Any;
use std::time::SystemTime;

/// A property, rendered `Class->$name`, or `Class::$name` when static.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySource {
    state: Resolution<PropertyReflection>,
}

impl PropertySource {
    pub fn new(property: PropertyReflection) -> Self {
        Self {
            state: Resolution::Valid(property),
        }
    }

    pub fn restore(class: &str, property: &str, reflector: &dyn Reflector) -> Self {
        Self {
            state: Resolution::lookup("property", reflector.reflect_property(class, property)),
        }
    }

    pub fn handle(&self) -> Result<&PropertyReflection> {
        self.state.get(|| self.clone().into())
    }

    pub fn class(&self) -> Result<ClassSource> {
        Ok(ClassSource::new(self.handle()?.declaring_class().clone()))
    }
}

impl Source for PropertySource {
    fn describe(&self) -> Result<String> {
        let property = self.handle()?;
        let symbol = if property.is_static() { "::" } else { "->" };

        Ok(format!(
            "{}{symbol}${}",
            self.class()?.describe()?,
            property.name()
        ))
    }

    fn type_name(&self) -> &'static str {
        "PropertySource"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_self_checking(&self) -> Option<&dyn SelfCheckingSource> {
        Some(self)
    }

    fn to_record(&self) -> Result<SourceRecord> {
        let property = self.handle()?;
        Ok(SourceRecord::Property {
            class: property.declaring_class().name().to_string(),
            property: property.name().to_string(),
        })
    }
}

impl SelfCheckingSource for PropertySource {
    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn last_change(&self) -> Result<SystemTime> {
        self.class()?.last_change()
    }
}

impl ReflectorSource for PropertySource {
    fn reflection(&self) -> Result<Reflection> {
        Ok(Reflection::Property(self.handle()?.clone()))
    }
}
