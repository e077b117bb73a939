use crate::class::ClassSource;
use crate::error::Result;
use crate::record::SourceRecord;
use crate::source::{ReflectorSource, SelfCheckingSource, Source};
use crate::state::Resolution;
use sourcemap_reflect::{ConstantReflection, Reflection, Reflector};
use std::any::Any;
use std::time::SystemTime;

/// A class constant, rendered `Class::NAME`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassConstantSource {
    state: Resolution<ConstantReflection>,
}

impl ClassConstantSource {
    pub fn new(constant: ConstantReflection) -> Self {
        Self {
            state: Resolution::Valid(constant),
        }
    }

    pub fn restore(class: &str, constant: &str, reflector: &dyn Reflector) -> Self {
        Self {
            state: Resolution::lookup("constant", reflector.reflect_constant(class, constant)),
        }
    }

    pub fn handle(&self) -> Result<&ConstantReflection> {
        self.state.get(|| self.clone().into())
    }

    pub fn class(&self) -> Result<ClassSource> {
        Ok(ClassSource::new(self.handle()?.declaring_class().clone()))
    }
}

impl Source for ClassConstantSource {
    fn describe(&self) -> Result<String> {
        Ok(format!(
            "{}::{}",
            self.class()?.describe()?,
            self.handle()?.name()
        ))
    }

    fn type_name(&self) -> &'static str {
        "ClassConstantSource"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_self_checking(&self) -> Option<&dyn SelfCheckingSource> {
        Some(self)
    }

    fn to_record(&self) -> Result<SourceRecord> {
        let constant = self.handle()?;
        Ok(SourceRecord::ClassConstant {
            class: constant.declaring_class().name().to_string(),
            constant: constant.name().to_string(),
        })
    }
}

impl SelfCheckingSource for ClassConstantSource {
    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn last_change(&self) -> Result<SystemTime> {
        self.class()?.last_change()
    }
}

impl ReflectorSource for ClassConstantSource {
    fn reflection(&self) -> Result<Reflection> {
        Ok(Reflection::Constant(self.handle()?.clone()))
    }
}
