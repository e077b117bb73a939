use crate::error::Result;
use crate::record::SourceRecord;
use crate::source::{declared_at, ReflectorSource, SelfCheckingSource, Source};
use crate::state::Resolution;
use sourcemap_reflect::{FunctionReflection, Reflection, Reflector};
use std::any::Any;
use std::time::SystemTime;

/// A free function, rendered `name()`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSource {
    state: Resolution<FunctionReflection>,
}

impl FunctionSource {
    pub fn new(function: FunctionReflection) -> Self {
        Self {
            state: Resolution::Valid(function),
        }
    }

    pub fn restore(function: &str, reflector: &dyn Reflector) -> Self {
        Self {
            state: Resolution::lookup("function", reflector.reflect_function(function)),
        }
    }

    pub fn handle(&self) -> Result<&FunctionReflection> {
        self.state.get(|| self.clone().into())
    }

    /// Render with `parameters` as the argument list, e.g. `send(to, body)`.
    pub fn describe_with(&self, parameters: &[&str]) -> Result<String> {
        Ok(format!("{}({})", self.handle()?.name(), parameters.join(", ")))
    }
}

impl Source for FunctionSource {
    fn describe(&self) -> Result<String> {
        self.describe_with(&[])
    }

    fn type_name(&self) -> &'static str {
        "FunctionSource"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_self_checking(&self) -> Option<&dyn SelfCheckingSource> {
        Some(self)
    }

    fn to_record(&self) -> Result<SourceRecord> {
        Ok(SourceRecord::Function {
            function: self.handle()?.name().to_string(),
        })
    }
}

impl SelfCheckingSource for FunctionSource {
    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn last_change(&self) -> Result<SystemTime> {
        declared_at(self.handle()?.file_name())
    }
}

impl ReflectorSource for FunctionSource {
    fn reflection(&self) -> Result<Reflection> {
        Ok(Reflection::Function(self.handle()?.clone()))
    }
}
