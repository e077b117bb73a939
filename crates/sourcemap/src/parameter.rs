use crate::any::AnySource;
use crate::error::Result;
use crate::function::FunctionSource;
use crate::method::MethodSource;
use crate::record::SourceRecord;
use crate::source::{ReflectorSource, SelfCheckingSource, Source};
use crate::state::Resolution;
use sourcemap_reflect::{FunctionLike, ParameterReflection, Reflection, Reflector};
use std::any::Any;
use std::time::SystemTime;

/// The function or method declaring a parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterOwner {
    Function(FunctionSource),
    Method(MethodSource),
}

impl ParameterOwner {
    fn of(function: &FunctionLike) -> Self {
        match function {
            FunctionLike::Function(f) => Self::Function(FunctionSource::new(f.clone())),
            FunctionLike::Method(m) => Self::Method(MethodSource::new(m.clone())),
        }
    }

    pub fn describe_with(&self, parameters: &[&str]) -> Result<String> {
        match self {
            Self::Function(f) => f.describe_with(parameters),
            Self::Method(m) => m.describe_with(parameters),
        }
    }

    pub fn last_change(&self) -> Result<SystemTime> {
        match self {
            Self::Function(f) => f.last_change(),
            Self::Method(m) => m.last_change(),
        }
    }
}

impl From<ParameterOwner> for AnySource {
    fn from(owner: ParameterOwner) -> Self {
        match owner {
            ParameterOwner::Function(f) => AnySource::Function(f),
            ParameterOwner::Method(m) => AnySource::Method(m),
        }
    }
}

/// A parameter, rendered as its owner's signature with only this parameter listed,
/// e.g. `Class->method(parameter)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSource {
    state: Resolution<ParameterReflection>,
}

impl ParameterSource {
    pub fn new(parameter: ParameterReflection) -> Self {
        Self {
            state: Resolution::Valid(parameter),
        }
    }

    /// `class` is `None` for parameters of free functions.
    pub fn restore(
        class: Option<&str>,
        function: &str,
        parameter: &str,
        reflector: &dyn Reflector,
    ) -> Self {
        Self {
            state: Resolution::lookup(
                "parameter",
                reflector.reflect_parameter(class, function, parameter),
            ),
        }
    }

    pub fn handle(&self) -> Result<&ParameterReflection> {
        self.state.get(|| self.clone().into())
    }

    pub fn function(&self) -> Result<ParameterOwner> {
        Ok(ParameterOwner::of(self.handle()?.declaring_function()))
    }
}

impl Source for ParameterSource {
    fn describe(&self) -> Result<String> {
        let name = self.handle()?.name();
        self.function()?.describe_with(&[name])
    }

    fn type_name(&self) -> &'static str {
        "ParameterSource"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_self_checking(&self) -> Option<&dyn SelfCheckingSource> {
        Some(self)
    }

    fn to_record(&self) -> Result<SourceRecord> {
        let parameter = self.handle()?;
        Ok(SourceRecord::Parameter {
            class: parameter.declaring_class().map(|c| c.name().to_string()),
            function: parameter.declaring_function().name().to_string(),
            parameter: parameter.name().to_string(),
        })
    }
}

impl SelfCheckingSource for ParameterSource {
    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn last_change(&self) -> Result<SystemTime> {
        self.function()?.last_change()
    }
}

impl ReflectorSource for ParameterSource {
    fn reflection(&self) -> Result<Reflection> {
        Ok(Reflection::Parameter(self.handle()?.clone()))
    }
}
