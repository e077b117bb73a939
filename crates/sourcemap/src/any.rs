use crate::class::ClassSource;
use crate::constant::ClassConstantSource;
use crate::decorator::{AnnotationSource, AttributeSource, EmptyWrapperSource};
use crate::error::{Result, SourceError};
use crate::file::FileSource;
use crate::function::FunctionSource;
use crate::line_column::LineColumnSource;
use crate::method::MethodSource;
use crate::parameter::ParameterSource;
use crate::property::PropertySource;
use crate::record::SourceRecord;
use crate::source::{ReflectorSource, SelfCheckingSource, Source};
use sourcemap_reflect::{Reflection, Reflector};
use std::any::Any;
use std::time::SystemTime;

/// Any built-in descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum AnySource {
    File(FileSource),
    LineColumn(LineColumnSource),
    Class(ClassSource),
    Function(FunctionSource),
    Method(MethodSource),
    Property(PropertySource),
    ClassConstant(ClassConstantSource),
    Parameter(ParameterSource),
    Annotation(AnnotationSource),
    Attribute(AttributeSource),
    Empty(EmptyWrapperSource),
}

impl AnySource {
    /// Rebuild a descriptor from its record, looking declarations up in `reflector`.
    ///
    /// Never fails: missing declarations produce descriptors in a failed state.
    pub fn restore(record: SourceRecord, reflector: &dyn Reflector) -> Self {
        match record {
            SourceRecord::File(file) => Self::File(FileSource::restore(file)),
            SourceRecord::LineColumn { file, line, column } => Self::LineColumn(
                LineColumnSource::new(FileSource::restore(file), line, column),
            ),
            SourceRecord::Class { class } => Self::Class(ClassSource::restore(&class, reflector)),
            SourceRecord::Function { function } => {
                Self::Function(FunctionSource::restore(&function, reflector))
            }
            SourceRecord::Method { class, method } => {
                Self::Method(MethodSource::restore(&class, &method, reflector))
            }
            SourceRecord::Property { class, property } => {
                Self::Property(PropertySource::restore(&class, &property, reflector))
            }
            SourceRecord::ClassConstant { class, constant } => {
                Self::ClassConstant(ClassConstantSource::restore(&class, &constant, reflector))
            }
            SourceRecord::Parameter {
                class,
                function,
                parameter,
            } => Self::Parameter(ParameterSource::restore(
                class.as_deref(),
                &function,
                &parameter,
                reflector,
            )),
            SourceRecord::Annotation { target } => {
                Self::Annotation(AnnotationSource::restore(*target, reflector))
            }
            SourceRecord::Attribute { target } => {
                Self::Attribute(AttributeSource::restore(*target, reflector))
            }
            SourceRecord::Empty { target } => {
                Self::Empty(EmptyWrapperSource::restore(*target, reflector))
            }
        }
    }

    pub fn inner(&self) -> &dyn SelfCheckingSource {
        match self {
            Self::File(s) => s,
            Self::LineColumn(s) => s,
            Self::Class(s) => s,
            Self::Function(s) => s,
            Self::Method(s) => s,
            Self::Property(s) => s,
            Self::ClassConstant(s) => s,
            Self::Parameter(s) => s,
            Self::Annotation(s) => s,
            Self::Attribute(s) => s,
            Self::Empty(s) => s,
        }
    }

    /// The declaration-backed view, `None` for file locations.
    pub fn as_reflector(&self) -> Option<&dyn ReflectorSource> {
        match self {
            Self::File(_) | Self::LineColumn(_) => None,
            Self::Class(s) => Some(s),
            Self::Function(s) => Some(s),
            Self::Method(s) => Some(s),
            Self::Property(s) => Some(s),
            Self::ClassConstant(s) => Some(s),
            Self::Parameter(s) => Some(s),
            Self::Annotation(s) => Some(s),
            Self::Attribute(s) => Some(s),
            Self::Empty(s) => Some(s),
        }
    }

    /// Whether this is a decorator wrapping another source.
    pub fn is_wrapper(&self) -> bool {
        matches!(
            self,
            Self::Annotation(_) | Self::Attribute(_) | Self::Empty(_)
        )
    }

    /// Handle of the described declaration.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unsupported`] for file locations and
    /// [`SourceError::InvalidSource`] for failed descriptors.
    pub fn reflection(&self) -> Result<Reflection> {
        match self.as_reflector() {
            Some(source) => source.reflection(),
            None => Err(SourceError::unsupported(self.type_name())),
        }
    }
}

impl Source for AnySource {
    fn describe(&self) -> Result<String> {
        self.inner().describe()
    }

    fn type_name(&self) -> &'static str {
        self.inner().type_name()
    }

    fn as_any(&self) -> &dyn Any {
        self.inner().as_any()
    }

    fn as_self_checking(&self) -> Option<&dyn SelfCheckingSource> {
        Some(self.inner())
    }

    fn to_record(&self) -> Result<SourceRecord> {
        self.inner().to_record()
    }
}

impl SelfCheckingSource for AnySource {
    fn is_valid(&self) -> bool {
        self.inner().is_valid()
    }

    fn last_change(&self) -> Result<SystemTime> {
        self.inner().last_change()
    }
}

macro_rules! impl_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AnySource {
                fn from(source: $ty) -> Self {
                    Self::$variant(source)
                }
            }
        )*
    };
}

impl_from! {
    File => FileSource,
    LineColumn => LineColumnSource,
    Class => ClassSource,
    Function => FunctionSource,
    Method => MethodSource,
    Property => PropertySource,
    ClassConstant => ClassConstantSource,
    Parameter => ParameterSource,
    Annotation => AnnotationSource,
    Attribute => AttributeSource,
    Empty => EmptyWrapperSource,
}
