//! Live handles to declarations
//!
//! A handle is obtained from a [`Reflector`](crate::Reflector) and stays valid for as long as
//! it is held: it shares the declaration data it was resolved from. Member handles keep their
//! owner alive, so the declaring class or function can always be recovered from them.

use crate::config::ReflectConfig;
use crate::entities::{ClassEntity, Field, FunctionEntity, Parameter};
use crate::errors::{ReflectionError, ReflectionResult};
use std::path::Path;
use std::sync::Arc;

fn attributes_of<'a>(attributes: &'a [String], config: &ReflectConfig) -> Option<&'a [String]> {
    config.attributes.then_some(attributes)
}

/// Handle to a class
#[derive(Debug, Clone, PartialEq)]
pub struct ClassReflection {
    class: Arc<ClassEntity>,
    config: ReflectConfig,
}

impl ClassReflection {
    pub fn new(class: Arc<ClassEntity>, config: ReflectConfig) -> Self {
        Self { class, config }
    }

    pub fn entity(&self) -> &ClassEntity {
        &self.class
    }

    pub fn name(&self) -> &str {
        &self.class.name
    }

    /// Declaring file, `None` for built-in classes
    pub fn file_name(&self) -> Option<&Path> {
        self.class.file.as_deref()
    }

    pub fn doc_comment(&self) -> Option<&str> {
        self.class.doc_comment.as_deref()
    }

    /// `None` when the runtime does not support attributes
    pub fn attributes(&self) -> Option<&[String]> {
        attributes_of(&self.class.attributes, &self.config)
    }

    pub fn method(&self, name: &str) -> ReflectionResult<MethodReflection> {
        let index = self
            .class
            .method_index(name)
            .ok_or_else(|| ReflectionError::MethodNotFound {
                class: self.class.name.clone(),
                method: name.to_string(),
            })?;

        Ok(MethodReflection {
            class: self.clone(),
            index,
        })
    }

    pub fn property(&self, name: &str) -> ReflectionResult<PropertyReflection> {
        let index = self
            .class
            .property_index(name)
            .ok_or_else(|| ReflectionError::PropertyNotFound {
                class: self.class.name.clone(),
                property: name.to_string(),
            })?;

        Ok(PropertyReflection {
            class: self.clone(),
            index,
        })
    }

    pub fn constant(&self, name: &str) -> ReflectionResult<ConstantReflection> {
        let index = self
            .class
            .constant_index(name)
            .ok_or_else(|| ReflectionError::ConstantNotFound {
                class: self.class.name.clone(),
                constant: name.to_string(),
            })?;

        Ok(ConstantReflection {
            class: self.clone(),
            index,
        })
    }
}

/// Handle to a free function
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionReflection {
    function: Arc<FunctionEntity>,
    config: ReflectConfig,
}

impl FunctionReflection {
    pub fn new(function: Arc<FunctionEntity>, config: ReflectConfig) -> Self {
        Self { function, config }
    }

    pub fn entity(&self) -> &FunctionEntity {
        &self.function
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }

    /// Declaring file, `None` for built-in functions
    pub fn file_name(&self) -> Option<&Path> {
        self.function.file.as_deref()
    }

    pub fn doc_comment(&self) -> Option<&str> {
        self.function.doc_comment.as_deref()
    }

    pub fn attributes(&self) -> Option<&[String]> {
        attributes_of(&self.function.attributes, &self.config)
    }
}

/// Handle to a method, bound to its declaring class
#[derive(Debug, Clone, PartialEq)]
pub struct MethodReflection {
    class: ClassReflection,
    index: usize,
}

impl MethodReflection {
    pub fn entity(&self) -> &FunctionEntity {
        &self.class.entity().methods[self.index]
    }

    pub fn name(&self) -> &str {
        &self.entity().name
    }

    pub fn is_static(&self) -> bool {
        self.entity().is_static
    }

    pub fn declaring_class(&self) -> &ClassReflection {
        &self.class
    }

    /// Methods are declared in their class's file
    pub fn file_name(&self) -> Option<&Path> {
        self.class.file_name()
    }

    pub fn doc_comment(&self) -> Option<&str> {
        self.entity().doc_comment.as_deref()
    }

    pub fn attributes(&self) -> Option<&[String]> {
        attributes_of(&self.entity().attributes, &self.class.config)
    }
}

/// Handle to a class property
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyReflection {
    class: ClassReflection,
    index: usize,
}

impl PropertyReflection {
    pub fn entity(&self) -> &Field {
        &self.class.entity().fields[self.index]
    }

    pub fn name(&self) -> &str {
        &self.entity().name
    }

    pub fn is_static(&self) -> bool {
        self.entity().is_static
    }

    pub fn declaring_class(&self) -> &ClassReflection {
        &self.class
    }

    pub fn doc_comment(&self) -> Option<&str> {
        self.entity().doc_comment.as_deref()
    }

    pub fn attributes(&self) -> Option<&[String]> {
        attributes_of(&self.entity().attributes, &self.class.config)
    }
}

/// Handle to a class constant
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantReflection {
    class: ClassReflection,
    index: usize,
}

impl ConstantReflection {
    pub fn entity(&self) -> &Field {
        &self.class.entity().fields[self.index]
    }

    pub fn name(&self) -> &str {
        &self.entity().name
    }

    pub fn declaring_class(&self) -> &ClassReflection {
        &self.class
    }

    pub fn doc_comment(&self) -> Option<&str> {
        self.entity().doc_comment.as_deref()
    }

    pub fn attributes(&self) -> Option<&[String]> {
        attributes_of(&self.entity().attributes, &self.class.config)
    }
}

/// Either a free function or a method
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionLike {
    Function(FunctionReflection),
    Method(MethodReflection),
}

impl FunctionLike {
    pub fn entity(&self) -> &FunctionEntity {
        match self {
            Self::Function(function) => function.entity(),
            Self::Method(method) => method.entity(),
        }
    }

    pub fn name(&self) -> &str {
        &self.entity().name
    }

    pub fn declaring_class(&self) -> Option<&ClassReflection> {
        match self {
            Self::Function(_) => None,
            Self::Method(method) => Some(method.declaring_class()),
        }
    }

    fn config(&self) -> &ReflectConfig {
        match self {
            Self::Function(function) => &function.config,
            Self::Method(method) => &method.class.config,
        }
    }

    pub fn parameter(&self, name: &str) -> ReflectionResult<ParameterReflection> {
        let index = self
            .entity()
            .parameter_index(name)
            .ok_or_else(|| ReflectionError::ParameterNotFound {
                class: self.declaring_class().map(|c| c.name().to_string()),
                function: self.name().to_string(),
                parameter: name.to_string(),
            })?;

        Ok(ParameterReflection {
            function: self.clone(),
            index,
        })
    }
}

/// Handle to a function or method parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterReflection {
    function: FunctionLike,
    index: usize,
}

impl ParameterReflection {
    pub fn entity(&self) -> &Parameter {
        &self.function.entity().parameters[self.index]
    }

    pub fn name(&self) -> &str {
        &self.entity().name
    }

    pub fn declaring_function(&self) -> &FunctionLike {
        &self.function
    }

    pub fn declaring_class(&self) -> Option<&ClassReflection> {
        self.function.declaring_class()
    }

    pub fn attributes(&self) -> Option<&[String]> {
        attributes_of(&self.entity().attributes, self.function.config())
    }
}

/// Any declaration handle
#[derive(Debug, Clone, PartialEq)]
pub enum Reflection {
    Class(ClassReflection),
    Function(FunctionReflection),
    Method(MethodReflection),
    Property(PropertyReflection),
    Constant(ConstantReflection),
    Parameter(ParameterReflection),
}

impl Reflection {
    /// Short name of the handle kind, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Class(_) => "class",
            Self::Function(_) => "function",
            Self::Method(_) => "method",
            Self::Property(_) => "property",
            Self::Constant(_) => "constant",
            Self::Parameter(_) => "parameter",
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Class(r) => r.name(),
            Self::Function(r) => r.name(),
            Self::Method(r) => r.name(),
            Self::Property(r) => r.name(),
            Self::Constant(r) => r.name(),
            Self::Parameter(r) => r.name(),
        }
    }

    /// Parameters cannot carry doc comments
    pub fn supports_doc_comment(&self) -> bool {
        !matches!(self, Self::Parameter(_))
    }

    pub fn doc_comment(&self) -> Option<&str> {
        match self {
            Self::Class(r) => r.doc_comment(),
            Self::Function(r) => r.doc_comment(),
            Self::Method(r) => r.doc_comment(),
            Self::Property(r) => r.doc_comment(),
            Self::Constant(r) => r.doc_comment(),
            Self::Parameter(_) => None,
        }
    }

    /// `None` when the runtime does not support attributes
    pub fn attributes(&self) -> Option<&[String]> {
        match self {
            Self::Class(r) => r.attributes(),
            Self::Function(r) => r.attributes(),
            Self::Method(r) => r.attributes(),
            Self::Property(r) => r.attributes(),
            Self::Constant(r) => r.attributes(),
            Self::Parameter(r) => r.attributes(),
        }
    }
}
