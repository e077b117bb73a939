use crate::config::ReflectConfig;
use crate::entities::{ClassEntity, FunctionEntity};
use crate::errors::{ReflectionError, ReflectionResult};
use crate::reflection::{ClassReflection, FunctionReflection};
use crate::traits::Reflector;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// In-memory set of declarations
///
/// Entities are added once and shared with every handle resolved from the namespace, so
/// removing a declaration (by building a new namespace without it) never invalidates handles
/// already held.
#[derive(Debug, Default, Clone)]
pub struct Namespace {
    config: ReflectConfig,
    classes: BTreeMap<String, Arc<ClassEntity>>,
    functions: BTreeMap<String, Arc<FunctionEntity>>,
}

/// JSON layout accepted by [`Namespace::from_json`]
#[derive(Debug, Default, Serialize, Deserialize)]
struct NamespaceFile {
    #[serde(default)]
    config: ReflectConfig,
    #[serde(default)]
    classes: Vec<ClassEntity>,
    #[serde(default)]
    functions: Vec<FunctionEntity>,
}

impl Namespace {
    /// Create an empty namespace
    pub fn new(config: ReflectConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Load a namespace from its JSON description
    ///
    /// # Errors
    /// Returns [`ReflectionError::Load`] if the JSON is malformed.
    pub fn from_json(json: &str) -> ReflectionResult<Self> {
        let file: NamespaceFile =
            serde_json::from_str(json).map_err(|e| ReflectionError::Load(e.to_string()))?;

        let mut namespace = Self::new(file.config);
        for class in file.classes {
            namespace.add_class(class);
        }
        for function in file.functions {
            namespace.add_function(function);
        }

        debug!(
            "Loaded namespace with {} classes and {} functions",
            namespace.classes.len(),
            namespace.functions.len()
        );
        Ok(namespace)
    }

    pub fn config(&self) -> &ReflectConfig {
        &self.config
    }

    /// Add a class, replacing any class with the same name.
    ///
    /// Methods are declared in their class's file, so a file set on a method is dropped.
    pub fn add_class(&mut self, mut class: ClassEntity) {
        for method in &mut class.methods {
            method.parent_class = Some(class.name.clone());
            if method.file.take().is_some() {
                trace!("Dropped file of method {}::{}", class.name, method.name);
            }
        }

        self.classes.insert(class.name.clone(), Arc::new(class));
    }

    /// Add a free function, replacing any function with the same name
    pub fn add_function(&mut self, function: FunctionEntity) {
        self.functions
            .insert(function.name.clone(), Arc::new(function));
    }

    /// Builder-style [`Namespace::add_class`]
    pub fn with_class(mut self, class: ClassEntity) -> Self {
        self.add_class(class);
        self
    }

    /// Builder-style [`Namespace::add_function`]
    pub fn with_function(mut self, function: FunctionEntity) -> Self {
        self.add_function(function);
        self
    }

    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl Reflector for Namespace {
    fn reflect_class(&self, name: &str) -> ReflectionResult<ClassReflection> {
        trace!("Reflecting class {name}");
        self.classes
            .get(name)
            .map(|class| ClassReflection::new(Arc::clone(class), self.config))
            .ok_or_else(|| ReflectionError::ClassNotFound {
                class: name.to_string(),
            })
    }

    fn reflect_function(&self, name: &str) -> ReflectionResult<FunctionReflection> {
        trace!("Reflecting function {name}");
        self.functions
            .get(name)
            .map(|function| FunctionReflection::new(Arc::clone(function), self.config))
            .ok_or_else(|| ReflectionError::FunctionNotFound {
                function: name.to_string(),
            })
    }
}
