use super::function::FunctionEntity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Represents a class property or class constant
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Field {
    /// Field name, without any sigil
    pub name: String,

    /// Is this a static/class field?
    #[serde(default)]
    pub is_static: bool,

    /// Is this a constant?
    #[serde(default)]
    pub is_constant: bool,

    /// Documentation comment
    #[serde(default)]
    pub doc_comment: Option<String>,

    /// Attributes attached to the declaration
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl Field {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_static: false,
            is_constant: false,
            doc_comment: None,
            attributes: Vec::new(),
        }
    }

    pub fn static_field(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn constant(mut self) -> Self {
        self.is_constant = true;
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    pub fn with_attributes(mut self, attrs: Vec<String>) -> Self {
        self.attributes = attrs;
        self
    }
}

/// Represents a class declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEntity {
    /// Fully-qualified class name
    pub name: String,

    /// Declaring file, `None` for built-in classes
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Methods in this class
    #[serde(default)]
    pub methods: Vec<FunctionEntity>,

    /// Properties and constants
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Documentation comment
    #[serde(default)]
    pub doc_comment: Option<String>,

    /// Attributes attached to the declaration
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl ClassEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: None,
            methods: Vec::new(),
            fields: Vec::new(),
            doc_comment: None,
            attributes: Vec::new(),
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Add methods; each one's `parent_class` is set to this class.
    pub fn with_methods(mut self, methods: Vec<FunctionEntity>) -> Self {
        let name = self.name.clone();
        self.methods = methods
            .into_iter()
            .map(|m| m.with_parent_class(name.clone()))
            .collect();
        self
    }

    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = Some(doc.into());
        self
    }

    pub fn with_attributes(mut self, attrs: Vec<String>) -> Self {
        self.attributes = attrs;
        self
    }

    /// Position of the method with the given name
    pub fn method_index(&self, name: &str) -> Option<usize> {
        self.methods.iter().position(|m| m.name == name)
    }

    /// Position of the non-constant field with the given name
    pub fn property_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| !f.is_constant && f.name == name)
    }

    /// Position of the constant with the given name
    pub fn constant_index(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.is_constant && f.name == name)
    }
}
