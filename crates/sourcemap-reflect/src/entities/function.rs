use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Represents a function parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, without any sigil
    pub name: String,

    /// Attributes attached to the parameter
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attributes(mut self, attrs: Vec<String>) -> Self {
        self.attributes = attrs;
        self
    }
}

/// Represents a free function or a method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionEntity {
    /// Function name (fully-qualified for free functions)
    pub name: String,

    /// Declaring file, `None` for built-ins. Dropped for methods, which use their class's file.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Is this a static method?
    #[serde(default)]
    pub is_static: bool,

    /// Function parameters
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Documentation comment
    #[serde(default)]
    pub doc_comment: Option<String>,

    /// Attributes attached to the declaration
    #[serde(default)]
    pub attributes: Vec<String>,

    /// Parent class (if this is a method)
    #[serde(default)]
    pub parent_class: Option<String>,
}

impl FunctionEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            file: None,
            is_static: false,
            parameters: Vec::new(),
            doc_comment: None,
            attributes: Vec::new(),
            parent_class: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn static_fn(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_parameters(mut self, params: Vec<Parameter>) -> Self {
        self.parameters = params;
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

    pub fn with_parent_class(mut self, parent: impl Into<String>) -> Self {
        self.parent_class = Some(parent.into());
        self
    }

    /// Position of the parameter with the given name
    pub fn parameter_index(&self, name: &str) -> Option<usize> {
        self.parameters.iter().position(|p| p.name == name)
    }
}
