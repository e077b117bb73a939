use thiserror::Error;

/// Errors raised while looking up declarations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReflectionError {
    /// No class with the given name
    #[error("Class \"{class}\" does not exist")]
    ClassNotFound { class: String },

    /// No free function with the given name
    #[error("Function {function}() does not exist")]
    FunctionNotFound { function: String },

    /// Class exists but has no such method
    #[error("Method {class}::{method}() does not exist")]
    MethodNotFound { class: String, method: String },

    /// Class exists but has no such property
    #[error("Property {class}::${property} does not exist")]
    PropertyNotFound { class: String, property: String },

    /// Class exists but has no such constant
    #[error("Constant {class}::{constant} does not exist")]
    ConstantNotFound { class: String, constant: String },

    /// Function or method exists but has no such parameter
    #[error("Parameter {}{function}({parameter}) does not exist", owner_prefix(.class))]
    ParameterNotFound {
        class: Option<String>,
        function: String,
        parameter: String,
    },

    /// Declarations could not be loaded
    #[error("Failed to load declarations: {0}")]
    Load(String),
}

fn owner_prefix(class: &Option<String>) -> String {
    match class {
        Some(class) => format!("{class}::"),
        None => String::new(),
    }
}

impl ReflectionError {
    /// Whether this is a lookup miss rather than a load failure
    pub fn is_not_found(&self) -> bool {
        !matches!(self, Self::Load(_))
    }
}

/// Result type for reflection lookups
pub type ReflectionResult<T> = Result<T, ReflectionError>;
