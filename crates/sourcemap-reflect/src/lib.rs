//! sourcemap-reflect
//!
//! Declaration model and reflection lookup for sourcemap descriptors.
//!
//! This crate plays the part of a runtime's reflection facility. It defines:
//!
//! - **Entity types**: language-agnostic descriptions of classes, functions, methods,
//!   properties, constants and parameters
//! - **Handles**: live references to a single declaration ([`Reflection`] and friends)
//! - **Reflector trait**: lookup of handles by name, failing with typed not-found errors
//! - **Namespace**: an in-memory [`Reflector`], built in code or loaded from JSON
//!
//! # Example
//!
//! ```rust
//! use sourcemap_reflect::{ClassEntity, FunctionEntity, Namespace, ReflectConfig, Reflector};
//!
//! let namespace = Namespace::new(ReflectConfig::default()).with_class(
//!     ClassEntity::new("App\\Greeter").with_methods(vec![FunctionEntity::new("greet")]),
//! );
//!
//! let method = namespace.reflect_method("App\\Greeter", "greet").unwrap();
//! assert_eq!(method.declaring_class().name(), "App\\Greeter");
//! assert!(namespace.reflect_class("App\\Missing").is_err());
//! ```

pub mod config;
pub mod entities;
pub mod errors;
pub mod namespace;
pub mod reflection;
pub mod traits;

pub use config::ReflectConfig;
pub use entities::{ClassEntity, Field, FunctionEntity, Parameter};
pub use errors::{ReflectionError, ReflectionResult};
pub use namespace::Namespace;
pub use reflection::{
    ClassReflection, ConstantReflection, FunctionLike, FunctionReflection, MethodReflection,
    ParameterReflection, PropertyReflection, Reflection,
};
pub use traits::Reflector;

#[cfg(test)]
mod tests;
