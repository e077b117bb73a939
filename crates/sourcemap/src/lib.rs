//! sourcemap
//!
//! Descriptors of code locations: files, lines, classes, functions, methods, properties,
//! class constants and parameters.
//!
//! Every descriptor can:
//!
//! - render itself for humans ([`Source::describe`])
//! - tell whether the location still exists and when its file last changed
//!   ([`SelfCheckingSource`])
//! - be persisted as a [`SourceRecord`] and restored later, even after the declaration it
//!   points to is gone ([`serialize`], [`deserialize`])
//!
//! Declarations are resolved through a [`Reflector`](sourcemap_reflect::Reflector), usually
//! a [`Namespace`](sourcemap_reflect::Namespace).
//!
//! # Example
//!
//! ```rust
//! use sourcemap::{deserialize, serialize, MethodSource, SelfCheckingSource, Source};
//! use sourcemap_reflect::{ClassEntity, FunctionEntity, Namespace, ReflectConfig, Reflector};
//!
//! let namespace = Namespace::new(ReflectConfig::default()).with_class(
//!     ClassEntity::new("App\\Mailer").with_methods(vec![FunctionEntity::new("send")]),
//! );
//!
//! let source = MethodSource::new(namespace.reflect_method("App\\Mailer", "send").unwrap());
//! assert_eq!(source.describe().unwrap(), "App\\Mailer->send()");
//!
//! let bytes = serialize(&source).unwrap();
//! let restored = deserialize(&bytes, &Namespace::default()).unwrap();
//! assert!(!restored.is_valid());
//! assert!(restored.describe().is_err());
//! ```

pub mod any;
pub mod check;
pub mod class;
pub mod constant;
pub mod decorator;
pub mod error;
pub mod file;
pub mod function;
pub mod line_column;
pub mod message;
pub mod method;
pub mod parameter;
pub mod path;
pub mod property;
pub mod record;
pub mod source;
mod state;

pub use any::AnySource;
pub use check::{DefaultSourceChecker, SourceCheckHandler, SourceChecker, SupportedType};
pub use class::ClassSource;
pub use constant::ClassConstantSource;
pub use decorator::{AnnotationSource, AttributeSource, EmptyWrapperSource};
pub use error::{Result, SourceError};
pub use file::FileSource;
pub use function::FunctionSource;
pub use line_column::LineColumnSource;
pub use message::Message;
pub use method::MethodSource;
pub use parameter::{ParameterOwner, ParameterSource};
pub use path::make_relative;
pub use property::PropertySource;
pub use record::{deserialize, serialize, FileRecord, SourceRecord};
pub use source::{ReflectorSource, SelfCheckingSource, Source};
