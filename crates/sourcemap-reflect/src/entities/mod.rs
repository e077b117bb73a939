pub mod class;
pub mod function;

pub use class::{ClassEntity, Field};
pub use function::{FunctionEntity, Parameter};
