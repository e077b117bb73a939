//! Shared declarations for integration tests.

#![allow(dead_code)]

use sourcemap_reflect::{ClassEntity, Field, FunctionEntity, Namespace, Parameter, ReflectConfig};
use std::path::{Path, PathBuf};

pub const ANNOTATED: &str = "Tests\\Doubles\\AnnotatedReflectedClass";
pub const WITH_ATTRIBUTES: &str = "Tests\\Doubles\\ReflectedClassWithAttributes";
pub const EMPTY: &str = "Tests\\Doubles\\EmptyClass";
pub const FUNCTION: &str = "Tests\\Doubles\\test";
/// Declared without a file.
pub const BUILTIN: &str = "ArrayObject";

const DOC: &str = "/**\n * Comment\n */";
const ATTRIBUTE: &str = "TestAttribute";

pub fn fixtures_path() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures"))
}

pub fn fixture(name: &str) -> PathBuf {
    fixtures_path().join(name)
}

pub fn namespace() -> Namespace {
    namespace_with(ReflectConfig::default())
}

/// All test declarations, resolved with the given runtime capabilities.
pub fn namespace_with(config: ReflectConfig) -> Namespace {
    Namespace::new(config)
        .with_class(annotated_class())
        .with_class(class_with_attributes())
        .with_class(ClassEntity::new(EMPTY).with_file(fixture("EmptyClass.php")))
        .with_class(
            ClassEntity::new(BUILTIN).with_methods(vec![FunctionEntity::new("count")]),
        )
        .with_function(
            FunctionEntity::new(FUNCTION)
                .with_file(fixture("functions.php"))
                .with_doc(DOC)
                .with_attributes(attributes())
                .with_parameters(vec![Parameter::new("test").with_attributes(attributes())]),
        )
}

fn annotated_class() -> ClassEntity {
    ClassEntity::new(ANNOTATED)
        .with_file(fixture("AnnotatedReflectedClass.php"))
        .with_doc(DOC)
        .with_fields(vec![
            Field::new("Test").constant().with_doc(DOC),
            Field::new("test").with_doc(DOC),
            Field::new("staticTest").static_field(),
        ])
        .with_methods(vec![
            FunctionEntity::new("test")
                .with_doc(DOC)
                .with_parameters(vec![Parameter::new("test")]),
            FunctionEntity::new("staticTest")
                .static_fn()
                .with_parameters(vec![Parameter::new("test")]),
        ])
}

fn class_with_attributes() -> ClassEntity {
    ClassEntity::new(WITH_ATTRIBUTES)
        .with_file(fixture("ReflectedClassWithAttributes.php"))
        .with_attributes(attributes())
        .with_fields(vec![
            Field::new("Test").constant().with_attributes(attributes()),
            Field::new("test").with_attributes(attributes()),
            Field::new("staticTest").static_field(),
        ])
        .with_methods(vec![
            FunctionEntity::new("test")
                .with_attributes(attributes())
                .with_parameters(vec![Parameter::new("test").with_attributes(attributes())]),
            FunctionEntity::new("staticTest")
                .static_fn()
                .with_parameters(vec![Parameter::new("test")]),
        ])
}

fn attributes() -> Vec<String> {
    vec![ATTRIBUTE.to_string()]
}
