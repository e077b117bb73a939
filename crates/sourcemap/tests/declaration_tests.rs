//! Integration tests for declaration-backed sources

mod common;

use common::{fixture, namespace, ANNOTATED, BUILTIN, EMPTY, FUNCTION};
use sourcemap::{
    deserialize, serialize, AnySource, ClassConstantSource, ClassSource, FunctionSource,
    MethodSource, ParameterOwner, ParameterSource, PropertySource,
    SelfCheckingSource, Source, SourceError, SourceRecord,
};
use sourcemap_reflect::{Namespace, ReflectionError, Reflector};
use std::time::UNIX_EPOCH;

fn roundtrip(source: &dyn Source) -> AnySource {
    deserialize(&serialize(source).unwrap(), &namespace()).unwrap()
}

fn restore_from(record: SourceRecord) -> AnySource {
    let bytes = serde_json::to_vec(&record).unwrap();
    deserialize(&bytes, &namespace()).unwrap()
}

fn file_mtime(name: &str) -> std::time::SystemTime {
    std::fs::metadata(fixture(name)).unwrap().modified().unwrap()
}

#[test]
fn test_class_source() {
    let namespace = namespace();
    let source = ClassSource::new(namespace.reflect_class(ANNOTATED).unwrap());

    assert!(source.is_valid());
    assert_eq!(source.describe().unwrap(), ANNOTATED);
    assert_eq!(source.handle().unwrap().name(), ANNOTATED);
    assert_eq!(
        source.last_change().unwrap(),
        file_mtime("AnnotatedReflectedClass.php")
    );
    assert_eq!(roundtrip(&source), AnySource::Class(source));
}

#[test]
fn test_builtin_class_has_epoch_last_change() {
    let source = ClassSource::new(namespace().reflect_class(BUILTIN).unwrap());

    assert_eq!(source.last_change().unwrap(), UNIX_EPOCH);

    let method = MethodSource::new(namespace().reflect_method(BUILTIN, "count").unwrap());
    assert_eq!(method.last_change().unwrap(), UNIX_EPOCH);
}

#[test]
fn test_missing_class_fails_lazily() {
    let source = restore_from(SourceRecord::Class {
        class: "Tests\\Doubles\\NonExistent".to_string(),
    });

    assert!(!source.is_valid());

    let err = source.describe().unwrap_err();
    assert!(matches!(err, SourceError::InvalidSource { .. }));
    assert_eq!(
        err.to_string(),
        "Deserialization failed due to following error:\n\
         Class \"Tests\\Doubles\\NonExistent\" does not exist"
    );
    assert_eq!(err.offender(), Some(&source));

    let cause = std::error::Error::source(&err)
        .and_then(|e| e.downcast_ref::<ReflectionError>())
        .unwrap();
    assert!(cause.is_not_found());

    assert!(source.last_change().is_err());
    assert!(source.reflection().is_err());
    assert!(serialize(&source).is_err());
}

#[test]
fn test_function_source() {
    let source = FunctionSource::new(namespace().reflect_function(FUNCTION).unwrap());

    assert!(source.is_valid());
    assert_eq!(source.describe().unwrap(), "Tests\\Doubles\\test()");
    assert_eq!(
        source.describe_with(&["a", "b"]).unwrap(),
        "Tests\\Doubles\\test(a, b)"
    );
    assert_eq!(source.last_change().unwrap(), file_mtime("functions.php"));
    assert_eq!(roundtrip(&source), AnySource::Function(source));
}

#[test]
fn test_missing_function_fails_lazily() {
    let source = restore_from(SourceRecord::Function {
        function: "missing".to_string(),
    });

    assert!(!source.is_valid());
    assert_eq!(
        source.describe().unwrap_err().to_string(),
        "Deserialization failed due to following error:\nFunction missing() does not exist"
    );
}

#[test]
fn test_method_source() {
    let namespace = namespace();
    let source = MethodSource::new(namespace.reflect_method(ANNOTATED, "test").unwrap());

    assert!(source.is_valid());
    assert_eq!(source.describe().unwrap(), format!("{ANNOTATED}->test()"));
    assert_eq!(
        source.describe_with(&["foo", "bar"]).unwrap(),
        format!("{ANNOTATED}->test(foo, bar)")
    );
    assert_eq!(source.class().unwrap().describe().unwrap(), ANNOTATED);
    assert_eq!(
        source.last_change().unwrap(),
        file_mtime("AnnotatedReflectedClass.php")
    );
    assert_eq!(roundtrip(&source), AnySource::Method(source));
}

#[test]
fn test_static_method_source() {
    let source = MethodSource::new(namespace().reflect_method(ANNOTATED, "staticTest").unwrap());

    assert_eq!(
        source.describe().unwrap(),
        format!("{ANNOTATED}::staticTest()")
    );
}

#[test]
fn test_missing_method_fails_lazily() {
    let source = restore_from(SourceRecord::Method {
        class: ANNOTATED.to_string(),
        method: "missing".to_string(),
    });

    assert!(!source.is_valid());
    assert_eq!(
        source.describe().unwrap_err().to_string(),
        format!("Deserialization failed due to following error:\nMethod {ANNOTATED}::missing() does not exist")
    );
}

#[test]
fn test_property_source() {
    let namespace = namespace();
    let source = PropertySource::new(namespace.reflect_property(ANNOTATED, "test").unwrap());

    assert!(source.is_valid());
    assert_eq!(source.describe().unwrap(), format!("{ANNOTATED}->$test"));
    assert_eq!(source.class().unwrap().describe().unwrap(), ANNOTATED);
    assert_eq!(
        source.last_change().unwrap(),
        file_mtime("AnnotatedReflectedClass.php")
    );
    assert_eq!(roundtrip(&source), AnySource::Property(source));

    let static_source =
        PropertySource::new(namespace.reflect_property(ANNOTATED, "staticTest").unwrap());
    assert_eq!(
        static_source.describe().unwrap(),
        format!("{ANNOTATED}::$staticTest")
    );
}

#[test]
fn test_property_record_does_not_match_constant() {
    let source = restore_from(SourceRecord::Property {
        class: ANNOTATED.to_string(),
        property: "Test".to_string(),
    });

    assert!(!source.is_valid());
    assert_eq!(
        source.describe().unwrap_err().to_string(),
        format!("Deserialization failed due to following error:\nProperty {ANNOTATED}::$Test does not exist")
    );
}

#[test]
fn test_class_constant_source() {
    let namespace = namespace();
    let source = ClassConstantSource::new(namespace.reflect_constant(ANNOTATED, "Test").unwrap());

    assert!(source.is_valid());
    assert_eq!(source.describe().unwrap(), format!("{ANNOTATED}::Test"));
    assert_eq!(source.class().unwrap().describe().unwrap(), ANNOTATED);
    assert_eq!(
        source.last_change().unwrap(),
        file_mtime("AnnotatedReflectedClass.php")
    );
    assert_eq!(roundtrip(&source), AnySource::ClassConstant(source));
}

#[test]
fn test_missing_constant_fails_lazily() {
    let source = restore_from(SourceRecord::ClassConstant {
        class: EMPTY.to_string(),
        constant: "Test".to_string(),
    });

    assert!(!source.is_valid());
    assert_eq!(
        source.describe().unwrap_err().to_string(),
        format!("Deserialization failed due to following error:\nConstant {EMPTY}::Test does not exist")
    );
}

#[test]
fn test_method_parameter_source() {
    let namespace = namespace();
    let source = ParameterSource::new(
        namespace
            .reflect_parameter(Some(ANNOTATED), "test", "test")
            .unwrap(),
    );

    assert!(source.is_valid());
    assert_eq!(source.describe().unwrap(), format!("{ANNOTATED}->test(test)"));
    assert!(matches!(
        source.function().unwrap(),
        ParameterOwner::Method(_)
    ));
    assert_eq!(
        source.last_change().unwrap(),
        file_mtime("AnnotatedReflectedClass.php")
    );
    assert_eq!(roundtrip(&source), AnySource::Parameter(source));
}

#[test]
fn test_function_parameter_source() {
    let source = ParameterSource::new(
        namespace()
            .reflect_parameter(None, FUNCTION, "test")
            .unwrap(),
    );

    assert_eq!(source.describe().unwrap(), "Tests\\Doubles\\test(test)");
    assert!(matches!(
        source.function().unwrap(),
        ParameterOwner::Function(_)
    ));
    assert_eq!(source.last_change().unwrap(), file_mtime("functions.php"));

    let record = source.to_record().unwrap();
    assert_eq!(
        record,
        SourceRecord::Parameter {
            class: None,
            function: FUNCTION.to_string(),
            parameter: "test".to_string(),
        }
    );
    assert_eq!(roundtrip(&source), AnySource::Parameter(source));
}

#[test]
fn test_missing_parameter_fails_lazily() {
    let source = restore_from(SourceRecord::Parameter {
        class: Some(ANNOTATED.to_string()),
        function: "test".to_string(),
        parameter: "missing".to_string(),
    });

    assert!(!source.is_valid());
    assert_eq!(
        source.describe().unwrap_err().to_string(),
        format!("Deserialization failed due to following error:\nParameter {ANNOTATED}::test(missing) does not exist")
    );
}

#[test]
fn test_restore_against_other_namespace() {
    let source = ClassSource::new(namespace().reflect_class(ANNOTATED).unwrap());
    let bytes = serialize(&source).unwrap();

    let restored = deserialize(&bytes, &Namespace::default()).unwrap();
    assert!(!restored.is_valid());

    let restored = deserialize(&bytes, &namespace()).unwrap();
    assert!(restored.is_valid());
}

#[test]
fn test_malformed_bytes() {
    let err = deserialize(b"not a record", &namespace()).unwrap_err();
    assert!(matches!(err, SourceError::Serialization { .. }));

    let err = deserialize(br#"{"type":"Unknown"}"#, &namespace()).unwrap_err();
    assert!(matches!(err, SourceError::Serialization { .. }));
}
