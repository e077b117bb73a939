//! Tests for the declaration model and lookups

use crate::*;

fn sample() -> Namespace {
    Namespace::new(ReflectConfig::default())
        .with_class(
            ClassEntity::new("App\\Model")
                .with_file("/src/Model.php")
                .with_doc("/** Model */")
                .with_attributes(vec!["Entity".to_string()])
                .with_fields(vec![
                    Field::new("Version").constant(),
                    Field::new("name").with_doc("/** Name */"),
                    Field::new("count").static_field(),
                ])
                .with_methods(vec![
                    FunctionEntity::new("rename").with_parameters(vec![
                        Parameter::new("name").with_attributes(vec!["SensitiveParameter".to_string()]),
                    ]),
                    FunctionEntity::new("create").static_fn(),
                ]),
        )
        .with_function(
            FunctionEntity::new("App\\helper")
                .with_file("/src/functions.php")
                .with_parameters(vec![Parameter::new("value")]),
        )
}

#[test]
fn test_class_entity_builder() {
    let class = ClassEntity::new("MyClass")
        .with_file("/tmp/MyClass.php")
        .with_doc("A test class");

    assert_eq!(class.name, "MyClass");
    assert_eq!(class.file.as_deref(), Some(std::path::Path::new("/tmp/MyClass.php")));
    assert_eq!(class.doc_comment, Some("A test class".to_string()));
}

#[test]
fn test_with_methods_sets_parent_class() {
    let class = ClassEntity::new("Owner").with_methods(vec![FunctionEntity::new("run")]);

    assert_eq!(class.methods[0].parent_class.as_deref(), Some("Owner"));
}

#[test]
fn test_reflect_class() {
    let namespace = sample();
    let class = namespace.reflect_class("App\\Model").unwrap();

    assert_eq!(class.name(), "App\\Model");
    assert_eq!(class.file_name(), Some(std::path::Path::new("/src/Model.php")));
    assert_eq!(class.doc_comment(), Some("/** Model */"));
    assert_eq!(class.attributes(), Some(&["Entity".to_string()][..]));
}

#[test]
fn test_reflect_class_not_found() {
    let err = sample().reflect_class("App\\Missing").unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Class \"App\\Missing\" does not exist");
}

#[test]
fn test_property_and_constant_are_distinct() {
    let namespace = sample();

    assert!(namespace.reflect_property("App\\Model", "name").is_ok());
    assert!(namespace.reflect_constant("App\\Model", "Version").is_ok());

    let err = namespace.reflect_property("App\\Model", "Version").unwrap_err();
    assert_eq!(err.to_string(), "Property App\\Model::$Version does not exist");

    let err = namespace.reflect_constant("App\\Model", "name").unwrap_err();
    assert_eq!(err.to_string(), "Constant App\\Model::name does not exist");
}

#[test]
fn test_reflect_method() {
    let namespace = sample();

    let method = namespace.reflect_method("App\\Model", "create").unwrap();
    assert!(method.is_static());
    assert_eq!(method.declaring_class().name(), "App\\Model");
    assert_eq!(method.file_name(), Some(std::path::Path::new("/src/Model.php")));

    let err = namespace.reflect_method("App\\Model", "missing").unwrap_err();
    assert_eq!(err.to_string(), "Method App\\Model::missing() does not exist");
}

#[test]
fn test_reflect_parameter() {
    let namespace = sample();

    let parameter = namespace
        .reflect_parameter(Some("App\\Model"), "rename", "name")
        .unwrap();
    assert_eq!(parameter.name(), "name");
    assert_eq!(parameter.declaring_function().name(), "rename");
    assert_eq!(parameter.declaring_class().map(|c| c.name()), Some("App\\Model"));

    let parameter = namespace.reflect_parameter(None, "App\\helper", "value").unwrap();
    assert!(parameter.declaring_class().is_none());
    assert!(matches!(parameter.declaring_function(), FunctionLike::Function(_)));
}

#[test]
fn test_reflect_parameter_not_found() {
    let namespace = sample();

    let err = namespace
        .reflect_parameter(Some("App\\Model"), "rename", "missing")
        .unwrap_err();
    assert_eq!(err.to_string(), "Parameter App\\Model::rename(missing) does not exist");

    let err = namespace
        .reflect_parameter(None, "App\\helper", "missing")
        .unwrap_err();
    assert_eq!(err.to_string(), "Parameter App\\helper(missing) does not exist");
}

#[test]
fn test_method_file_is_dropped() {
    let namespace = Namespace::from_json(
        r#"{"classes": [{
            "name": "App\\Job",
            "file": "/src/Job.php",
            "methods": [{"name": "run", "file": "/src/elsewhere.php"}]
        }]}"#,
    )
    .unwrap();

    let method = namespace.reflect_method("App\\Job", "run").unwrap();
    assert_eq!(method.entity().file, None);
    assert_eq!(method.file_name(), Some(std::path::Path::new("/src/Job.php")));
}

#[test]
fn test_reflection_capabilities() {
    let namespace = sample();
    let class = Reflection::Class(namespace.reflect_class("App\\Model").unwrap());
    let parameter = Reflection::Parameter(
        namespace
            .reflect_parameter(Some("App\\Model"), "rename", "name")
            .unwrap(),
    );

    assert!(class.supports_doc_comment());
    assert!(!parameter.supports_doc_comment());
    assert_eq!(parameter.doc_comment(), None);
    assert_eq!(parameter.attributes().map(<[String]>::len), Some(1));
    assert_eq!(parameter.kind(), "parameter");
}

#[test]
fn test_legacy_config_hides_attributes() {
    let namespace = Namespace::new(ReflectConfig::legacy())
        .with_class(ClassEntity::new("Tagged").with_attributes(vec!["Tag".to_string()]));

    let class = namespace.reflect_class("Tagged").unwrap();
    assert_eq!(class.attributes(), None);
}

#[test]
fn test_namespace_from_json() {
    let json = r#"{
        "config": { "attributes": false },
        "classes": [
            { "name": "Loaded", "fields": [ { "name": "id" } ], "methods": [ { "name": "run" } ] }
        ],
        "functions": [ { "name": "loaded_fn" } ]
    }"#;

    let namespace = Namespace::from_json(json).unwrap();

    assert!(!namespace.config().attributes);
    assert_eq!(namespace.class_names().collect::<Vec<_>>(), vec!["Loaded"]);
    assert_eq!(namespace.function_names().collect::<Vec<_>>(), vec!["loaded_fn"]);

    let method = namespace.reflect_method("Loaded", "run").unwrap();
    assert_eq!(method.entity().parent_class.as_deref(), Some("Loaded"));
}

#[test]
fn test_namespace_from_malformed_json() {
    let err = Namespace::from_json("{ not json").unwrap_err();

    assert!(!err.is_not_found());
    assert!(err.to_string().starts_with("Failed to load declarations:"));
}

#[test]
fn test_reflect_config_default() {
    assert!(ReflectConfig::default().attributes);
    assert!(!ReflectConfig::default().with_attributes(false).attributes);
}
