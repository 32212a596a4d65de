use indexmap::IndexMap;

use model_sampleable::codegen::Codegen;
use model_sampleable::path_de::decls_from_str;
use model_sampleable::{
    AggregateDecl, DeclKind, ExpandError, SynthOptions, expand, expand_with_overrides,
};

fn model() -> AggregateDecl {
    AggregateDecl::new(DeclKind::Struct, "Model")
}

fn call(decl: &AggregateDecl) -> String {
    expand(decl, &SynthOptions::default()).unwrap().constructor_call()
}

#[test]
fn string_and_int_model() {
    let decl = model().with_field("stringProperty", "String").with_field("intProperty", "Int");
    assert_eq!(call(&decl), r#"Model(stringProperty: "Sample stringProperty", intProperty: 123)"#);
}

#[test]
fn dictionary_shorthand_field() {
    let decl = model().with_field("dictionaryShorthand", "[String:Int]");
    assert_eq!(call(&decl), r#"Model(dictionaryShorthand: ["Sample key": 123])"#);
}

#[test]
fn set_field() {
    let decl = model().with_field("set", "Set<String>");
    assert_eq!(call(&decl), r#"Model(set: Set(["Sample set value"]))"#);
}

#[test]
fn custom_type_delegates() {
    let decl = model().with_field("objectType", "Object");
    assert_eq!(call(&decl), "Model(objectType: Object.sampleData)");
}

#[test]
fn every_shape_in_one_model() {
    let decl = model()
        .with_field("title", "String")
        .with_field("nickname", "String?")
        .with_field("count", "Int")
        .with_field("ratio", "Double")
        .with_field("enabled", "Bool")
        .with_field("tags", "[String]")
        .with_field("lookup", "Dictionary<String, [Int]>")
        .with_field("ids", "Set<Int>")
        .with_field("owner", "User");
    assert_eq!(
        call(&decl),
        "Model(title: \"Sample title\", nickname: nil, count: 123, ratio: 123.45, enabled: true, \
         tags: [\"Sample tags\"], lookup: [\"Sample key\": [123]], ids: Set([123]), owner: User.sampleData)"
    );
}

#[test]
fn json_document_through_codegen() {
    let src = r#"{
        "kind": "struct",
        "name": "Profile",
        "members": [
            { "variable": { "bindings": [ { "pattern": { "identifier": "name" }, "type_annotation": "String" } ] } },
            { "variable": { "bindings": [ { "pattern": { "identifier": "stored" }, "type_annotation": "String", "initializer": "\"stored\"" } ] } },
            { "variable": { "bindings": [ { "pattern": { "identifier": "age" }, "type_annotation": "Int" } ] } }
        ]
    }"#;
    let decls = decls_from_str(src).unwrap();
    let mut overrides = IndexMap::new();
    overrides.insert("String".to_string(), "custom".to_string());
    let expansion = expand_with_overrides(&decls[0], &overrides).unwrap();

    let mut cg = Codegen::new();
    cg.emit(&expansion);
    assert_eq!(
        cg.into_string(),
        "static var sampleData: Profile {\n    Profile(name: \"custom\", age: 123)\n}\n"
    );
}

#[test]
fn enum_declaration_fails() {
    let decl = AggregateDecl::new(DeclKind::Enum, "Color");
    let err = expand(&decl, &SynthOptions::default()).unwrap_err();
    assert!(matches!(err, ExpandError::NotAnAggregateType { kind: DeclKind::Enum, .. }));
}
