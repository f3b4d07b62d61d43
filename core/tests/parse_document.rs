use oas_typed_core::oas::enums::{
    DataType, IntegerFormat, OAuthFlowType, OperationMethod, ParameterLocation, ParameterStyle,
    SecurityType,
};
use oas_typed_core::oas::models::ResponseCode;
use oas_typed_core::{parse, parse_str, AppError, Loose, ParserOptions, Schema};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn test_petstore_document() {
    let spec = parse(fixture("petstore.yaml").to_str().unwrap()).unwrap();

    assert_eq!(spec.version, "3.0.3");
    assert_eq!(spec.info.title, "Swagger Petstore");
    assert_eq!(
        spec.info.license.as_ref().map(|license| license.name.as_str()),
        Some("Apache 2.0")
    );
    assert_eq!(
        spec.external_docs.as_ref().map(|doc| doc.url.as_str()),
        Some("http://swagger.io")
    );
    assert_eq!(spec.servers[0].variables["environment"].default, "api");
    assert_eq!(
        spec.tags.iter().map(|tag| tag.name.as_str()).collect::<Vec<_>>(),
        ["pet", "store"]
    );
    assert_eq!(spec.security[0]["petstore_auth"], ["read:pets"]);
}

#[test]
fn test_petstore_paths() {
    let spec = parse(fixture("petstore.yaml").to_str().unwrap()).unwrap();

    let urls: Vec<_> = spec.paths.iter().map(|path| path.url.as_str()).collect();
    assert_eq!(urls, ["/pets", "/pets/{id}"]);

    let pets = &spec.paths[0];
    assert_eq!(pets.extensions["owner"], serde_json::json!("pets-team"));

    let find = pets.operation(OperationMethod::Get).unwrap();
    assert_eq!(find.operation_id.as_deref(), Some("findPets"));
    assert_eq!(find.parameters.len(), 2);
    assert_eq!(find.parameters[0].style, ParameterStyle::Form);
    assert!(find.parameters[0].explode);
    assert_eq!(find.parameters[1].name, "limit");
    assert_eq!(find.parameters[1].location, ParameterLocation::Query);

    let codes: Vec<_> = find.responses.iter().map(|r| r.code).collect();
    assert_eq!(codes, [ResponseCode::Status(200), ResponseCode::Default]);
    assert_eq!(find.responses[0].headers[0].name, "X-Rate-Limit");
    assert_eq!(
        find.responses[1].description.as_deref(),
        Some("unexpected error")
    );

    let add = pets.operation(OperationMethod::Post).unwrap();
    let body = add.request_body.as_ref().unwrap();
    assert!(body.required);
    assert_eq!(body.content[0].content_type.as_str(), "application/json");
    assert_eq!(add.responses[1].code, ResponseCode::Range(4));
    assert_eq!(add.security[0]["petstore_auth"].len(), 2);

    let item = &spec.paths[1];
    let methods: Vec<_> = item.operations.iter().map(|op| op.method).collect();
    assert_eq!(methods, [OperationMethod::Get, OperationMethod::Delete]);
    assert!(item.operation(OperationMethod::Delete).unwrap().deprecated);
    assert_eq!(item.parameters[0].location, ParameterLocation::Path);
}

#[test]
fn test_petstore_schemas() {
    let spec = parse(fixture("petstore.yaml").to_str().unwrap()).unwrap();

    let kinds: Vec<_> = spec
        .schemas
        .iter()
        .map(|(name, schema)| (name.as_str(), schema.data_type()))
        .collect();
    assert_eq!(
        kinds,
        [
            ("NewPet", DataType::Object),
            ("Pet", DataType::Object),
            ("Cat", DataType::Object),
            ("Dog", DataType::Object),
            ("Animal", DataType::OneOf),
            ("Metadata", DataType::AnyOf),
            ("Error", DataType::Object),
        ]
    );

    let Schema::Object(pet) = &spec.schemas["Pet"] else {
        panic!("Pet should be an object");
    };
    let names: Vec<_> = pet.properties.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["name", "tag", "id"]);
    assert_eq!(pet.required, ["id", "name"]);
    assert!(pet.property("tag").unwrap().common().nullable);
    let Some(Schema::Integer(id)) = pet.property("id") else {
        panic!("id should be an integer");
    };
    assert_eq!(id.format, Some(Loose::Known(IntegerFormat::Int64)));
    assert!(id.common.read_only);

    let Schema::OneOf(animal) = &spec.schemas["Animal"] else {
        panic!("Animal should be a oneOf");
    };
    assert_eq!(animal.schemas.len(), 2);
    let discriminator = animal.discriminator.as_ref().unwrap();
    assert_eq!(discriminator.property_name, "kind");
    assert_eq!(discriminator.mapping["cat"], spec.schemas["Cat"]);
    assert_eq!(discriminator.mapping["dog"], spec.schemas["Dog"]);

    let metadata = &spec.schemas["Metadata"];
    assert_eq!(metadata.extensions()["internal"], serde_json::json!(true));
    let Schema::AnyOf(any) = metadata else {
        panic!("Metadata should be an implicit anyOf");
    };
    assert_eq!(any.schemas.len(), 6);
}

#[test]
fn test_petstore_security() {
    let spec = parse(fixture("petstore.yaml").to_str().unwrap()).unwrap();

    let auth = &spec.security_schemas["petstore_auth"];
    assert_eq!(auth.security_type, SecurityType::OAuth2);
    let implicit = &auth.flows[&OAuthFlowType::Implicit];
    assert_eq!(
        implicit.scopes.keys().map(String::as_str).collect::<Vec<_>>(),
        ["write:pets", "read:pets"]
    );
    assert_eq!(spec.security_schemas["api_key"].name.as_deref(), Some("api_key"));
}

#[test]
fn test_split_document() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("models.yaml"),
        r#"
User:
  type: object
  properties:
    id:
      type: string
      format: uuid
"#,
    )
    .unwrap();
    let main = dir.path().join("openapi.yaml");
    fs::write(
        &main,
        r#"
openapi: 3.1.0
info:
  title: Split
  version: "2"
components:
  schemas:
    User:
      $ref: 'models.yaml#/User'
    Users:
      type: array
      items:
        $ref: 'models.yaml#/User'
"#,
    )
    .unwrap();

    let spec = parse(main.to_str().unwrap()).unwrap();
    let Schema::Array(users) = &spec.schemas["Users"] else {
        panic!("Users should be an array");
    };
    assert_eq!(users.items.as_deref(), Some(&spec.schemas["User"]));
}

#[test]
fn test_error_surfaces_once_for_whole_document() {
    let err = parse_str(
        r#"
openapi: 3.0.0
info:
  title: Broken
  version: "1"
paths:
  /things:
    get:
      responses:
        '200':
          description: ok
          content:
            application/json:
              schema:
                type: object
                properties:
                  size:
                    type: number
                    maximum: big
"#,
        ParserOptions::default(),
    )
    .unwrap_err();

    match err {
        AppError::InvalidValue { field, value, .. } => {
            assert_eq!(field, "maximum");
            assert_eq!(value, serde_json::json!("big"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_loose_mode_keeps_unknown_values() {
    let text = r#"
openapi: 3.0.0
info:
  title: Loose
  version: "1"
paths:
  /report:
    get:
      responses:
        '200':
          description: ok
          content:
            application/vnd.report+json:
              schema:
                type: string
                format: duration
"#;

    assert!(parse_str(text, ParserOptions::default()).is_err());

    let spec = parse_str(text, ParserOptions { strict: false }).unwrap();
    let content = &spec.paths[0].operations[0].responses[0].content[0];
    assert_eq!(
        content.content_type,
        Loose::Unknown("application/vnd.report+json".into())
    );
    let Some(Schema::String(schema)) = &content.schema else {
        panic!("expected a string schema");
    };
    assert_eq!(schema.format, Some(Loose::Unknown("duration".into())));
}

#[test]
fn test_serializes_typed_graph() {
    let spec = parse(fixture("petstore.yaml").to_str().unwrap()).unwrap();
    let value = serde_json::to_value(&spec).unwrap();

    assert_eq!(value["schemas"]["Pet"]["type"], "object");
    assert_eq!(value["schemas"]["Animal"]["type"], "oneOf");
    assert_eq!(value["paths"][0]["operations"][0]["method"], "get");
    assert_eq!(value["paths"][0]["operations"][0]["responses"][0]["code"], "200");
}
