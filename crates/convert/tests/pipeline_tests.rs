use odata_openapi_convert::{edmx_to_openapi, edmx_to_openapi_with_annotations};
use odata_openapi_util::{contains_key_ignore_case, get_by_path};
use serde_json::{Value, json};

const EDMX_V2: &str = r#"<edmx:Edmx Version="1.0" xmlns:edmx="http://schemas.microsoft.com/ado/2007/06/edmx">
  <edmx:DataServices>
    <Schema Namespace="ProductService" xmlns="http://schemas.microsoft.com/ado/2008/09/edm">
      <EntityType Name="Product">
        <Key>
          <PropertyRef Name="ID"/>
        </Key>
        <Property Name="ID" Type="Edm.Int32"/>
        <Property Name="Name" Type="Edm.String"/>
        <Property Name="Price" Type="Edm.Decimal"/>
      </EntityType>
      <EntityContainer Name="Container">
        <EntitySet Name="Products" EntityType="ProductService.Product"/>
      </EntityContainer>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

const ANNOTATIONS: &str = r#"<edmx:Edmx Version="1.0" xmlns:edmx="http://schemas.microsoft.com/ado/2007/06/edmx">
  <edmx:DataServices>
    <Schema Namespace="ProductService.Annotations" xmlns="http://schemas.microsoft.com/ado/2008/09/edm">
      <Annotations Target="ProductService.Product/Name"/>
    </Schema>
  </edmx:DataServices>
</edmx:Edmx>"#;

fn convert(edmx: &str) -> Value {
    let openapi = edmx_to_openapi(edmx).expect("pipeline succeeds");
    serde_json::from_str(&openapi).expect("pipeline output is valid JSON")
}

#[test]
fn produces_valid_openapi_document() {
    let document = convert(EDMX_V2);
    assert_eq!(get_by_path(&document, "/openapi").unwrap(), &json!("3.0.0"));
    assert!(contains_key_ignore_case(&document, "paths"));
}

#[test]
fn info_description_is_removed() {
    let document = convert(EDMX_V2);
    let info = document.get("info").and_then(Value::as_object).expect("info object present");
    assert!(info.get("title").is_some());
    assert!(info.get("description").is_none());
}

#[test]
fn entity_sets_become_paths() {
    let document = convert(EDMX_V2);
    // The path key itself contains a slash, so address the paths object
    // directly instead of going through slash-delimited resolution.
    let paths = document.get("paths").and_then(Value::as_object).expect("paths object present");
    let operations = paths.get("/Products").and_then(Value::as_object).expect("/Products path present");
    assert!(operations.contains_key("get"));
}

#[test]
fn entity_types_become_component_schemas() {
    let document = convert(EDMX_V2);
    let schema = get_by_path(&document, "/components/schemas/ProductService.Product").unwrap();
    assert_eq!(schema["type"], json!("object"));
    assert_eq!(schema["properties"]["ID"]["type"], json!("integer"));
    assert_eq!(schema["properties"]["Price"]["type"], json!("number"));
    assert_eq!(schema["properties"]["Name"]["type"], json!("string"));
}

#[test]
fn search_parameter_references_are_stripped() {
    let openapi = edmx_to_openapi(EDMX_V2).expect("pipeline succeeds");
    assert!(!openapi.contains(r##"{"$ref":"#/components/parameters/search"},"##));
    // The neighbouring reference survives the textual removal.
    assert!(openapi.contains(r##"{"$ref":"#/components/parameters/top"}"##));
}

#[test]
fn annotated_conversion_keeps_search_parameter_references() {
    let openapi = edmx_to_openapi_with_annotations(ANNOTATIONS, EDMX_V2).expect("pipeline succeeds");
    let document: Value = serde_json::from_str(&openapi).expect("valid JSON");
    assert!(openapi.contains(r##"{"$ref":"#/components/parameters/search"},"##));
    let info = document.get("info").and_then(Value::as_object).expect("info object present");
    assert!(info.get("description").is_none());
}

#[test]
fn annotated_conversion_tolerates_malformed_annotations() {
    let openapi = edmx_to_openapi_with_annotations("<not-xml", EDMX_V2).expect("pipeline succeeds");
    let document: Value = serde_json::from_str(&openapi).expect("valid JSON");
    assert_eq!(get_by_path(&document, "/openapi").unwrap(), &json!("3.0.0"));
}

#[test]
fn unparseable_edmx_is_a_hard_failure() {
    assert!(edmx_to_openapi("<edmx:Edmx").is_err());
}

#[test]
fn metadata_in_unknown_namespace_is_a_hard_failure() {
    // Well-formed XML that the rules do not recognize must not yield an
    // empty document.
    assert!(edmx_to_openapi("<Edmx><DataServices/></Edmx>").is_err());
}
