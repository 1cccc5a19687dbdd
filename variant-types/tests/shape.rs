use variant_types::DuplicateField;
use variant_types::FieldDef;
use variant_types::FieldMap;
use variant_types::FieldShape;
use variant_types::FieldType;
use variant_types::Value;

fn record(entries: Vec<(&str, Value)>) -> FieldMap {
  entries
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

#[test]
fn duplicate_field_names_rejected() {
  let err = FieldShape::new(vec![
    FieldDef::required("name", FieldType::String),
    FieldDef::optional("name", FieldType::Number),
  ])
  .unwrap_err();
  assert_eq!(
    err,
    DuplicateField {
      name: "name".to_string()
    }
  );
  assert_eq!(err.code(), "VT0004");
}

#[test]
fn find_field_uses_name_order() {
  let shape = FieldShape::new(vec![
    FieldDef::required("quantity", FieldType::Number),
    FieldDef::required("itemName", FieldType::String),
    FieldDef::optional("stock", FieldType::Number),
  ])
  .unwrap();
  assert_eq!(shape.len(), 3);
  assert!(shape.find_field("itemName").is_some());
  assert!(shape.find_field("stock").is_some());
  assert!(shape.find_field("price").is_none());
  let names: Vec<&str> = shape.fields().iter().map(|d| d.name.as_str()).collect();
  assert_eq!(names, vec!["itemName", "quantity", "stock"]);
}

#[test]
fn extend_embeds_shared_base_fields() {
  // Shared menu-item fields composed into a cart-item shape, instead of an
  // inheritance chain.
  let base = FieldShape::new(vec![
    FieldDef::required("itemName", FieldType::String),
    FieldDef::required("price", FieldType::Number),
  ])
  .unwrap();
  let cart = FieldShape::new(vec![FieldDef::required("quantity", FieldType::Number)])
    .unwrap()
    .extend(&base)
    .unwrap();
  assert_eq!(cart.len(), 3);
  assert!(cart.find_field("itemName").is_some());
  assert!(cart.find_field("quantity").is_some());

  let clash = FieldShape::new(vec![FieldDef::required("price", FieldType::Number)]).unwrap();
  let err = clash.extend(&base).unwrap_err();
  assert_eq!(err.name, "price");
}

#[test]
fn list_types_check_every_element() {
  let numbers = FieldType::List(Box::new(FieldType::Number));
  assert!(numbers.matches(&Value::List(vec![Value::Number(1.0), Value::Number(2.0)])));
  assert!(numbers.matches(&Value::List(vec![])));
  assert!(!numbers.matches(&Value::List(vec![Value::Number(1.0), Value::Bool(true)])));
  assert!(!numbers.matches(&Value::Number(1.0)));
}

#[test]
fn record_types_check_the_nested_shape() {
  let inner = FieldShape::new(vec![
    FieldDef::required("lat", FieldType::Number),
    FieldDef::required("lng", FieldType::Number),
  ])
  .unwrap();
  let ty = FieldType::Record(inner);

  let ok = Value::Record(record(vec![
    ("lat", Value::Number(37.5)),
    ("lng", Value::Number(127.0)),
  ]));
  assert!(ty.matches(&ok));

  let missing = Value::Record(record(vec![("lat", Value::Number(37.5))]));
  assert!(!ty.matches(&missing));

  let extra = Value::Record(record(vec![
    ("lat", Value::Number(37.5)),
    ("lng", Value::Number(127.0)),
    ("alt", Value::Number(12.0)),
  ]));
  assert!(!ty.matches(&extra));
}

#[test]
fn any_accepts_everything() {
  for value in [
    Value::Null,
    Value::Bool(false),
    Value::Number(0.0),
    Value::String(String::new()),
    Value::List(vec![]),
    Value::Record(FieldMap::new()),
  ] {
    assert!(FieldType::Any.matches(&value));
  }
}

#[test]
fn shape_serde_round_trip_preserves_fields() {
  let shape = FieldShape::new(vec![
    FieldDef::required("errorCode", FieldType::String),
    FieldDef::optional("tags", FieldType::List(Box::new(FieldType::String))),
  ])
  .unwrap();
  let json = serde_json::to_string(&shape).unwrap();
  let back: FieldShape = serde_json::from_str(&json).unwrap();
  assert_eq!(shape, back);
}

#[test]
fn shape_deserialization_rejects_duplicates() {
  let shape = FieldShape::new(vec![
    FieldDef::required("a", FieldType::Number),
    FieldDef::required("b", FieldType::Number),
  ])
  .unwrap();
  let json = serde_json::to_string(&shape).unwrap();
  let forged = json.replace("\"b\"", "\"a\"");
  assert!(serde_json::from_str::<FieldShape>(&forged).is_err());
}
