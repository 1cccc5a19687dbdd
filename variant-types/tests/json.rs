use serde_json::json;
use variant_types::Callback;
use variant_types::ConstructError;
use variant_types::FieldDef;
use variant_types::FieldMap;
use variant_types::FieldShape;
use variant_types::FieldType;
use variant_types::Registry;
use variant_types::Value;

fn article_registry() -> Registry {
  let mut registry = Registry::new();
  registry
    .register(
      "ARTICLE",
      FieldShape::new(vec![
        FieldDef::required("id", FieldType::Number),
        FieldDef::required("title", FieldType::String),
        FieldDef::optional("tags", FieldType::List(Box::new(FieldType::String))),
      ])
      .unwrap(),
    )
    .unwrap();
  registry
}

#[test]
fn valid_json_payload_constructs() {
  let registry = article_registry();
  let json = json!({
    "id": 34,
    "title": "우아한 타입 이야기",
    "tags": ["types", "variants"],
  });
  let value = registry.construct_json("ARTICLE", &json).unwrap();
  assert_eq!(value.as_number("id"), Some(34.0));
  assert_eq!(value.as_str("title"), Some("우아한 타입 이야기"));
}

#[test]
fn superset_json_is_rejected() {
  let registry = article_registry();
  let json = json!({
    "id": 34,
    "title": "t",
    "viewCount": 122,
  });
  let err = registry.construct_json("ARTICLE", &json).unwrap_err();
  match err {
    ConstructError::ShapeMismatch(mismatch) => {
      assert_eq!(mismatch.extra_fields, vec!["viewCount".to_string()]);
    }
    other => panic!("expected shape mismatch, got {other:?}"),
  }
}

#[test]
fn non_object_json_is_rejected_before_shape_checks() {
  let registry = article_registry();
  let err = registry.construct_json("ARTICLE", &json!([1, 2])).unwrap_err();
  assert_eq!(
    err,
    ConstructError::NonRecordPayload {
      tag: "ARTICLE".to_string(),
      actual: "list",
    }
  );
  assert_eq!(err.code(), "VT0005");
}

#[test]
fn from_json_covers_every_json_kind() {
  let json = json!({
    "null": null,
    "flag": true,
    "count": 3,
    "name": "n",
    "list": [1, "two"],
  });
  let Value::Record(fields) = Value::from_json(json) else {
    panic!("expected record");
  };
  assert_eq!(fields.get("null"), Some(&Value::Null));
  assert_eq!(fields.get("flag"), Some(&Value::Bool(true)));
  assert_eq!(fields.get("count"), Some(&Value::Number(3.0)));
  assert_eq!(fields.get("name"), Some(&Value::String("n".to_string())));
  assert_eq!(
    fields.get("list"),
    Some(&Value::List(vec![
      Value::Number(1.0),
      Value::String("two".to_string())
    ]))
  );
}

#[test]
fn to_json_refuses_callbacks() {
  let mut fields = FieldMap::new();
  fields.insert("onConfirm".to_string(), Value::Callback(Callback::new(|| {})));
  let value = Value::Record(fields);
  assert_eq!(value.to_json(), None);
  assert_eq!(Value::List(vec![value]).to_json(), None);
}

#[test]
fn callback_free_values_round_trip() {
  let original = Value::Record(
    [
      ("id".to_string(), Value::Number(7.0)),
      ("name".to_string(), Value::String("김배민".to_string())),
      (
        "scores".to_string(),
        Value::List(vec![Value::Number(1.5), Value::Null]),
      ),
    ]
    .into_iter()
    .collect(),
  );
  let json = original.to_json().unwrap();
  assert_eq!(Value::from_json(json), original);
}
