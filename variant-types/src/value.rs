use ahash::AHashMap;
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

/// Field name → value map used for payloads and record values.
pub type FieldMap = AHashMap<String, Value>;

/// An opaque, cloneable callback carried inside a payload.
///
/// Models fields like the source data's `onConfirm` actions. Two callbacks
/// compare equal only when they are the same allocation; there is no
/// structural equality for functions.
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn() + Send + Sync>);

impl Callback {
  pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
    Self(Arc::new(f))
  }

  pub fn invoke(&self) {
    (self.0)()
  }
}

impl Debug for Callback {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "Callback(<fn>)")
  }
}

impl PartialEq for Callback {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }
}

/// A runtime payload value.
///
/// This is the canonical value representation crossing the construct/dispatch
/// boundary. Equality is value equality: numbers compare as IEEE doubles,
/// records compare field-wise, callbacks by identity.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
  Null,
  Bool(bool),
  Number(f64),
  String(String),
  List(Vec<Value>),
  Record(FieldMap),
  Callback(Callback),
}

impl Value {
  /// Short name of this value's kind, used in mismatch reports.
  pub fn kind_name(&self) -> &'static str {
    match self {
      Value::Null => "null",
      Value::Bool(_) => "bool",
      Value::Number(_) => "number",
      Value::String(_) => "string",
      Value::List(_) => "list",
      Value::Record(_) => "record",
      Value::Callback(_) => "callback",
    }
  }

  /// Convert untrusted boundary data into a payload value.
  ///
  /// Every JSON value has a representation here; callbacks have no JSON
  /// form, so the conversion is total in this direction only. Numbers
  /// outside `f64` range degrade the way `serde_json::Number::as_f64` does.
  pub fn from_json(json: serde_json::Value) -> Value {
    match json {
      serde_json::Value::Null => Value::Null,
      serde_json::Value::Bool(b) => Value::Bool(b),
      serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
      serde_json::Value::String(s) => Value::String(s),
      serde_json::Value::Array(items) => {
        Value::List(items.into_iter().map(Value::from_json).collect())
      }
      serde_json::Value::Object(entries) => Value::Record(
        entries
          .into_iter()
          .map(|(k, v)| (k, Value::from_json(v)))
          .collect(),
      ),
    }
  }

  /// Render this value as JSON, or `None` if it contains a callback
  /// anywhere. Non-finite numbers also have no JSON form.
  pub fn to_json(&self) -> Option<serde_json::Value> {
    match self {
      Value::Null => Some(serde_json::Value::Null),
      Value::Bool(b) => Some(serde_json::Value::Bool(*b)),
      Value::Number(n) => serde_json::Number::from_f64(*n).map(serde_json::Value::Number),
      Value::String(s) => Some(serde_json::Value::String(s.clone())),
      Value::List(items) => items
        .iter()
        .map(Value::to_json)
        .collect::<Option<Vec<_>>>()
        .map(serde_json::Value::Array),
      Value::Record(fields) => fields
        .iter()
        .map(|(k, v)| v.to_json().map(|v| (k.clone(), v)))
        .collect::<Option<serde_json::Map<_, _>>>()
        .map(serde_json::Value::Object),
      Value::Callback(_) => None,
    }
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Self {
    Value::Bool(value)
  }
}

impl From<f64> for Value {
  fn from(value: f64) -> Self {
    Value::Number(value)
  }
}

impl From<i64> for Value {
  fn from(value: i64) -> Self {
    Value::Number(value as f64)
  }
}

impl From<String> for Value {
  fn from(value: String) -> Self {
    Value::String(value)
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Value::String(value.to_string())
  }
}

impl From<Vec<Value>> for Value {
  fn from(value: Vec<Value>) -> Self {
    Value::List(value)
  }
}

impl From<FieldMap> for Value {
  fn from(value: FieldMap) -> Self {
    Value::Record(value)
  }
}

impl From<Callback> for Value {
  fn from(value: Callback) -> Self {
    Value::Callback(value)
  }
}
