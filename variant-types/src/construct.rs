use crate::error::ConstructError;
use crate::error::ShapeMismatch;
use crate::error::WrongTypeField;
use crate::registry::Registry;
use crate::value::Callback;
use crate::value::FieldMap;
use crate::value::Value;

/// Knobs for payload construction.
///
/// `skip_shape_checks` exists for closed pipelines where every payload is
/// produced by trusted, already-typed code; the default keeps runtime
/// validation on, which is the correct setting whenever data crosses a
/// boundary.
#[derive(Clone, Copy, Debug)]
pub struct ConstructOptions {
  pub skip_shape_checks: bool,
}

impl Default for ConstructOptions {
  fn default() -> Self {
    Self {
      skip_shape_checks: false,
    }
  }
}

/// A validated variant instance: one tag plus exactly the fields that tag's
/// shape allows.
///
/// Values are created only through [`Registry::construct`] and are immutable
/// afterwards. A bare payload can never become a `TaggedValue` without
/// passing through its tag's shape check.
#[derive(Clone, Debug, PartialEq)]
pub struct TaggedValue {
  tag: String,
  fields: FieldMap,
}

impl TaggedValue {
  pub fn tag(&self) -> &str {
    &self.tag
  }

  pub fn field(&self, name: &str) -> Option<&Value> {
    self.fields.get(name)
  }

  pub fn fields(&self) -> &FieldMap {
    &self.fields
  }

  pub fn as_str(&self, name: &str) -> Option<&str> {
    match self.fields.get(name) {
      Some(Value::String(s)) => Some(s),
      _ => None,
    }
  }

  pub fn as_number(&self, name: &str) -> Option<f64> {
    match self.fields.get(name) {
      Some(Value::Number(n)) => Some(*n),
      _ => None,
    }
  }

  pub fn as_bool(&self, name: &str) -> Option<bool> {
    match self.fields.get(name) {
      Some(Value::Bool(b)) => Some(*b),
      _ => None,
    }
  }

  pub fn as_callback(&self, name: &str) -> Option<&Callback> {
    match self.fields.get(name) {
      Some(Value::Callback(cb)) => Some(cb),
      _ => None,
    }
  }
}

impl Registry {
  /// Produce a validated [`TaggedValue`] from a tag and a raw payload.
  ///
  /// The payload must contain exactly the fields the tag's shape declares:
  /// required fields present and correctly typed, optional fields correctly
  /// typed when present, nothing else. Pure: identical inputs yield equal
  /// values, and nothing is mutated on failure.
  pub fn construct(&self, tag: &str, payload: FieldMap) -> Result<TaggedValue, ConstructError> {
    self.construct_with(tag, payload, ConstructOptions::default())
  }

  pub fn construct_with(
    &self,
    tag: &str,
    payload: FieldMap,
    options: ConstructOptions,
  ) -> Result<TaggedValue, ConstructError> {
    let shape = self.shape_of(tag)?;
    if !options.skip_shape_checks {
      let mut missing_fields = Vec::new();
      let mut wrong_type_fields = Vec::new();
      for def in shape.fields() {
        match payload.get(&def.name) {
          Some(value) => {
            if !def.ty.matches(value) {
              wrong_type_fields.push(WrongTypeField {
                field: def.name.clone(),
                expected: def.ty.clone(),
                actual: value.kind_name(),
              });
            }
          }
          None => {
            if !def.optional {
              missing_fields.push(def.name.clone());
            }
          }
        }
      }
      let mut extra_fields: Vec<String> = payload
        .keys()
        .filter(|name| shape.find_field(name).is_none())
        .cloned()
        .collect();
      extra_fields.sort();
      if !missing_fields.is_empty() || !extra_fields.is_empty() || !wrong_type_fields.is_empty() {
        tracing::debug!(
          tag = %tag,
          missing = missing_fields.len(),
          extra = extra_fields.len(),
          mistyped = wrong_type_fields.len(),
          "payload rejected"
        );
        // shape.fields() is already name-sorted, so missing/wrong_type are too.
        return Err(
          ShapeMismatch {
            tag: tag.to_string(),
            missing_fields,
            extra_fields,
            wrong_type_fields,
          }
          .into(),
        );
      }
    }
    Ok(TaggedValue {
      tag: tag.to_string(),
      fields: payload,
    })
  }

  /// Validate raw JSON from a boundary and construct a tagged value from it.
  ///
  /// The JSON must be an object; anything else fails with
  /// [`ConstructError::NonRecordPayload`] before any shape check runs.
  pub fn construct_json(
    &self,
    tag: &str,
    json: &serde_json::Value,
  ) -> Result<TaggedValue, ConstructError> {
    match Value::from_json(json.clone()) {
      Value::Record(fields) => self.construct(tag, fields),
      other => Err(ConstructError::NonRecordPayload {
        tag: tag.to_string(),
        actual: other.kind_name(),
      }),
    }
  }
}
