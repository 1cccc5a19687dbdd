use crate::error::DuplicateField;
use crate::value::Value;
use serde::Deserialize;
use serde::Serialize;

/// The declared type of a single payload field.
///
/// This is the closed set of shapes a variant definition can require. `Any`
/// accepts every value; `Record` nests a full [`FieldShape`] so composite
/// payloads can be validated recursively.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
  Any,
  Bool,
  Number,
  String,
  Callback,
  List(Box<FieldType>),
  Record(FieldShape),
}

impl FieldType {
  /// Whether `value` inhabits this field type.
  ///
  /// Nested records are checked against their full shape (required fields,
  /// no extras, recursive types); a nested violation surfaces at the
  /// enclosing field as a type mismatch rather than as a granular report.
  pub fn matches(&self, value: &Value) -> bool {
    match (self, value) {
      (FieldType::Any, _) => true,
      (FieldType::Bool, Value::Bool(_)) => true,
      (FieldType::Number, Value::Number(_)) => true,
      (FieldType::String, Value::String(_)) => true,
      (FieldType::Callback, Value::Callback(_)) => true,
      (FieldType::List(elem), Value::List(values)) => values.iter().all(|v| elem.matches(v)),
      (FieldType::Record(shape), Value::Record(fields)) => shape.accepts(fields),
      _ => false,
    }
  }
}

impl std::fmt::Display for FieldType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FieldType::Any => write!(f, "any"),
      FieldType::Bool => write!(f, "bool"),
      FieldType::Number => write!(f, "number"),
      FieldType::String => write!(f, "string"),
      FieldType::Callback => write!(f, "callback"),
      FieldType::List(elem) => write!(f, "list<{elem}>"),
      FieldType::Record(_) => write!(f, "record"),
    }
  }
}

/// One field in a variant definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
  pub name: String,
  pub ty: FieldType,
  pub optional: bool,
}

impl FieldDef {
  pub fn required(name: impl Into<String>, ty: FieldType) -> Self {
    Self {
      name: name.into(),
      ty,
      optional: false,
    }
  }

  pub fn optional(name: impl Into<String>, ty: FieldType) -> Self {
    Self {
      name: name.into(),
      ty,
      optional: true,
    }
  }
}

/// The payload shape associated with one tag: a set of field definitions,
/// sorted by name at construction so lookups can binary search.
///
/// Field names within a shape are unique; [`FieldShape::new`] rejects
/// duplicates rather than letting a later definition shadow an earlier one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldDef>", into = "Vec<FieldDef>")]
pub struct FieldShape {
  fields: Vec<FieldDef>,
}

impl FieldShape {
  pub fn new(mut fields: Vec<FieldDef>) -> Result<Self, DuplicateField> {
    fields.sort_by(|a, b| a.name.cmp(&b.name));
    for pair in fields.windows(2) {
      if pair[0].name == pair[1].name {
        return Err(DuplicateField {
          name: pair[0].name.clone(),
        });
      }
    }
    Ok(Self { fields })
  }

  pub fn empty() -> Self {
    Self { fields: Vec::new() }
  }

  pub fn find_field(&self, name: &str) -> Option<&FieldDef> {
    self
      .fields
      .binary_search_by(|def| def.name.as_str().cmp(name))
      .ok()
      .map(|idx| &self.fields[idx])
  }

  /// Fields in name order.
  pub fn fields(&self) -> &[FieldDef] {
    &self.fields
  }

  pub fn len(&self) -> usize {
    self.fields.len()
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  /// Compose this shape with a shared base record.
  ///
  /// Shared field sets are modeled by embedding, not by an inheritance
  /// hierarchy: the result contains the base's fields plus this shape's
  /// fields. A name collision between the two is a [`DuplicateField`] error.
  pub fn extend(&self, base: &FieldShape) -> Result<FieldShape, DuplicateField> {
    let mut fields = base.fields.clone();
    fields.extend(self.fields.iter().cloned());
    FieldShape::new(fields)
  }

  /// Whether `fields` satisfies this shape exactly: every required field
  /// present and typed correctly, optional fields typed correctly when
  /// present, and no field outside the shape.
  pub(crate) fn accepts(&self, fields: &crate::value::FieldMap) -> bool {
    for def in &self.fields {
      match fields.get(&def.name) {
        Some(value) => {
          if !def.ty.matches(value) {
            return false;
          }
        }
        None => {
          if !def.optional {
            return false;
          }
        }
      }
    }
    fields.keys().all(|name| self.find_field(name).is_some())
  }
}

impl TryFrom<Vec<FieldDef>> for FieldShape {
  type Error = DuplicateField;

  fn try_from(fields: Vec<FieldDef>) -> Result<Self, Self::Error> {
    FieldShape::new(fields)
  }
}

impl From<FieldShape> for Vec<FieldDef> {
  fn from(shape: FieldShape) -> Self {
    shape.fields
  }
}
