use crate::shape::FieldType;
use itertools::Itertools;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Registry definition and lookup failures.
///
/// Diagnostic codes (prefix `VT`) are assigned per variant and are stable:
/// - `VT0001`: [`RegistryError::UnknownTag`]
/// - `VT0002`: [`RegistryError::DuplicateTag`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RegistryError {
  UnknownTag { tag: String },
  DuplicateTag { tag: String },
}

impl RegistryError {
  /// Stable diagnostic code for this error variant.
  pub fn code(&self) -> &'static str {
    match self {
      RegistryError::UnknownTag { .. } => "VT0001",
      RegistryError::DuplicateTag { .. } => "VT0002",
    }
  }
}

impl Display for RegistryError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      RegistryError::UnknownTag { tag } => write!(f, "unknown tag `{tag}`"),
      RegistryError::DuplicateTag { tag } => write!(f, "tag `{tag}` is already registered"),
    }
  }
}

impl Error for RegistryError {}

/// Two field definitions in one shape share a name. Code `VT0004`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DuplicateField {
  pub name: String,
}

impl DuplicateField {
  pub fn code(&self) -> &'static str {
    "VT0004"
  }
}

impl Display for DuplicateField {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "duplicate field `{}` in shape", self.name)
  }
}

impl Error for DuplicateField {}

/// One field whose value did not inhabit its declared type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WrongTypeField {
  pub field: String,
  pub expected: FieldType,
  pub actual: &'static str,
}

/// A payload that does not match its tag's declared shape. Code `VT0003`.
///
/// All violations found in one validation pass are reported together, each
/// list sorted by field name, so a caller sees the full distance between the
/// payload and the shape rather than the first offending field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShapeMismatch {
  pub tag: String,
  pub missing_fields: Vec<String>,
  pub extra_fields: Vec<String>,
  pub wrong_type_fields: Vec<WrongTypeField>,
}

impl ShapeMismatch {
  pub fn code(&self) -> &'static str {
    "VT0003"
  }
}

impl Display for ShapeMismatch {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "payload does not match shape of tag `{}`:", self.tag)?;
    if !self.missing_fields.is_empty() {
      write!(f, " missing [{}]", self.missing_fields.iter().join(", "))?;
    }
    if !self.extra_fields.is_empty() {
      write!(f, " extraneous [{}]", self.extra_fields.iter().join(", "))?;
    }
    if !self.wrong_type_fields.is_empty() {
      let details = self
        .wrong_type_fields
        .iter()
        .map(|w| format!("{} (expected {}, got {})", w.field, w.expected, w.actual))
        .join(", ");
      write!(f, " mistyped [{details}]")?;
    }
    Ok(())
  }
}

impl Error for ShapeMismatch {}

/// Failures producing a tagged value from a tag and a raw payload.
///
/// Codes delegate to the underlying error where one exists:
/// - `VT0001`/`VT0002`: [`ConstructError::Registry`]
/// - `VT0003`: [`ConstructError::ShapeMismatch`]
/// - `VT0005`: [`ConstructError::NonRecordPayload`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ConstructError {
  Registry(RegistryError),
  ShapeMismatch(ShapeMismatch),
  NonRecordPayload { tag: String, actual: &'static str },
}

impl From<RegistryError> for ConstructError {
  fn from(value: RegistryError) -> Self {
    ConstructError::Registry(value)
  }
}

impl From<ShapeMismatch> for ConstructError {
  fn from(value: ShapeMismatch) -> Self {
    ConstructError::ShapeMismatch(value)
  }
}

impl ConstructError {
  pub fn code(&self) -> &'static str {
    match self {
      ConstructError::Registry(err) => err.code(),
      ConstructError::ShapeMismatch(err) => err.code(),
      ConstructError::NonRecordPayload { .. } => "VT0005",
    }
  }
}

impl Display for ConstructError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      ConstructError::Registry(err) => Display::fmt(err, f),
      ConstructError::ShapeMismatch(err) => Display::fmt(err, f),
      ConstructError::NonRecordPayload { tag, actual } => {
        write!(f, "payload for tag `{tag}` must be a record, got {actual}")
      }
    }
  }
}

impl Error for ConstructError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      ConstructError::Registry(err) => Some(err),
      ConstructError::ShapeMismatch(err) => Some(err),
      ConstructError::NonRecordPayload { .. } => None,
    }
  }
}
