use crate::error::RegistryError;
use crate::shape::FieldShape;
use ahash::AHashMap;

/// The closed set of tags and their payload shapes.
///
/// Registration is append-only and happens at setup time; lookups take
/// `&self`, so once the registry is shared it is effectively frozen and safe
/// to read from any number of threads without coordination.
#[derive(Clone, Debug, Default)]
pub struct Registry {
  order: Vec<String>,
  shapes: AHashMap<String, FieldShape>,
}

impl Registry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a tag with its payload shape. Registering a tag twice is a
  /// setup bug and aborts with [`RegistryError::DuplicateTag`].
  pub fn register(
    &mut self,
    tag: impl Into<String>,
    shape: FieldShape,
  ) -> Result<(), RegistryError> {
    let tag = tag.into();
    if self.shapes.contains_key(&tag) {
      return Err(RegistryError::DuplicateTag { tag });
    }
    tracing::debug!(tag = %tag, fields = shape.len(), "registered variant");
    self.order.push(tag.clone());
    self.shapes.insert(tag, shape);
    Ok(())
  }

  /// The shape associated with `tag`. An unregistered tag is surfaced as
  /// [`RegistryError::UnknownTag`], never defaulted.
  pub fn shape_of(&self, tag: &str) -> Result<&FieldShape, RegistryError> {
    self
      .shapes
      .get(tag)
      .ok_or_else(|| RegistryError::UnknownTag {
        tag: tag.to_string(),
      })
  }

  pub fn contains(&self, tag: &str) -> bool {
    self.shapes.contains_key(tag)
  }

  /// Tags in registration order.
  pub fn tags(&self) -> impl Iterator<Item = &str> {
    self.order.iter().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }
}
