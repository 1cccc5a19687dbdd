use crate::error::DispatchError;
use crate::exhaustive::unreachable_variant;
use ahash::AHashMap;
use variant_types::Registry;
use variant_types::TaggedValue;

/// One handler: consumes a tagged value whose tag it was registered for.
pub type Handler<R> = Box<dyn Fn(&TaggedValue) -> R + Send + Sync>;

/// A total mapping from every registered tag to a handler.
///
/// Totality is enforced when the set is built, not on first dispatch: a
/// missing handler is a setup bug and should fail while the registry and
/// handler set are being wired together.
pub struct HandlerSet<R> {
  handlers: AHashMap<String, Handler<R>>,
}

impl<R> HandlerSet<R> {
  pub fn builder(registry: &Registry) -> HandlerSetBuilder<'_, R> {
    HandlerSetBuilder {
      registry,
      handlers: AHashMap::new(),
      duplicates: Vec::new(),
    }
  }

  /// Invoke the handler matching `value`'s tag and return its result.
  ///
  /// Exactly one handler runs per dispatch. A tag outside the set (a value
  /// constructed against a different registry, or registry/handler-set skew
  /// that slipped past [`HandlerSetBuilder::build`]) fails through the
  /// exhaustiveness checker with [`DispatchError::Unreachable`].
  pub fn dispatch(&self, value: &TaggedValue) -> Result<R, DispatchError> {
    match self.handlers.get(value.tag()) {
      Some(handler) => {
        tracing::debug!(tag = value.tag(), "dispatching variant");
        Ok(handler(value))
      }
      None => Err(unreachable_variant(value.tag()).into()),
    }
  }

  pub fn len(&self) -> usize {
    self.handlers.len()
  }

  pub fn is_empty(&self) -> bool {
    self.handlers.is_empty()
  }
}

impl<R> std::fmt::Debug for HandlerSet<R> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("HandlerSet")
      .field("tags", &self.handlers.keys().collect::<Vec<_>>())
      .finish()
  }
}

/// Accumulates handlers, then checks the set against the registry.
pub struct HandlerSetBuilder<'r, R> {
  registry: &'r Registry,
  handlers: AHashMap<String, Handler<R>>,
  duplicates: Vec<String>,
}

impl<'r, R> HandlerSetBuilder<'r, R> {
  pub fn on(
    mut self,
    tag: impl Into<String>,
    handler: impl Fn(&TaggedValue) -> R + Send + Sync + 'static,
  ) -> Self {
    let tag = tag.into();
    if self.handlers.insert(tag.clone(), Box::new(handler)).is_some() {
      self.duplicates.push(tag);
    }
    self
  }

  /// Check the accumulated handlers against the registry and produce the
  /// set.
  ///
  /// Fails with [`DispatchError::DuplicateHandler`] if a tag was registered
  /// twice, [`DispatchError::UnknownTag`] if a handler covers a tag the
  /// registry does not know, and [`DispatchError::IncompleteHandlerSet`]
  /// (listing every missing tag, in registration order) if any registered
  /// tag has no handler.
  pub fn build(self) -> Result<HandlerSet<R>, DispatchError> {
    let Self {
      registry,
      handlers,
      mut duplicates,
    } = self;
    duplicates.sort();
    if let Some(tag) = duplicates.into_iter().next() {
      return Err(DispatchError::DuplicateHandler { tag });
    }
    let mut unknown: Vec<&String> = handlers
      .keys()
      .filter(|tag| !registry.contains(tag))
      .collect();
    unknown.sort();
    if let Some(tag) = unknown.first() {
      return Err(DispatchError::UnknownTag {
        tag: (*tag).clone(),
      });
    }
    let missing_tags: Vec<String> = registry
      .tags()
      .filter(|tag| !handlers.contains_key(*tag))
      .map(str::to_string)
      .collect();
    if !missing_tags.is_empty() {
      return Err(DispatchError::IncompleteHandlerSet { missing_tags });
    }
    Ok(HandlerSet { handlers })
  }
}
