use itertools::Itertools;
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// Dispatch encountered a tag no handler covers. Code `VD0004`.
///
/// This is always a logic bug: either the handler set and the registry have
/// drifted apart, or the tagged value came from a different registry. It is
/// never recoverable and must not be swallowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnreachableVariant {
  pub received: String,
}

impl UnreachableVariant {
  pub fn code(&self) -> &'static str {
    "VD0004"
  }
}

impl Display for UnreachableVariant {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "reached supposedly unreachable variant `{}`",
      self.received
    )
  }
}

impl Error for UnreachableVariant {}

/// Handler-set construction and dispatch failures.
///
/// Diagnostic codes (prefix `VD`) are assigned per variant and are stable:
/// - `VD0001`: [`DispatchError::IncompleteHandlerSet`]
/// - `VD0002`: [`DispatchError::DuplicateHandler`]
/// - `VD0003`: [`DispatchError::UnknownTag`]
/// - `VD0004`: [`DispatchError::Unreachable`]
///
/// The first three are setup-time fatal: a handler set that fails to build
/// never reaches dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
  IncompleteHandlerSet { missing_tags: Vec<String> },
  DuplicateHandler { tag: String },
  UnknownTag { tag: String },
  Unreachable(UnreachableVariant),
}

impl DispatchError {
  pub fn code(&self) -> &'static str {
    match self {
      DispatchError::IncompleteHandlerSet { .. } => "VD0001",
      DispatchError::DuplicateHandler { .. } => "VD0002",
      DispatchError::UnknownTag { .. } => "VD0003",
      DispatchError::Unreachable(err) => err.code(),
    }
  }
}

impl Display for DispatchError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      DispatchError::IncompleteHandlerSet { missing_tags } => write!(
        f,
        "handler set does not cover [{}]",
        missing_tags.iter().join(", ")
      ),
      DispatchError::DuplicateHandler { tag } => {
        write!(f, "handler for tag `{tag}` registered twice")
      }
      DispatchError::UnknownTag { tag } => {
        write!(f, "handler registered for unknown tag `{tag}`")
      }
      DispatchError::Unreachable(err) => Display::fmt(err, f),
    }
  }
}

impl Error for DispatchError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      DispatchError::Unreachable(err) => Some(err),
      _ => None,
    }
  }
}

impl From<UnreachableVariant> for DispatchError {
  fn from(value: UnreachableVariant) -> Self {
    DispatchError::Unreachable(value)
  }
}
