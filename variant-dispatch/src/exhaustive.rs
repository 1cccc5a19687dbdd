use crate::error::UnreachableVariant;
use std::convert::Infallible;

/// Compile-time unreachability witness.
///
/// A match arm that can hand this function a value holds something of an
/// uninhabited type, so the arm is statically dead. Extending a closed enum
/// without updating every match over it then fails at compile time instead
/// of at runtime:
///
/// ```
/// use std::convert::Infallible;
/// use variant_dispatch::assert_unreachable;
///
/// let result: Result<u32, Infallible> = Ok(1);
/// let n = match result {
///   Ok(n) => n,
///   Err(never) => assert_unreachable(never),
/// };
/// assert_eq!(n, 1);
/// ```
pub fn assert_unreachable(never: Infallible) -> ! {
  match never {}
}

/// Runtime fallback for targets without a static totality guarantee: build
/// the terminal [`UnreachableVariant`] failure for a tag that escaped every
/// handler.
pub fn unreachable_variant(received: impl Into<String>) -> UnreachableVariant {
  UnreachableVariant {
    received: received.into(),
  }
}
