//! Exhaustiveness-checked dispatch over tagged variants.
//!
//! A [`HandlerSet`] maps every tag in a [`variant_types::Registry`] to one
//! handler. Totality is checked when the set is built, so a forgotten
//! handler fails during setup rather than on the first unlucky dispatch.
//! [`assert_unreachable`] is the compile-time form of the same guarantee for
//! code that matches over closed Rust enums directly.
//!
//! ```
//! use variant_dispatch::HandlerSet;
//! use variant_types::{FieldDef, FieldShape, FieldType, Registry};
//!
//! let mut registry = Registry::new();
//! let shape = FieldShape::new(vec![FieldDef::required("errorMessage", FieldType::String)]);
//! registry.register("TEXT", shape.unwrap()).unwrap();
//!
//! let handlers = HandlerSet::builder(&registry)
//!   .on("TEXT", |v| v.as_str("errorMessage").unwrap_or("").to_string())
//!   .build()
//!   .unwrap();
//!
//! let payload = [("errorMessage".to_string(), "boom".into())]
//!   .into_iter()
//!   .collect();
//! let value = registry.construct("TEXT", payload).unwrap();
//! assert_eq!(handlers.dispatch(&value).unwrap(), "boom");
//! ```

pub mod error;
pub mod exhaustive;
pub mod handlers;

pub use error::DispatchError;
pub use error::UnreachableVariant;
pub use exhaustive::assert_unreachable;
pub use exhaustive::unreachable_variant;
pub use handlers::Handler;
pub use handlers::HandlerSet;
pub use handlers::HandlerSetBuilder;
