//! Tagged-variant data model with runtime shape validation.
//!
//! A [`Registry`] declares a closed set of tags, each tied to one payload
//! [`FieldShape`]. [`Registry::construct`] is the only way to produce a
//! [`TaggedValue`]: it ties field legality to the tag, so a payload that
//! merely happens to be structurally compatible with several variants is
//! rejected instead of silently accepted.
//!
//! ```
//! use variant_types::{FieldDef, FieldShape, FieldType, Registry, Value};
//!
//! let mut registry = Registry::new();
//! registry
//!   .register(
//!     "TOAST",
//!     FieldShape::new(vec![
//!       FieldDef::required("errorCode", FieldType::String),
//!       FieldDef::required("errorMessage", FieldType::String),
//!       FieldDef::required("toastShowDuration", FieldType::Number),
//!     ])
//!     .unwrap(),
//!   )
//!   .unwrap();
//!
//! let payload = [
//!   ("errorCode".to_string(), Value::from("200")),
//!   ("errorMessage".to_string(), Value::from("toast error")),
//!   ("toastShowDuration".to_string(), Value::from(3000i64)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let value = registry.construct("TOAST", payload).unwrap();
//! assert_eq!(value.tag(), "TOAST");
//! assert_eq!(value.as_number("toastShowDuration"), Some(3000.0));
//! ```

pub mod construct;
pub mod error;
pub mod registry;
pub mod shape;
pub mod value;

pub use construct::ConstructOptions;
pub use construct::TaggedValue;
pub use error::ConstructError;
pub use error::DuplicateField;
pub use error::RegistryError;
pub use error::ShapeMismatch;
pub use error::WrongTypeField;
pub use registry::Registry;
pub use shape::FieldDef;
pub use shape::FieldShape;
pub use shape::FieldType;
pub use value::Callback;
pub use value::FieldMap;
pub use value::Value;
