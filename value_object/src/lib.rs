//! Typed, nested value objects with distinct internal, stored and public forms.
//!
//! A [`ValueObjectType`] is an ordered set of [`Field`] declarations. Instances
//! ([`ValueObject`]) are built from raw mappings, dehydrated into
//! JSON-compatible storage mappings, hydrated back, merged with
//! [`ValueObject::update`] and projected into client-facing output with
//! [`ValueObject::get_public_values`].
//!
//! Types can be declared with [`ValueObjectType::builder`] or derived from a
//! struct of [`declare`] markers with `#[derive(ValueObject)]`; the derive
//! macro lives in the companion `value_object_macros` crate.
//!
//! ```
//! use serde_json::json;
//! use value_object::{Field, ValueObjectType, raw_map};
//!
//! let loan = ValueObjectType::builder("Loan")
//!     .field("amount", Field::decimal())
//!     .build()?;
//! let applicant = ValueObjectType::builder("Applicant")
//!     .field("name", Field::primitive())
//!     .field("loan", Field::nested(loan))
//!     .build()?;
//!
//! let stored = json!({"name": "Marcus", "loan": {"amount": "10000.00"}});
//! let object = applicant.hydrate_json(&stored)?;
//! assert_eq!(serde_json::Value::Object(object.dehydrate()), stored);
//! # Ok::<(), value_object::ValueObjectError>(())
//! ```

pub use value_object_macros::ValueObject;

pub mod declare;
mod error;
mod field;
mod object;
mod result_ext;
mod session;
mod value;

pub use declare::{DeclareField, ValueObjectSchema};
pub use error::{ValueObjectError, ValueObjectResult};
pub use field::{Field, FieldKind, TextEncoding, Visibility};
pub use object::{ValueObject, ValueObjectType, ValueObjectTypeBuilder};
pub use result_ext::{IntoValueObjectResult, ValueObjectResultExt};
pub use session::SessionData;
pub use value::{ExactDecimal, RawMap, StoredMap, Value, raw_map};
