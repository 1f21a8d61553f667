//! Ad group form: typed draft, field schema, validation and widget bindings

mod bindings;
mod draft;
mod field;
pub mod schema;
mod validate;

pub use bindings::FormBindings;
pub use draft::{AdgroupDraft, FieldChange};
pub use field::{FieldId, FieldValue};
pub use schema::Rule;
pub use validate::{validate, FieldError, ValidationErrors};
