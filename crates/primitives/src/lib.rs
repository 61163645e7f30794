//! Core types for the registration form: field identities, the value record,
//! the per-field error map, and input masks.

/// Per-field error messages.
pub mod errors;
/// Field identities and display metadata.
pub mod field;
/// Keystroke masks for phone, postal-code, numeric and state fields.
pub mod mask;
/// The authoritative field value record.
pub mod record;

pub use errors::ErrorMap;
pub use field::{FIELD_COUNT, FieldId, FieldSpec, ParseFieldError};
pub use mask::{Mask, cep_mask, digits, number_mask, phone_mask, state_mask};
pub use record::FormRecord;
