use serde::Serialize;
use signup_primitives::{FieldId, FieldSpec};

use crate::notifications::Notification;
use crate::status::LookupStatus;

/// Render-ready state of one field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldView<'a> {
	pub id: FieldId,
	pub label: &'static str,
	pub placeholder: &'static str,
	pub required: bool,
	pub auto_filled: bool,
	/// Maximum display length, in characters.
	pub max_len: Option<usize>,
	pub value: &'a str,
	pub error: Option<&'static str>,
}

impl<'a> FieldView<'a> {
	pub(crate) fn new(spec: &'static FieldSpec, value: &'a str, error: Option<&'static str>) -> Self {
		Self {
			id: spec.id,
			label: spec.label,
			placeholder: spec.placeholder,
			required: spec.required,
			auto_filled: spec.auto_filled,
			max_len: spec.max_len,
			value,
			error,
		}
	}
}

/// Immutable snapshot of everything the presentation layer renders.
#[derive(Debug, Clone, Serialize)]
pub struct FormView<'a> {
	pub fields: Vec<FieldView<'a>>,
	pub postal_status: LookupStatus,
	pub location_status: LookupStatus,
	/// Form-level message after a failed postal-code lookup.
	pub lookup_error: Option<&'static str>,
	pub location_denied: bool,
	pub notification: Option<&'a Notification>,
}

impl FormView<'_> {
	pub fn field(&self, id: FieldId) -> &FieldView<'_> {
		&self.fields[id as usize]
	}
}

/// Presentation strategy over a [`FormView`].
///
/// Screen variants differ only in how they draw the same snapshot; none of
/// them decides anything about the form.
pub trait Render {
	type Output;

	fn render(&mut self, view: &FormView<'_>) -> Self::Output;
}
