use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

use crate::mask::Mask;

/// Number of form fields.
pub const FIELD_COUNT: usize = <FieldId as EnumCount>::COUNT;

/// Identity of one form field.
///
/// Wire names are camelCase (`postalCode`), matching what the presentation
/// layer sends with each field-change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumCount, EnumIter, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
	Name,
	Email,
	Password,
	Phone,
	PostalCode,
	Street,
	Number,
	Complement,
	Neighborhood,
	City,
	State,
}

impl FieldId {
	/// Fields derived from the postal code; emptied whenever the code is incomplete.
	pub const ADDRESS_FIELDS: [FieldId; 5] = [Self::Street, Self::Neighborhood, Self::City, Self::State, Self::Complement];

	/// Required address fields whose errors are cleared when auto-fill writes them.
	pub const REQUIRED_ADDRESS_FIELDS: [FieldId; 4] = [Self::Street, Self::Neighborhood, Self::City, Self::State];

	/// Returns the camelCase wire name.
	pub fn name(self) -> &'static str {
		self.into()
	}

	/// Returns the display metadata for this field.
	pub fn spec(self) -> &'static FieldSpec {
		&FIELDS[self as usize]
	}

	/// Returns the mask applied to raw input for this field.
	pub fn mask(self) -> Mask {
		self.spec().mask
	}

	/// Iterates all fields in display order.
	pub fn all() -> impl Iterator<Item = FieldId> {
		Self::iter()
	}

	pub(crate) const fn index(self) -> usize {
		self as usize
	}
}

impl std::fmt::Display for FieldId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Error returned when a field name does not match any [`FieldId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field: {0}")]
pub struct ParseFieldError(pub String);

impl FromStr for FieldId {
	type Err = ParseFieldError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::iter().find(|field| field.name() == s).ok_or_else(|| ParseFieldError(s.to_string()))
	}
}

/// Static display metadata for a field.
#[derive(Debug)]
pub struct FieldSpec {
	pub id: FieldId,
	pub label: &'static str,
	pub placeholder: &'static str,
	/// Rendered with a required marker.
	pub required: bool,
	/// Filled by lookups and shown read-only.
	pub auto_filled: bool,
	/// Maximum display length, in characters.
	pub max_len: Option<usize>,
	pub mask: Mask,
}

impl FieldSpec {
	const fn new(id: FieldId, label: &'static str, placeholder: &'static str) -> Self {
		Self {
			id,
			label,
			placeholder,
			required: true,
			auto_filled: false,
			max_len: None,
			mask: Mask::None,
		}
	}

	const fn optional(mut self) -> Self {
		self.required = false;
		self
	}

	const fn auto_filled(mut self) -> Self {
		self.auto_filled = true;
		self
	}

	const fn masked(mut self, mask: Mask, max_len: Option<usize>) -> Self {
		self.mask = mask;
		self.max_len = max_len;
		self
	}
}

const AUTO_FILL_HINT: &str = "Preenchido automaticamente pelo CEP";

static FIELDS: [FieldSpec; FIELD_COUNT] = [
	FieldSpec::new(FieldId::Name, "Nome Completo", "Digite seu nome"),
	FieldSpec::new(FieldId::Email, "E-mail", "Digite seu e-mail"),
	FieldSpec::new(FieldId::Password, "Senha", "Digite sua senha"),
	FieldSpec::new(FieldId::Phone, "Telefone", "(11) 98888-7777")
		.optional()
		.masked(Mask::Phone, Some(15)),
	FieldSpec::new(FieldId::PostalCode, "CEP", "00000-000").masked(Mask::PostalCode, Some(9)),
	FieldSpec::new(FieldId::Street, "Logradouro/Rua", AUTO_FILL_HINT).auto_filled(),
	FieldSpec::new(FieldId::Number, "Número", "Digite o número").masked(Mask::Number, None),
	FieldSpec::new(FieldId::Complement, "Complemento", "Apartamento, bloco, etc.").optional(),
	FieldSpec::new(FieldId::Neighborhood, "Bairro", AUTO_FILL_HINT).auto_filled(),
	FieldSpec::new(FieldId::City, "Cidade", AUTO_FILL_HINT).auto_filled(),
	FieldSpec::new(FieldId::State, "Estado/UF", "UF").masked(Mask::State, Some(2)),
];
