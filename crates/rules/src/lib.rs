//! Validation rules for the registration form.
//!
//! Rules are a static table keyed by [`FieldId`] and interpreted by a single
//! evaluator. Evaluation is pure: it reads values and yields messages, never
//! touching the record.

use std::sync::LazyLock;

use regex::Regex;
use signup_primitives::{ErrorMap, FIELD_COUNT, FieldId, FormRecord, digits};


static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static CEP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{5}-?\d{3}$").expect("valid postal code pattern"));
static STATE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("valid state pattern"));

/// Constraint checked once a value is present.
#[derive(Debug)]
pub enum Shape {
	/// Any non-empty value passes.
	Any,
	/// The value must match the pattern.
	Pattern { regex: &'static LazyLock<Regex>, message: &'static str },
	/// The value must have at least `min` characters.
	MinLen { min: usize, message: &'static str },
	/// The number of digits in the value must be one of `allowed`.
	DigitCount { allowed: &'static [usize], message: &'static str },
}

impl Shape {
	fn check(&self, value: &str) -> Option<&'static str> {
		match *self {
			Self::Any => None,
			Self::Pattern { regex, message } => (!regex.is_match(value)).then_some(message),
			Self::MinLen { min, message } => (value.chars().count() < min).then_some(message),
			Self::DigitCount { allowed, message } => (!allowed.contains(&digits(value).len())).then_some(message),
		}
	}
}

/// Validation rule for one field.
#[derive(Debug)]
pub struct Rule {
	pub field: FieldId,
	/// Message for an empty value; `None` makes the field optional.
	pub required: Option<&'static str>,
	/// Surrounding whitespace is ignored before checking.
	pub trim: bool,
	pub shape: Shape,
}

impl Rule {
	const fn required(field: FieldId, message: &'static str) -> Self {
		Self {
			field,
			required: Some(message),
			trim: true,
			shape: Shape::Any,
		}
	}

	const fn optional(field: FieldId) -> Self {
		Self {
			field,
			required: None,
			trim: true,
			shape: Shape::Any,
		}
	}

	const fn shaped(mut self, shape: Shape) -> Self {
		self.shape = shape;
		self
	}

	const fn untrimmed(mut self) -> Self {
		self.trim = false;
		self
	}

	/// Returns the message for `value`, or `None` when it satisfies the rule.
	pub fn check(&self, value: &str) -> Option<&'static str> {
		let value = if self.trim { value.trim() } else { value };
		if value.is_empty() {
			return self.required;
		}
		self.shape.check(value)
	}
}

/// The rule table, indexed by [`FieldId`].
pub static RULES: [Rule; FIELD_COUNT] = [
	Rule::required(FieldId::Name, "Este campo é obrigatório."),
	Rule::required(FieldId::Email, "E-mail é obrigatório.").shaped(Shape::Pattern {
		regex: &EMAIL,
		message: "Informe um e-mail válido.",
	}),
	Rule::required(FieldId::Password, "Senha é obrigatória.")
		.untrimmed()
		.shaped(Shape::MinLen {
			min: 6,
			message: "Mínimo de 6 caracteres.",
		}),
	Rule::optional(FieldId::Phone).shaped(Shape::DigitCount {
		allowed: &[0, 10, 11],
		message: "Informe um telefone válido.",
	}),
	Rule::required(FieldId::PostalCode, "CEP é obrigatório.").shaped(Shape::Pattern {
		regex: &CEP,
		message: "Informe um CEP válido.",
	}),
	Rule::required(FieldId::Street, "Logradouro é obrigatório."),
	Rule::required(FieldId::Number, "Número é obrigatório."),
	Rule::optional(FieldId::Complement),
	Rule::required(FieldId::Neighborhood, "Bairro é obrigatório."),
	Rule::required(FieldId::City, "Cidade é obrigatória."),
	Rule::required(FieldId::State, "UF é obrigatória.").shaped(Shape::Pattern {
		regex: &STATE,
		message: "Use 2 letras, ex: SP.",
	}),
];

/// Returns the rule for `field`.
pub fn rule(field: FieldId) -> &'static Rule {
	&RULES[field as usize]
}

/// Checks one field value against its rule.
pub fn check(field: FieldId, value: &str) -> Option<&'static str> {
	rule(field).check(value)
}

/// Runs every rule against `record`, collecting the failures.
pub fn validate(record: &FormRecord) -> ErrorMap {
	RULES
		.iter()
		.filter_map(|rule| rule.check(record.get(rule.field)).map(|message| (rule.field, message)))
		.collect()
}
