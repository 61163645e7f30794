//! Input masks.
//!
//! Every mask is total and idempotent: `mask(mask(x)) == mask(x)` for any
//! input, including empty and fully non-numeric strings.

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// Maximum digits in a phone number (area code + 9-digit mobile).
pub const PHONE_DIGITS: usize = 11;

/// Digits in a complete postal code (CEP).
pub const CEP_DIGITS: usize = 8;

/// Characters kept by the state (UF) mask.
pub const STATE_LEN: usize = 2;

/// Mask selector attached to each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mask {
	/// Raw input is stored as typed.
	#[default]
	None,
	Phone,
	Number,
	PostalCode,
	State,
}

impl Mask {
	/// Applies the mask to raw input.
	pub fn apply(self, input: &str) -> String {
		match self {
			Self::None => input.to_string(),
			Self::Phone => phone_mask(input),
			Self::Number => number_mask(input),
			Self::PostalCode => cep_mask(input),
			Self::State => state_mask(input),
		}
	}
}

/// Returns the ASCII digits of `input`, in order.
pub fn digits(input: &str) -> String {
	input.chars().filter(char::is_ascii_digit).collect()
}

fn digits_capped(input: &str, cap: usize) -> String {
	input.chars().filter(char::is_ascii_digit).take(cap).collect()
}

/// Formats a phone number progressively as it is typed: `(82) 98222-5210`.
pub fn phone_mask(input: &str) -> String {
	let d = digits_capped(input, PHONE_DIGITS);
	match d.len() {
		0..=2 => d,
		3..=6 => format!("({}) {}", &d[..2], &d[2..]),
		7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
		_ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
	}
}

/// Keeps only digits, without a length cap.
pub fn number_mask(input: &str) -> String {
	digits(input)
}

/// Formats a postal code as `DDDDD-DDD` once more than five digits are present.
pub fn cep_mask(input: &str) -> String {
	let d = digits_capped(input, CEP_DIGITS);
	if d.len() <= 5 {
		return d;
	}
	format!("{}-{}", &d[..5], &d[5..])
}

/// Uppercases a state abbreviation and keeps its first two characters.
pub fn state_mask(input: &str) -> String {
	input.to_uppercase().chars().take(STATE_LEN).collect()
}
