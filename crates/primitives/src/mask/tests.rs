use proptest::prelude::*;

use super::*;

#[test]
fn phone_formats_progressively() {
	assert_eq!(phone_mask(""), "");
	assert_eq!(phone_mask("8"), "8");
	assert_eq!(phone_mask("82"), "82");
	assert_eq!(phone_mask("829"), "(82) 9");
	assert_eq!(phone_mask("829822"), "(82) 9822");
	assert_eq!(phone_mask("8298222"), "(82) 9822-2");
	assert_eq!(phone_mask("8232225210"), "(82) 3222-5210");
	assert_eq!(phone_mask("82982225210"), "(82) 98222-5210");
}

#[test]
fn phone_truncates_extra_digits() {
	assert_eq!(phone_mask("829822252109999"), "(82) 98222-5210");
}

#[test]
fn phone_reformats_pasted_punctuation() {
	assert_eq!(phone_mask("(82) 98222-5210"), "(82) 98222-5210");
	assert_eq!(phone_mask("+55 82 9822"), "(55) 8298-22");
}

#[test]
fn cep_inserts_hyphen_after_five_digits() {
	assert_eq!(cep_mask("01001"), "01001");
	assert_eq!(cep_mask("010010"), "01001-0");
	assert_eq!(cep_mask("01001000"), "01001-000");
	assert_eq!(cep_mask("01001-0009"), "01001-000");
}

#[test]
fn number_strips_non_digits() {
	assert_eq!(number_mask("12a-3"), "123");
	assert_eq!(number_mask("sn"), "");
}

#[test]
fn state_uppercases_and_truncates() {
	assert_eq!(state_mask("sp"), "SP");
	assert_eq!(state_mask("rjx"), "RJ");
	assert_eq!(state_mask(""), "");
}

#[test]
fn masks_accept_non_numeric_input() {
	for mask in [Mask::Phone, Mask::Number, Mask::PostalCode] {
		assert_eq!(mask.apply("abc-()"), "");
	}
	assert_eq!(Mask::None.apply(" José "), " José ");
}

proptest! {
	#[test]
	fn phone_mask_is_idempotent(input in ".{0,24}") {
		let once = phone_mask(&input);
		prop_assert_eq!(phone_mask(&once), once);
	}

	#[test]
	fn cep_mask_is_idempotent(input in ".{0,24}") {
		let once = cep_mask(&input);
		prop_assert_eq!(cep_mask(&once), once);
	}

	#[test]
	fn number_mask_is_idempotent(input in ".{0,24}") {
		let once = number_mask(&input);
		prop_assert_eq!(number_mask(&once), once);
	}

	#[test]
	fn state_mask_is_idempotent(input in "[ -~]{0,6}") {
		let once = state_mask(&input);
		prop_assert_eq!(state_mask(&once), once);
	}

	#[test]
	fn phone_mask_preserves_leading_digits(input in "[0-9]{0,11}") {
		prop_assert_eq!(digits(&phone_mask(&input)), input);
	}

	#[test]
	fn cep_mask_never_exceeds_display_length(input in "[0-9 .-]{0,20}") {
		prop_assert!(cep_mask(&input).len() <= 9);
	}
}
