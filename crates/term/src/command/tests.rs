use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

#[rstest]
#[case("edit name Ana Souza", Command::Edit { field: FieldId::Name, text: "Ana Souza".into() })]
#[case("edit postalCode 01001000", Command::Edit { field: FieldId::PostalCode, text: "01001000".into() })]
#[case("edit street", Command::Edit { field: FieldId::Street, text: String::new() })]
#[case("  locate", Command::Locate)]
#[case("submit", Command::Submit)]
#[case("wait  ", Command::Wait)]
#[case("show", Command::Show)]
#[case("exit", Command::Quit)]
fn parses_commands(#[case] line: &str, #[case] expected: Command) {
	assert_eq!(Command::parse_line(line).unwrap(), Some(expected));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("# preenche o endereço")]
fn skips_blank_lines_and_comments(#[case] line: &str) {
	assert_eq!(Command::parse_line(line).unwrap(), None);
}

#[test]
fn edit_keeps_inner_spacing() {
	let command = Command::parse_line("edit complement apto  12 ").unwrap();
	assert_eq!(
		command,
		Some(Command::Edit {
			field: FieldId::Complement,
			text: "apto  12 ".into(),
		})
	);
}

#[rstest]
#[case("jump", CommandError::Unknown("jump".into()))]
#[case("edit", CommandError::MissingField)]
#[case("edit cep 01001000", CommandError::Field(ParseFieldError("cep".into())))]
#[case("submit now", CommandError::UnexpectedArgs("submit"))]
fn rejects_malformed_lines(#[case] line: &str, #[case] expected: CommandError) {
	assert_eq!(Command::parse_line(line).unwrap_err(), expected);
}
