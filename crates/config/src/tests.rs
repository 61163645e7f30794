use std::io::Write;

use pretty_assertions::assert_eq;
use signup_gateway::AddressLookup;

use super::*;

const SAMPLE: &str = r#"
[form]
validation = "on-submit"

[lookup]
base-url = "http://localhost:8080/ws/"
delay-ms = 250
offline = true

[[lookup.fixtures]]
cep = "01001-000"
street = "Praça da Sé"
neighborhood = "Sé"
city = "São Paulo"
state = "SP"
complement = "lado ímpar"

[location]
permission = "granted"

[location.place]
street = "Praça da Sé"
district = "Sé"
city = "São Paulo"
region = "SP"
postal-code = "01001-000"
"#;

#[test]
fn empty_input_yields_defaults() {
	let config = Config::parse("").unwrap();
	assert_eq!(config, Config::default());
	assert_eq!(config.lookup.base_url, "https://viacep.com.br/ws");
	assert_eq!(config.form.validation, ValidationMode::OnChange);
	assert_eq!(config.location.permission, Permission::Granted);
	assert!(config.location.place.is_none());
}

#[test]
fn parses_every_section() {
	let config = Config::parse(SAMPLE).unwrap();
	assert_eq!(config.form.validation, ValidationMode::OnSubmit);
	assert!(config.lookup.offline);
	assert_eq!(config.lookup.fixtures.len(), 1);
	assert_eq!(config.lookup.fixtures[0].complement, "lado ímpar");

	let place = config.location.place.as_ref().unwrap();
	assert_eq!(place.postal_code.as_deref(), Some("01001-000"));
	assert_eq!(place.region.as_deref(), Some("SP"));

	let options = config.form_options();
	assert_eq!(options.validation, ValidationMode::OnSubmit);
	assert_eq!(options.lookup_delay, Duration::from_millis(250));
}

#[test]
fn rejects_non_http_base_url() {
	let err = Config::parse("[lookup]\nbase-url = \"ftp://example.com\"").unwrap_err();
	assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
}

#[test]
fn rejects_short_fixture_code() {
	let err = Config::parse("[[lookup.fixtures]]\ncep = \"0100\"").unwrap_err();
	assert!(err.to_string().contains("lookup.fixtures"), "{err}");
}

#[test]
fn rejects_unknown_keys() {
	let err = Config::parse("[form]\nvalidaton = \"on-change\"").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "{err}");
}

#[test]
fn rejects_unknown_validation_mode() {
	assert!(Config::parse("[form]\nvalidation = \"sometimes\"").is_err());
}

#[tokio::test]
async fn fixtures_answer_by_digits() {
	let config = Config::parse(SAMPLE).unwrap();
	let lookup = config.static_lookup();
	let address = lookup.lookup("01001000").await.unwrap();
	assert_eq!(address.street, "Praça da Sé");
	assert_eq!(address.postal_code, "01001-000");
	assert!(lookup.lookup("01310100").await.is_err());
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	file.write_all(SAMPLE.as_bytes()).unwrap();
	let config = Config::load(file.path()).unwrap();
	assert_eq!(config.lookup.delay_ms, 250);
}

#[test]
fn explicit_missing_file_is_an_error() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("absent.toml");
	let err = Config::load_or_default(Some(&path)).unwrap_err();
	match err {
		ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
		other => panic!("unexpected error: {other}"),
	}
}
