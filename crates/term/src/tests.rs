use pretty_assertions::assert_eq;

use super::*;

const CONFIG: &str = r#"
[lookup]
offline = true

[[lookup.fixtures]]
cep = "01001000"
street = "Praça da Sé"
neighborhood = "Sé"
city = "São Paulo"
state = "SP"
complement = "lado ímpar"

[location]
permission = "denied"
"#;

fn session() -> Session<JsonRender> {
	let config = Config::parse(CONFIG).unwrap();
	Session::new(FormEngine::new(config.gateways(), config.form_options()), JsonRender)
}

async fn run_script(script: &str) -> Vec<serde_json::Value> {
	let mut out = Vec::new();
	run(session(), script.as_bytes(), &mut out).await.unwrap();
	String::from_utf8(out)
		.unwrap()
		.lines()
		.filter(|line| line.starts_with('{'))
		.map(|line| serde_json::from_str(line).unwrap())
		.collect()
}

#[tokio::test]
async fn script_fills_address_from_fixture() {
	let frames = run_script("edit postalCode 01001000\nwait\n").await;
	let last = frames.last().unwrap();
	assert_eq!(last["fields"][4]["value"], "01001-000");
	assert_eq!(last["fields"][5]["value"], "Praça da Sé");
	assert_eq!(last["postal_status"], "idle");
	assert_eq!(last["notification"]["message"], "Endereço encontrado e preenchido com sucesso.");
}

#[tokio::test]
async fn denied_location_sets_hint() {
	let frames = run_script("locate\nwait\n").await;
	let last = frames.last().unwrap();
	assert_eq!(last["location_denied"], true);
	assert_eq!(last["notification"]["level"], "failure");
}

#[tokio::test]
async fn invalid_lines_are_skipped() {
	let frames = run_script("# comentário\nfly away\nedit name Ana\n").await;
	assert_eq!(frames.last().unwrap()["fields"][0]["value"], "Ana");
}

#[tokio::test]
async fn quit_stops_reading() {
	let frames = run_script("edit name Ana\nquit\nedit name Bia\n").await;
	assert_eq!(frames.last().unwrap()["fields"][0]["value"], "Ana");
}

#[tokio::test]
async fn accepted_submit_prints_the_record() {
	let script = "\
edit name Ana Souza
edit email ana@example.com
edit password segredo1
edit number 100
edit postalCode 01001000
wait
submit
";
	let mut out = Vec::new();
	run(session(), script.as_bytes(), &mut out).await.unwrap();
	let out = String::from_utf8(out).unwrap();
	let sent = out.lines().find_map(|line| line.strip_prefix("enviado: ")).unwrap();
	let record: serde_json::Value = serde_json::from_str(sent).unwrap();
	assert_eq!(record["name"], "Ana Souza");
	assert_eq!(record["city"], "São Paulo");

	let last: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
	assert_eq!(last["fields"][0]["value"], "");
	assert_eq!(last["notification"]["message"], "Formulário enviado com sucesso.");
}
