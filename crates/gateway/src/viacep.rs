use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use signup_primitives::{cep_mask, mask::CEP_DIGITS};
use tracing::debug;

use crate::{Address, AddressLookup, LookupError};

/// Lookup backed by the ViaCEP web service (`GET {base}/{cep}/json/`).
///
/// Requests run on the blocking pool; no timeout or retry is applied.
#[derive(Debug, Clone)]
pub struct ViaCep {
	agent: ureq::Agent,
	base_url: String,
}

impl ViaCep {
	pub const DEFAULT_BASE_URL: &'static str = "https://viacep.com.br/ws";

	pub fn new(base_url: impl Into<String>, user_agent: &str) -> Self {
		Self {
			agent: ureq::AgentBuilder::new().user_agent(user_agent).build(),
			base_url: base_url.into(),
		}
	}

	fn endpoint(&self, cep: &str) -> String {
		format!("{}/{}/json/", self.base_url.trim_end_matches('/'), cep)
	}
}

#[async_trait]
impl AddressLookup for ViaCep {
	async fn lookup(&self, cep: &str) -> Result<Address, LookupError> {
		if cep.len() != CEP_DIGITS || !cep.bytes().all(|b| b.is_ascii_digit()) {
			return Err(LookupError::InvalidCode(cep.to_string()));
		}
		let agent = self.agent.clone();
		let url = self.endpoint(cep);
		debug!(url = %url, "viacep.request");
		let body = tokio::task::spawn_blocking(move || fetch(&agent, &url))
			.await
			.map_err(|err| LookupError::Task(err.to_string()))??;
		parse_response(&body)
	}
}

fn fetch(agent: &ureq::Agent, url: &str) -> Result<String, LookupError> {
	match agent.get(url).call() {
		Ok(response) => response.into_string().map_err(|err| LookupError::Transport(err.to_string())),
		Err(ureq::Error::Status(code, _)) => Err(LookupError::Status(code)),
		Err(ureq::Error::Transport(transport)) => Err(LookupError::Transport(transport.to_string())),
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ViaCepResponse {
	cep: String,
	logradouro: String,
	complemento: String,
	bairro: String,
	localidade: String,
	uf: String,
	erro: Option<Value>,
}

impl ViaCepResponse {
	/// The service flags unknown codes with `"erro": true` (older API) or `"erro": "true"`.
	fn is_not_found(&self) -> bool {
		match &self.erro {
			Some(Value::Bool(flag)) => *flag,
			Some(Value::String(flag)) => flag == "true",
			_ => false,
		}
	}
}

pub(crate) fn parse_response(body: &str) -> Result<Address, LookupError> {
	let response: ViaCepResponse = serde_json::from_str(body)?;
	if response.is_not_found() {
		return Err(LookupError::NotFound);
	}
	Ok(Address {
		street: response.logradouro,
		neighborhood: response.bairro,
		city: response.localidade,
		state: response.uf,
		complement: response.complemento,
		postal_code: cep_mask(&response.cep),
	})
}
