//! Configuration for the signup form.
//!
//! Configuration is written in TOML and looked up at
//! `$XDG_CONFIG_HOME/signup/config.toml` (or `~/.config/signup/config.toml`).
//! A missing default file is not an error; built-in defaults apply.
//!
//! ```toml
//! [form]
//! validation = "on-submit"
//!
//! [lookup]
//! base-url = "https://viacep.com.br/ws"
//! delay-ms = 800
//! offline = true
//!
//! [[lookup.fixtures]]
//! cep = "01001000"
//! street = "Praça da Sé"
//! neighborhood = "Sé"
//! city = "São Paulo"
//! state = "SP"
//!
//! [location]
//! permission = "granted"
//!
//! [location.place]
//! street = "Praça da Sé"
//! city = "São Paulo"
//! region = "SP"
//! postal-code = "01001-000"
//! ```

pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use signup_form::{FormOptions, Gateways, ValidationMode};
use signup_gateway::{Address, Permission, Place, StaticLocator, StaticLookup, ViaCep};
use signup_primitives::mask::CEP_DIGITS;
use signup_primitives::{cep_mask, digits};
use tracing::debug;

pub use error::{ConfigError, Result};

#[cfg(test)]
mod tests;

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub form: FormConfig,
	pub lookup: LookupConfig,
	pub location: LocationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
	pub validation: ValidationMode,
}

/// Postal-code lookup backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LookupConfig {
	pub base_url: String,
	/// Artificial latency before each lookup, in milliseconds.
	pub delay_ms: u64,
	pub user_agent: String,
	/// Answer lookups from `fixtures` only, without touching the network.
	pub offline: bool,
	pub fixtures: Vec<Fixture>,
}

impl Default for LookupConfig {
	fn default() -> Self {
		Self {
			base_url: ViaCep::DEFAULT_BASE_URL.to_string(),
			delay_ms: 0,
			user_agent: concat!("signup/", env!("CARGO_PKG_VERSION")).to_string(),
			offline: false,
			fixtures: Vec::new(),
		}
	}
}

/// One offline lookup answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Fixture {
	pub cep: String,
	pub street: String,
	pub neighborhood: String,
	pub city: String,
	pub state: String,
	pub complement: String,
}

impl Fixture {
	fn address(&self) -> Address {
		Address {
			street: self.street.clone(),
			neighborhood: self.neighborhood.clone(),
			city: self.city.clone(),
			state: self.state.clone(),
			complement: self.complement.clone(),
			postal_code: cep_mask(&self.cep),
		}
	}
}

/// Simulated device location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationConfig {
	pub permission: Permission,
	/// Reverse-geocoded position; absent means the position cannot be resolved.
	pub place: Option<Place>,
}

impl Config {
	/// Parse a TOML string into a validated [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let config: Config = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Load `path` if given, else the default file if it exists, else defaults.
	///
	/// An explicitly named file must exist.
	pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
		if let Some(path) = path {
			return Self::load(path);
		}
		match Self::default_path() {
			Some(path) if path.is_file() => Self::load(path),
			other => {
				debug!(path = ?other, "config.defaults");
				Ok(Self::default())
			}
		}
	}

	/// Default config file location.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("signup").join("config.toml"))
	}

	pub fn validate(&self) -> Result<()> {
		let base = self.lookup.base_url.trim();
		if !(base.starts_with("http://") || base.starts_with("https://")) {
			return Err(ConfigError::Invalid(format!("lookup.base-url must be an http(s) URL, got {base:?}")));
		}
		for fixture in &self.lookup.fixtures {
			if digits(&fixture.cep).len() != CEP_DIGITS {
				return Err(ConfigError::Invalid(format!(
					"lookup.fixtures: cep {:?} must have {CEP_DIGITS} digits",
					fixture.cep
				)));
			}
		}
		Ok(())
	}

	pub fn form_options(&self) -> FormOptions {
		FormOptions {
			validation: self.form.validation,
			lookup_delay: Duration::from_millis(self.lookup.delay_ms),
		}
	}

	/// Fixture table keyed by eight-digit code.
	pub fn static_lookup(&self) -> StaticLookup {
		self.lookup
			.fixtures
			.iter()
			.fold(StaticLookup::new(), |lookup, fixture| lookup.with(digits(&fixture.cep), fixture.address()))
	}

	pub fn locator(&self) -> StaticLocator {
		match self.location.permission {
			Permission::Granted => StaticLocator::granted(self.location.place.clone()),
			Permission::Denied => StaticLocator::denied(),
		}
	}

	/// Builds the gateways this configuration describes.
	pub fn gateways(&self) -> Gateways {
		if self.lookup.offline {
			Gateways::new(self.static_lookup(), self.locator())
		} else {
			Gateways::new(ViaCep::new(self.lookup.base_url.trim(), &self.lookup.user_agent), self.locator())
		}
	}
}
