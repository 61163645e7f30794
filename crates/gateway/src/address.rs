use serde::{Deserialize, Serialize};

/// Address resolved from a postal code.
///
/// Subfields the service left out are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Address {
	pub street: String,
	pub neighborhood: String,
	pub city: String,
	pub state: String,
	pub complement: String,
	/// Postal code as reported by the service.
	pub postal_code: String,
}
