//! External collaborators of the registration form.
//!
//! * [`AddressLookup`] resolves a postal code (CEP) into an [`Address`].
//! * [`Geolocation`] asks for location permission and reverse-geocodes the
//!   device position into a [`Place`].
//!
//! [`ViaCep`] talks to the public ViaCEP service; [`StaticLookup`] and
//! [`StaticLocator`] answer from in-memory data for offline use and tests.

mod address;
mod error;
mod fixtures;
mod place;
mod viacep;

use async_trait::async_trait;

pub use address::Address;
pub use error::{LocationError, LookupError};
pub use fixtures::{StaticLocator, StaticLookup};
pub use place::{LocatedAddress, LocationOutcome, Place, locate};
pub use viacep::ViaCep;

/// Resolves postal codes into addresses.
#[async_trait]
pub trait AddressLookup: Send + Sync {
	/// Looks up `cep`, given as exactly eight digits.
	async fn lookup(&self, cep: &str) -> Result<Address, LookupError>;
}

/// Answer to a location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Permission {
	#[default]
	Granted,
	Denied,
}

/// Device location source.
#[async_trait]
pub trait Geolocation: Send + Sync {
	async fn request_permission(&self) -> Result<Permission, LocationError>;

	/// Reverse-geocodes the current position. `Ok(None)` when no place matches.
	async fn current_place(&self) -> Result<Option<Place>, LocationError>;
}
