use serde::{Deserialize, Serialize};

use crate::{Geolocation, LocationError, Permission};

/// Reverse-geocoded place as reported by the device.
///
/// Every component is optional; platforms disagree on which ones they fill.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Place {
	pub name: Option<String>,
	pub street: Option<String>,
	pub district: Option<String>,
	pub subregion: Option<String>,
	pub city: Option<String>,
	pub region: Option<String>,
	pub postal_code: Option<String>,
}

/// Address fields derived from a [`Place`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocatedAddress {
	pub street: Option<String>,
	pub neighborhood: Option<String>,
	pub city: Option<String>,
	pub state: Option<String>,
	pub postal_code: Option<String>,
}

fn first_present(candidates: &[&Option<String>]) -> Option<String> {
	candidates
		.iter()
		.find_map(|value| value.as_deref().filter(|v| !v.is_empty()))
		.map(str::to_string)
}

impl Place {
	/// Maps place components onto address fields, falling back to coarser
	/// components when the precise one is missing.
	pub fn resolve(&self) -> LocatedAddress {
		LocatedAddress {
			street: first_present(&[&self.street, &self.name]),
			neighborhood: first_present(&[&self.district, &self.subregion]),
			city: first_present(&[&self.city, &self.subregion, &self.region]),
			state: first_present(&[&self.region, &self.subregion]),
			postal_code: first_present(&[&self.postal_code]),
		}
	}
}

/// Result of a completed location request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationOutcome {
	/// Permission was refused.
	Denied,
	/// Permission granted but the position did not resolve to a place.
	Unresolved,
	Located(LocatedAddress),
}

/// Runs the two-step location flow: permission, then reverse geocoding.
pub async fn locate(geo: &dyn Geolocation) -> Result<LocationOutcome, LocationError> {
	if geo.request_permission().await? == Permission::Denied {
		return Ok(LocationOutcome::Denied);
	}
	Ok(match geo.current_place().await? {
		Some(place) => LocationOutcome::Located(place.resolve()),
		None => LocationOutcome::Unresolved,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::StaticLocator;

	fn some(value: &str) -> Option<String> {
		Some(value.to_string())
	}

	#[test]
	fn precise_components_win() {
		let place = Place {
			name: some("Catedral da Sé"),
			street: some("Praça da Sé"),
			district: some("Sé"),
			subregion: some("São Paulo"),
			city: some("São Paulo"),
			region: some("SP"),
			postal_code: some("01001-000"),
		};
		assert_eq!(
			place.resolve(),
			LocatedAddress {
				street: some("Praça da Sé"),
				neighborhood: some("Sé"),
				city: some("São Paulo"),
				state: some("SP"),
				postal_code: some("01001-000"),
			}
		);
	}

	#[test]
	fn coarse_components_fill_gaps() {
		let place = Place {
			name: some("Orla de Pajuçara"),
			street: Some(String::new()),
			subregion: some("Maceió"),
			region: some("Alagoas"),
			..Place::default()
		};
		let address = place.resolve();
		assert_eq!(address.street, some("Orla de Pajuçara"));
		assert_eq!(address.neighborhood, some("Maceió"));
		assert_eq!(address.city, some("Maceió"));
		assert_eq!(address.state, some("Alagoas"));
		assert_eq!(address.postal_code, None);
	}

	#[tokio::test]
	async fn denied_permission_skips_geocoding() {
		let outcome = locate(&StaticLocator::denied()).await.unwrap();
		assert_eq!(outcome, LocationOutcome::Denied);
	}

	#[tokio::test]
	async fn granted_without_place_is_unresolved() {
		let outcome = locate(&StaticLocator::granted(None)).await.unwrap();
		assert_eq!(outcome, LocationOutcome::Unresolved);
	}

	#[tokio::test]
	async fn locator_failure_propagates() {
		let err = locate(&StaticLocator::failing("gps off")).await.unwrap_err();
		assert!(matches!(err, LocationError::Unavailable(msg) if msg == "gps off"));
	}
}
