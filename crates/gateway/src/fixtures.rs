use std::collections::HashMap;

use async_trait::async_trait;

use crate::{Address, AddressLookup, Geolocation, LocationError, LookupError, Permission, Place};

/// Lookup answering from an in-memory table keyed by eight-digit postal code.
#[derive(Debug, Clone, Default)]
pub struct StaticLookup {
	entries: HashMap<String, Address>,
	unreachable: Option<String>,
}

impl StaticLookup {
	pub fn new() -> Self {
		Self::default()
	}

	/// Lookup failing every request with a transport error.
	pub fn unreachable(reason: impl Into<String>) -> Self {
		Self {
			entries: HashMap::new(),
			unreachable: Some(reason.into()),
		}
	}

	pub fn with(mut self, cep: impl Into<String>, address: Address) -> Self {
		self.insert(cep, address);
		self
	}

	pub fn insert(&mut self, cep: impl Into<String>, address: Address) {
		self.entries.insert(cep.into(), address);
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[async_trait]
impl AddressLookup for StaticLookup {
	async fn lookup(&self, cep: &str) -> Result<Address, LookupError> {
		if let Some(reason) = &self.unreachable {
			return Err(LookupError::Transport(reason.clone()));
		}
		self.entries.get(cep).cloned().ok_or(LookupError::NotFound)
	}
}

/// Location source with a fixed permission answer and place.
#[derive(Debug, Clone, Default)]
pub struct StaticLocator {
	permission: Permission,
	place: Option<Place>,
	failure: Option<String>,
}

impl StaticLocator {
	pub fn granted(place: Option<Place>) -> Self {
		Self {
			permission: Permission::Granted,
			place,
			failure: None,
		}
	}

	pub fn denied() -> Self {
		Self {
			permission: Permission::Denied,
			place: None,
			failure: None,
		}
	}

	/// Locator whose permission is granted but whose position cannot be read.
	pub fn failing(reason: impl Into<String>) -> Self {
		Self {
			permission: Permission::Granted,
			place: None,
			failure: Some(reason.into()),
		}
	}
}

#[async_trait]
impl Geolocation for StaticLocator {
	async fn request_permission(&self) -> Result<Permission, LocationError> {
		Ok(self.permission)
	}

	async fn current_place(&self) -> Result<Option<Place>, LocationError> {
		match &self.failure {
			Some(reason) => Err(LocationError::Unavailable(reason.clone())),
			None => Ok(self.place.clone()),
		}
	}
}
