use signup_gateway::{LocatedAddress, LocationError, LocationOutcome, locate};
use signup_primitives::{FieldId, cep_mask};
use tracing::{debug, warn};

use super::FormEngine;
use crate::dispatch::Channel;
use crate::msg::{Dirty, FormMsg};
use crate::notifications::{Notification, messages};
use crate::status::{LookupStatus, RequestId};

impl FormEngine {
	/// Starts a "use my location" request.
	///
	/// Ignored while a previous request is still running.
	pub fn request_location(&mut self) -> Dirty {
		if let Some(pending) = self.location.pending {
			debug!(request = %pending, "location.request_ignored");
			return Dirty::NONE;
		}
		let id = self.clock.next();
		self.location.pending = Some(id);
		self.location.status = LookupStatus::InFlight;
		debug!(request = %id, "location.requested");

		let locator = self.gateways.locator.clone();
		let tx = self.sender();
		self.spawn(Channel::Location, async move {
			let result = locate(locator.as_ref()).await;
			let _ = tx.send(FormMsg::LocationDone { id, result });
		});
		Dirty::STATUS
	}

	pub(crate) fn finish_location(&mut self, id: RequestId, result: Result<LocationOutcome, LocationError>) -> Dirty {
		if self.location.pending != Some(id) {
			debug!(request = %id, "location.stale_result_discarded");
			return Dirty::NONE;
		}
		self.location.pending = None;
		self.location.status = LookupStatus::Idle;

		match result {
			Ok(LocationOutcome::Located(address)) => self.fill_from_location(address),
			Ok(LocationOutcome::Denied) => {
				debug!(request = %id, "location.denied");
				self.location_denied = true;
				Dirty::STATUS | self.notify(Notification::failure(messages::LOCATION_DENIED))
			}
			Ok(LocationOutcome::Unresolved) => {
				debug!(request = %id, "location.unresolved");
				Dirty::STATUS | self.notify(Notification::failure(messages::LOCATION_FAILED))
			}
			Err(err) => {
				warn!(request = %id, error = %err, "location.failed");
				Dirty::STATUS | self.notify(Notification::failure(messages::LOCATION_FAILED))
			}
		}
	}

	/// Writes a located address into the record.
	///
	/// The suppression flag is raised before the postal code is written so the
	/// watcher run it triggers does not look the same address up again. The
	/// remaining address fields are written after the watcher, so they survive
	/// even when the reported code is incomplete.
	fn fill_from_location(&mut self, address: LocatedAddress) -> Dirty {
		let mut dirty = Dirty::STATUS;
		self.location_denied = false;

		let mut filled = FieldId::REQUIRED_ADDRESS_FIELDS.to_vec();
		if let Some(code) = address.postal_code {
			self.skip_next_lookup = true;
			if self.record.set(FieldId::PostalCode, cep_mask(&code)) {
				dirty |= Dirty::VALUES | self.watch_postal_code();
			}
			filled.push(FieldId::PostalCode);
		}

		for (field, value) in [
			(FieldId::Street, address.street.unwrap_or_default()),
			(FieldId::Neighborhood, address.neighborhood.unwrap_or_default()),
			(FieldId::City, address.city.unwrap_or_default()),
			(FieldId::State, address.state.unwrap_or_default().to_uppercase()),
		] {
			if self.record.set(field, value) {
				dirty |= Dirty::VALUES;
			}
		}
		dirty |= self.clear_errors(&filled);
		dirty | self.notify(Notification::success(messages::LOCATION_FILLED))
	}
}
