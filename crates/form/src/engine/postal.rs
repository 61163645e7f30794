use signup_gateway::{Address, LookupError};
use signup_primitives::mask::CEP_DIGITS;
use signup_primitives::{FieldId, digits};
use tracing::{debug, warn};

use super::FormEngine;
use crate::dispatch::Channel;
use crate::msg::{Dirty, FormMsg};
use crate::notifications::{Notification, messages};
use crate::status::{LookupStatus, PostalTicket};

impl FormEngine {
	/// Reacts to a changed postal code.
	///
	/// A complete code consumes the suppression flag, dispatching a lookup
	/// only if the flag was not set. Anything shorter empties the address
	/// fields and drops any pending lookup, leaving the flag armed.
	pub(super) fn watch_postal_code(&mut self) -> Dirty {
		let digits = digits(self.record.get(FieldId::PostalCode));

		if digits.len() == CEP_DIGITS {
			if std::mem::take(&mut self.skip_next_lookup) {
				debug!(digits = %digits, "postal.lookup_suppressed");
				return Dirty::NONE;
			}
			return self.dispatch_postal_lookup(digits);
		}

		let mut dirty = Dirty::NONE;
		for field in FieldId::ADDRESS_FIELDS {
			if self.record.clear(field) {
				dirty |= Dirty::VALUES;
			}
		}
		dirty |= self.clear_errors(&FieldId::REQUIRED_ADDRESS_FIELDS);
		if let Some(ticket) = &self.postal.pending {
			debug!(request = %ticket.id, digits = %ticket.digits, "postal.lookup_abandoned");
		}
		if self.postal.reset() {
			dirty |= Dirty::STATUS;
		}
		dirty
	}

	fn dispatch_postal_lookup(&mut self, digits: String) -> Dirty {
		let ticket = PostalTicket {
			id: self.clock.next(),
			digits,
		};
		if let Some(previous) = self.postal.pending.replace(ticket.clone()) {
			debug!(request = %previous.id, digits = %previous.digits, "postal.lookup_superseded");
		}
		self.postal.status = LookupStatus::InFlight;
		self.postal.error = None;
		debug!(request = %ticket.id, digits = %ticket.digits, "postal.lookup_dispatched");

		let lookup = self.gateways.lookup.clone();
		let tx = self.sender();
		let delay = self.options.lookup_delay;
		self.spawn(Channel::PostalCode, async move {
			if !delay.is_zero() {
				tokio::time::sleep(delay).await;
			}
			let result = lookup.lookup(&ticket.digits).await;
			let _ = tx.send(FormMsg::PostalLookupDone { ticket, result });
		});
		Dirty::STATUS
	}

	/// Applies a finished lookup if it is still the pending one and the field
	/// still holds the digits it was issued for.
	///
	/// The channel returns to idle either way; a failure stays visible through
	/// the form-level status message.
	pub(crate) fn finish_postal_lookup(&mut self, ticket: PostalTicket, result: Result<Address, LookupError>) -> Dirty {
		if self.postal.pending.as_ref().map(|pending| pending.id) != Some(ticket.id) {
			debug!(request = %ticket.id, digits = %ticket.digits, "postal.stale_result_discarded");
			return Dirty::NONE;
		}
		self.postal.pending = None;

		if digits(self.record.get(FieldId::PostalCode)) != ticket.digits {
			debug!(request = %ticket.id, digits = %ticket.digits, "postal.result_no_longer_matches");
			self.postal.status = LookupStatus::Idle;
			return Dirty::STATUS;
		}

		match result {
			Ok(address) => {
				self.postal.status = LookupStatus::Idle;
				self.postal.error = None;
				let mut dirty = Dirty::STATUS;
				for (field, value) in [
					(FieldId::Street, address.street),
					(FieldId::Neighborhood, address.neighborhood),
					(FieldId::City, address.city),
					(FieldId::State, address.state),
					(FieldId::Complement, address.complement),
				] {
					if self.record.set(field, value) {
						dirty |= Dirty::VALUES;
					}
				}
				dirty |= self.clear_errors(&FieldId::REQUIRED_ADDRESS_FIELDS);
				dirty | self.notify(Notification::success(messages::POSTAL_FILLED))
			}
			Err(err) => {
				warn!(request = %ticket.id, digits = %ticket.digits, error = %err, "postal.lookup_failed");
				self.postal.status = LookupStatus::Idle;
				self.postal.error = Some(messages::POSTAL_STATUS);
				Dirty::STATUS | self.notify(Notification::failure(messages::POSTAL_FAILED))
			}
		}
	}
}
