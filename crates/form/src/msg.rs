//! Completion messages sent by gateway tasks back to the engine.

use bitflags::bitflags;
use signup_gateway::{Address, LocationError, LocationOutcome, LookupError};
use tokio::sync::mpsc;

use crate::FormEngine;
use crate::status::{PostalTicket, RequestId};

bitflags! {
	/// Parts of the form view changed by an operation.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
	pub struct Dirty: u8 {
		/// Field values changed.
		const VALUES = 1 << 0;
		/// Error map changed.
		const ERRORS = 1 << 1;
		/// Lookup status, status message or location flag changed.
		const STATUS = 1 << 2;
		/// A notification was queued.
		const NOTIFY = 1 << 3;
	}
}

impl Dirty {
	pub const NONE: Self = Self::empty();
	pub const FULL: Self = Self::all();

	pub fn needs_redraw(self) -> bool {
		!self.is_empty()
	}
}

pub(crate) type MsgSender = mpsc::UnboundedSender<FormMsg>;
pub(crate) type MsgReceiver = mpsc::UnboundedReceiver<FormMsg>;

pub(crate) fn channel() -> (MsgSender, MsgReceiver) {
	mpsc::unbounded_channel()
}

/// Result of a finished gateway call.
#[derive(Debug)]
pub enum FormMsg {
	PostalLookupDone {
		ticket: PostalTicket,
		result: Result<Address, LookupError>,
	},
	LocationDone {
		id: RequestId,
		result: Result<LocationOutcome, LocationError>,
	},
}

impl FormMsg {
	/// Applies this message to the engine, returning what changed.
	pub fn apply(self, engine: &mut FormEngine) -> Dirty {
		match self {
			Self::PostalLookupDone { ticket, result } => engine.finish_postal_lookup(ticket, result),
			Self::LocationDone { id, result } => engine.finish_location(id, result),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Dirty;

	#[test]
	fn full_implies_redraw_and_is_superset() {
		assert!(Dirty::FULL.needs_redraw());
		assert!(!Dirty::NONE.needs_redraw());
		assert_eq!(Dirty::FULL | Dirty::VALUES, Dirty::FULL);
	}
}
