use signup_primitives::{ErrorMap, FormRecord};
use tracing::{debug, info};

use super::FormEngine;
use crate::notifications::{Notification, messages};
use crate::status::{LocationChannel, PostalChannel};

/// Outcome of a submit intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
	/// Every rule passed; carries the submitted values. The form is now empty.
	Accepted(FormRecord),
	/// At least one rule failed; carries the errors now shown on the form.
	Rejected(ErrorMap),
}

impl Submission {
	pub fn is_accepted(&self) -> bool {
		matches!(self, Self::Accepted(_))
	}
}

impl FormEngine {
	/// Runs the full validation pass.
	///
	/// On failure the error map is replaced and nothing else changes. On
	/// success the record, errors and lookup channels are reset; late gateway
	/// results for the old values are discarded when they arrive.
	pub fn submit(&mut self) -> Submission {
		let errors = signup_rules::validate(&self.record);
		if !errors.is_empty() {
			debug!(failed = errors.len(), "form.submit_rejected");
			self.submit_attempted = true;
			self.errors = errors.clone();
			return Submission::Rejected(errors);
		}

		let record = std::mem::take(&mut self.record);
		self.errors.clear();
		self.postal = PostalChannel::default();
		self.location = LocationChannel::default();
		self.skip_next_lookup = false;
		self.submit_attempted = false;
		self.notify(Notification::success(messages::SUBMITTED));
		info!("form.submitted");
		Submission::Accepted(record)
	}
}
