use serde::Serialize;

/// State of one asynchronous lookup channel.
///
/// A completed call returns the channel to `Idle` whether it succeeded or
/// not; failures are reported separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupStatus {
	#[default]
	Idle,
	InFlight,
}

impl LookupStatus {
	pub fn is_in_flight(self) -> bool {
		self == Self::InFlight
	}
}

/// Identifier of one dispatched gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub(crate) u64);

impl std::fmt::Display for RequestId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// Monotonic request id source, one per engine.
#[derive(Debug, Default)]
pub(crate) struct RequestClock {
	last: u64,
}

impl RequestClock {
	pub(crate) fn next(&mut self) -> RequestId {
		self.last = self.last.wrapping_add(1);
		RequestId(self.last)
	}
}

/// Tag attached to a dispatched postal-code lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalTicket {
	pub id: RequestId,
	/// The eight digits the lookup was issued for.
	pub digits: String,
}

/// Postal-code lookup channel state.
#[derive(Debug, Default)]
pub(crate) struct PostalChannel {
	pub(crate) status: LookupStatus,
	/// Most recently dispatched lookup still awaiting completion.
	pub(crate) pending: Option<PostalTicket>,
	/// Form-level status message after a failed lookup.
	pub(crate) error: Option<&'static str>,
}

impl PostalChannel {
	/// Forgets any pending lookup and failure, returning true if anything changed.
	pub(crate) fn reset(&mut self) -> bool {
		let changed = self.status != LookupStatus::Idle || self.pending.is_some() || self.error.is_some();
		*self = Self::default();
		changed
	}
}

/// Location channel state.
#[derive(Debug, Default)]
pub(crate) struct LocationChannel {
	pub(crate) status: LookupStatus,
	pub(crate) pending: Option<RequestId>,
}
