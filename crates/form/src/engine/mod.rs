//! The form reconciliation engine.
//!
//! Split by concern:
//! * `postal` - postal-code watcher and lookup completion
//! * `location` - device location fill
//! * `submit` - full validation pass and reset

mod location;
mod postal;
mod submit;

use std::sync::Arc;

use signup_gateway::{AddressLookup, Geolocation};
use signup_primitives::{ErrorMap, FieldId, FormRecord};
use tokio::runtime::Handle;

pub use self::submit::Submission;
use crate::dispatch;
use crate::msg::{self, Dirty, FormMsg, MsgReceiver, MsgSender};
use crate::notifications::{Notification, NotificationCenter};
use crate::options::{FormOptions, ValidationMode};
use crate::status::{LocationChannel, LookupStatus, PostalChannel, RequestClock};
use crate::view::{FieldView, FormView};

/// External collaborators used by one engine.
#[derive(Clone)]
pub struct Gateways {
	pub lookup: Arc<dyn AddressLookup>,
	pub locator: Arc<dyn Geolocation>,
}

impl Gateways {
	pub fn new(lookup: impl AddressLookup + 'static, locator: impl Geolocation + 'static) -> Self {
		Self {
			lookup: Arc::new(lookup),
			locator: Arc::new(locator),
		}
	}
}

impl std::fmt::Debug for Gateways {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Gateways").finish_non_exhaustive()
	}
}

/// Owns the state of one form instance.
///
/// All mutation happens on the caller's thread through `&mut self`; gateway
/// calls run as spawned tasks and report back through [`FormMsg`], applied by
/// [`Self::drain_messages`] or [`Self::pump`].
pub struct FormEngine {
	record: FormRecord,
	errors: ErrorMap,
	postal: PostalChannel,
	location: LocationChannel,
	/// One-shot: the next postal-code watcher run must not dispatch a lookup.
	skip_next_lookup: bool,
	location_denied: bool,
	submit_attempted: bool,
	options: FormOptions,
	notifications: NotificationCenter,
	gateways: Gateways,
	clock: RequestClock,
	tx: MsgSender,
	rx: MsgReceiver,
	runtime: Handle,
}

impl FormEngine {
	/// Creates an engine with an empty record.
	///
	/// Gateway tasks run on the ambient tokio runtime, or on a shared
	/// background runtime when none is active.
	pub fn new(gateways: Gateways, options: FormOptions) -> Self {
		let (tx, rx) = msg::channel();
		Self {
			record: FormRecord::new(),
			errors: ErrorMap::new(),
			postal: PostalChannel::default(),
			location: LocationChannel::default(),
			skip_next_lookup: false,
			location_denied: false,
			submit_attempted: false,
			options,
			notifications: NotificationCenter::new(),
			gateways,
			clock: RequestClock::default(),
			tx,
			rx,
			runtime: dispatch::runtime_handle(),
		}
	}

	/// Applies a raw edit to `field`.
	///
	/// The field's mask runs first; nothing happens when the masked value is
	/// unchanged. A changed postal code runs the postal-code watcher.
	pub fn edit(&mut self, field: FieldId, raw: &str) -> Dirty {
		let value = field.mask().apply(raw);
		if !self.record.set(field, value) {
			return Dirty::NONE;
		}

		let mut dirty = Dirty::VALUES;
		if self.validates_on_change() {
			dirty |= self.revalidate(field);
		}
		if field == FieldId::PostalCode {
			dirty |= self.watch_postal_code();
		}
		dirty
	}

	fn validates_on_change(&self) -> bool {
		self.options.validation == ValidationMode::OnChange || self.submit_attempted
	}

	fn revalidate(&mut self, field: FieldId) -> Dirty {
		let message = signup_rules::check(field, self.record.get(field));
		if self.errors.get(field) == message {
			return Dirty::NONE;
		}
		self.errors.record(field, message);
		Dirty::ERRORS
	}

	/// Clears errors on `fields`, returning [`Dirty::ERRORS`] if any existed.
	fn clear_errors(&mut self, fields: &[FieldId]) -> Dirty {
		let had = fields.iter().any(|field| self.errors.contains(*field));
		self.errors.clear_fields(fields);
		if had { Dirty::ERRORS } else { Dirty::NONE }
	}

	fn notify(&mut self, notification: Notification) -> Dirty {
		self.notifications.push(notification);
		Dirty::NOTIFY
	}

	/// Applies every completion message already received, without waiting.
	pub fn drain_messages(&mut self) -> Dirty {
		let mut dirty = Dirty::NONE;
		while let Ok(msg) = self.rx.try_recv() {
			dirty |= msg.apply(self);
		}
		dirty
	}

	/// Waits for the next completion message and applies it.
	///
	/// Returns immediately with [`Dirty::NONE`] when no gateway call is pending.
	pub async fn pump(&mut self) -> Dirty {
		if !self.is_busy() {
			return self.drain_messages();
		}
		match self.rx.recv().await {
			Some(msg) => msg.apply(self),
			None => Dirty::NONE,
		}
	}

	/// Pumps until no gateway call is pending.
	pub async fn settle(&mut self) -> Dirty {
		let mut dirty = Dirty::NONE;
		while self.is_busy() {
			dirty |= self.pump().await;
		}
		dirty | self.drain_messages()
	}

	/// Returns true while a non-superseded gateway call is outstanding.
	pub fn is_busy(&self) -> bool {
		self.postal.pending.is_some() || self.location.pending.is_some()
	}

	pub fn record(&self) -> &FormRecord {
		&self.record
	}

	pub fn value(&self, field: FieldId) -> &str {
		self.record.get(field)
	}

	pub fn errors(&self) -> &ErrorMap {
		&self.errors
	}

	pub fn error(&self, field: FieldId) -> Option<&'static str> {
		self.errors.get(field)
	}

	pub fn postal_status(&self) -> LookupStatus {
		self.postal.status
	}

	pub fn location_status(&self) -> LookupStatus {
		self.location.status
	}

	/// Form-level status message left by a failed postal-code lookup.
	pub fn lookup_error(&self) -> Option<&'static str> {
		self.postal.error
	}

	pub fn location_denied(&self) -> bool {
		self.location_denied
	}

	/// Whether the next complete postal code will skip its lookup.
	pub fn skip_next_lookup(&self) -> bool {
		self.skip_next_lookup
	}

	pub fn options(&self) -> &FormOptions {
		&self.options
	}

	pub fn notifications(&self) -> &NotificationCenter {
		&self.notifications
	}

	pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
		&mut self.notifications
	}

	/// Builds the render snapshot.
	pub fn view(&self) -> FormView<'_> {
		FormView {
			fields: FieldId::all()
				.map(|field| FieldView::new(field.spec(), self.record.get(field), self.errors.get(field)))
				.collect(),
			postal_status: self.postal.status,
			location_status: self.location.status,
			lookup_error: self.postal.error,
			location_denied: self.location_denied,
			notification: self.notifications.latest(),
		}
	}

	pub(crate) fn sender(&self) -> MsgSender {
		self.tx.clone()
	}

	pub(crate) fn spawn<F>(&self, channel: dispatch::Channel, fut: F)
	where
		F: std::future::Future<Output = ()> + Send + 'static,
	{
		dispatch::spawn(&self.runtime, channel, fut);
	}

	/// Delivers a completion as if a gateway task had sent it.
	pub fn deliver(&mut self, msg: FormMsg) -> Dirty {
		msg.apply(self)
	}
}

impl std::fmt::Debug for FormEngine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormEngine")
			.field("record", &self.record)
			.field("errors", &self.errors)
			.field("postal", &self.postal)
			.field("location", &self.location)
			.field("skip_next_lookup", &self.skip_next_lookup)
			.finish_non_exhaustive()
	}
}
