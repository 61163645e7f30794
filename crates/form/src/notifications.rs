//! User-visible alerts.
//!
//! The engine queues notifications; the presentation layer drains them and
//! decides how long each stays on screen. Only the most recent one is
//! expected to be visible.

use std::collections::VecDeque;

use serde::Serialize;

/// Alert messages raised by the engine.
pub mod messages {
	pub const POSTAL_FILLED: &str = "Endereço encontrado e preenchido com sucesso.";
	pub const POSTAL_FAILED: &str = "Não foi possível buscar o CEP informado.";
	/// Form-level status line shown after a failed postal-code lookup.
	pub const POSTAL_STATUS: &str = "Não foi possível buscar o CEP agora.";
	pub const LOCATION_FILLED: &str = "Endereço preenchido pela sua localização.";
	pub const LOCATION_DENIED: &str = "Permissão de localização negada.";
	pub const LOCATION_FAILED: &str = "Não foi possível obter sua localização.";
	pub const SUBMITTED: &str = "Formulário enviado com sucesso.";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
	Success,
	Failure,
}

impl Level {
	/// Alert heading.
	pub const fn title(self) -> &'static str {
		match self {
			Self::Success => "Sucesso",
			Self::Failure => "Falha",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
	pub level: Level,
	pub message: String,
}

impl Notification {
	pub fn new(level: Level, message: impl Into<String>) -> Self {
		Self {
			level,
			message: message.into(),
		}
	}

	pub fn success(message: impl Into<String>) -> Self {
		Self::new(Level::Success, message)
	}

	pub fn failure(message: impl Into<String>) -> Self {
		Self::new(Level::Failure, message)
	}

	pub fn title(&self) -> &'static str {
		self.level.title()
	}
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
	pending: VecDeque<Notification>,
	latest: Option<Notification>,
}

impl NotificationCenter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	pub fn push(&mut self, notification: Notification) {
		self.latest = Some(notification.clone());
		self.pending.push_back(notification);
	}

	/// Drains notifications not yet shown.
	pub fn take_pending(&mut self) -> Vec<Notification> {
		self.pending.drain(..).collect()
	}

	/// Most recent notification, whether or not it was drained.
	pub fn latest(&self) -> Option<&Notification> {
		self.latest.as_ref()
	}

	pub fn clear(&mut self) {
		self.pending.clear();
		self.latest = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn latest_survives_draining() {
		let mut center = NotificationCenter::new();
		center.push(Notification::failure(messages::POSTAL_FAILED));
		center.push(Notification::success(messages::POSTAL_FILLED));
		let drained = center.take_pending();
		assert_eq!(drained.len(), 2);
		assert!(center.is_empty());
		let latest = center.latest().unwrap();
		assert_eq!(latest.title(), "Sucesso");
		assert_eq!(latest.message, messages::POSTAL_FILLED);
	}

	#[test]
	fn clear_drops_pending_and_latest() {
		let mut center = NotificationCenter::new();
		center.push(Notification::success(messages::SUBMITTED));
		center.clear();
		assert!(center.latest().is_none());
		assert!(center.is_empty());
	}
}
