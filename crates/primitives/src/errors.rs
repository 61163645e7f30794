use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::FieldId;

/// Validation messages keyed by field.
///
/// A field has an entry only while its last checked value failed its rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
	entries: BTreeMap<FieldId, &'static str>,
}

impl ErrorMap {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, field: FieldId) -> Option<&'static str> {
		self.entries.get(&field).copied()
	}

	pub fn contains(&self, field: FieldId) -> bool {
		self.entries.contains_key(&field)
	}

	/// Sets or clears the entry for `field`.
	pub fn record(&mut self, field: FieldId, message: Option<&'static str>) {
		match message {
			Some(message) => {
				self.entries.insert(field, message);
			}
			None => {
				self.entries.remove(&field);
			}
		}
	}

	pub fn insert(&mut self, field: FieldId, message: &'static str) {
		self.entries.insert(field, message);
	}

	/// Removes the entries for every field in `fields`.
	pub fn clear_fields(&mut self, fields: &[FieldId]) {
		for field in fields {
			self.entries.remove(field);
		}
	}

	pub fn clear(&mut self) {
		self.entries.clear();
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn iter(&self) -> impl Iterator<Item = (FieldId, &'static str)> + '_ {
		self.entries.iter().map(|(field, message)| (*field, *message))
	}
}

impl FromIterator<(FieldId, &'static str)> for ErrorMap {
	fn from_iter<I: IntoIterator<Item = (FieldId, &'static str)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().collect(),
		}
	}
}
