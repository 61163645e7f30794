use serde::ser::{Serialize, SerializeMap, Serializer};
use crate::field::{FIELD_COUNT, FieldId};

/// Current string value of every form field.
///
/// Values are stored post-mask. A fresh record has every field empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRecord {
	values: [String; FIELD_COUNT],
}

impl FormRecord {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, field: FieldId) -> &str {
		&self.values[field.index()]
	}

	/// Stores `value`, returning true when it differs from the previous value.
	pub fn set(&mut self, field: FieldId, value: impl Into<String>) -> bool {
		let value = value.into();
		let slot = &mut self.values[field.index()];
		if *slot == value {
			return false;
		}
		*slot = value;
		true
	}

	/// Empties `field`, returning true when it held a value.
	pub fn clear(&mut self, field: FieldId) -> bool {
		self.set(field, String::new())
	}

	pub fn is_empty(&self) -> bool {
		self.values.iter().all(String::is_empty)
	}

	/// Iterates `(field, value)` pairs in display order.
	pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
		FieldId::all().map(|field| (field, self.get(field)))
	}
}

impl Serialize for FormRecord {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
		for (field, value) in self.iter() {
			map.serialize_entry(&field, value)?;
		}
		map.end()
	}
}
