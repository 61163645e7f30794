use std::time::Duration;

use serde::{Deserialize, Serialize};

/// When edits re-validate the edited field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
	/// Every edit re-validates the edited field.
	#[default]
	OnChange,
	/// Errors first appear on submit; after a rejected submit, edits re-validate.
	OnSubmit,
}

/// Per-instance engine settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOptions {
	pub validation: ValidationMode,
	/// Artificial latency before each postal-code lookup, to make the loading
	/// state observable.
	pub lookup_delay: Duration,
}
