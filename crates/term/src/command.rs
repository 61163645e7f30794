//! Script commands.
//!
//! One command per line; blank lines and lines starting with `#` are skipped.
//!
//! * `edit <field> [text]` - type `text` into `field` (camelCase name); no text clears it
//! * `locate` - fill the address from the device location
//! * `submit` - validate and submit
//! * `wait` - block until pending lookups finish
//! * `show` - print the form
//! * `quit` - stop reading commands

use std::str::FromStr;

use signup_primitives::{FieldId, ParseFieldError};
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
	Edit { field: FieldId, text: String },
	Locate,
	Submit,
	Wait,
	Show,
	Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
	#[error("unknown command: {0}")]
	Unknown(String),
	#[error("`edit` needs a field name")]
	MissingField,
	#[error(transparent)]
	Field(#[from] ParseFieldError),
	#[error("`{0}` takes no arguments")]
	UnexpectedArgs(&'static str),
}

impl Command {
	/// Parses one script line. Returns `Ok(None)` for blank lines and comments.
	pub fn parse_line(line: &str) -> Result<Option<Self>, CommandError> {
		let line = line.trim_start();
		if line.is_empty() || line.starts_with('#') {
			return Ok(None);
		}
		line.parse().map(Some)
	}
}

impl FromStr for Command {
	type Err = CommandError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let (verb, rest) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
		let bare = |command: Self, name: &'static str| {
			if rest.trim().is_empty() {
				Ok(command)
			} else {
				Err(CommandError::UnexpectedArgs(name))
			}
		};
		match verb {
			"edit" => {
				let rest = rest.trim_start();
				let (field, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
				if field.is_empty() {
					return Err(CommandError::MissingField);
				}
				Ok(Self::Edit {
					field: field.parse()?,
					text: text.trim_end_matches(['\r', '\n']).to_string(),
				})
			}
			"locate" => bare(Self::Locate, "locate"),
			"submit" => bare(Self::Submit, "submit"),
			"wait" => bare(Self::Wait, "wait"),
			"show" => bare(Self::Show, "show"),
			"quit" | "exit" => bare(Self::Quit, "quit"),
			other => Err(CommandError::Unknown(other.to_string())),
		}
	}
}
