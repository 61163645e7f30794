//! Form renderers for the terminal.

use std::fmt::Write as _;

use signup_form::{FormView, Render};

/// Plain-text form, one field per line.
#[derive(Debug, Default)]
pub struct TextRender;

const LABEL_WIDTH: usize = 16;

impl Render for TextRender {
	type Output = String;

	fn render(&mut self, view: &FormView<'_>) -> String {
		let mut out = String::new();
		let _ = writeln!(out, "── Cadastro ──");
		for field in &view.fields {
			let marker = if field.required { "*" } else { "" };
			let label = format!("{}{marker}", field.label);
			let value = if field.value.is_empty() {
				format!("<{}>", field.placeholder)
			} else {
				field.value.to_string()
			};
			let _ = write!(out, "{label:<LABEL_WIDTH$} {value}");
			if field.auto_filled {
				out.push_str(" [auto]");
			}
			if let Some(error) = field.error {
				let _ = write!(out, "  ! {error}");
			}
			out.push('\n');
		}

		if view.postal_status.is_in_flight() {
			out.push_str("CEP: buscando endereço...\n");
		}
		if let Some(message) = view.lookup_error {
			let _ = writeln!(out, "CEP: {message}");
		}
		if view.location_status.is_in_flight() {
			out.push_str("Localização: obtendo...\n");
		}
		if view.location_denied {
			out.push_str("Localização: permissão negada. Preencha o endereço manualmente.\n");
		}

		if let Some(notification) = view.notification {
			let _ = writeln!(out, "[{}] {}", notification.title(), notification.message);
		}
		out
	}
}

/// One JSON object per render.
#[derive(Debug, Default)]
pub struct JsonRender;

impl Render for JsonRender {
	type Output = String;

	fn render(&mut self, view: &FormView<'_>) -> String {
		serde_json::to_string(view).unwrap_or_else(|err| format!(r#"{{"error":"{err}"}}"#))
	}
}
