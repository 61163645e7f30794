use std::io::Write;

use anyhow::Result;
use signup_form::{Dirty, FormEngine, Render, Submission};
use tracing::debug;

use crate::command::Command;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Quit,
}

/// One engine plus the renderer that prints it.
pub struct Session<R> {
	engine: FormEngine,
	render: R,
}

impl<R> Session<R>
where
	R: Render<Output = String>,
{
	pub fn new(engine: FormEngine, render: R) -> Self {
		Self { engine, render }
	}

	pub fn engine(&self) -> &FormEngine {
		&self.engine
	}

	pub fn is_busy(&self) -> bool {
		self.engine.is_busy()
	}

	pub async fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow> {
		debug!(command = ?command, "session.command");
		let dirty = match command {
			Command::Edit { field, text } => self.engine.edit(field, &text),
			Command::Locate => self.engine.request_location(),
			Command::Submit => {
				if let Submission::Accepted(record) = self.engine.submit() {
					writeln!(out, "enviado: {}", serde_json::to_string(&record)?)?;
				}
				Dirty::FULL
			}
			Command::Wait => self.engine.settle().await,
			Command::Show => Dirty::FULL,
			Command::Quit => return Ok(Flow::Quit),
		};
		self.show_if(dirty, out)?;
		Ok(Flow::Continue)
	}

	/// Waits for the next gateway completion and prints the form if it changed anything.
	pub async fn pump(&mut self, out: &mut impl Write) -> Result<()> {
		let dirty = self.engine.pump().await;
		self.show_if(dirty, out)
	}

	pub async fn settle(&mut self, out: &mut impl Write) -> Result<()> {
		let dirty = self.engine.settle().await;
		self.show_if(dirty, out)
	}

	pub fn show_if(&mut self, dirty: Dirty, out: &mut impl Write) -> Result<()> {
		if !dirty.needs_redraw() {
			return Ok(());
		}
		let frame = self.render.render(&self.engine.view());
		writeln!(out, "{frame}")?;
		out.flush()?;
		// Alerts are shown once.
		self.engine.notifications_mut().clear();
		Ok(())
	}
}
