//! `signup` binary: drives one registration form from a command script.
//!
//! Commands come from `--script` or stdin, one per line (see [`command`]).
//! The form is printed after every command that changed it, and again
//! whenever a postal-code lookup or location request completes.

mod cli;
mod command;
mod render;
mod session;
#[cfg(test)]
mod tests;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Format};
use command::Command;
use render::{JsonRender, TextRender};
use session::{Flow, Session};
use signup_config::Config;
use signup_form::{FormEngine, Render};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let mut config = Config::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;
	if cli.offline {
		config.lookup.offline = true;
	}
	info!(offline = config.lookup.offline, validation = ?config.form.validation, "starting signup");

	let engine = FormEngine::new(config.gateways(), config.form_options());
	let input: Box<dyn AsyncBufRead + Unpin> = match &cli.script {
		Some(path) => {
			let file = tokio::fs::File::open(path)
				.await
				.with_context(|| format!("failed to open script {}", path.display()))?;
			Box::new(BufReader::new(file))
		}
		None => Box::new(BufReader::new(tokio::io::stdin())),
	};

	let mut stdout = std::io::stdout();
	match cli.format {
		Format::Text => run(Session::new(engine, TextRender), input, &mut stdout).await,
		Format::Json => run(Session::new(engine, JsonRender), input, &mut stdout).await,
	}
}

enum Event {
	Line(std::io::Result<Option<String>>),
	Pumped(anyhow::Result<()>),
}

/// Feeds commands to the session until input ends or `quit`.
///
/// Gateway completions are applied as they arrive, between commands. Pending
/// calls are awaited before returning.
async fn run<R, I, W>(mut session: Session<R>, input: I, out: &mut W) -> anyhow::Result<()>
where
	R: Render<Output = String>,
	I: AsyncBufRead + Unpin,
	W: std::io::Write,
{
	let mut lines = input.lines();
	session.show_if(signup_form::Dirty::FULL, out)?;

	loop {
		let busy = session.is_busy();
		let event = tokio::select! {
			line = lines.next_line() => Event::Line(line),
			pumped = session.pump(out), if busy => Event::Pumped(pumped),
		};
		let line = match event {
			Event::Pumped(result) => {
				result?;
				continue;
			}
			Event::Line(line) => line.context("failed to read command")?,
		};
		let Some(line) = line else { break };
		match Command::parse_line(&line) {
			Ok(Some(command)) => {
				if session.execute(command, out).await? == Flow::Quit {
					return Ok(());
				}
			}
			Ok(None) => {}
			Err(err) => {
				warn!(line = %line, error = %err, "command.invalid");
				eprintln!("signup: {err}");
			}
		}
	}

	session.settle(out).await
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;
	use tracing_subscriber::prelude::*;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
		.init();
}
