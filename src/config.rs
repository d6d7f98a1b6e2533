use std::fmt;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use dialoguer::theme::Theme;
use dialoguer::Input;
use reqwest::Url;

use crate::errors::{SmokeError, SmokeResult};
use crate::models::{ServiceUrls, DEFAULT_ADMIN_URL, DEFAULT_COSTS_URL, DEFAULT_LOGS_URL, DEFAULT_USERS_URL};

#[derive(Parser, Debug, Clone)]
#[command(name = "course_smoke")]
#[command(about = "Runs the fixed request sequence against the logs/users/costs/admin services and writes the raw responses to a file")]
#[command(long_about = ABOUT_LONG)]
pub struct Opts {
	/// File the report is written to (truncated). Prompted for when absent.
	#[arg(short, long, env = "SMOKE_OUTPUT")]
	pub output: Option<PathBuf>,
	#[arg(long, env = "LOGS_SERVICE_URL", default_value = DEFAULT_LOGS_URL)]
	pub logs_url: String,
	#[arg(long, env = "USERS_SERVICE_URL", default_value = DEFAULT_USERS_URL)]
	pub users_url: String,
	#[arg(long, env = "COSTS_SERVICE_URL", default_value = DEFAULT_COSTS_URL)]
	pub costs_url: String,
	#[arg(long, env = "ADMIN_SERVICE_URL", default_value = DEFAULT_ADMIN_URL)]
	pub admin_url: String,
	/// Also probe user details, user total and the logs listing.
	#[arg(long)]
	pub extended: bool,
}

impl Opts {
	pub fn service_urls(&self) -> SmokeResult<ServiceUrls> {
		Ok(ServiceUrls {
			logs: normalize_base("logs", &self.logs_url)?,
			users: normalize_base("users", &self.users_url)?,
			costs: normalize_base("costs", &self.costs_url)?,
			admin: normalize_base("admin", &self.admin_url)?,
		})
	}

	pub fn output_path(&self) -> SmokeResult<PathBuf> {
		match &self.output {
			Some(path) => Ok(path.clone()),
			None => prompt_filename(),
		}
	}
}

const ABOUT_LONG: &str = "Runs the fixed request sequence against the logs/users/costs/admin services and writes the raw responses to a file.

The parsed payload of JSON calls is written as compact JSON in server key order (e.g. {\"first_name\":\"Noa\"}), not as a Python dict repr ({'first_name': 'Noa'}); expect that line to differ when diffing against files from the course sample script.";

const FILENAME_PROMPT: &str = "filename=";

/// Renders `filename=` with no `: ` suffix.
struct BarePromptTheme;

impl Theme for BarePromptTheme {
	fn format_input_prompt(&self, f: &mut dyn fmt::Write, prompt: &str, _default: Option<&str>) -> fmt::Result {
		write!(f, "{}", prompt)
	}

	fn format_input_prompt_selection(&self, f: &mut dyn fmt::Write, prompt: &str, sel: &str) -> fmt::Result {
		write!(f, "{}{}", prompt, sel)
	}
}

fn normalize_base(service: &'static str, raw: &str) -> SmokeResult<String> {
	let trimmed = raw.trim().trim_end_matches('/');
	let url = Url::parse(trimmed).map_err(|e| SmokeError::InvalidBaseUrl { service, reason: e.to_string() })?;
	if url.scheme() != "http" && url.scheme() != "https" {
		return Err(SmokeError::InvalidBaseUrl { service, reason: format!("unsupported scheme {}", url.scheme()) });
	}
	Ok(trimmed.to_string())
}

fn prompt_filename() -> SmokeResult<PathBuf> {
	let name = if std::io::stdin().is_terminal() {
		Input::<String>::with_theme(&BarePromptTheme).with_prompt(FILENAME_PROMPT).interact_text()?
	} else {
		print!("{}", FILENAME_PROMPT);
		std::io::stdout().flush()?;
		let mut line = String::new();
		std::io::stdin().lock().read_line(&mut line)?;
		line
	};
	parse_filename(&name)
}

fn parse_filename(raw: &str) -> SmokeResult<PathBuf> {
	let name = raw.trim_end_matches(['\r', '\n']);
	if name.trim().is_empty() { return Err(SmokeError::MissingFilename); }
	Ok(PathBuf::from(name))
}
