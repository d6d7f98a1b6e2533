use std::io::{self, Write};

use tracing::warn;

use crate::errors::{SmokeError, SmokeResult};
use crate::models::ServiceUrls;
use crate::probe::{Captured, Echo, Probe};

/// Writes the human-diffable report, one block per probe.
pub struct ReportWriter<W: Write> {
	out: W,
}

impl<W: Write> ReportWriter<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}

	pub fn header(&mut self, urls: &ServiceUrls) -> io::Result<()> {
		writeln!(self.out, "a={}", urls.logs)?;
		writeln!(self.out, "b={}", urls.users)?;
		writeln!(self.out, "c={}", urls.costs)?;
		writeln!(self.out, "d={}", urls.admin)
	}

	/// Empty line, title, rule. The empty line also separates the first title from the header.
	pub fn section(&mut self, probe: &Probe) -> io::Result<()> {
		writeln!(self.out)?;
		writeln!(self.out, "{}", probe.title)?;
		writeln!(self.out, "{}", "-".repeat(probe.rule))
	}

	/// Writes the block for one call. Returns whether a problem was recorded;
	/// errors that are not call failures escape.
	pub fn record(&mut self, probe: &Probe, outcome: SmokeResult<Captured>) -> SmokeResult<bool> {
		let problem = match outcome {
			Ok(resp) => self.response(probe.echo, &resp)?,
			Err(e) if e.is_call_failure() => Some(e),
			Err(e) => return Err(e),
		};
		if let Some(e) = &problem {
			warn!(title = %probe.title, url = %probe.url, error = %e, "probe failed");
			self.problem(e)?;
		}
		writeln!(self.out)?;
		Ok(problem.is_some())
	}

	fn response(&mut self, echo: Echo, resp: &Captured) -> io::Result<Option<SmokeError>> {
		writeln!(self.out, "url={}", resp.url)?;
		writeln!(self.out, "data.status_code={}", resp.status.as_u16())?;
		writeln!(self.out, "{}", bytes_literal(&resp.content))?;
		match echo {
			Echo::Content => {}
			Echo::Text => {
				writeln!(self.out, "data.text={}", resp.text())?;
				writeln!(self.out)?;
			}
			Echo::Json => {
				writeln!(self.out, "data.text={}", resp.text())?;
				match resp.json() {
					Ok(value) => writeln!(self.out, "{}", value)?,
					Err(e) => return Ok(Some(e)),
				}
			}
		}
		Ok(None)
	}

	fn problem(&mut self, e: &SmokeError) -> io::Result<()> {
		writeln!(self.out, "problem")?;
		writeln!(self.out, "{}", e)
	}

	pub fn flush(&mut self) -> io::Result<()> {
		self.out.flush()
	}

	#[cfg(test)]
	pub fn into_inner(self) -> W {
		self.out
	}
}

/// Renders raw bytes as a `b'...'` literal. Switches to double quotes when the
/// content holds a single quote and no double quote.
pub fn bytes_literal(bytes: &[u8]) -> String {
	let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') { '"' } else { '\'' };
	let mut out = String::with_capacity(bytes.len() + 3);
	out.push('b');
	out.push(quote);
	for &b in bytes {
		match b {
			b'\\' => out.push_str("\\\\"),
			b'\t' => out.push_str("\\t"),
			b'\n' => out.push_str("\\n"),
			b'\r' => out.push_str("\\r"),
			_ if b as char == quote => {
				out.push('\\');
				out.push(quote);
			}
			0x20..=0x7e => out.push(b as char),
			_ => out.push_str(&format!("\\x{:02x}", b)),
		}
	}
	out.push(quote);
	out
}
