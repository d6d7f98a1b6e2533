use reqwest::StatusCode;
use tracing::info;

use crate::errors::SmokeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
	Get,
	Post,
}

/// Which diagnostic lines follow the status line for a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Echo {
	/// content only
	Content,
	/// content, decoded text and an empty line
	Text,
	/// content, decoded text and the parsed JSON payload
	Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Probe {
	pub title: String,
	pub method: Method,
	pub url: String,
	pub body: Option<serde_json::Value>,
	pub echo: Echo,
	/// Width of the `-` rule under the title.
	pub rule: usize,
}

impl Probe {
	pub fn get(title: &str, url: String, echo: Echo) -> Self {
		Self { title: title.into(), method: Method::Get, url, body: None, echo, rule: title.chars().count() }
	}

	pub fn post(title: &str, url: String, body: serde_json::Value, echo: Echo) -> Self {
		Self { title: title.into(), method: Method::Post, url, body: Some(body), echo, rule: title.chars().count() }
	}

	pub fn with_rule(mut self, rule: usize) -> Self {
		self.rule = rule;
		self
	}
}

/// A fully read response.
#[derive(Debug, Clone)]
pub struct Captured {
	pub url: String,
	pub status: StatusCode,
	pub content: Vec<u8>,
}

impl Captured {
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.content).into_owned()
	}

	pub fn json(&self) -> SmokeResult<serde_json::Value> {
		Ok(serde_json::from_slice(&self.content)?)
	}
}

#[derive(Clone)]
pub struct ServiceClient {
	client: reqwest::Client,
}

impl ServiceClient {
	pub fn new() -> SmokeResult<Self> {
		let client = reqwest::Client::builder()
			.user_agent(concat!("course-smoke/", env!("CARGO_PKG_VERSION")))
			.build()?;
		Ok(Self { client })
	}

	/// Sends the probe and reads the whole body. Non-2xx statuses are returned as-is.
	pub async fn fetch(&self, probe: &Probe) -> SmokeResult<Captured> {
		let req = match probe.method {
			Method::Get => self.client.get(&probe.url),
			Method::Post => self.client.post(&probe.url),
		};
		let req = match &probe.body {
			Some(body) => req.json(body),
			None => req,
		};
		let resp = req.send().await?;
		let status = resp.status();
		let content = resp.bytes().await?.to_vec();
		info!(method = ?probe.method, url = %probe.url, status = status.as_u16(), bytes = content.len(), "probe answered");
		Ok(Captured { url: probe.url.clone(), status, content })
	}
}
