use serde::Serialize;

/// User the costs service validates against the users service; must exist before a run.
pub const SMOKE_USER_ID: u64 = 123123;

pub const DEFAULT_LOGS_URL: &str = "https://log-service-1oo2.onrender.com";
pub const DEFAULT_USERS_URL: &str = "https://user-services-fqb9.onrender.com";
pub const DEFAULT_COSTS_URL: &str = "https://cost-service-1d44.onrender.com";
pub const DEFAULT_ADMIN_URL: &str = "https://admin-service-fjnz.onrender.com";

/// Body of `POST /api/add/` on the costs service. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostItem {
	pub userid: u64,
	pub description: String,
	pub category: String,
	pub sum: u64,
}

impl CostItem {
	pub fn smoke_item() -> Self {
		Self {
			userid: SMOKE_USER_ID,
			description: "milk 9".into(),
			category: "food".into(),
			sum: 8,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportQuery {
	pub id: u64,
	pub year: i32,
	pub month: u8,
}

impl ReportQuery {
	pub fn smoke_month() -> Self {
		Self { id: SMOKE_USER_ID, year: 2026, month: 1 }
	}

	pub fn to_query_string(&self) -> String {
		format!("id={}&year={}&month={}", self.id, self.year, self.month)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrls {
	pub logs: String,
	pub users: String,
	pub costs: String,
	pub admin: String,
}

impl Default for ServiceUrls {
	fn default() -> Self {
		Self {
			logs: DEFAULT_LOGS_URL.into(),
			users: DEFAULT_USERS_URL.into(),
			costs: DEFAULT_COSTS_URL.into(),
			admin: DEFAULT_ADMIN_URL.into(),
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
	pub calls: usize,
	pub problems: usize,
}
