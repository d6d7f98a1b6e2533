use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::errors::SmokeResult;
use crate::models::{CostItem, ReportQuery, RunSummary, ServiceUrls, SMOKE_USER_ID};
use crate::probe::{Echo, Probe, ServiceClient};
use crate::report::ReportWriter;

// Expected-result files carry a longer rule under the add-cost title.
const ADD_COST_RULE: usize = 34;

/// about, report, add cost, report again.
pub fn standard_plan(urls: &ServiceUrls) -> SmokeResult<Vec<Probe>> {
	let report_url = format!("{}/api/report/?{}", urls.costs, ReportQuery::smoke_month().to_query_string());
	let cost = serde_json::to_value(CostItem::smoke_item())?;
	Ok(vec![
		Probe::get("testing getting the about", format!("{}/api/about/", urls.admin), Echo::Json),
		Probe::get("testing getting the report - 1", report_url.clone(), Echo::Text),
		Probe::post("testing adding cost item", format!("{}/api/add/", urls.costs), cost, Echo::Content).with_rule(ADD_COST_RULE),
		Probe::get("testing getting the report - 2", report_url, Echo::Text),
	])
}

pub fn extended_probes(urls: &ServiceUrls) -> Vec<Probe> {
	vec![
		Probe::get("testing getting the user details", format!("{}/api/users/{}", urls.users, SMOKE_USER_ID), Echo::Json),
		Probe::get("testing getting the user total", format!("{}/api/total/{}", urls.costs, SMOKE_USER_ID), Echo::Json),
		Probe::get("testing getting the logs", format!("{}/api/logs", urls.logs), Echo::Text),
	]
}

pub fn build_plan(urls: &ServiceUrls, extended: bool) -> SmokeResult<Vec<Probe>> {
	let mut plan = standard_plan(urls)?;
	if extended { plan.extend(extended_probes(urls)); }
	Ok(plan)
}

/// Runs every probe in order. A failing call is written as a problem and the
/// run moves on; only output errors stop it.
pub async fn run<W: Write>(client: &ServiceClient, urls: &ServiceUrls, plan: &[Probe], out: W) -> SmokeResult<RunSummary> {
	let mut report = ReportWriter::new(out);
	report.header(urls)?;
	let mut summary = RunSummary::default();
	for probe in plan {
		report.section(probe)?;
		let outcome = client.fetch(probe).await;
		summary.calls += 1;
		if report.record(probe, outcome)? { summary.problems += 1; }
	}
	report.flush()?;
	Ok(summary)
}

/// Truncates `path` and writes the report into it.
pub async fn run_to_path(client: &ServiceClient, urls: &ServiceUrls, plan: &[Probe], path: &Path) -> SmokeResult<RunSummary> {
	let file = File::create(path)?;
	let summary = run(client, urls, plan, BufWriter::new(file)).await?;
	info!(path = %path.display(), calls = summary.calls, problems = summary.problems, "smoke run finished");
	Ok(summary)
}
