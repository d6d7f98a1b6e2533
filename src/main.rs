use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_smoke::config::Opts;
use course_smoke::plan::{build_plan, run_to_path};
use course_smoke::probe::ServiceClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// Report lines go to the output file, logs stay on stderr.
	let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
	tracing_subscriber::registry()
		.with(tracing_subscriber::EnvFilter::new(env_filter))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.try_init()
		.ok();

	dotenv().ok();
	let opts = Opts::parse();
	let urls = opts.service_urls()?;
	let path = opts.output_path()?;

	let client = ServiceClient::new()?;
	let plan = build_plan(&urls, opts.extended)?;
	// Per-call problems are in the report; they do not change the exit code.
	run_to_path(&client, &urls, &plan, &path).await?;
	Ok(())
}
