//! `spoiler-check`: runs the Story Spoiler acceptance suite and exits
//! non-zero when any scenario fails.

#![cfg_attr(
    test,
    allow(
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::tests_outside_test_module,
        reason = "Test allows"
    )
)]

use anyhow::{Context as _, Result, bail};
use clap::Parser as _;
use spoiler_scenarios::ScenarioRunner;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

mod cli;

use cli::Cli;

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str =
    "spoiler_cli=info,spoiler_scenarios=info,spoiler_core=warn,reqwest=warn,hyper=warn";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    let runner = select_runner(&cli)?;

    if cli.list {
        for (index, scenario) in runner.scenarios().iter().enumerate() {
            tracing::info!(
                "{}. {} [{}] {}",
                index + 1,
                scenario.name,
                scenario.action.label(),
                scenario.description
            );
        }
        return Ok(());
    }

    let config = cli.resolve_config()?;
    tracing::info!(
        "Running {} scenarios against {}",
        runner.scenarios().len(),
        config.api.base_url
    );

    let report = runner
        .run(&config)
        .await
        .context("Session setup failed")?;
    report.log_summary();

    if !report.all_passed() {
        bail!(
            "{} of {} scenarios failed",
            report.failed_count(),
            report.outcomes().len()
        );
    }

    Ok(())
}

/// Built-in suite unless a scenario file was given
fn select_runner(cli: &Cli) -> Result<ScenarioRunner> {
    match cli.scenarios {
        Some(ref path) => ScenarioRunner::load(path)
            .with_context(|| format!("Failed to load scenarios from {}", path.display())),
        None => Ok(ScenarioRunner::story_spoiler()),
    }
}
