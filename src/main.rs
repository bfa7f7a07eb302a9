use clap::Parser;

use smokesignal::banner::{BannerInfo, RunStats, print_banner, print_run_summary};
use smokesignal::consts::{DEFAULT_BASE_URL, SMOKE_PROMPTS, TEST_ENDPOINT};
use smokesignal::runner::Runner;

#[derive(Parser)]
#[command(
    name = "smokesignal",
    version,
    about = "Smoke-test a locally running Claude Code endpoint."
)]
struct Cli {
    /// Base URL of the server under test
    #[arg(short, long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Run a single prompt instead of the built-in battery
    #[arg(short, long)]
    prompt: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let prompts: Vec<&str> = match &cli.prompt {
        Some(prompt) => vec![prompt.as_str()],
        None => SMOKE_PROMPTS.to_vec(),
    };

    print_banner(&BannerInfo {
        base_url: &cli.base_url,
        endpoint: TEST_ENDPOINT,
        prompts: prompts.len(),
    });

    let runner = Runner::new(&cli.base_url);
    let mut stats = RunStats::default();

    // Strictly sequential. A failed test does not stop the battery;
    // transport errors do, propagating straight out of main.
    for prompt in prompts {
        let report = runner.run(prompt).await?;
        stats.record(report.passed());
    }

    print_run_summary(stats);
    Ok(())
}
