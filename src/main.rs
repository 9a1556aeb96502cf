use anyhow::Result;
use gt_constants::{app, config::Config};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli()?;
    let stdout = std::io::stdout();
    app::run(&config, &mut stdout.lock())
}
