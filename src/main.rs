use anyhow::Result;
use clap::Parser;
use runtimer::{cli::Cli, command, report, RuntimerConfig, TrialRunner};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    // Built-in defaults, then the config file, then command-line flags
    let base = match &args.config {
        Some(path) => RuntimerConfig::from_file(path)?,
        None => RuntimerConfig::default(),
    };
    let config = args.resolve(base);
    let trials = config.trial_config()?;

    let cmd = args.command.unwrap_or_default();
    let runner = TrialRunner::new(config.aggregation, trials);
    let measurement = command::measure_command(&runner, &cmd)?;

    println!("{}", report::render(&measurement, config.format)?);

    Ok(())
}
