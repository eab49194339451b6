use clap::Parser;
use wealthdash_cli::{cli::Cli, config::Config, init_tracing, run};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    let cli = Cli::parse();
    let output = run(cli.command)?;
    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);
    Ok(())
}
