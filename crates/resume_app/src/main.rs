mod cli;
mod config;
mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let mut config = config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);
    config.init_logging(cli.verbose);

    platform::run_app(config, cli.file, cli.interactive)
}
