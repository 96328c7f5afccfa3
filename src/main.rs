use anyhow::Result;
use clap::Parser;
use enum_ext::config::EnumExtConfig;
use log::{debug, info};

mod cli;

use cli::commands::{assign, check, expand, filter, options, show};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if let Some(path) = &cli.log_file {
        // Truncated on each run
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        logger.target(env_logger::Target::Pipe(Box::new(log_file)));
    }
    logger.init();

    info!("Starting enum-ext");
    let config = EnumExtConfig::load(cli.config.as_deref())?;
    debug!("Config has {} models", config.models.len());

    match cli.command {
        Commands::Check => check::check_command(&config),
        Commands::Expand(args) => expand::expand_command(&config, args),
        Commands::Options(args) => options::options_command(&config, args),
        Commands::Filter(args) => filter::filter_command(&config, args),
        Commands::Assign(args) => assign::assign_command(&config, args),
        Commands::Show(args) => show::show_command(&config, args),
    }
}
