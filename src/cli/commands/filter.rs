use super::{EnumTarget, Session};
use anyhow::Result;
use clap::Args;
use colored::*;
use enum_ext::config::EnumExtConfig;
use log::info;

#[derive(Args, Debug)]
pub struct FilterCommands {
    #[command(flatten)]
    pub target: EnumTarget,

    /// Set names and/or enum values
    pub tokens: Vec<String>,

    /// Exclude the values instead of matching them
    #[arg(long)]
    pub exclude: bool,
}

/// Print the WHERE fragment for tokens
pub fn filter_command(config: &EnumExtConfig, args: FilterCommands) -> Result<()> {
    info!("Building filter for {}.{}", args.target.model, args.target.enum_name);
    let session = Session::build(config)?;
    let ext = session.enum_ext(&args.target)?;

    let filter = if args.exclude {
        ext.without_filter(&args.tokens)?
    } else {
        ext.with_filter(&args.tokens)?
    };

    match filter {
        Some(filter) => println!("{}", filter.to_sql()),
        None => println!("{}", "No tokens given, no filter applies".dimmed()),
    }
    Ok(())
}
