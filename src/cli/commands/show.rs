use super::{EnumTarget, Session};
use anyhow::{Context, Result};
use clap::Args;
use enum_ext::config::EnumExtConfig;

#[derive(Args, Debug)]
pub struct ShowCommands {
    #[command(flatten)]
    pub target: EnumTarget,
}

/// Print values, sets and expanded sets as JSON
pub fn show_command(config: &EnumExtConfig, args: ShowCommands) -> Result<()> {
    let session = Session::build(config)?;
    let ext = session.enum_ext(&args.target)?;

    let summary = ext.summary()?;
    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize enum summary")?;
    println!("{}", json);
    Ok(())
}
