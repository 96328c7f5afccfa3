use super::{EnumTarget, Session};
use anyhow::Result;
use clap::Args;
use colored::*;
use enum_ext::config::EnumExtConfig;
use log::info;

#[derive(Args, Debug)]
pub struct ExpandCommands {
    #[command(flatten)]
    pub target: EnumTarget,

    /// Set names and/or enum values to expand
    #[arg(required = true)]
    pub tokens: Vec<String>,

    /// Print integer codes instead of keys
    #[arg(long)]
    pub codes: bool,
}

/// Expand tokens into literal enum values
pub fn expand_command(config: &EnumExtConfig, args: ExpandCommands) -> Result<()> {
    info!("Expanding {:?} for {}.{}", args.tokens, args.target.model, args.target.enum_name);
    let session = Session::build(config)?;
    let ext = session.enum_ext(&args.target)?;

    let expansion = ext.expand(&args.tokens)?;
    if args.codes {
        let codes: Vec<String> = ext
            .definition()
            .codes_for(&expansion.keys)
            .iter()
            .map(i64::to_string)
            .collect();
        println!("{}", codes.join("\n"));
    } else {
        println!("{}", expansion.keys.join("\n"));
    }

    if !expansion.unknown.is_empty() {
        eprintln!("{} ignored unknown tokens: {}", "warning:".yellow(), expansion.unknown.join(", "));
    }
    Ok(())
}
