use super::{EnumTarget, Session};
use anyhow::Result;
use clap::Args;
use enum_ext::config::EnumExtConfig;
use log::info;

#[derive(Args, Debug)]
pub struct AssignCommands {
    #[command(flatten)]
    pub target: EnumTarget,

    /// Enum value to assign
    pub key: String,

    /// Only update rows whose current value is in these sets/values
    #[arg(long = "where", num_args = 1..)]
    pub scope: Vec<String>,
}

/// Print the UPDATE statement assigning a value to every matching row
pub fn assign_command(config: &EnumExtConfig, args: AssignCommands) -> Result<()> {
    info!("Planning bulk assignment of {} on {}.{}", args.key, args.target.model, args.target.enum_name);
    let session = Session::build(config)?;
    let ext = session.enum_ext(&args.target)?;

    let update = ext.mass_assign(&args.key)?.scoped_opt(ext.with_filter(&args.scope)?);
    println!("{}", update.to_sql());
    Ok(())
}
