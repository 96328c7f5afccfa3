use super::commands::assign::AssignCommands;
use super::commands::expand::ExpandCommands;
use super::commands::filter::FilterCommands;
use super::commands::options::OptionsCommands;
use super::commands::show::ShowCommands;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "enum-ext")]
#[command(about = "Inspect enum sets, filters and select options defined in an enum-ext config")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (level from RUST_LOG)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the config and list every enum with its sets
    Check,
    /// Expand sets and values into literal enum values
    Expand(ExpandCommands),
    /// Print select options for an enum or one of its sets
    Options(OptionsCommands),
    /// Print the WHERE clause matching (or excluding) sets and values
    Filter(FilterCommands),
    /// Print the bulk UPDATE assigning a value
    Assign(AssignCommands),
    /// Print values and sets of an enum as JSON
    Show(ShowCommands),
}
