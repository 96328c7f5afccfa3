use super::{EnumTarget, Session};
use anyhow::Result;
use clap::Args;
use enum_ext::config::EnumExtConfig;
use enum_ext::{OptionPair, OptionValue};
use log::info;

#[derive(Args, Debug)]
pub struct OptionsCommands {
    #[command(flatten)]
    pub target: EnumTarget,

    /// Restrict options to the members of this set
    #[arg(long)]
    pub set: Option<String>,

    /// Use integer codes as option values
    #[arg(long)]
    pub codes: bool,

    /// Locale for translated enums (defaults to settings.default_locale)
    #[arg(long)]
    pub locale: Option<String>,
}

/// Print `(text, value)` select options
pub fn options_command(config: &EnumExtConfig, args: OptionsCommands) -> Result<()> {
    let session = Session::build(config)?;
    if let Some(locale) = &args.locale {
        session.catalog.set_locale(locale.as_str());
    }
    let ext = session.enum_ext(&args.target)?;

    info!("Listing options for {}.{}", args.target.model, args.target.enum_name);
    let options = match (&args.set, args.codes) {
        (Some(set), false) => ext.set_options(set)?,
        (Some(set), true) => ext.set_options_i(set)?,
        (None, false) => ext.options(),
        (None, true) => ext.options_i(),
    };

    for OptionPair { text, value } in options {
        match value {
            OptionValue::Key(key) => println!("{:<24} {}", key, text),
            OptionValue::Code(code) => println!("{:<24} {}", code, text),
        }
    }
    Ok(())
}
