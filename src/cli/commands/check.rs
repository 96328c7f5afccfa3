use super::Session;
use anyhow::Result;
use colored::*;
use enum_ext::config::EnumExtConfig;
use log::info;

/// Build the registry and list every enum with its sets
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(anyhow::Error)` - Invalid values, unknown set members or cyclic sets
pub fn check_command(config: &EnumExtConfig) -> Result<()> {
    info!("Checking enum configuration");
    let session = Session::build(config)?;

    let mut total = 0;
    for host in session.registry.hosts() {
        println!("{} ({})", host.name.bold(), host.table.dimmed());
        for ext in session.registry.enums(&host.name) {
            let translated = if ext.localizations().is_some() {
                "localized".green()
            } else {
                "no localization".yellow()
            };
            println!(
                "  {:<20} {} values, {} sets, {}",
                ext.name(),
                ext.definition().len(),
                ext.sets().len(),
                translated
            );
            for (name, members) in ext.sets().iter() {
                println!("    {:<18} = [{}]", name, members.join(", "));
            }
            total += 1;
        }
    }

    println!("\n{} {} enums OK", "✓".green(), total);
    Ok(())
}
