use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: do_migrate,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if (*check || *do_migrate) && !path.exists() {
            warning(format!(
                "No configuration file at {}. Run `rcharitymap init` first.",
                path.display()
            ));
            return Ok(());
        }

        if *check {
            let missing = migrate::missing_fields(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
                info("Run `rcharitymap config --migrate` to add them with default values.");
            }
        }

        if *do_migrate {
            let added = migrate::migrate_file(&path)?;
            if added.is_empty() {
                success("Configuration already up to date.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }
    }

    Ok(())
}
