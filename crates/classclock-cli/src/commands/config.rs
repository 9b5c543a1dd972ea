use clap::Subcommand;
use classclock_core::TimetableConfig;

use crate::common::GlobalOpts;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the timetable file location
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Write the built-in weekly template
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(opts: &GlobalOpts, action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Path => {
            println!("{}", opts.config_path()?.display());
        }
        ConfigAction::Show => {
            let config = opts.load_config()?;
            print!("{}", config.to_toml_string()?);
        }
        ConfigAction::Init { force } => {
            let path = opts.config_path()?;
            if path.exists() && !force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )
                .into());
            }
            TimetableConfig::default().save_to(&path)?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}
