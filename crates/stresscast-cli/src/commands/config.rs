use clap::Subcommand;
use std::path::Path;
use stresscast_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "model.bias", "export.default_path")
        key: String,
    },
    /// Show the effective configuration
    Show,
    /// Print the default config file location
    Path,
}

pub fn run(action: ConfigAction, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(config_path)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Show => {
            let config = Config::load(config_path)?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Path => match Config::default_path() {
            Some(path) => println!("{}", path.display()),
            None => return Err("cannot determine home directory".into()),
        },
    }
    Ok(())
}
