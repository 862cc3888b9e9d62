//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::Result;
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "defaults.unit")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (&args.key, &args.value) {
        // No arguments: show all config
        (None, None) => {
            print!("{}", render_config(&config));
        }

        // Key only: show that value
        (Some(key), None) => {
            if let Some(value) = config.get(key) {
                println!("{}", value);
            } else {
                eprintln!("Unknown config key: {}", key);
                eprintln!("\nAvailable keys:");
                for k in Config::available_keys() {
                    eprintln!("  {}", k);
                }
                std::process::exit(1);
            }
        }

        // Key and value: set the value
        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        // Value without key: not valid
        (None, Some(_)) => {
            eprintln!("Error: Must specify a key to set a value");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Display all configuration values, masking the access token
fn render_config(config: &Config) -> String {
    let mut out = String::new();

    out.push_str("[mapbox]\n");
    if config.mapbox.access_token.is_empty() {
        out.push_str("access_token = \"\" # not configured\n");
    } else {
        out.push_str("access_token = \"***\" # configured\n");
    }
    out.push('\n');

    out.push_str("[http]\n");
    out.push_str(&format!("timeout_secs = {}\n", config.http.timeout_secs));
    out.push_str(&format!("user_agent = \"{}\"\n", config.http.user_agent));
    out.push('\n');

    out.push_str("[defaults]\n");
    out.push_str(&format!("unit = \"{}\"\n", config.defaults.unit));
    out.push_str(&format!("format = \"{}\"\n", config.defaults.format));
    out.push_str(&format!("extraction = \"{}\"\n", config.defaults.extraction));

    out
}
