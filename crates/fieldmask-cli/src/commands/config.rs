use anyhow::Result;
use fieldmask_config::Config;

use crate::cli::ConfigCommands;

pub fn handle(cmd: ConfigCommands) -> Result<()> {
    println!("{}", render(cmd));
    Ok(())
}

fn render(cmd: ConfigCommands) -> String {
    match cmd {
        ConfigCommands::Path => Config::config_path().display().to_string(),
    }
}
