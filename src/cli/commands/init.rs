use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::helper::workspace_root;
use crate::cli::args::InitCommand;
use crate::cli::exit_status::ExitStatus;
use crate::cli::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let config_path = workspace_root(&cmd.common)?.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, format!("{}\n", default_config_json()?))
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
