use crate::output::{Output, OutputFormat};
use crate::ConfigCommands;
use color_eyre::eyre::{eyre, Context};
use color_eyre::Result;
use comfy_table::{Cell, Table};
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::info;
use whiskeyclub_config::Config;

pub fn run_config(cmd: ConfigCommands, config: &Config, config_file: &Path, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show_config(config, config_file, output),
        ConfigCommands::Init { force } => init_config(config_file, force, output),
    }
}

fn show_config(config: &Config, config_file: &Path, output: &Output) -> Result<()> {
    if !config_file.exists() {
        output.warn(format!(
            "Configuration file not found at {}; showing defaults",
            config_file.display()
        ));
    }

    match output.format() {
        OutputFormat::Human => {
            if output.is_quiet() {
                return Ok(());
            }

            let mut table = Table::new();
            table.set_header(vec![
                Cell::new("Config File").add_attribute(comfy_table::Attribute::Bold),
                Cell::new(config_file.display().to_string()),
            ]);
            table.add_row(vec![Cell::new("Author ID"), Cell::new(display_optional(config.author.id.as_deref()))]);
            table.add_row(vec![Cell::new("Author Name"), Cell::new(display_optional(config.author.name.as_deref()))]);
            table.add_row(vec![Cell::new("Log Level"), Cell::new(&config.logging.level)]);
            table.add_row(vec![
                Cell::new("JSON Logs"),
                Cell::new(if config.logging.json { "✓".green().to_string() } else { "✗".red().to_string() }),
            ]);
            table.add_row(vec![
                Cell::new("Log File"),
                Cell::new(
                    config
                        .logging
                        .file
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "stderr".to_string()),
                ),
            ]);
            table.load_preset(comfy_table::presets::UTF8_FULL);
            table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);
            println!("{}", table);
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::json!({
                "config_file": config_file.display().to_string(),
                "author": {
                    "id": config.author.id,
                    "name": config.author.name,
                },
                "logging": {
                    "level": config.logging.level,
                    "json": config.logging.json,
                    "file": config.logging.file.as_ref().map(|p| p.display().to_string()),
                },
            }));
        }
    }
    Ok(())
}

fn init_config(config_file: &Path, force: bool, output: &Output) -> Result<()> {
    if config_file.exists() && !force {
        return Err(eyre!(
            "Configuration file already exists at {} (use --force to overwrite)",
            config_file.display()
        ));
    }

    Config::default()
        .save_to_file(config_file)
        .map_err(|e| eyre!("{}", e))
        .wrap_err_with(|| format!("Failed to write config to {}", config_file.display()))?;
    info!(path = %config_file.display(), "Wrote default configuration");
    output.success(format!("Created configuration at {}", config_file.display()));
    Ok(())
}

fn display_optional(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_else(|| "not set".bright_black().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let output = Output::new(OutputFormat::Json, true);

        init_config(&path, false, &output).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[author]\nid = \"user-1\"\n").unwrap();
        let output = Output::new(OutputFormat::Json, true);

        assert!(init_config(&path, false, &output).is_err());
        assert!(std::fs::read_to_string(&path).unwrap().contains("user-1"));

        init_config(&path, true, &output).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }
}
