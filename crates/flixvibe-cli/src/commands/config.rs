use crate::output::{new_table, Output};
use crate::ConfigCommands;
use catalog_config::{Config, PathManager};
use catalog_core::FileStore;
use color_eyre::Result;
use comfy_table::Cell;
use serde_json::json;
use std::path::{Path, PathBuf};

pub fn run_config(cmd: ConfigCommands, config_override: Option<PathBuf>, output: &Output) -> Result<()> {
    let path_manager = PathManager::from_env()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to resolve flixvibe directories: {}", e))?;
    let config_file = config_override.unwrap_or_else(|| path_manager.config_file());

    match cmd {
        ConfigCommands::Show => show_config(&path_manager, &config_file, output),
        ConfigCommands::Init { force } => {
            path_manager
                .ensure_directories()
                .map_err(|e| color_eyre::eyre::eyre!("Failed to create directories: {}", e))?;
            init_config(&config_file, force, output)
        }
        ConfigCommands::Path => {
            if output.is_human() {
                println!("{}", config_file.display());
            } else {
                output.json(&json!({
                    "config_file": config_file,
                    "exists": config_file.exists(),
                    "storage_dir": path_manager.storage_dir(),
                    "log_file": path_manager.log_file(),
                }));
            }
            Ok(())
        }
    }
}

fn show_config(path_manager: &PathManager, config_file: &Path, output: &Output) -> Result<()> {
    let exists = config_file.exists();
    let config = Config::load_or_default(config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
    let storage_dir = FileStore::from_config(path_manager, &config).dir().to_path_buf();

    if !output.is_human() {
        output.json(&json!({
            "config_file": config_file,
            "exists": exists,
            "storage_dir": storage_dir,
            "config": config,
        }));
        return Ok(());
    }

    if !exists {
        output.warn(format!("Configuration file not found at: {}", config_file.display()));
        output.info("Showing defaults. Run 'flixvibe config init' to create it.");
    }

    let optional = |path: &Option<PathBuf>, fallback: &str| {
        path.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| fallback.to_string())
    };

    let mut table = new_table(vec!["Setting", "Value"]);
    let rows = [
        ("Config File", config_file.display().to_string()),
        ("storage.namespace", config.storage.namespace.clone()),
        ("storage.dir", storage_dir.display().to_string()),
        ("search.history_limit", config.search.history_limit.to_string()),
        ("search.default_sort", config.search.default_sort.to_string()),
        ("search.suggestions", config.search.suggestions.to_string()),
        ("catalog.path", optional(&config.catalog.path, "(built-in)")),
        ("notifications.enabled", config.notifications.enabled.to_string()),
        ("logging.level", config.logging.level.clone()),
        ("logging.file", optional(&config.logging.file, "(stderr)")),
    ];
    for (key, value) in rows {
        table.add_row(vec![Cell::new(key), Cell::new(value)]);
    }
    output.table(&table);
    Ok(())
}

fn init_config(config_file: &Path, force: bool, output: &Output) -> Result<()> {
    if config_file.exists() && !force {
        output.warn(format!(
            "Configuration file already exists at: {} (use --force to overwrite)",
            config_file.display()
        ));
        return Ok(());
    }

    Config::default()
        .save_to_file(config_file)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to write config to {}: {}", config_file.display(), e))?;
    output.success(format!("Wrote default configuration to {}", config_file.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let output = Output::new(OutputFormat::Json, true);

        init_config(&path, false, &output).unwrap();
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.storage.namespace, "flixvibe");

        // Existing file is kept without --force
        std::fs::write(&path, "[search]\nhistory_limit = 3\n").unwrap();
        init_config(&path, false, &output).unwrap();
        assert_eq!(Config::load_or_default(&path).unwrap().search.history_limit, 3);

        init_config(&path, true, &output).unwrap();
        assert_eq!(Config::load_or_default(&path).unwrap().search.history_limit, 5);
    }
}
