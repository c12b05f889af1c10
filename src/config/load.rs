use super::{CONFIG_ENV, CONFIG_FILE, GameConfig};
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub fn load_config() -> Result<GameConfig> {
    load_config_from(config_path(env::var(CONFIG_ENV).ok()))
}

fn config_path(override_path: Option<String>) -> PathBuf {
    override_path
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

pub fn load_config_from(path: impl AsRef<Path>) -> Result<GameConfig> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => parse_config(&content)
            .with_context(|| format!("invalid config in {}", path.display())),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(GameConfig::default()),
        Err(err) => {
            Err(err).with_context(|| format!("cannot read config {}", path.display()))
        }
    }
}

pub fn parse_config(content: &str) -> Result<GameConfig> {
    let config: GameConfig = ron::from_str(content)?;
    config.validate()?;
    Ok(config)
}
