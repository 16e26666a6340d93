use super::Config;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    /// Load `~/.mrquack/config.toml`, writing a default file on first run.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let mrquack_dir = home.join(".mrquack");
        let config_path = mrquack_dir.join("config.toml");

        if !config_path.exists() {
            fs::create_dir_all(&mrquack_dir).context("Failed to create .mrquack directory")?;
            let config = Self {
                config_path: config_path.clone(),
                ..Self::default()
            };
            config.save()?;
            tracing::info!(path = %config_path.display(), "Wrote default config");
        }

        Self::load_from(&config_path)
    }

    /// Load an explicit config file, then apply environment overrides and validate.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Config =
            toml::from_str(&contents).context("Failed to parse config file")?;
        config.config_path = path.to_path_buf();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
