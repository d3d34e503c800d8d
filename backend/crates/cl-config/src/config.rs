use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ChecklistsConfig, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, IssueDoneRatio, LoggingConfig, ServerConfig,
    SettingsConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub settings: SettingsConfig,
    pub checklists: ChecklistsConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CL_CONFIG_DIR env var, else use ./.checklists/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CL_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: CL_CONFIG_DIR env var > ./.checklists/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration. Call after load() to fail at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;

        // Database file must stay inside the config dir
        let db_path = Path::new(&self.database.path);
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::database("database.path cannot be empty"));
        }
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if let Some(ref file) = self.logging.file
            && (file.contains('/') || file.contains('\\'))
        {
            return Err(ConfigError::logging(
                "logging.file must be a bare file name; use logging.dir for the directory",
            ));
        }

        Ok(())
    }

    /// Absolute path to the database file
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Log file path when file logging is configured
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// True when checklist progress should be written to the issue's done ratio
    pub fn recalculates_done_ratio(&self) -> bool {
        self.settings.issue_done_ratio == IssueDoneRatio::IssueField
            && self.checklists.issue_done_ratio
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  settings: issue_done_ratio={}",
            self.settings.issue_done_ratio
        );
        info!(
            "  checklists: issue_done_ratio={}",
            self.checklists.issue_done_ratio
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CL_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CL_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("CL_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("CL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("CL_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("CL_LOG_FILE", &mut self.logging.file);

        // Tracker settings
        Self::apply_env_parse(
            "CL_SETTINGS_ISSUE_DONE_RATIO",
            &mut self.settings.issue_done_ratio,
        );

        // Plugin
        Self::apply_env_bool(
            "CL_CHECKLISTS_ISSUE_DONE_RATIO",
            &mut self.checklists.issue_done_ratio,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
