use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use timesheet_core::domain::{CascadeCatalog, FormConfig, WeekEndingMode};

const APP_DIR: &str = "timesheet-tui";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetConfig {
    /// Project root of the hosted store, e.g. "https://xyz.supabase.co"
    #[serde(default)]
    pub store_url: Option<String>,
    #[serde(default)]
    pub store_api_key: Option<String>,
    #[serde(default)]
    pub week_ending: WeekEndingMode,
    #[serde(default = "default_multi_row")]
    pub multi_row: bool,
    #[serde(default)]
    pub preserve_fractional_hours: bool,
    /// JSON or TOML project catalog. Enables the project cascade when set.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_multi_row() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TimesheetConfig {
    fn default() -> Self {
        Self {
            store_url: None,
            store_api_key: None,
            week_ending: WeekEndingMode::default(),
            multi_row: default_multi_row(),
            preserve_fractional_hours: false,
            catalog_path: None,
            log_filter: default_log_filter(),
        }
    }
}

impl TimesheetConfig {
    pub fn app_dir() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join("timesheet-tui.log"))
    }

    /// Defaults, then the config file if present, then `TIMESHEET_*` env vars.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let settings = ::config::Config::builder()
            .add_source(::config::Config::try_from(&Self::default())?)
            .add_source(::config::File::from(path.as_path()).required(false))
            .add_source(
                ::config::Environment::with_prefix("TIMESHEET")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read config at {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Invalid timesheet-tui configuration")
    }

    /// Write the default config unless a file already exists.
    pub fn save_default_if_missing() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if path.exists() {
            return Ok(path);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(&Self::default())?;
        std::fs::write(&path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(path)
    }

    pub fn form_config(&self) -> Result<FormConfig> {
        let mut builder = FormConfig::builder()
            .week_ending(self.week_ending)
            .multi_row(self.multi_row)
            .preserve_fractional_hours(self.preserve_fractional_hours);
        if let Some(path) = &self.catalog_path {
            builder = builder.cascade(load_catalog(path)?);
        }
        Ok(builder.build())
    }
}

fn load_catalog(path: &Path) -> Result<CascadeCatalog> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read project catalog at {}", path.display()))?;
    parse_catalog(&raw, path)
}

fn parse_catalog(raw: &str, path: &Path) -> Result<CascadeCatalog> {
    let catalog = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(raw)
            .with_context(|| format!("Failed to parse project catalog at {}", path.display()))?,
        _ => toml::from_str(raw)
            .with_context(|| format!("Failed to parse project catalog at {}", path.display()))?,
    };
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let raw = toml::to_string_pretty(&TimesheetConfig::default()).unwrap();
        let parsed: TimesheetConfig = toml::from_str(&raw).unwrap();

        assert_eq!(parsed.week_ending, WeekEndingMode::Picker);
        assert!(parsed.multi_row);
        assert!(!parsed.preserve_fractional_hours);
        assert_eq!(parsed.log_filter, "info");
    }

    #[test]
    fn single_row_today_config_maps_to_form_config() {
        let config: TimesheetConfig =
            toml::from_str("week_ending = \"today\"\nmulti_row = false\n").unwrap();

        let form = config.form_config().unwrap();

        assert_eq!(form.week_ending, WeekEndingMode::Today);
        assert!(!form.multi_row);
        assert!(form.cascade.is_none());
    }

    #[test]
    fn catalog_is_parsed_by_extension() {
        let json = r#"{"projects":[{"name":"Mobile App","sub_projects":["iOS"],"tasks":[]}]}"#;
        let catalog = parse_catalog(json, Path::new("catalog.json")).unwrap();
        assert_eq!(catalog.projects[0].name, "Mobile App");

        let toml = "[[projects]]\nname = \"Mobile App\"\nsub_projects = [\"iOS\"]\n";
        let catalog = parse_catalog(toml, Path::new("catalog.toml")).unwrap();
        assert_eq!(catalog.projects[0].sub_projects, vec!["iOS"]);
    }
}
