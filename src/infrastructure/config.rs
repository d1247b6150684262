use crate::domain::page::Dataset;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    /// Origin the dataset paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Directory served under `/data`, if any
    #[serde(default)]
    pub serve_dir: Option<String>,
    #[serde(flatten)]
    pub paths: DataPaths,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            serve_dir: None,
            paths: DataPaths::default(),
        }
    }
}

/// Relative paths of the three datasets.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DataPaths {
    #[serde(default = "default_production_stats")]
    pub production_stats: String,
    #[serde(default = "default_equipment_status")]
    pub equipment_status: String,
    #[serde(default = "default_maintenance")]
    pub maintenance: String,
}

impl DataPaths {
    pub fn path(&self, dataset: Dataset) -> &str {
        match dataset {
            Dataset::ProductionStats => &self.production_stats,
            Dataset::EquipmentStatus => &self.equipment_status,
            Dataset::Maintenance => &self.maintenance,
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            production_stats: default_production_stats(),
            equipment_status: default_equipment_status(),
            maintenance: default_maintenance(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_production_stats() -> String {
    "data/production_stats.json".to_string()
}

fn default_equipment_status() -> String {
    "data/equipment_status.json".to_string()
}

fn default_maintenance() -> String {
    "data/maintenance.json".to_string()
}

/// `config/dashboard.*` if present, overridden by `DASHBOARD__SECTION__KEY`
/// environment variables.
pub fn load_settings() -> anyhow::Result<Settings> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> Settings {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = from_toml("");
        assert_eq!(settings.server.bind, "0.0.0.0:8080");
        assert_eq!(settings.data.base_url, "http://127.0.0.1:8080");
        assert_eq!(settings.data.serve_dir, None);
        assert_eq!(settings.data.paths, DataPaths::default());
    }

    #[test]
    fn test_overrides() {
        let settings = from_toml(
            r#"
            [server]
            bind = "127.0.0.1:3000"

            [data]
            base_url = "http://plant.local/"
            serve_dir = "data"
            maintenance = "json/maintenance.json"
            "#,
        );
        assert_eq!(settings.server.bind, "127.0.0.1:3000");
        assert_eq!(settings.data.base_url, "http://plant.local/");
        assert_eq!(settings.data.serve_dir.as_deref(), Some("data"));
        assert_eq!(settings.data.paths.path(Dataset::Maintenance), "json/maintenance.json");
        assert_eq!(
            settings.data.paths.path(Dataset::ProductionStats),
            "data/production_stats.json"
        );
    }
}
