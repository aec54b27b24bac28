use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use offerdoc_core::models::{DEFAULT_SUPPRESS_MARKER, RedactionPolicy, TemplateVariant};
use offerdoc_export::{BackendKind, LayoutConfig};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub variant: TemplateVariant,
    /// Where exported documents land. `None` means the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Added in v1; older configs get [`DEFAULT_SUPPRESS_MARKER`].
    #[serde(default = "default_marker")]
    pub suppress_marker: String,
    #[serde(default)]
    pub backend: BackendKind,
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default)]
    pub layout: LayoutConfig,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

fn default_marker() -> String {
    DEFAULT_SUPPRESS_MARKER.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            variant: TemplateVariant::default(),
            output_dir: None,
            suppress_marker: default_marker(),
            backend: BackendKind::default(),
            log_format: LogFormat::default(),
            layout: LayoutConfig::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

impl AppConfig {
    pub fn redaction_policy(&self) -> RedactionPolicy {
        RedactionPolicy::new(self.suppress_marker.clone())
    }
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.offerdoc.app"))
}

/// Load the config from the user's config directory. On first run the
/// defaults are written there so the user has a file to edit.
pub fn load_or_init_config() -> eyre::Result<AppConfig> {
    load_or_init_config_in(&config_dir()?)
}

pub fn load_or_init_config_in(dir: &Path) -> eyre::Result<AppConfig> {
    if dir.join(CONFIG_FILE).exists() {
        return load_config_from(dir);
    }
    let config = AppConfig::default();
    save_config_to(&config, dir)?;
    Ok(config)
}

pub fn load_config_from(dir: &Path) -> eyre::Result<AppConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Migrations run on the raw value, before it meets the typed struct.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AppConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update offerdoc."
        ));
    }

    // v0 → v1: add suppress_marker
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("suppress_marker")
            .or_insert(serde_json::Value::String(default_marker()));
        obj.entry("created_at")
            .or_insert(serde_json::Value::String(jiff::Timestamp::now().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added suppress_marker)");
    }

    Ok(json)
}

pub fn save_config_to(config: &AppConfig, dir: &Path) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Saved files are always stamped with the current version.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
