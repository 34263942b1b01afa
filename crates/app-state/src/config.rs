use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml`, validate it, and store it in the global `OnceLock`.
/// Safe to call multiple times — only the first call has effect.
///
/// A missing, unparseable, or malformed file degrades to the empty default
/// config, which matches no roles and resolves every route to the default
/// icon. A half-written catalog must not silently change who counts as
/// admin, so validation failures fall back the same way.
pub fn load_app_config() {
    CONFIG.get_or_init(|| read_config(CONFIG_PATH));
}

/// Get the loaded config. Returns the empty default if `load_app_config`
/// hasn't been called yet (safe fallback).
pub fn app_config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(AppConfig::default))
}

fn read_config(path: &str) -> AppConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(error = %e, "config file {path} not found, using empty config");
            return AppConfig::default();
        }
    };
    let config: AppConfig = match toml::from_str(&contents) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse {path}, using empty config");
            return AppConfig::default();
        }
    };
    if let Err(e) = config.validate() {
        tracing::warn!(error = %e, "invalid {path}, using empty config");
        return AppConfig::default();
    }
    config
}
