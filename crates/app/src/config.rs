use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// `config.toml` at the workspace root, embedded at build time.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// The parsed configuration. Parsed on first use; later calls are free.
///
/// If the embedded file is unparseable, every setting falls back to its default.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| parse_config(CONFIG_TOML))
}

fn parse_config(contents: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(contents) {
        Ok(config) => {
            tracing::debug!(
                token_key = %config.session.token_key,
                user_key = %config.session.user_key,
                "loaded config.toml"
            );
            config
        }
        Err(e) => {
            tracing::warn!("failed to parse config.toml: {e}; using defaults");
            AppConfig::default()
        }
    }
}
