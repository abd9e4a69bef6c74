use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_USER_KEY: &str = "user";

/// Storage keys the session lives under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
    #[serde(default = "default_user_key")]
    pub user_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
            user_key: default_user_key(),
        }
    }
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

fn default_user_key() -> String {
    DEFAULT_USER_KEY.to_string()
}

/// Copy shown on the landing page hero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandingConfig {
    #[serde(default = "default_hotel_name")]
    pub hotel_name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            hotel_name: default_hotel_name(),
            tagline: default_tagline(),
        }
    }
}

fn default_hotel_name() -> String {
    "Innkeep".to_string()
}

fn default_tagline() -> String {
    "Front desk, back office and housekeeping in one place.".to_string()
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section and field has a default, so a missing or partial file
/// still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub branding: BrandingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_keys() {
        let keys = SessionConfig::default();
        assert_eq!(keys.token_key, "token");
        assert_eq!(keys.user_key, "user");
    }

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn deserialize_partial_toml_defaults_missing_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            [session]
            token_key = "innkeep.token"

            [branding]
            hotel_name = "Harborview"
            "#,
        )
        .unwrap();
        assert_eq!(config.session.token_key, "innkeep.token");
        assert_eq!(config.session.user_key, "user");
        assert_eq!(config.branding.hotel_name, "Harborview");
        assert_eq!(config.branding.tagline, BrandingConfig::default().tagline);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
