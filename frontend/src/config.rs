use log::Level;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::ConfigError;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

const SITE_JSON: &str = include_str!("../site.json");

static SITE_CONFIG: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(SITE_JSON) {
    Ok(config) => config,
    Err(e) => {
        log::error!("Falling back to default site config: {}", e);
        SiteConfig::default()
    }
});

/// Business details and behaviour knobs for the booking site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub business_name: String,
    /// International format without the leading `+`, as wa.me expects.
    pub whatsapp_number: String,
    /// One mail compose link is opened per recipient on desktop.
    pub recipients: Vec<String>,
    pub mobile_breakpoint: f64,
    pub sniff_user_agent: bool,
    pub scroll_threshold: f64,
    pub mail_stagger_ms: u32,
    pub chat_delay_ms: u32,
    pub follow_up_delay_ms: u32,
    pub reset_reveal_on_breakpoint: bool,
    pub services: Vec<ServiceCard>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    #[serde(default)]
    pub blurb: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business_name: "TCG CarCare".to_string(),
            whatsapp_number: "447398251847".to_string(),
            recipients: vec!["info@tcgcarcare.co.uk".to_string()],
            mobile_breakpoint: 768.0,
            sniff_user_agent: true,
            scroll_threshold: 100.0,
            mail_stagger_ms: 500,
            chat_delay_ms: 500,
            follow_up_delay_ms: 1000,
            reset_reveal_on_breakpoint: false,
            services: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        if config.whatsapp_number.is_empty() || !config.whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Invalid(format!(
                "whatsapp_number must be digits only, got {:?}",
                config.whatsapp_number
            )));
        }
        if config.mobile_breakpoint <= 0.0 {
            return Err(ConfigError::Invalid("mobile_breakpoint must be positive".to_string()));
        }
        Ok(config)
    }

    pub fn primary_recipient(&self) -> Option<&str> {
        self.recipients.first().map(String::as_str)
    }
}

pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::from_json(SITE_JSON).unwrap();
        assert_eq!(config.whatsapp_number, "447398251847");
        assert_eq!(config.primary_recipient(), Some("info@tcgcarcare.co.uk"));
        assert_eq!(config.recipients.len(), 2);
        assert!(!config.services.is_empty());
    }

    #[test]
    fn missing_keys_take_defaults() {
        let config = SiteConfig::from_json(r#"{ "recipients": [] }"#).unwrap();
        assert_eq!(config.mobile_breakpoint, 768.0);
        assert_eq!(config.scroll_threshold, 100.0);
        assert_eq!(config.follow_up_delay_ms, 1000);
        assert_eq!(config.primary_recipient(), None);
    }

    #[test]
    fn rejects_formatted_phone_number() {
        let err = SiteConfig::from_json(r#"{ "whatsapp_number": "+44 7398 251847" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
