use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use moskill_delivery::{EmailJsConfig, SmtpConfig};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub forms: FormsConfig,
    #[serde(default)]
    pub popup: PopupConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Business details shown in the layout and on the contact page
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_phones")]
    pub phones: Vec<String>,
    #[serde(default = "default_site_email")]
    pub email: String,
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default)]
    pub map_embed_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
            phones: default_phones(),
            email: default_site_email(),
            address: default_address(),
            map_embed_url: String::new(),
        }
    }
}

impl SiteConfig {
    pub fn primary_phone(&self) -> &str {
        self.phones.first().map(String::as_str).unwrap_or_default()
    }
}

fn default_site_name() -> String {
    "MOSKILL NETTING SOLUTIONS".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_phones() -> Vec<String> {
    vec!["9768872724".to_string(), "8898039392".to_string()]
}

fn default_site_email() -> String {
    "moskillnetsol@gmail.com".to_string()
}

fn default_address() -> String {
    "Shop No. 13, Kharkar Compound, Near Chatrapati Shivaji Maharaj Hospital, Behind HP Gas Compound, Kalwa (W) - 400 605.".to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    #[default]
    EmailJs,
    Smtp,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub provider: Provider,
    /// Request timeout for the provider call; the transport default when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FormsConfig {
    #[serde(default)]
    pub contact: FormConfig,
    #[serde(default)]
    pub quote: FormConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub template_id: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PopupConfig {
    #[serde(default = "default_popup_enabled")]
    pub enabled: bool,
    #[serde(default = "default_popup_delay_ms")]
    pub delay_ms: u64,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            enabled: default_popup_enabled(),
            delay_ms: default_popup_delay_ms(),
        }
    }
}

fn default_popup_enabled() -> bool {
    true
}

fn default_popup_delay_ms() -> u64 {
    3000
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Unprefixed EmailJS variables (EMAILJS_SERVICE_ID, etc.)
    /// 2. Environment variables (MOSKILL__DELIVERY__PROVIDER, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional - ignored if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("MOSKILL")
                .separator("__")
                .try_parsing(true),
        );

        for (var, key) in [
            ("EMAILJS_SERVICE_ID", "delivery.emailjs.service_id"),
            ("EMAILJS_PUBLIC_KEY", "delivery.emailjs.public_key"),
            ("EMAILJS_PRIVATE_KEY", "delivery.emailjs.private_key"),
            ("EMAILJS_QUOTE_TEMPLATE_ID", "forms.quote.template_id"),
            ("EMAILJS_CONTACT_TEMPLATE_ID", "forms.contact.template_id"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        match self.delivery.provider {
            Provider::EmailJs => {
                if self.delivery.emailjs.service_id.is_empty() {
                    return Err("EmailJS service_id must be set".to_string());
                }
                if self.delivery.emailjs.public_key.is_empty() {
                    return Err("EmailJS public_key must be set".to_string());
                }
                if self.forms.contact.template_id.is_empty()
                    || self.forms.quote.template_id.is_empty()
                {
                    return Err("EmailJS template_id must be set for every form".to_string());
                }
            }
            Provider::Smtp => {
                if self.delivery.smtp.from_address.is_empty()
                    || self.delivery.smtp.to_address.is_empty()
                {
                    return Err("SMTP from_address and to_address must be set".to_string());
                }
            }
        }

        Ok(())
    }
}
