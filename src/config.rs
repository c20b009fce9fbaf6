//! Widget configuration supplied by the host page.
//!
//! Every value has a default matching the stock menu assistant deployment,
//! so hosts only override what differs. The parsed config is handed to
//! components through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_ENDPOINT_PATH: &str = "get_response";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/placeholder-food.jpg";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid widget config JSON: {0}")]
    Parse(String),
    #[error("invalid widget config: {0} must not be empty")]
    Invalid(&'static str),
}

/// Digit grouping used for price display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct NumberLocale {
    pub group: char,
    pub decimal: char,
}

impl NumberLocale {
    /// Indonesian formatting: `15.000,5`.
    pub const ID: Self = Self { group: '.', decimal: ',' };
    /// English formatting: `15,000.5`.
    pub const EN: Self = Self { group: ',', decimal: '.' };
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::ID
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub api_base: String,
    pub endpoint_path: String,
    pub assistant_name: String,
    pub user_label: String,
    pub title: String,
    pub greeting: String,
    pub input_placeholder: String,
    pub composing_text: String,
    pub open_label: String,
    pub close_label: String,
    pub placeholder_image: String,
    pub service_hint: String,
    pub currency_prefix: String,
    pub number_locale: NumberLocale,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            endpoint_path: DEFAULT_ENDPOINT_PATH.to_owned(),
            assistant_name: "Ummu Nada".to_owned(),
            user_label: "You".to_owned(),
            title: "Ummu Nada Menu".to_owned(),
            greeting: "Halo! Tanya saya tentang menu Ummu Nada atau cari makanan yang Anda inginkan!".to_owned(),
            input_placeholder: "Cari menu makanan...".to_owned(),
            composing_text: "Sedang berpikir".to_owned(),
            open_label: "Ask About Menu".to_owned(),
            close_label: "Close Chat".to_owned(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_owned(),
            service_hint: "the assistant server".to_owned(),
            currency_prefix: "Rp".to_owned(),
            number_locale: NumberLocale::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse a host-supplied JSON object; absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when the API base or endpoint path is blank.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let parsed: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        parsed.normalized()
    }

    /// Trim surrounding slashes and validate required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the API base or endpoint path is blank.
    pub fn normalized(mut self) -> Result<Self, ConfigError> {
        self.api_base = self.api_base.trim().trim_end_matches('/').to_owned();
        self.endpoint_path = self.endpoint_path.trim().trim_matches('/').to_owned();
        if self.api_base.is_empty() {
            return Err(ConfigError::Invalid("api_base"));
        }
        if self.endpoint_path.is_empty() {
            return Err(ConfigError::Invalid("endpoint_path"));
        }
        Ok(self)
    }

    /// Address of the reply endpoint.
    pub fn endpoint_url(&self) -> String {
        format!("{}/{}", self.api_base, self.endpoint_path)
    }

    /// Fetchable address for a result item image.
    ///
    /// Blank references resolve straight to the placeholder image.
    pub fn image_url(&self, image_ref: &str) -> String {
        let image_ref = image_ref.trim().trim_start_matches('/');
        if image_ref.is_empty() {
            return self.placeholder_image.clone();
        }
        format!("{}/{image_ref}", self.api_base)
    }
}
