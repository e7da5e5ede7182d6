use std::rc::Rc;

use log::Level;
use serde::Deserialize;
use thiserror::Error;
use yew::prelude::*;

const SITE_JSON: &str = include_str!("../site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site config is not valid json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("phone number {0:?} must be '+' followed by digits")]
    InvalidPhone(String),
    #[error("site config field `{0}` is empty")]
    Empty(&'static str),
}

/// Page sections in the order the page shell renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Hero,
    Stats,
    About,
    Services,
    WhyUs,
    Gallery,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::Stats,
        Section::About,
        Section::Services,
        Section::WhyUs,
        Section::Gallery,
        Section::Testimonials,
        Section::Contact,
    ];
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Phone {
    /// Local format shown on buttons, e.g. "083 232 1233".
    pub display: String,
    /// E.164 format used for `tel:` and WhatsApp links, e.g. "+27832321233".
    pub international: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceArea {
    pub suburb: String,
    pub region: String,
    pub country: String,
}

/// Everything that differs between deployments of the site for one business.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub business_name: String,
    pub legal_name: String,
    pub phone: Phone,
    pub area: ServiceArea,
    pub hours: String,
    #[serde(default)]
    pub maps_url: Option<String>,
    #[serde(default = "default_true")]
    pub whatsapp: bool,
    #[serde(default = "all_sections")]
    pub sections: Vec<Section>,
}

fn default_true() -> bool {
    true
}

fn all_sections() -> Vec<Section> {
    Section::ALL.to_vec()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business_name: "Plumber Done Right".to_string(),
            legal_name: "Plumber Done Right Ferndale".to_string(),
            phone: Phone {
                display: "083 232 1233".to_string(),
                international: "+27832321233".to_string(),
            },
            area: ServiceArea {
                suburb: "Ferndale".to_string(),
                region: "Randburg".to_string(),
                country: "South Africa".to_string(),
            },
            hours: "Open 24 Hours / 7 Days".to_string(),
            maps_url: None,
            whatsapp: true,
            sections: all_sections(),
        }
    }
}

impl SiteConfig {
    /// Parses the `site.json` bundled into the binary.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("business_name", &self.business_name),
            ("legal_name", &self.legal_name),
            ("phone.display", &self.phone.display),
            ("area.suburb", &self.area.suburb),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty(field));
            }
        }

        let digits = self.phone.international.strip_prefix('+').unwrap_or("");
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidPhone(self.phone.international.clone()));
        }
        Ok(())
    }

    pub fn is_enabled(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }

    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.phone.international)
    }

    pub fn whatsapp_href(&self) -> String {
        format!("https://wa.me/{}", self.phone.international.trim_start_matches('+'))
    }

    pub fn maps_href(&self) -> String {
        match &self.maps_url {
            Some(url) => url.clone(),
            None => format!(
                "https://www.google.com/maps/search/?api=1&query={}",
                urlencoding::encode(&format!("{} {}", self.business_name, self.area.suburb))
            ),
        }
    }

    /// "Ferndale, Randburg, South Africa"
    pub fn location_label(&self) -> String {
        format!("{}, {}, {}", self.area.suburb, self.area.region, self.area.country)
    }
}

/// Site configuration provided by the page shell. Falls back to the built-in
/// default outside a provider.
#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_context::<Rc<SiteConfig>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config.business_name, "Plumber Done Right");
        assert_eq!(config.phone.international, "+27832321233");
        assert_eq!(config.sections, Section::ALL.to_vec());
        assert!(config.maps_url.is_some());
    }

    #[test]
    fn links_are_built_from_the_phone_number() {
        let config = SiteConfig::default();
        assert_eq!(config.tel_href(), "tel:+27832321233");
        assert_eq!(config.whatsapp_href(), "https://wa.me/27832321233");
    }

    #[test]
    fn maps_href_falls_back_to_an_encoded_search() {
        let config = SiteConfig::default();
        assert_eq!(
            config.maps_href(),
            "https://www.google.com/maps/search/?api=1&query=Plumber%20Done%20Right%20Ferndale"
        );
    }

    #[test]
    fn omitted_sections_are_disabled() {
        let raw = r#"{
            "business_name": "Plumber Done Right",
            "legal_name": "Plumber Done Right Randburg",
            "phone": { "display": "082 000 0000", "international": "+27820000000" },
            "area": { "suburb": "Randburg", "region": "Johannesburg", "country": "South Africa" },
            "hours": "Mon-Sat",
            "whatsapp": false,
            "sections": ["hero", "services", "contact"]
        }"#;
        let config = SiteConfig::from_json(raw).unwrap();
        assert!(config.is_enabled(Section::Hero));
        assert!(!config.is_enabled(Section::Gallery));
        assert!(!config.whatsapp);
        assert_eq!(config.maps_url, None);
    }

    #[test]
    fn rejects_a_local_format_phone() {
        let raw = SITE_JSON.replace("+27832321233", "0832321233");
        match SiteConfig::from_json(&raw) {
            Err(ConfigError::InvalidPhone(phone)) => assert_eq!(phone, "0832321233"),
            other => panic!("expected InvalidPhone, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_business_name() {
        let raw = SITE_JSON.replace("\"Plumber Done Right\"", "\"  \"");
        assert!(matches!(SiteConfig::from_json(&raw), Err(ConfigError::Empty("business_name"))));
    }

    #[test]
    fn rejects_unknown_section() {
        let raw = SITE_JSON.replace("\"gallery\"", "\"blog\"");
        assert!(matches!(SiteConfig::from_json(&raw), Err(ConfigError::Parse(_))));
    }
}
