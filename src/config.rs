//! Site configuration.
//!
//! Every timing, label and identifier the components use lives in
//! [`SiteConfig`]. The defaults reproduce the live portfolio; a page may
//! override any subset by embedding
//!
//! ```html
//! <script type="application/json" id="site-config">{"header_offset": 90}</script>
//! ```
//!
//! Fields missing from the JSON keep their defaults.

use serde::Deserialize;

use crate::error::Result;

/// Element id of the optional JSON config block.
#[cfg(target_arch = "wasm32")]
const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Height of the fixed header (px) subtracted from anchor scroll targets.
    pub header_offset: f64,
    pub typewriter: TypewriterConfig,
    /// Project cards shown per filter before "show more".
    pub projects_page_size: usize,
    pub labels: Labels,
    pub scroll_spy_root_margin: String,
    pub counters: CounterConfig,
    /// Delay before certificate sources are cleared after closing (ms).
    pub certificate_clear_ms: u32,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub phrases: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Pause once a phrase is fully typed.
    pub hold_ms: u32,
    /// Pause once a phrase is fully deleted.
    pub gap_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub projects_more: String,
    pub projects_less: String,
    pub awards_more: String,
    pub awards_less: String,
    pub community_more: String,
    pub community_less: String,
    pub read_more: String,
    pub read_less: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    /// Number of increments a counter takes to reach its target.
    pub steps: u32,
    pub tick_ms: u32,
    /// Fraction of the stats section that must be visible to start.
    pub threshold: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    pub sending_label: String,
    pub sent_label: String,
    /// How long the sent label stays before the original returns (ms).
    pub sent_revert_ms: u32,
    pub failure_alert: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset: 110.0,
            typewriter: TypewriterConfig::default(),
            projects_page_size: 3,
            labels: Labels::default(),
            scroll_spy_root_margin: "-30% 0px -30% 0px".to_string(),
            counters: CounterConfig::default(),
            certificate_clear_ms: 300,
            contact: ContactConfig::default(),
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: [
                "a Full-Stack Developer",
                "a Researcher in AI",
                "a Community Impact Maker",
                "a Tech Enthusiast",
                "an Automobile Aficionado",
                "a Mathematics Geek",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
            gap_ms: 500,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            projects_more: "Show More Projects".to_string(),
            projects_less: "Hide Projects".to_string(),
            awards_more: "Show More Awards".to_string(),
            awards_less: "Show Less Awards".to_string(),
            community_more: "Show More Volunteering Works".to_string(),
            community_less: "Show Less Volunteering Works".to_string(),
            read_more: "Read More".to_string(),
            read_less: "Read Less".to_string(),
        }
    }
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            steps: 50,
            tick_ms: 60,
            threshold: 0.5,
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            public_key: "Isu5yuD0jGkUYfNJU".to_string(),
            service_id: "service_phswhql".to_string(),
            template_id: "template_76rniif".to_string(),
            sending_label: "Sending...".to_string(),
            sent_label: "Message Sent!".to_string(),
            sent_revert_ms: 2000,
            failure_alert: "Failed to send message. Please try again.".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the `#site-config` block from the page.
    /// A missing block yields the defaults; a malformed one is logged and
    /// also yields the defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(text) = text else {
            return Self::default();
        };
        match Self::from_json(&text) {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::warn_1(&format!("site config ignored: {e}").into());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            SiteConfig::from_json(r#"{"header_offset": 64, "counters": {"tick_ms": 30}}"#)
                .unwrap();
        assert_eq!(config.header_offset, 64.0);
        assert_eq!(config.counters.tick_ms, 30);
        assert_eq!(config.counters.steps, 50);
        assert_eq!(config.projects_page_size, 3);
        assert_eq!(config.typewriter.phrases.len(), 6);
    }

    #[test]
    fn phrases_can_be_replaced() {
        let config =
            SiteConfig::from_json(r#"{"typewriter": {"phrases": ["one", "two"]}}"#).unwrap();
        assert_eq!(config.typewriter.phrases, vec!["one", "two"]);
        assert_eq!(config.typewriter.hold_ms, 2000);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{\"header_offset\": \"tall\"}").is_err());
        assert!(SiteConfig::from_json("not json").is_err());
    }

    #[test]
    fn default_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.header_offset, 110.0);
        assert_eq!(config.typewriter.type_ms, 100);
        assert_eq!(config.typewriter.delete_ms, 50);
        assert_eq!(config.typewriter.gap_ms, 500);
        assert_eq!(config.certificate_clear_ms, 300);
        assert_eq!(config.contact.sent_revert_ms, 2000);
        assert_eq!(config.scroll_spy_root_margin, "-30% 0px -30% 0px");
    }
}
