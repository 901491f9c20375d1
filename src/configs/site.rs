use regex::Regex;
use serde::Deserialize;

use crate::error::SiteError;

const EMBEDDED_CONFIG: &str = include_str!("../../assets/site.json");

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z]{2,}$").expect("email pattern");
    static ref SCENE_URL_RE: Regex = Regex::new(
        r"^https://[A-Za-z0-9.-]+/[A-Za-z0-9/_-]+\.splinecode$"
    ).expect("scene url pattern");
}

/// A config value `validated` will replace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigIssue {
    ContactEmail(String),
    SceneUrl(String),
}

impl From<ConfigIssue> for SiteError {
    fn from(issue: ConfigIssue) -> Self {
        match issue {
            ConfigIssue::ContactEmail(email) => {
                SiteError::Config(format!("contact_email '{}' is not an address", email))
            }
            ConfigIssue::SceneUrl(url) => {
                SiteError::Config(format!("scene url '{}' is not a .splinecode https URL", url))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub enabled: bool,
    pub url: String,
    pub viewer_script: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "https://prod.spline.design/xzUirwcZB9SOxUWt/scene.splinecode".to_string(),
            viewer_script: "https://unpkg.com/@splinetool/viewer@1.9.48/build/spline-viewer.js".to_string(),
        }
    }
}

impl SceneConfig {
    /// URL to hand the viewer, or `None` when the hero should show only the
    /// static backdrop.
    pub fn active_url(&self) -> Option<&str> {
        if self.enabled { Some(self.url.as_str()) } else { None }
    }
}

/// Build-time site settings, provided to the tree as context.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub owner: String,
    pub contact_email: String,
    pub booking_url: String,
    pub availability: String,
    pub scene: SceneConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Ava Lane — Copy".to_string(),
            owner: "Ava Lane".to_string(),
            contact_email: "hello@example.com".to_string(),
            booking_url: "#".to_string(),
            availability: "Currently booking projects for next month.".to_string(),
            scene: SceneConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, SiteError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        Ok(config)
    }

    /// Never fails: a broken embedded file degrades to the defaults.
    pub fn load() -> Self {
        let config = Self::parse(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            log::warn!("Embedded site config unusable, using defaults: {}", e);
            Self::default()
        });

        #[cfg(not(target_arch = "wasm32"))]
        let config = config.with_env_overrides(|key| std::env::var(key).ok());

        config.validated()
    }

    /// Applies `PORTFOLIO_*` overrides from `lookup`.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(email) = lookup("PORTFOLIO_CONTACT_EMAIL") {
            self.contact_email = email;
        }
        if let Some(url) = lookup("PORTFOLIO_BOOKING_URL") {
            self.booking_url = url;
        }
        if let Some(url) = lookup("PORTFOLIO_SCENE_URL") {
            self.scene.url = url;
        }
        if let Some(flag) = lookup("PORTFOLIO_SCENE_ENABLED") {
            match flag.parse::<bool>() {
                Ok(enabled) => {
                    self.scene.enabled = enabled;
                }
                Err(_) => log::warn!("PORTFOLIO_SCENE_ENABLED={} is not a bool, ignoring", flag),
            }
        }
        self
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if !EMAIL_RE.is_match(&self.contact_email) {
            issues.push(ConfigIssue::ContactEmail(self.contact_email.clone()));
        }
        if self.scene.enabled && !SCENE_URL_RE.is_match(&self.scene.url) {
            issues.push(ConfigIssue::SceneUrl(self.scene.url.clone()));
        }
        issues
    }

    /// Repairs whatever `validate` rejects: a bad scene URL turns the scene
    /// off, a bad email falls back to the default address.
    pub fn validated(mut self) -> Self {
        for issue in self.validate() {
            log::warn!("{}", SiteError::from(issue.clone()));
            match issue {
                ConfigIssue::ContactEmail(_) => {
                    self.contact_email = Self::default().contact_email;
                }
                ConfigIssue::SceneUrl(_) => {
                    self.scene.enabled = false;
                }
            }
        }
        self
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_embedded_config_parses_and_validates() {
        let config = SiteConfig::parse(EMBEDDED_CONFIG).expect("embedded config");
        assert!(config.validate().is_empty());
        assert_eq!(config.owner, "Ava Lane");
        assert_eq!(config.mailto(), "mailto:hello@example.com");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = SiteConfig::parse(r##"{ "owner": "Sam Reed" }"##).unwrap();
        assert_eq!(config.owner, "Sam Reed");
        assert_eq!(config.booking_url, "#");
        assert!(config.scene.enabled);
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        assert!(matches!(SiteConfig::parse("{ owner"), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_bad_scene_url_falls_back_to_backdrop() {
        let mut config = SiteConfig::default();
        config.scene.url = "http://example.com/scene.glb".to_string();
        assert_eq!(
            config.validate(),
            vec![ConfigIssue::SceneUrl("http://example.com/scene.glb".to_string())]
        );

        let config = config.validated();
        assert!(!config.scene.enabled);
        assert_eq!(config.scene.active_url(), None);
    }

    #[test]
    fn test_bad_email_reverts_to_default() {
        let mut config = SiteConfig::default();
        config.contact_email = "not-an-email".to_string();
        assert_eq!(config.validated().contact_email, "hello@example.com");
    }

    #[test]
    fn test_both_issues_repaired_in_one_pass() {
        let mut config = SiteConfig::default();
        config.contact_email = "ava at lane".to_string();
        config.scene.url = "https://prod.spline.design/scene.gltf".to_string();
        assert_eq!(config.validate().len(), 2);

        let config = config.validated();
        assert!(config.validate().is_empty());
        assert_eq!(config.contact_email, "hello@example.com");
        assert!(!config.scene.enabled);
    }

    #[test]
    fn test_disabled_scene_url_is_not_checked() {
        let mut config = SiteConfig::default();
        config.scene.enabled = false;
        config.scene.url = String::new();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_issue_becomes_config_error() {
        let err = SiteError::from(ConfigIssue::ContactEmail("nope".to_string()));
        assert_eq!(err.to_string(), "Config Error: contact_email 'nope' is not an address");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("PORTFOLIO_CONTACT_EMAIL", "ava@lane.studio"),
            ("PORTFOLIO_SCENE_ENABLED", "false"),
        ]);
        let config = SiteConfig::default()
            .with_env_overrides(|key| env.get(key).map(|v| v.to_string()))
            .validated();

        assert_eq!(config.contact_email, "ava@lane.studio");
        assert_eq!(config.scene.active_url(), None);
    }

    #[test]
    fn test_unparseable_scene_flag_is_ignored() {
        let config = SiteConfig::default().with_env_overrides(|key| {
            (key == "PORTFOLIO_SCENE_ENABLED").then(|| "maybe".to_string())
        });
        assert!(config.scene.enabled);
    }
}
