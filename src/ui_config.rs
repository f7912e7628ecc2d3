// src/ui_config.rs
use crate::error::UiError;
use serde::{Deserialize, Serialize};

/// Names of the page elements and labels the interaction handlers rely on.
/// Every field may be omitted from the JSON passed to `initPage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub overlay_id: String,
    pub overlay_image_id: String,
    pub chart_class: String,
    pub truncated_class: String,
    pub show_more_label: String,
    pub show_less_label: String,
    pub dismiss_on_escape: bool,
    pub global_entry_point: String,
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            overlay_id: String::from("fullscreen"),
            overlay_image_id: String::from("fullscreenImg"),
            chart_class: String::from("clickable-chart"),
            truncated_class: String::from("truncated"),
            show_more_label: String::from("Ver todos"),
            show_less_label: String::from("Ver menos"),
            dismiss_on_escape: true,
            global_entry_point: String::from("showMore"),
            log_level: String::from("info"),
        }
    }
}

impl UiConfig {
    pub fn from_json(json: &str) -> Result<Self, UiError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Selector for the thumbnails that open the fullscreen overlay.
    pub fn chart_image_selector(&self) -> String {
        format!(".{} img", self.chart_class)
    }

    /// Unknown level names fall back to `Info`.
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    pub fn with_labels(mut self, show_more: &str, show_less: &str) -> Self {
        self.show_more_label = show_more.to_string();
        self.show_less_label = show_less.to_string();
        self
    }

    pub fn with_dismiss_on_escape(mut self, enabled: bool) -> Self {
        self.dismiss_on_escape = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_markup() {
        let config = UiConfig::default();
        assert_eq!(config.overlay_id, "fullscreen");
        assert_eq!(config.overlay_image_id, "fullscreenImg");
        assert_eq!(config.truncated_class, "truncated");
        assert_eq!(config.chart_image_selector(), ".clickable-chart img");
        assert_eq!(config.show_more_label, "Ver todos");
        assert_eq!(config.show_less_label, "Ver menos");
        assert!(config.dismiss_on_escape);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(UiConfig::from_json("").unwrap(), UiConfig::default());
        assert_eq!(UiConfig::from_json("{}").unwrap(), UiConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            UiConfig::from_json(r#"{"show_more_label": "Show all", "chart_class": "chart"}"#)
                .unwrap();
        assert_eq!(config.show_more_label, "Show all");
        assert_eq!(config.chart_image_selector(), ".chart img");
        assert_eq!(config.show_less_label, "Ver menos");
        assert_eq!(config.overlay_id, "fullscreen");
    }

    #[test]
    fn test_malformed_json() {
        let result = UiConfig::from_json(r#"{"dismiss_on_escape": "yes"}"#);
        assert!(matches!(result, Err(UiError::Config(_))));
    }

    #[test]
    fn test_log_level() {
        let mut config = UiConfig::default();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level(), log::Level::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_builders() {
        let config = UiConfig::default()
            .with_labels("More", "Less")
            .with_dismiss_on_escape(false);
        assert_eq!(config.show_more_label, "More");
        assert_eq!(config.show_less_label, "Less");
        assert!(!config.dismiss_on_escape);
    }
}
