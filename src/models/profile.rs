//! Reader profile and preferences

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::Collection;

pub const THEMES: &[&str] = &["dark", "light", "sepia"];

fn default_translation() -> String {
    "ESV".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

fn validate_theme(theme: &str) -> Result<(), ValidationError> {
    if THEMES.contains(&theme) {
        Ok(())
    } else {
        let mut error = ValidationError::new("theme");
        error.message = Some("must be one of dark, light, sepia".into());
        Err(error)
    }
}

/// Reader profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UserProfile {
    /// Unique user identifier
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Default Bible translation
    #[serde(default = "default_translation")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub preferred_translation: String,
    /// Language code
    #[serde(default = "default_language")]
    #[validate(length(min = 2, max = 5, message = "Language code must be 2-5 characters"))]
    pub preferred_language: String,
    /// dark | light | sepia
    #[serde(default = "default_theme")]
    #[validate(custom(function = "validate_theme"))]
    pub theme: String,
    #[serde(default)]
    pub dyslexia_font: bool,
    #[serde(default)]
    pub streak_days: u32,
    /// Last day the user read (YYYY-MM-DD)
    #[serde(default)]
    pub last_read_date: Option<NaiveDate>,
}

impl Collection for UserProfile {
    const NAME: &'static str = "userprofile";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(value: serde_json::Value) -> UserProfile {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_defaults() {
        let p = profile(json!({ "user_id": "u1" }));
        assert_eq!(p.preferred_translation, "ESV");
        assert_eq!(p.preferred_language, "en");
        assert_eq!(p.theme, "dark");
        assert!(!p.dyslexia_font);
        assert_eq!(p.streak_days, 0);
        assert_eq!(p.last_read_date, None);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_theme_must_be_known() {
        let p = profile(json!({ "user_id": "u1", "theme": "neon" }));
        let errors = p.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("theme"));

        let p = profile(json!({ "user_id": "u1", "theme": "sepia" }));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_email_and_language() {
        let p = profile(json!({
            "user_id": "u1",
            "email": "not-an-email",
            "preferred_language": "e"
        }));
        let errors = p.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("preferred_language"));
    }

    #[test]
    fn test_last_read_date_is_iso() {
        let p = profile(json!({ "user_id": "u1", "last_read_date": "2024-03-01" }));
        assert_eq!(p.last_read_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["last_read_date"], "2024-03-01");
    }
}
