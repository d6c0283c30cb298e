use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account details shown on the profile page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub member_since: String,
    #[serde(default)]
    pub subscription: String,
    #[serde(default)]
    pub watch_time: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@email.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            location: "New York, NY".to_string(),
            bio: "Movie enthusiast and binge-watching expert. Love discovering new content and sharing recommendations.".to_string(),
            avatar: String::new(),
            member_since: "2023".to_string(),
            subscription: "Premium".to_string(),
            watch_time: "2,450 hours".to_string(),
        }
    }
}

pub const LANGUAGES: [&str; 4] = ["en", "es", "fr", "de"];
pub const DATA_USAGE_MODES: [&str; 3] = ["auto", "wifi", "low"];

/// Playback and notification preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub autoplay: bool,
    pub high_quality: bool,
    pub parental_controls: bool,
    pub data_usage: String,
    pub language: String,
    pub subtitles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: false,
            autoplay: true,
            high_quality: true,
            parental_controls: false,
            data_usage: "auto".to_string(),
            language: "en".to_string(),
            subtitles: true,
        }
    }
}

impl Settings {
    pub fn flag(&self, flag: SettingFlag) -> bool {
        match flag {
            SettingFlag::EmailNotifications => self.email_notifications,
            SettingFlag::PushNotifications => self.push_notifications,
            SettingFlag::Autoplay => self.autoplay,
            SettingFlag::HighQuality => self.high_quality,
            SettingFlag::ParentalControls => self.parental_controls,
            SettingFlag::Subtitles => self.subtitles,
        }
    }

    pub fn set_flag(&mut self, flag: SettingFlag, enabled: bool) {
        let slot = match flag {
            SettingFlag::EmailNotifications => &mut self.email_notifications,
            SettingFlag::PushNotifications => &mut self.push_notifications,
            SettingFlag::Autoplay => &mut self.autoplay,
            SettingFlag::HighQuality => &mut self.high_quality,
            SettingFlag::ParentalControls => &mut self.parental_controls,
            SettingFlag::Subtitles => &mut self.subtitles,
        };
        *slot = enabled;
    }
}

/// The on/off switches in [`Settings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingFlag {
    EmailNotifications,
    PushNotifications,
    Autoplay,
    HighQuality,
    ParentalControls,
    Subtitles,
}

impl SettingFlag {
    pub const ALL: [SettingFlag; 6] = [
        SettingFlag::EmailNotifications,
        SettingFlag::PushNotifications,
        SettingFlag::Autoplay,
        SettingFlag::HighQuality,
        SettingFlag::ParentalControls,
        SettingFlag::Subtitles,
    ];

    /// Stored (camelCase) name, also used in notices.
    pub fn key(&self) -> &'static str {
        match self {
            SettingFlag::EmailNotifications => "emailNotifications",
            SettingFlag::PushNotifications => "pushNotifications",
            SettingFlag::Autoplay => "autoplay",
            SettingFlag::HighQuality => "highQuality",
            SettingFlag::ParentalControls => "parentalControls",
            SettingFlag::Subtitles => "subtitles",
        }
    }
}

impl fmt::Display for SettingFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SettingFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        SettingFlag::ALL
            .iter()
            .copied()
            .find(|flag| flag.key().to_lowercase() == normalized)
            .ok_or_else(|| format!("Unknown setting: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"autoplay": false}"#).unwrap();
        assert!(!settings.autoplay);
        assert!(settings.email_notifications);
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn test_setting_flag_parse_variants() {
        assert_eq!("autoplay".parse::<SettingFlag>().unwrap(), SettingFlag::Autoplay);
        assert_eq!("high-quality".parse::<SettingFlag>().unwrap(), SettingFlag::HighQuality);
        assert_eq!("pushNotifications".parse::<SettingFlag>().unwrap(), SettingFlag::PushNotifications);
        assert_eq!("parental_controls".parse::<SettingFlag>().unwrap(), SettingFlag::ParentalControls);
        assert!("darkMode".parse::<SettingFlag>().is_err());
    }

    #[test]
    fn test_set_flag() {
        let mut settings = Settings::default();
        settings.set_flag(SettingFlag::PushNotifications, true);
        assert!(settings.flag(SettingFlag::PushNotifications));
        settings.set_flag(SettingFlag::Subtitles, false);
        assert!(!settings.subtitles);
    }

    #[test]
    fn test_profile_camel_case_fields() {
        let json = serde_json::to_value(UserProfile::default()).unwrap();
        assert_eq!(json["memberSince"], "2023");
        assert_eq!(json["watchTime"], "2,450 hours");
    }
}
