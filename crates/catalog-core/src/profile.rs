use crate::error::{Result, StoreError};
use crate::keys::StorageKeys;
use crate::notify::{messages, Notice, Notifier};
use crate::storage::{load_json, save_json, KeyValueStore, SharedStore};
use catalog_models::{SettingFlag, Settings, UserProfile, DATA_USAGE_MODES, LANGUAGES};
use tracing::{info, warn};

/// Account details. Falls back to the default profile when nothing usable
/// is stored.
pub struct ProfileStore {
    storage: SharedStore,
    key: String,
}

impl ProfileStore {
    pub fn new(storage: SharedStore, keys: &StorageKeys) -> Self {
        Self {
            storage,
            key: keys.profile.clone(),
        }
    }

    pub fn load(&self) -> UserProfile {
        load_json(self.storage.as_ref(), &self.key).unwrap_or_default()
    }

    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        save_json(self.storage.as_ref(), &self.key, profile)?;
        info!("Profile saved for {}", profile.name);
        Ok(())
    }

    /// Apply `edit` to the stored profile and save it.
    pub fn update<F>(&self, edit: F, notifier: &dyn Notifier) -> Result<UserProfile>
    where
        F: FnOnce(&mut UserProfile),
    {
        let mut profile = self.load();
        edit(&mut profile);
        self.save(&profile)?;
        notifier.notify(&Notice::success(messages::PROFILE_UPDATED));
        Ok(profile)
    }

    pub fn set_avatar(&self, uri: &str, notifier: &dyn Notifier) -> Result<UserProfile> {
        let mut profile = self.load();
        profile.avatar = uri.to_string();
        self.save(&profile)?;
        notifier.notify(&Notice::success(messages::AVATAR_UPDATED));
        Ok(profile)
    }
}

/// Playback and notification preferences. Falls back to defaults when
/// nothing usable is stored.
pub struct SettingsStore {
    storage: SharedStore,
    key: String,
}

impl SettingsStore {
    pub fn new(storage: SharedStore, keys: &StorageKeys) -> Self {
        Self {
            storage,
            key: keys.settings.clone(),
        }
    }

    pub fn load(&self) -> Settings {
        load_json(self.storage.as_ref(), &self.key).unwrap_or_default()
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        save_json(self.storage.as_ref(), &self.key, settings)
    }

    pub fn set_flag(&self, flag: SettingFlag, enabled: bool, notifier: &dyn Notifier) -> Result<Settings> {
        let mut settings = self.load();
        settings.set_flag(flag, enabled);
        self.save(&settings)?;
        info!("Setting {} = {}", flag, enabled);
        notifier.notify(&Notice::success(messages::setting_changed(flag.key(), enabled)));
        Ok(settings)
    }

    /// Set the interface language; must be one of [`LANGUAGES`].
    pub fn set_language(&self, language: &str, notifier: &dyn Notifier) -> Result<Settings> {
        let language = validate_choice("language", language, &LANGUAGES)?;
        let mut settings = self.load();
        settings.language = language.to_string();
        self.save(&settings)?;
        notifier.notify(&Notice::success(messages::setting_set("language", language)));
        Ok(settings)
    }

    /// Set the streaming data mode; must be one of [`DATA_USAGE_MODES`].
    pub fn set_data_usage(&self, mode: &str, notifier: &dyn Notifier) -> Result<Settings> {
        let mode = validate_choice("dataUsage", mode, &DATA_USAGE_MODES)?;
        let mut settings = self.load();
        settings.data_usage = mode.to_string();
        self.save(&settings)?;
        notifier.notify(&Notice::success(messages::setting_set("dataUsage", mode)));
        Ok(settings)
    }
}

fn validate_choice<'a>(field: &'static str, value: &'a str, allowed: &[&str]) -> Result<&'a str> {
    let value = value.trim();
    if allowed.contains(&value) {
        Ok(value)
    } else {
        Err(StoreError::InvalidValue {
            field,
            value: value.to_string(),
            allowed: allowed.join(", "),
        })
    }
}

/// Forget the account: removes the profile, settings and watchlist records.
/// Search history, My List and notification read state are left alone.
pub fn delete_account(storage: &dyn KeyValueStore, keys: &StorageKeys, notifier: &dyn Notifier) -> Result<()> {
    for key in [&keys.profile, &keys.settings, &keys.watchlist] {
        storage.remove(key)?;
    }
    warn!("Account data removed ({}, {}, {})", keys.profile, keys.settings, keys.watchlist);
    notifier.notify(&Notice::success(messages::ACCOUNT_DELETED));
    Ok(())
}
