//! # User Preferences
//!
//! Theme, autoplay, sound, animations and language. Each field lives under
//! its own storage key and is read and written independently.

use serde::{Deserialize, Serialize};

use crate::core::storage::{KeyValueStore, keys, load_json, save_json};

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub auto_play: bool,
    pub sound_enabled: bool,
    pub animations_enabled: bool,
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            auto_play: true,
            sound_enabled: true,
            animations_enabled: true,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// One persisted preference field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    Theme,
    AutoPlay,
    Sound,
    Animations,
    Language,
}

impl PreferenceKey {
    pub fn storage_key(&self) -> &'static str {
        match self {
            PreferenceKey::Theme => keys::THEME,
            PreferenceKey::AutoPlay => keys::AUTOPLAY,
            PreferenceKey::Sound => keys::SOUND,
            PreferenceKey::Animations => keys::ANIMATIONS,
            PreferenceKey::Language => keys::LANGUAGE,
        }
    }
}

/// Partial update. Only `Some` fields are applied and persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferencesPatch {
    pub theme: Option<Theme>,
    pub auto_play: Option<bool>,
    pub sound_enabled: Option<bool>,
    pub animations_enabled: Option<bool>,
    pub language: Option<String>,
}

impl PreferencesPatch {
    pub fn theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            ..Default::default()
        }
    }

    pub fn auto_play(enabled: bool) -> Self {
        Self {
            auto_play: Some(enabled),
            ..Default::default()
        }
    }
}

impl Preferences {
    /// Reads every key independently; each missing or malformed key keeps its default.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let defaults = Self::default();
        Self {
            theme: load_json(store, keys::THEME).unwrap_or(defaults.theme),
            auto_play: load_json(store, keys::AUTOPLAY).unwrap_or(defaults.auto_play),
            sound_enabled: load_json(store, keys::SOUND).unwrap_or(defaults.sound_enabled),
            animations_enabled: load_json(store, keys::ANIMATIONS)
                .unwrap_or(defaults.animations_enabled),
            language: load_json(store, keys::LANGUAGE).unwrap_or(defaults.language),
        }
    }

    /// Shallow-merges `patch`, returning the keys it touched in field order.
    pub fn apply(&mut self, patch: PreferencesPatch) -> Vec<PreferenceKey> {
        let mut touched = Vec::new();
        if let Some(theme) = patch.theme {
            self.theme = theme;
            touched.push(PreferenceKey::Theme);
        }
        if let Some(auto_play) = patch.auto_play {
            self.auto_play = auto_play;
            touched.push(PreferenceKey::AutoPlay);
        }
        if let Some(sound) = patch.sound_enabled {
            self.sound_enabled = sound;
            touched.push(PreferenceKey::Sound);
        }
        if let Some(animations) = patch.animations_enabled {
            self.animations_enabled = animations;
            touched.push(PreferenceKey::Animations);
        }
        if let Some(language) = patch.language {
            self.language = language;
            touched.push(PreferenceKey::Language);
        }
        touched
    }

    /// Writes a single key. Failure is logged by the storage layer.
    pub fn save_key(&self, store: &mut dyn KeyValueStore, key: PreferenceKey) -> bool {
        let storage_key = key.storage_key();
        match key {
            PreferenceKey::Theme => save_json(store, storage_key, &self.theme),
            PreferenceKey::AutoPlay => save_json(store, storage_key, &self.auto_play),
            PreferenceKey::Sound => save_json(store, storage_key, &self.sound_enabled),
            PreferenceKey::Animations => save_json(store, storage_key, &self.animations_enabled),
            PreferenceKey::Language => save_json(store, storage_key, &self.language),
        }
    }
}
