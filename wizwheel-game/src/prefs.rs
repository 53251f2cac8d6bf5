//! Audio preference flags behind a flat key-value store capability.

use std::cell::RefCell;
use std::collections::BTreeMap;

pub const KEY_MASTER_VOLUME: &str = "wizwheel.master-volume";
pub const KEY_SFX_ENABLED: &str = "wizwheel.sfx-enabled";
pub const KEY_MUSIC_ENABLED: &str = "wizwheel.music-enabled";

/// Flat key-value persistence capability. The web shell backs this with
/// `localStorage`; tests use [`MemoryPrefs`].
pub trait PrefsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store for tests and headless contexts.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: RefCell<BTreeMap<String, String>>,
}

impl PrefsStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Mute/volume flags persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioPrefs {
    pub master_volume: f32,
    pub sfx_enabled: bool,
    pub music_enabled: bool,
}

impl Default for AudioPrefs {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_enabled: true,
            music_enabled: true,
        }
    }
}

impl AudioPrefs {
    /// Read preferences from a store, falling back to defaults for missing
    /// or unparseable entries.
    #[must_use]
    pub fn load(store: &dyn PrefsStore) -> Self {
        let defaults = Self::default();
        let master_volume = store
            .get(KEY_MASTER_VOLUME)
            .and_then(|v| v.parse::<f32>().ok())
            .map_or(defaults.master_volume, |v| v.clamp(0.0, 1.0));
        let sfx_enabled = store
            .get(KEY_SFX_ENABLED)
            .map_or(defaults.sfx_enabled, |v| v != "false");
        let music_enabled = store
            .get(KEY_MUSIC_ENABLED)
            .map_or(defaults.music_enabled, |v| v != "false");
        Self {
            master_volume,
            sfx_enabled,
            music_enabled,
        }
    }

    pub fn save(&self, store: &dyn PrefsStore) {
        store.set(KEY_MASTER_VOLUME, &self.master_volume.to_string());
        store.set(KEY_SFX_ENABLED, &self.sfx_enabled.to_string());
        store.set(KEY_MUSIC_ENABLED, &self.music_enabled.to_string());
    }

    /// Clamp the master volume into `[0, 1]`.
    #[must_use]
    pub fn with_master_volume(mut self, volume: f32) -> Self {
        self.master_volume = volume.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_store_is_empty() {
        let store = MemoryPrefs::default();
        let prefs = AudioPrefs::load(&store);
        assert_eq!(prefs, AudioPrefs::default());
    }

    #[test]
    fn prefs_round_trip_through_store() {
        let store = MemoryPrefs::default();
        let prefs = AudioPrefs {
            master_volume: 0.4,
            sfx_enabled: false,
            music_enabled: true,
        };
        prefs.save(&store);
        assert_eq!(AudioPrefs::load(&store), prefs);
    }

    #[test]
    fn corrupt_volume_falls_back_and_clamps() {
        let store = MemoryPrefs::default();
        store.set(KEY_MASTER_VOLUME, "loud");
        assert!((AudioPrefs::load(&store).master_volume - 1.0).abs() < f32::EPSILON);

        store.set(KEY_MASTER_VOLUME, "3.5");
        assert!((AudioPrefs::load(&store).master_volume - 1.0).abs() < f32::EPSILON);

        let clamped = AudioPrefs::default().with_master_volume(-0.2);
        assert!(clamped.master_volume.abs() < f32::EPSILON);
    }
}
