//! Light/dark theme flag kept in the settings store.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{SettingsStore, StoreError};

/// Namespace holding the theme flag.
pub const THEME_NAMESPACE: &str = "SETTINGS";

/// Key of the night-mode flag.
pub const NIGHT_MODE_KEY: &str = "MODE_NIGHT_ON";

/// Colour theme of the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
pub enum Theme {
    /// Light theme (night mode off).
    #[default]
    #[display("light")]
    Light,
    /// Dark theme (night mode on).
    #[display("dark")]
    Dark,
}

impl Theme {
    /// Maps the stored night-mode flag to a theme.
    pub fn from_night_mode(on: bool) -> Self {
        if on { Self::Dark } else { Self::Light }
    }

    /// Whether night mode is on.
    pub fn is_night(self) -> bool {
        self == Self::Dark
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph for the toggle control: the theme a press switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    /// Notification shown after switching to this theme.
    pub fn switched_message(self) -> &'static str {
        match self {
            Self::Light => "Dark theme disabled",
            Self::Dark => "Dark theme enabled",
        }
    }
}

/// Access to the persisted theme flag.
pub trait ThemeStore {
    /// Current theme; light when never written.
    fn theme(&self) -> Theme;

    /// Writes the light-theme default if the flag was never written,
    /// then returns the current theme.
    fn init_theme(&mut self) -> Result<Theme, StoreError>;

    /// Flips the flag and returns the new theme.
    fn toggle_theme(&mut self) -> Result<Theme, StoreError>;
}

impl<S: SettingsStore + ?Sized> ThemeStore for S {
    fn theme(&self) -> Theme {
        Theme::from_night_mode(self.get_bool(THEME_NAMESPACE, NIGHT_MODE_KEY, false))
    }

    #[instrument(skip(self))]
    fn init_theme(&mut self) -> Result<Theme, StoreError> {
        if !self.contains(THEME_NAMESPACE, NIGHT_MODE_KEY)? {
            info!("First run, writing default theme");
            self.set_bool(THEME_NAMESPACE, NIGHT_MODE_KEY, false)?;
        }
        let theme = self.theme();
        debug!(%theme, "Theme initialised");
        Ok(theme)
    }

    #[instrument(skip(self))]
    fn toggle_theme(&mut self) -> Result<Theme, StoreError> {
        let next = self.theme().toggled();
        self.set_bool(THEME_NAMESPACE, NIGHT_MODE_KEY, next.is_night())?;
        info!(theme = %next, "Theme toggled");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemoryStore;

    #[test]
    fn test_first_run_writes_light_default() {
        let mut store = MemoryStore::new();
        assert!(!store.contains(THEME_NAMESPACE, NIGHT_MODE_KEY).unwrap());

        assert_eq!(store.init_theme().unwrap(), Theme::Light);
        assert_eq!(
            store.get(THEME_NAMESPACE, NIGHT_MODE_KEY).unwrap().as_deref(),
            Some("false")
        );
    }

    #[test]
    fn test_init_keeps_existing_value() {
        let mut store = MemoryStore::new();
        store.set_bool(THEME_NAMESPACE, NIGHT_MODE_KEY, true).unwrap();
        assert_eq!(store.init_theme().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);
        assert!(store.get_bool(THEME_NAMESPACE, NIGHT_MODE_KEY, false));
        assert_eq!(store.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_messages_and_icons() {
        assert_eq!(Theme::Dark.switched_message(), "Dark theme enabled");
        assert_eq!(Theme::Light.toggle_icon(), "☾");
    }
}
