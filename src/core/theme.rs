//! Light/dark theme state
//!
//! Provides:
//! - ThemeMode enum (Light, Dark)
//! - Resolution from the persisted value and the system preference
//! - ThemeController applying the mode to the document and persisting toggles

use derive_more::Display;

use super::config::ThemeConfig;
use super::dom::{ClassList, PreferenceStore, ThemeRoot};

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display)]
pub enum ThemeMode {
    #[default]
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Read a persisted choice. Any non-empty value other than "dark" reads as light.
    pub fn from_stored(s: &str) -> Option<Self> {
        match s {
            "" => None,
            "dark" => Some(ThemeMode::Dark),
            _ => Some(ThemeMode::Light),
        }
    }

    /// Stored choice wins; otherwise follow the system preference.
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        match stored.and_then(ThemeMode::from_stored) {
            Some(mode) => mode,
            None if system_prefers_dark => ThemeMode::Dark,
            None => ThemeMode::Light,
        }
    }
}

/// Owns the effective theme and every place it is reflected
pub struct ThemeController<S, R, I> {
    config: ThemeConfig,
    mode: ThemeMode,
    store: S,
    root: R,
    icon: Option<I>,
}

impl<S, R, I> ThemeController<S, R, I>
where
    S: PreferenceStore,
    R: ThemeRoot,
    I: ClassList,
{
    pub fn new(config: ThemeConfig, store: S, root: R, icon: Option<I>) -> Self {
        Self {
            config,
            mode: ThemeMode::default(),
            store,
            root,
            icon,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    fn persisted(&self) -> Option<ThemeMode> {
        self.store
            .get(&self.config.storage_key)
            .as_deref()
            .and_then(ThemeMode::from_stored)
    }

    /// Resolve the initial theme and apply it. Nothing is persisted.
    pub fn load(&mut self, system_prefers_dark: bool) -> ThemeMode {
        let stored = self.store.get(&self.config.storage_key);
        self.mode = ThemeMode::resolve(stored.as_deref(), system_prefers_dark);
        self.apply();
        self.mode
    }

    /// Reflect the current mode on the root attribute, root class and icon.
    pub fn apply(&self) {
        let dark = self.mode.is_dark();
        self.root
            .set_attribute(&self.config.attribute, self.mode.as_str());
        self.root.set(&self.config.dark_class, dark);

        if let Some(icon) = &self.icon {
            icon.set(&self.config.dark_icon_class, dark);
            icon.set(&self.config.light_icon_class, !dark);
        }
    }

    /// Flip the theme, apply it and persist the new choice.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.apply();
        self.store.set(&self.config.storage_key, self.mode.as_str());
        self.mode
    }

    /// Follow a live system preference change unless the visitor chose a theme.
    pub fn system_preference_changed(&mut self, prefers_dark: bool) -> ThemeMode {
        if self.persisted().is_none() {
            self.mode = ThemeMode::resolve(None, prefers_dark);
            self.apply();
        }
        self.mode
    }
}
