use crate::preferences::{KeyValueStore, PreferenceError};

pub const THEME_KEY: &str = "my-world-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unknown values read as light.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The persisted light/dark choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    current: Theme,
}

impl ThemePreference {
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let current = store
            .get(THEME_KEY)
            .map(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self { current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and writes it back before returning. The in-memory
    /// value changes even if the write fails.
    pub fn toggle(&mut self, store: &mut dyn KeyValueStore) -> Result<Theme, PreferenceError> {
        self.current = self.current.flipped();
        store.set(THEME_KEY, self.current.as_str())?;
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::MemoryStore;

    #[test]
    fn defaults_to_light() {
        let store = MemoryStore::default();
        assert_eq!(ThemePreference::load(&store).current(), Theme::Light);
    }

    #[test]
    fn unknown_stored_value_reads_as_light() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "sepia").expect("set");
        assert_eq!(ThemePreference::load(&store).current(), Theme::Light);
    }

    #[test]
    fn single_toggle_from_light_persists_dark() {
        let mut store = MemoryStore::default();
        let mut pref = ThemePreference::load(&store);
        assert_eq!(pref.toggle(&mut store).expect("toggle"), Theme::Dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn double_toggle_restores_persisted_value() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "dark").expect("set");
        let mut pref = ThemePreference::load(&store);
        assert_eq!(pref.current(), Theme::Dark);

        pref.toggle(&mut store).expect("toggle");
        pref.toggle(&mut store).expect("toggle");
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(ThemePreference::load(&store).current(), Theme::Dark);
    }
}
