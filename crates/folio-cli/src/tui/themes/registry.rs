//! Theme registry for discovering and accessing themes

use super::{Theme, DEFAULT_THEME};
use std::collections::HashMap;

/// Registry of all available themes
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    ordered_names: Vec<String>,
    fallback: Theme,
}

impl ThemeRegistry {
    /// Create a new registry with all built-in themes
    pub fn new() -> Self {
        use super::definitions::*;

        let mut registry = Self {
            themes: HashMap::new(),
            ordered_names: Vec::new(),
            fallback: midnight(),
        };

        registry.register(midnight());
        registry.register(paper());
        registry.register(terminal());

        registry
    }

    fn register(&mut self, theme: Theme) {
        self.ordered_names.push(theme.name.clone());
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Get a theme by name, or the default theme
    pub fn get_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or(&self.fallback)
    }

    /// List all themes in registration order
    pub fn list(&self) -> Vec<(&String, &Theme)> {
        self.ordered_names
            .iter()
            .filter_map(|name| self.themes.get(name).map(|theme| (name, theme)))
            .collect()
    }

    /// Get the number of registered themes
    pub fn count(&self) -> usize {
        self.themes.len()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back() {
        let registry = ThemeRegistry::new();
        assert_eq!(registry.get_or_default("nope").name, DEFAULT_THEME);
        assert_eq!(registry.get_or_default("paper").name, "paper");
    }

    #[test]
    fn test_list_keeps_registration_order() {
        let registry = ThemeRegistry::new();
        let names: Vec<_> = registry.list().into_iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["midnight", "paper", "terminal"]);
        assert_eq!(registry.count(), 3);
    }
}
