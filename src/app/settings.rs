use crate::app::types::SettingsEntry;
use crate::app::{App, AppMode, Navigable};
use crate::config::Config;

/// Plain settings page shown instead of the console skin
#[derive(Debug, Clone, Default)]
pub struct SettingsView {
    pub entries: Vec<SettingsEntry>,
    pub selected_index: usize,
    /// Why the console could not be shown, if it failed
    pub reason: Option<String>,
}

impl SettingsView {
    pub fn from_config(config: &Config, reason: Option<String>) -> Self {
        let config_path = Config::config_path()
            .map_or_else(|err| err.to_string(), |path| path.display().to_string());
        let items_file = config
            .library
            .items_file
            .as_ref()
            .map_or_else(|| "-".to_string(), |path| path.display().to_string());
        let bindings = config
            .bindings
            .iter()
            .map(|(key, control)| format!("{key}={control:?}"))
            .collect::<Vec<_>>()
            .join(" ");

        let entries = vec![
            SettingsEntry::new("config file", config_path),
            SettingsEntry::new("navigation.loop", config.navigation.wrap),
            SettingsEntry::new("screen.tile_width", config.screen.tile_width),
            SettingsEntry::new("screen.tile_height", config.screen.tile_height),
            SettingsEntry::new("screen.gap", config.screen.gap),
            SettingsEntry::new("background.enabled", config.background.enabled),
            SettingsEntry::new("background.sprites", config.background.sprites),
            SettingsEntry::new("library.items", config.library.items.len()),
            SettingsEntry::new("library.items_file", items_file),
            SettingsEntry::new("bindings", bindings),
        ];

        Self {
            entries,
            selected_index: 0,
            reason,
        }
    }
}

impl Navigable for SettingsView {
    fn get_item_count(&self) -> usize {
        self.entries.len()
    }

    fn get_selected_index(&self) -> usize {
        self.selected_index
    }

    fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }
}

impl App {
    /// Drops the console skin for the plain settings page
    pub fn enter_settings_mode(&mut self, reason: Option<String>) {
        if let Some(reason) = &reason {
            tracing::warn!(%reason, "falling back to settings mode");
        }
        self.settings = SettingsView::from_config(&self.config, reason);
        self.mode = AppMode::Settings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_reflect_config() {
        let mut config = Config::default();
        config.navigation.wrap = false;
        let view = SettingsView::from_config(&config, None);
        let entry = view
            .entries
            .iter()
            .find(|entry| entry.name == "navigation.loop")
            .unwrap();
        assert_eq!(entry.value, "false");
    }

    #[test]
    fn test_selection_wraps() {
        let mut view = SettingsView::from_config(&Config::default(), None);
        let count = view.entries.len();
        view.previous_item();
        assert_eq!(view.selected_index, count - 1);
        view.next_item();
        assert_eq!(view.selected_index, 0);
        assert_eq!(view.entries[view.selected_index].name, "config file");
    }
}
