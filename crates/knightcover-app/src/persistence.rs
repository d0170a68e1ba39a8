//! Saving and restoring app state through eframe storage.
//!
//! Only the board size and the settings are stored. The board itself is
//! rebuilt from the size at start-up, so a restored app always begins from a
//! freshly minimised cover.

use eframe::Storage;
use knightcover_core::BoardSize;
use serde::{Deserialize, Serialize};

use crate::state::{AppState, Settings};

const STATE_KEY: &str = "knightcover_state";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedState {
    rows: usize,
    cols: usize,
    #[serde(default)]
    settings: Settings,
}

impl From<&AppState> for PersistedState {
    fn from(app_state: &AppState) -> Self {
        let size = app_state.engine.size();
        Self {
            rows: size.rows(),
            cols: size.cols(),
            settings: app_state.settings.clone(),
        }
    }
}

impl PersistedState {
    fn into_app_state(self) -> Option<AppState> {
        match BoardSize::new(self.rows, self.cols) {
            Ok(size) => Some(AppState::new(size, self.settings)),
            Err(err) => {
                log::warn!("ignoring stored board size: {err}");
                None
            }
        }
    }
}

pub(crate) fn load_state(storage: &dyn Storage) -> Option<AppState> {
    let state: PersistedState = eframe::get_value(storage, STATE_KEY)?;
    log::debug!("restoring {}×{} board", state.rows, state.cols);
    state.into_app_state()
}

pub(crate) fn save_state(storage: &mut dyn Storage, app_state: &AppState) {
    eframe::set_value(storage, STATE_KEY, &PersistedState::from(app_state));
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::state::DemoMode;

    #[derive(Default)]
    struct MemoryStorage(HashMap<String, String>);

    impl Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn saved_state_restores_size_and_settings() {
        let mut settings = Settings::default();
        settings.demo.mode = DemoMode::UntilStable;
        settings.demo.probe_delay_ms = 40;
        let app_state = AppState::new(BoardSize::new(5, 7).unwrap(), settings.clone());

        let mut storage = MemoryStorage::default();
        save_state(&mut storage, &app_state);
        let restored = load_state(&storage).unwrap();

        assert_eq!(restored.engine, app_state.engine);
        assert_eq!(restored.settings, settings);
        assert_eq!(restored.size_input.rows, "5");
        assert_eq!(restored.size_input.cols, "7");
        assert!(!restored.is_dirty());
    }

    #[test]
    fn empty_storage_yields_nothing() {
        assert!(load_state(&MemoryStorage::default()).is_none());
    }

    #[test]
    fn zero_sized_board_is_ignored() {
        let state = PersistedState {
            rows: 0,
            cols: 3,
            settings: Settings::default(),
        };
        assert!(state.into_app_state().is_none());
    }
}
