use std::path::PathBuf;

use docdash_client::AtomicFileWriter;
use docdash_logging::{dash_error, dash_info, dash_warn};
use serde::{Deserialize, Serialize};

const PREFERENCES_FILENAME: &str = "preferences.ron";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct PersistedPreferences {
    #[serde(default)]
    dark_mode: bool,
}

/// Saved UI preferences under the state directory.
pub(crate) struct PreferenceStore {
    writer: AtomicFileWriter,
}

impl PreferenceStore {
    pub(crate) fn new(state_dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(state_dir),
        }
    }

    /// Missing, unreadable or corrupt files all fall back to the light theme.
    pub(crate) fn load_dark_mode(&self) -> bool {
        let content = match self.writer.read(PREFERENCES_FILENAME) {
            Ok(Some(text)) => text,
            Ok(None) => return false,
            Err(err) => {
                dash_warn!(
                    "Failed to read preferences from {:?}: {}",
                    self.writer.dir(),
                    err
                );
                return false;
            }
        };

        match ron::from_str::<PersistedPreferences>(&content) {
            Ok(prefs) => {
                dash_info!("Loaded preferences dark_mode={}", prefs.dark_mode);
                prefs.dark_mode
            }
            Err(err) => {
                dash_warn!("Ignoring corrupt preferences file: {}", err);
                false
            }
        }
    }

    pub(crate) fn save_dark_mode(&self, dark_mode: bool) {
        let prefs = PersistedPreferences { dark_mode };
        let content = match ron::ser::to_string_pretty(&prefs, ron::ser::PrettyConfig::new()) {
            Ok(text) => text,
            Err(err) => {
                dash_error!("Failed to serialize preferences: {}", err);
                return;
            }
        };

        if let Err(err) = self.writer.write(PREFERENCES_FILENAME, &content) {
            dash_error!(
                "Failed to write preferences to {:?}: {}",
                self.writer.dir(),
                err
            );
        }
    }
}
