//! Configuration: directory layout, `settings.conf`, and the preference store.

pub mod paths;
pub mod settings;
pub mod store;

pub use paths::{config_dir, logs_dir, settings_path, state_path};
pub use settings::{DEFAULT_SEARCH_TERM, Settings, load_settings};
pub use store::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, SEARCH_KEY, load_search_term,
};
