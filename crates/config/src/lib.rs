// Settings persistence for the grid generator.

pub mod settings;

pub use settings::{SettingsRecord, SettingsStore};
