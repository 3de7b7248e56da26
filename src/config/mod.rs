// src/config/mod.rs

//! Configuration loading and resolution for watchrun.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Merge file values with CLI flags into effective settings (`settings.rs`).
//! - Validate basic invariants like a non-empty command (`validate.rs`).

pub mod loader;
pub mod model;
pub mod settings;
pub mod validate;

pub use loader::{DEFAULT_CONFIG_FILE, load_from_path, load_or_default};
pub use model::{CommandSection, ConfigFile, WatchSection};
pub use settings::Settings;
pub use validate::validate_settings;
