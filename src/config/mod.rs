//! Configuration module for Finsight
//!
//! XDG-compliant path resolution and persisted display settings.

pub mod paths;
pub mod settings;

pub use paths::FinsightPaths;
pub use settings::Settings;
