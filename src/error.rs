//! Error types for the sailing scene.
//!
//! Nothing in here is fatal to the frame loop: callers log the error and fall
//! back (compiled defaults for config, an inert entity for a failed model).

use std::fmt;

/// Top-level error enum.
#[derive(Debug, Clone, PartialEq)]
pub enum SailError {
    /// An asynchronous model load finished in the failed state.
    AssetLoadFailure {
        /// Asset path as passed to the loader.
        path: String,
        /// Loader-provided description of the failure.
        reason: String,
    },

    /// The config file exists but is not valid TOML for [`crate::config::SailConfig`].
    ConfigParse { path: String, reason: String },

    /// A configuration value is outside its safe operating range.
    UnsafeValue {
        /// Name of the config field (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for SailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SailError::AssetLoadFailure { path, reason } => {
                write!(f, "failed to load asset '{}': {}", path, reason)
            }
            SailError::ConfigParse { path, reason } => {
                write!(f, "failed to parse {}: {}", path, reason)
            }
            SailError::UnsafeValue {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "config value '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for SailError {}

/// Convenience alias: a `Result` using `SailError` as the error type.
pub type SailResult<T> = Result<T, SailError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_failure_message_names_the_path() {
        let err = SailError::AssetLoadFailure {
            path: "models/boat/scene.gltf".into(),
            reason: "file not found".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("models/boat/scene.gltf"), "got: {msg}");
        assert!(msg.contains("file not found"), "got: {msg}");
    }

    #[test]
    fn unsafe_value_message_includes_range() {
        let err = SailError::UnsafeValue {
            name: "collision_threshold",
            value: -1.0,
            safe_range: "(0.0, ∞)",
        };
        assert_eq!(
            err.to_string(),
            "config value 'collision_threshold' = -1 is outside safe range (0.0, ∞)"
        );
    }
}
