//! Config and data file locations
//!
//! Resolves where the config file lives and where relative paths inside it
//! point to.

use std::path::{Path, PathBuf};

use tracing::warn;

use super::config::CONFIG_FILE;

/// Environment variable for config path configuration
pub const CONFIG_PATH_ENV: &str = "TAGLENS_CONFIG";

/// Config path from explicit argument, environment variable or working directory.
/// Priority: explicit > TAGLENS_CONFIG > ./taglens.json
pub fn get_config_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let config_path = PathBuf::from(&path);
        if config_path.exists() {
            return config_path;
        }
        warn!(
            "{} is set to '{}' but path does not exist. Falling back to {}.",
            CONFIG_PATH_ENV, path, CONFIG_FILE
        );
    }
    PathBuf::from(CONFIG_FILE)
}

/// Resolve a path from the config file relative to the config's directory
pub fn resolve_relative(config_path: &Path, target: &str) -> PathBuf {
    let target = PathBuf::from(target);
    if target.is_absolute() {
        return target;
    }
    match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(target),
        _ => target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = get_config_path(Some(Path::new("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve_relative(Path::new("conf/taglens.json"), "updated_tags.txt"),
            PathBuf::from("conf/updated_tags.txt")
        );
        assert_eq!(
            resolve_relative(Path::new("taglens.json"), "updated_tags.txt"),
            PathBuf::from("updated_tags.txt")
        );
        assert_eq!(
            resolve_relative(Path::new("conf/taglens.json"), "/abs/tags.txt"),
            PathBuf::from("/abs/tags.txt")
        );
    }
}
