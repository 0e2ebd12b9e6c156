use std::env;
use std::path::PathBuf;

/// Location of the dpkg status database on Debian-family systems.
pub const DEFAULT_STATUS_PATH: &str = "/var/lib/dpkg/status";

/// Environment variable overriding [`Config::status_path`].
pub const STATUS_PATH_ENV: &str = "DPKG_STATUS_FILE";

/// Where to load the status file from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the status file.
    pub status_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            status_path: PathBuf::from(DEFAULT_STATUS_PATH),
        }
    }
}

impl Config {
    /// Default configuration, with the path taken from `DPKG_STATUS_FILE`
    /// when it is set and not empty.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(STATUS_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => Config {
                status_path: PathBuf::from(path),
            },
            _ => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path() {
        assert_eq!(
            Config::default().status_path,
            PathBuf::from("/var/lib/dpkg/status")
        );
    }

    #[test]
    fn override_path() {
        let config = Config::from_lookup(|_| Some("./status.real".to_string()));
        assert_eq!(config.status_path, PathBuf::from("./status.real"));
    }

    #[test]
    fn empty_override_ignored() {
        let config = Config::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, Config::default());
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }
}
