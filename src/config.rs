// config.rs

use crate::history::DEFAULT_CAPACITY;
use log::warn;
use std::env;

pub const HISTSIZE_VAR: &str = "XSHELL_HISTSIZE";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub history_capacity: usize,
    pub color: bool,
    /// Elevation wrapper used by `installFile`.
    pub sudo_path: String,
    pub install_path: String,
    pub install_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_CAPACITY,
            color: true,
            sudo_path: "/usr/bin/sudo".to_string(),
            install_path: "/usr/bin/install".to_string(),
            install_dir: "/usr/local/bin/".to_string(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `XSHELL_HISTSIZE` and `NO_COLOR`.
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var(HISTSIZE_VAR).ok().as_deref(),
            env::var_os("NO_COLOR").is_some(),
        )
    }

    fn from_vars(histsize: Option<&str>, no_color: bool) -> Self {
        let mut config = Self::default();
        if let Some(raw) = histsize {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.history_capacity = n,
                _ => warn!("ignoring {HISTSIZE_VAR}={raw:?}: expected a positive integer"),
            }
        }
        config.color = !no_color;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_install_layout() {
        let config = Config::default();
        assert_eq!(config.history_capacity, 100);
        assert_eq!(config.sudo_path, "/usr/bin/sudo");
        assert_eq!(config.install_path, "/usr/bin/install");
        assert_eq!(config.install_dir, "/usr/local/bin/");
    }

    #[test]
    fn histsize_overrides_capacity() {
        assert_eq!(Config::from_vars(Some("25"), false).history_capacity, 25);
        assert_eq!(Config::from_vars(Some(" 7 "), false).history_capacity, 7);
    }

    #[test]
    fn bad_histsize_keeps_default() {
        assert_eq!(Config::from_vars(Some("0"), false).history_capacity, 100);
        assert_eq!(Config::from_vars(Some("lots"), false).history_capacity, 100);
        assert_eq!(Config::from_vars(Some("-3"), false).history_capacity, 100);
    }

    #[test]
    fn no_color_disables_colour() {
        assert!(Config::from_vars(None, false).color);
        assert!(!Config::from_vars(None, true).color);
    }
}
