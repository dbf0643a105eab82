use std::fs::File;
use std::path::Path;

use anyhow::Result;
use serde_yaml_ng::{from_reader, Value};

use crate::common::tilde;
use crate::common::{DEFAULT_EXCLUDED, DEFAULT_OPENER};
use crate::io::Args;
use crate::log_info;

/// Holds every configurable aspect of the application.
/// All attributes are hardcoded then updated from optional values
/// of the config file.
/// The config file is a YAML file in `~/.config/ffilter/config.yaml`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Enumerate hidden files too.
    pub hidden: bool,
    /// Follow symbolic links while enumerating.
    pub follow_links: bool,
    /// Maximum depth of the enumeration. `None` for no limit.
    pub max_depth: Option<usize>,
    /// Names of files and folders which are never enumerated.
    pub excluded: Vec<String>,
    /// Program used to open a file.
    pub opener: String,
}

impl Default for Config {
    /// Returns a default config with hardcoded values.
    fn default() -> Self {
        Self {
            hidden: true,
            follow_links: false,
            max_depth: None,
            excluded: DEFAULT_EXCLUDED.iter().map(|s| (*s).to_owned()).collect(),
            opener: DEFAULT_OPENER.to_owned(),
        }
    }
}

impl Config {
    /// Updates the config from a configuration content.
    /// Missing or badly typed keys are ignored.
    fn update_from_config(&mut self, yaml: &Value) {
        if let Some(hidden) = yaml["hidden"].as_bool() {
            self.hidden = hidden;
        }
        if let Some(follow_links) = yaml["follow_links"].as_bool() {
            self.follow_links = follow_links;
        }
        if let Some(max_depth) = yaml["max_depth"].as_u64() {
            self.max_depth = usize::try_from(max_depth).ok();
        }
        self.update_excluded(&yaml["excluded"]);
        if let Some(opener) = read_yaml_value(yaml, "opener") {
            self.opener = opener;
        }
    }

    fn update_excluded(&mut self, yaml: &Value) {
        let Some(excluded) = yaml.as_sequence() else {
            return;
        };
        self.excluded = excluded
            .iter()
            .filter_map(|name| name.as_str())
            .map(|name| name.to_owned())
            .collect();
        log_info!("excluded names: {excluded:?}", excluded = self.excluded);
    }

    /// Command line flags have the last word.
    pub fn update_from_args(&mut self, args: &Args) {
        if args.all {
            self.hidden = true;
        }
    }

    /// Read a config from a YAML content.
    /// A content which can't be parsed gives the default config.
    pub fn from_yaml_str(content: &str) -> Self {
        let mut config = Self::default();
        if let Ok(yaml) = serde_yaml_ng::from_str::<Value>(content) {
            config.update_from_config(&yaml);
        }
        config
    }
}

fn read_yaml_value(yaml: &Value, key: &str) -> Option<String> {
    yaml[key].as_str().map(|s| s.to_string())
}

/// Returns a config with values from :
///
/// 1. hardcoded values
///
/// 2. configured values from `path` if this file exists.
///
/// If the config file is missing or poorly formated it's simply ignored.
///
/// # Errors
///
/// Fails if the config file exists but can't be opened.
pub fn load_config(path: &str) -> Result<Config> {
    let mut config = Config::default();
    let expanded = tilde(path).into_owned();
    let path = Path::new(&expanded);
    if !path.exists() {
        log_info!("no config file at {path}, using defaults", path = path.display());
        return Ok(config);
    }
    let file = File::open(path)?;
    let Ok(yaml) = from_reader::<_, Value>(file) else {
        log_info!("couldn't parse {path}, using defaults", path = path.display());
        return Ok(config);
    };
    config.update_from_config(&yaml);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_content_gives_defaults() {
        assert_eq!(Config::from_yaml_str(""), Config::default());
        assert_eq!(Config::from_yaml_str(": : :"), Config::default());
    }

    #[test]
    fn configured_values_replace_defaults() {
        let config = Config::from_yaml_str(
            "hidden: false\nfollow_links: true\nmax_depth: 3\nexcluded:\n  - dist\n  - .cache\nopener: code\n",
        );
        assert_eq!(
            config,
            Config {
                hidden: false,
                follow_links: true,
                max_depth: Some(3),
                excluded: vec!["dist".to_owned(), ".cache".to_owned()],
                opener: "code".to_owned(),
            }
        );
    }

    #[test]
    fn badly_typed_keys_are_ignored() {
        let config = Config::from_yaml_str("hidden: maybe\nexcluded: nope\n");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let config = load_config(path.to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "opener: nvim").unwrap();
        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.opener, "nvim");
        assert!(config.hidden);
    }
}
