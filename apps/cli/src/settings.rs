//! Runtime settings
//!
//! Defaults come from [`JokesConfig`]; `JOKEBOX_*` variables (or a `.env`
//! file) override them. A `--data-dir` flag wins over the environment.

use jokes::{AppResult, ErrorKind, JokesConfig, OptionExt, ResultExt};
use std::env;
use std::path::PathBuf;

pub const DATA_DIR_VAR: &str = "JOKEBOX_DATA_DIR";
pub const RANDOM_URL_VAR: &str = "JOKEBOX_RANDOM_URL";
pub const PROGRAMMING_URL_VAR: &str = "JOKEBOX_PROGRAMMING_URL";
pub const PAGE_SIZE_VAR: &str = "JOKEBOX_PAGE_SIZE";

#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub jokes: JokesConfig,
}

impl Settings {
    pub fn load(data_dir_flag: Option<PathBuf>) -> AppResult<Self> {
        Self::from_lookup(data_dir_flag, |name| env::var(name).ok())
    }

    pub fn from_lookup(
        data_dir_flag: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> AppResult<Self> {
        let mut jokes = JokesConfig::default();

        if let Some(url) = lookup(RANDOM_URL_VAR) {
            jokes.random_endpoint = url;
        }
        if let Some(url) = lookup(PROGRAMMING_URL_VAR) {
            jokes.programming_endpoint = url;
        }
        if let Some(raw) = lookup(PAGE_SIZE_VAR) {
            let size: usize = raw.trim().parse().map_app_err(
                ErrorKind::InvalidInput,
                format!("{PAGE_SIZE_VAR} must be a positive integer, got {raw:?}"),
            )?;
            jokes.items_per_page = size.max(1);
        }

        let data_dir = match data_dir_flag {
            Some(dir) => dir,
            None => match lookup(DATA_DIR_VAR) {
                Some(dir) => PathBuf::from(dir),
                None => dirs::data_dir().map(|d| d.join("jokebox")).ok_or_app_err(
                    ErrorKind::StorageUnavailable,
                    format!("Could not determine a data directory; set {DATA_DIR_VAR}"),
                )?,
            },
        };

        tracing::debug!(data_dir = %data_dir.display(), "Settings loaded");

        Ok(Self { data_dir, jokes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let settings = Settings::from_lookup(
            None,
            lookup(&[
                (DATA_DIR_VAR, "/var/lib/jokebox"),
                (RANDOM_URL_VAR, "http://localhost:3005/jokes/random"),
                (PAGE_SIZE_VAR, " 10 "),
            ]),
        )
        .unwrap();

        assert_eq!(settings.data_dir, PathBuf::from("/var/lib/jokebox"));
        assert_eq!(
            settings.jokes.random_endpoint,
            "http://localhost:3005/jokes/random"
        );
        assert_eq!(
            settings.jokes.programming_endpoint,
            JokesConfig::default().programming_endpoint
        );
        assert_eq!(settings.jokes.items_per_page, 10);
    }

    #[test]
    fn test_flag_wins_over_env() {
        let settings = Settings::from_lookup(
            Some(PathBuf::from("/tmp/flag")),
            lookup(&[(DATA_DIR_VAR, "/tmp/env")]),
        )
        .unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/flag"));
    }

    #[test]
    fn test_bad_page_size() {
        let err = Settings::from_lookup(
            Some(PathBuf::from("/tmp")),
            lookup(&[(PAGE_SIZE_VAR, "lots")]),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.message().contains(PAGE_SIZE_VAR));
    }
}
