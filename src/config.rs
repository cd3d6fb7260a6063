use std::{fs, io, path::{Path, PathBuf}};

use anyhow::Context;
use colored::Colorize;
use serde::Deserialize;

pub const DEFAULT_OUTPUT: &str = "src/version.h";
pub const DEFAULT_REPO: &str = ".";

#[derive(Deserialize, Default, Debug, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub output: Option<PathBuf>,
    pub repo: Option<PathBuf>,
}

/// Where the header goes and which checkout it describes.
#[derive(Debug, PartialEq)]
pub struct Settings {
    pub output: PathBuf,
    pub repo: PathBuf,
}

impl Config {
    /// Flag values win over the file, the file wins over the defaults.
    pub fn settings(self, output: Option<PathBuf>, repo: Option<PathBuf>) -> Settings {
        Settings {
            output: output
                .or(self.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            repo: repo
                .or(self.repo)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_REPO)),
        }
    }
}

/// Reads `file`, treating a missing file as an empty config.
pub fn read(file: &Path) -> anyhow::Result<Config> {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file: {}", file.display()));
        }
    };

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("failed to parse config from {}", file.display()))?;

    Ok(config)
}

/// Like [`read`], but a broken config never stops the header from being
/// written: the problem is reported and the defaults are used.
pub fn load(file: &Path) -> Config {
    read(file).unwrap_or_else(|err| {
        eprintln!("{}", format!("warning: {:#}, using defaults", err).yellow());
        Config::default()
    })
}
