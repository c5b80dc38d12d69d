use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const DEFAULT_INPUT: &str = "/var/services/homes/usernametooshort/.gemini/antigravity/brain/e3616178-80aa-4210-924c-8c9e43ad1af6/system_introduction.md";
const DEFAULT_OUTPUT: &str = "/var/services/homes/usernametooshort/.gemini/antigravity/brain/e3616178-80aa-4210-924c-8c9e43ad1af6/system_introduction.html";
const DEFAULT_TITLE: &str = "系统介绍 (v1.0)";
const DEFAULT_LANG: &str = "zh-CN";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub document: DocumentConfig,
    pub extensions: ExtensionsConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Values placed in the document `<head>`. Inserted verbatim.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocumentConfig {
    pub title: String,
    pub lang: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtensionsConfig {
    pub tables: bool,
    pub fenced_code: bool,
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            tables: true,
            fenced_code: true,
        }
    }
}

impl Config {
    /// Load config from a TOML file. Fields the file leaves out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}
