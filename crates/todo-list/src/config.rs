use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use todo_list_core::TodoList;
use tracing::debug;

const CONFIG_DIR: &str = ".todo";
const CONFIG_FILE: &str = "config.toml";

/// Title of the built-in sample list.
pub const SAMPLE_TITLE: &str = "Today's Todos";

/// Titles of the built-in sample list.
pub const SAMPLE_ITEMS: [&str; 6] = [
    "Buy milk",
    "Clean room",
    "Go to the gym",
    "Go shopping",
    "Feed the cats",
    "Study for Launch School",
];

/// Top-level configuration loaded from `.todo/config.toml`.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    #[serde(default)]
    pub list: ListConfig,
}

impl ProjectConfig {
    /// Load configuration from `explicit` when given, otherwise from
    /// `.todo/config.toml` under `workdir`, falling back to defaults.
    pub fn load(explicit: Option<&Path>, workdir: impl AsRef<Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }
        let config_path = default_path(workdir);
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using sample list");
            return Ok(Self::default());
        }
        Self::from_path(&config_path)
    }

    /// Load configuration from a specific file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        debug!(path = %path.display(), items = config.list.items.len(), "loaded config");
        Ok(config)
    }
}

fn default_path(workdir: impl AsRef<Path>) -> PathBuf {
    workdir.as_ref().join(CONFIG_DIR).join(CONFIG_FILE)
}

/// The `[list]` block: title plus seed items.
///
/// Items are kept untyped so each entry goes through the list's runtime check.
#[derive(Debug, Clone, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    items: Vec<Value>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            items: SAMPLE_ITEMS.iter().map(|title| Value::from(*title)).collect(),
        }
    }
}

impl ListConfig {
    /// Build the seeded list.
    pub fn build(&self) -> Result<TodoList> {
        let mut list = TodoList::new(self.title.as_str());
        for (idx, value) in self.items.iter().enumerate() {
            list.add_value(value)
                .with_context(|| format!("invalid item #{idx} in [list] config"))?;
        }
        Ok(list)
    }
}

fn default_title() -> String {
    SAMPLE_TITLE.to_owned()
}
