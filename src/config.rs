use serde::{Serialize, Deserialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{GrowlError, Result};

/// Contents of growl.yaml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowlConfig {
    /// Shell used to run commands, e.g. "bash -c". Host default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    /// Variables applied to every command
    #[serde(default)]
    pub env: Vec<EnvEntry>,

    #[serde(default)]
    pub commands: Vec<CommandDef>,
}

/// A single environment variable assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvEntry {
    pub name: String,
    pub value: String,
}

impl EnvEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A named command from growl.yaml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandDef {
    pub name: String,

    /// First command line to run
    pub command: String,

    /// Further lines, run in order after `command`
    #[serde(default)]
    pub extra: Vec<String>,

    /// Variables for this command only; these win over the global ones
    #[serde(default)]
    pub env: Vec<EnvEntry>,
}

impl CommandDef {
    /// All command lines in execution order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.command.as_str()).chain(self.extra.iter().map(String::as_str))
    }
}

impl GrowlConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GrowlError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| GrowlError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_yaml(&content).map_err(|source| GrowlError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!("loaded {} command(s) from {}", config.commands.len(), path.display());
        config.warn_duplicates();

        Ok(config)
    }

    /// Parse a YAML document
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty file deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Find a command by name. The first definition wins.
    pub fn find_command(&self, name: &str) -> Option<&CommandDef> {
        self.commands.iter().find(|cmd| cmd.name == name)
    }

    fn warn_duplicates(&self) {
        let mut seen = HashSet::new();
        for cmd in &self.commands {
            if !seen.insert(cmd.name.as_str()) {
                log::warn!("command '{}' is defined more than once; the first definition is used", cmd.name);
            }
        }
    }
}
