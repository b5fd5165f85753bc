use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::GrowlConfig;
use crate::error::{GrowlError, Result};

pub const CONFIG_FILE: &str = "growl.yaml";

/// Starter growl.yaml written by `growl init`
pub const CONFIG_TEMPLATE: &str = r#"# Growl configuration
#
# shell: bash -c      # defaults to "cmd /C" on Windows and "bash -c" elsewhere

env:
  - name: GROWL
    value: "1"

commands:
  - name: run
    command: go run .

  - name: build
    command: go build -o bin/%1 .

  - name: check
    command: go vet ./...
    extra:
      - go test ./...
    env:
      - name: CGO_ENABLED
        value: "0"
"#;

/// A directory growl runs in
#[derive(Clone, Debug)]
pub struct Workspace {
    root: PathBuf,
    config_file: PathBuf,
}

impl Workspace {
    pub fn new(root: PathBuf) -> Self {
        let config_file = root.join(CONFIG_FILE);
        Self { root, config_file }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_file
    }

    /// Check if growl.yaml exists
    pub fn exists(&self) -> bool {
        self.config_file.exists()
    }

    pub fn load_config(&self) -> Result<GrowlConfig> {
        GrowlConfig::load(&self.config_file)
    }

    /// Write the starter growl.yaml. An existing file is left untouched.
    pub fn init(&self) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.config_file)
            .map_err(|source| match source.kind() {
                ErrorKind::AlreadyExists => GrowlError::ConfigExists(self.config_file.clone()),
                _ => GrowlError::Io {
                    path: self.config_file.clone(),
                    source,
                },
            })?;

        file.write_all(CONFIG_TEMPLATE.as_bytes())
            .map_err(|source| GrowlError::Io {
                path: self.config_file.clone(),
                source,
            })?;

        log::debug!("wrote {}", self.config_file.display());
        Ok(())
    }
}
