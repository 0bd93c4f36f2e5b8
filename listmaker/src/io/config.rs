//! List maker configuration stored in `listmaker.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "listmaker.toml";

/// List maker configuration (TOML).
///
/// Missing fields default to the classic layout: `lists/<name>.txt` under the
/// working directory, saved by delete-then-rewrite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ListMakerConfig {
    /// Directory that saved lists are written to. Relative paths resolve
    /// against the working directory.
    pub lists_dir: PathBuf,

    /// Extension appended to the list name on save, without the dot.
    pub extension: String,

    /// Write a temp file and rename it over the target instead of deleting
    /// the old file first.
    pub atomic_save: bool,
}

impl Default for ListMakerConfig {
    fn default() -> Self {
        Self {
            lists_dir: PathBuf::from("lists"),
            extension: "txt".to_string(),
            atomic_save: false,
        }
    }
}

impl ListMakerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.lists_dir.as_os_str().is_empty() {
            return Err(anyhow!("lists_dir must not be empty"));
        }
        if self.extension.trim().is_empty() {
            return Err(anyhow!("extension must not be empty"));
        }
        if self.extension.starts_with('.') {
            return Err(anyhow!("extension must not start with '.'"));
        }
        if self.extension.contains(['/', '\\']) {
            return Err(anyhow!("extension must not contain path separators"));
        }
        Ok(())
    }

    /// Absolute lists directory for a given working directory.
    pub fn lists_path(&self, cwd: &Path) -> PathBuf {
        if self.lists_dir.is_absolute() {
            self.lists_dir.clone()
        } else {
            cwd.join(&self.lists_dir)
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ListMakerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ListMakerConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = ListMakerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ListMakerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), lists_dir = %cfg.lists_dir.display(), "config loaded");
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ListMakerConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "atomic_save = true\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert!(cfg.atomic_save);
        assert_eq!(cfg.lists_dir, PathBuf::from("lists"));
        assert_eq!(cfg.extension, "txt");
    }

    #[test]
    fn rejects_dotted_extension() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "extension = \".md\"\n").expect("write");
        let err = load_config(&path).expect_err("invalid extension");
        assert!(format!("{err:#}").contains("must not start with '.'"));
    }

    #[test]
    fn relative_lists_dir_resolves_against_cwd() {
        let cfg = ListMakerConfig::default();
        assert_eq!(
            cfg.lists_path(Path::new("/work")),
            PathBuf::from("/work/lists")
        );
    }
}
