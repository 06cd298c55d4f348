//! Locating configuration files inside an Angular workspace
//!
//! The server may be launched from the Angular project itself, from a
//! directory that contains it as `client-app/`, or from a sibling of that
//! directory. Each file is looked up independently across those layouts.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::{CLIENT_APP_DIR, ConfigFile};
use crate::path::{normalize, resolve};

/// Resolved locations of the wiring and settings files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFileLocations {
    pub app_config_path: Option<PathBuf>,
    pub toast_config_path: Option<PathBuf>,
}

impl ConfigFileLocations {
    /// Location of the given file, if one was resolved.
    pub fn get(&self, file: ConfigFile) -> Option<&Path> {
        match file {
            ConfigFile::AppConfig => self.app_config_path.as_deref(),
            ConfigFile::ToastConfigJson => self.toast_config_path.as_deref(),
        }
    }
}

/// Finds configuration files relative to a base directory.
#[derive(Debug, Clone)]
pub struct ConfigLocator {
    base: PathBuf,
}

impl ConfigLocator {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Directories probed, in priority order.
    pub fn candidate_dirs(&self) -> Vec<PathBuf> {
        let parent = normalize(&self.base.join(".."));
        vec![
            self.base.clone(),
            self.base.join(CLIENT_APP_DIR),
            parent.clone(),
            parent.join(CLIENT_APP_DIR),
        ]
    }

    /// Resolve both files, honouring explicit overrides.
    ///
    /// Non-empty overrides are resolved against the base directory and are
    /// not checked for existence. A file without an override is searched for
    /// across [`candidate_dirs`](Self::candidate_dirs).
    pub fn find_config_files(
        &self,
        app_config_override: Option<&str>,
        toast_config_override: Option<&str>,
    ) -> ConfigFileLocations {
        ConfigFileLocations {
            app_config_path: self.locate(ConfigFile::AppConfig, app_config_override),
            toast_config_path: self.locate(ConfigFile::ToastConfigJson, toast_config_override),
        }
    }

    fn locate(&self, file: ConfigFile, override_path: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = override_path.filter(|p| !p.is_empty()) {
            return Some(resolve(&self.base, path));
        }
        self.search(file)
    }

    /// First existing candidate for `file`, if any.
    pub fn search(&self, file: ConfigFile) -> Option<PathBuf> {
        let found = self
            .candidate_dirs()
            .into_iter()
            .map(|dir| dir.join(file.relative_path()))
            .find(|candidate| candidate.exists());
        debug!(file = %file, found = ?found, "Searched for configuration file");
        found
    }

    /// Path used when a file could not be located.
    pub fn default_path(&self, file: ConfigFile) -> PathBuf {
        self.base.join(file.relative_path())
    }
}
