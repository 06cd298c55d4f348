//! Well-known configuration files of an Angular project.

use std::path::Path;

/// Sibling directory that commonly holds the Angular app next to the server.
pub const CLIENT_APP_DIR: &str = "client-app";

/// A configuration file the validator knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFile {
    /// `src/app/app.config.ts`, the application wiring file
    AppConfig,
    /// `src/assets/config/toast-config.json`, the toast settings file
    ToastConfigJson,
}

impl ConfigFile {
    /// Path of the file relative to an Angular project root.
    pub fn relative_path(&self) -> &'static str {
        match self {
            Self::AppConfig => "src/app/app.config.ts",
            Self::ToastConfigJson => "src/assets/config/toast-config.json",
        }
    }

    /// Bare file name, as used in report messages.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::AppConfig => "app.config.ts",
            Self::ToastConfigJson => "toast-config.json",
        }
    }
}

impl AsRef<Path> for ConfigFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.relative_path())
    }
}

impl std::fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.relative_path())
    }
}
