//! Configuration validation against a local Angular project

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use toast_fs::{ConfigFile, ConfigFileLocations, ConfigLocator, io};
use tracing::{debug, info, warn};

use crate::checks::{is_truthy, run_settings_checks, run_wiring_checks};
use crate::report::{ChecklistItem, ReportDetails, ValidationIssue, ValidationReport};
use crate::{Error, Result};

/// Validates `app.config.ts` and `toast-config.json` of one workspace.
///
/// Files are read fresh on every call, so a report reflects the files as
/// they were at that moment.
#[derive(Debug, Clone)]
pub struct Validator {
    locator: ConfigLocator,
}

impl Validator {
    /// Create a validator rooted at `base_dir`, normally the working directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            locator: ConfigLocator::new(base_dir),
        }
    }

    pub fn base_dir(&self) -> &Path {
        self.locator.base()
    }

    /// Validate the project, using explicit paths where given.
    ///
    /// Never fails: a run that cannot complete yields a report with
    /// `success = false` and a single error issue.
    pub fn verify(
        &self,
        app_config_path: Option<&str>,
        toast_config_path: Option<&str>,
    ) -> ValidationReport {
        let locations = self
            .locator
            .find_config_files(app_config_path, toast_config_path);
        let mut report = ValidationReport::new(details(&locations));

        match self.run(&locations, &mut report) {
            Ok(()) => {
                info!(
                    success = report.success,
                    issues = report.issues.len(),
                    "Verified toast configuration"
                );
                report
            }
            Err(e) => {
                warn!(error = %e, "Verification failed");
                report.degrade(e.to_string())
            }
        }
    }

    fn run(&self, locations: &ConfigFileLocations, report: &mut ValidationReport) -> Result<()> {
        let app_path = self.effective_path(locations, ConfigFile::AppConfig);
        let toast_path = self.effective_path(locations, ConfigFile::ToastConfigJson);

        let wiring = match io::read_text(&app_path) {
            Ok(content) => {
                report.checklist.set(ChecklistItem::AppConfig, true);
                Some(content)
            }
            Err(e) => {
                log_read_failure(ConfigFile::AppConfig, &e);
                report.success = false;
                report.push(ValidationIssue::error(
                    format!(
                        "{} not found at {}",
                        ConfigFile::AppConfig.file_name(),
                        app_path.display()
                    ),
                    format!(
                        "Create the file at {} with proper Angular configuration",
                        app_path.display()
                    ),
                ));
                None
            }
        };

        let settings = match io::read_json(&toast_path) {
            Ok(value) => {
                report.checklist.set(ChecklistItem::ToastConfigJson, true);
                Some(value)
            }
            Err(e) => {
                log_read_failure(ConfigFile::ToastConfigJson, &e);
                report.success = false;
                report.push(ValidationIssue::error(
                    format!(
                        "{} not found or invalid JSON at {}",
                        ConfigFile::ToastConfigJson.file_name(),
                        toast_path.display()
                    ),
                    format!(
                        "Create the file at {} with valid ToastConfig JSON structure",
                        toast_path.display()
                    ),
                ));
                None
            }
        };

        if let Some(content) = wiring.as_deref().filter(|c| !c.is_empty()) {
            run_wiring_checks(content, report);
        }

        // An array has no keys, so every required field is reported missing.
        // Falsy scalars are treated like an absent document.
        match settings {
            Some(Value::Object(map)) => run_settings_checks(&map, report),
            Some(Value::Array(_)) => run_settings_checks(&Map::new(), report),
            Some(value) if !is_truthy(&value) => {}
            None => {}
            Some(other) => {
                return Err(Error::SettingsNotObject {
                    found: json_kind(&other),
                });
            }
        }

        report.summarize();
        Ok(())
    }

    fn effective_path(&self, locations: &ConfigFileLocations, file: ConfigFile) -> PathBuf {
        locations
            .get(file)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.locator.default_path(file))
    }
}

fn details(locations: &ConfigFileLocations) -> ReportDetails {
    let describe = |file: ConfigFile| {
        locations
            .get(file)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| format!("{} (not found)", file.relative_path()))
    };
    ReportDetails {
        app_config_location: describe(ConfigFile::AppConfig),
        toast_config_location: describe(ConfigFile::ToastConfigJson),
    }
}

fn log_read_failure(file: ConfigFile, error: &toast_fs::Error) {
    if error.is_not_found() {
        debug!(file = %file, "Configuration file does not exist");
    } else {
        debug!(file = %file, error = %error, "Configuration file could not be read");
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
