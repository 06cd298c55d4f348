//! Check registry
//!
//! Wiring checks are static records evaluated against the text of
//! `app.config.ts`; settings checks inspect the parsed `toast-config.json`.
//! Every check runs regardless of earlier failures and issues are appended
//! in the order the checks are listed here.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use crate::report::{ChecklistItem, IssueKind, ValidationIssue, ValidationReport};

/// Keys every `toast-config.json` must define
pub const REQUIRED_FIELDS: [&str; 6] = [
    "position",
    "duration",
    "maxToasts",
    "showProgressBar",
    "enableSound",
    "defaultType",
];

/// Accepted values for `position`
pub const VALID_POSITIONS: [&str; 6] = [
    "top-left",
    "top-right",
    "top-center",
    "bottom-left",
    "bottom-right",
    "bottom-center",
];

/// A presence check against the wiring file
#[derive(Debug, Clone, Copy)]
pub struct WiringCheck {
    pub id: &'static str,
    pub pattern: &'static str,
    pub severity: IssueKind,
    pub message: &'static str,
    pub fix: &'static str,
    /// Flag raised in the checklist when the pattern matches
    pub checklist: Option<ChecklistItem>,
}

impl WiringCheck {
    /// The issue reported when this check fails.
    pub fn issue(&self) -> ValidationIssue {
        ValidationIssue::new(self.severity, self.message, self.fix)
    }
}

pub static WIRING_CHECKS: [WiringCheck; 6] = [
    WiringCheck {
        id: "module-import",
        pattern: r#"import\s*\{\s*[^}]*ToastNotificationModule[^}]*\}\s*from\s*['"]angular-toast-notifications['"]"#,
        severity: IssueKind::Error,
        message: "ToastNotificationModule is not imported",
        fix: "Add: import { ToastNotificationModule } from 'angular-toast-notifications';",
        checklist: Some(ChecklistItem::ToastModuleImport),
    },
    WiringCheck {
        id: "config-type-import",
        pattern: r#"import\s*\{\s*[^}]*ToastConfig[^}]*\}\s*from\s*['"]angular-toast-notifications['"]"#,
        severity: IssueKind::Warning,
        message: "ToastConfig type is not imported",
        fix: "Add: import { ToastConfig } from 'angular-toast-notifications';",
        checklist: None,
    },
    WiringCheck {
        id: "http-client-import",
        pattern: r#"import\s*\{\s*[^}]*HttpClient[^}]*\}\s*from\s*['"]@angular/common/http['"]"#,
        severity: IssueKind::Error,
        message: "HttpClient is not imported",
        fix: "Add: import { HttpClient } from '@angular/common/http';",
        checklist: None,
    },
    WiringCheck {
        id: "http-client-provider",
        pattern: r"provideHttpClient\s*\(",
        severity: IssueKind::Error,
        message: "provideHttpClient(...) is not registered in providers",
        fix: "Add provideHttpClient() to the providers array in appConfig; features such as provideHttpClient(withInterceptorsFromDi()) are also accepted",
        checklist: Some(ChecklistItem::ProvideHttpClient),
    },
    WiringCheck {
        id: "loader-factory",
        pattern: r"export\s+const\s+httpLoaderFactoryToast\s*=",
        severity: IssueKind::Error,
        message: "httpLoaderFactoryToast function is not defined",
        fix: "Create the httpLoaderFactoryToast factory function to load toast configuration from JSON",
        checklist: Some(ChecklistItem::HttpLoaderFactory),
    },
    WiringCheck {
        id: "module-provider",
        pattern: r"ToastNotificationModule\.forRootWithProvider\(\s*httpLoaderFactoryToast\s*\)",
        severity: IssueKind::Error,
        message: "ToastNotificationModule is not properly configured with provider",
        fix: "Add: importProvidersFrom(ToastNotificationModule.forRootWithProvider(httpLoaderFactoryToast)) to providers",
        checklist: Some(ChecklistItem::ToastModuleProvider),
    },
];

static COMPILED_WIRING_CHECKS: LazyLock<Vec<(&'static WiringCheck, Regex)>> = LazyLock::new(|| {
    WIRING_CHECKS
        .iter()
        .map(|check| (check, Regex::new(check.pattern).unwrap()))
        .collect()
});

/// Evaluate one wiring check by id. Returns `None` for an unknown id.
pub fn wiring_check_passes(id: &str, content: &str) -> Option<bool> {
    COMPILED_WIRING_CHECKS
        .iter()
        .find(|(check, _)| check.id == id)
        .map(|(_, pattern)| pattern.is_match(content))
}

/// Run every wiring check against the text of `app.config.ts`.
pub fn run_wiring_checks(content: &str, report: &mut ValidationReport) {
    for (check, pattern) in COMPILED_WIRING_CHECKS.iter() {
        let passed = pattern.is_match(content);
        debug!(check = check.id, passed, "Wiring check");

        if let Some(item) = check.checklist {
            report.checklist.set(item, passed);
        }
        if !passed {
            report.push(check.issue());
        }
    }
}

/// Run every settings check against a parsed `toast-config.json` object.
pub fn run_settings_checks(settings: &Map<String, Value>, report: &mut ValidationReport) {
    match missing_fields(settings) {
        Some(issue) => report.push(issue),
        None => report
            .checklist
            .set(ChecklistItem::ValidToastConfigSchema, true),
    }

    let value_checks = [
        invalid_position(settings),
        non_numeric(
            settings,
            "duration",
            "duration must be a number (milliseconds)",
            "Update duration to a numeric value (e.g., 3000)",
        ),
        non_numeric(
            settings,
            "maxToasts",
            "maxToasts must be a number",
            "Update maxToasts to a numeric value (e.g., 5)",
        ),
    ];
    for issue in value_checks.into_iter().flatten() {
        debug!(message = %issue.message, "Settings check failed");
        report.push(issue);
    }
}

/// One combined warning naming every absent required field.
pub fn missing_fields(settings: &Map<String, Value>) -> Option<ValidationIssue> {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !settings.contains_key(*field))
        .collect();
    if missing.is_empty() {
        return None;
    }
    Some(ValidationIssue::warning(
        format!("toast-config.json is missing fields: {}", missing.join(", ")),
        format!(
            "Add the missing fields to your toast-config.json. Required fields: {}",
            REQUIRED_FIELDS.join(", ")
        ),
    ))
}

/// A set `position` must be one of [`VALID_POSITIONS`].
///
/// Falsy values (`null`, `false`, `0`, `""`) count as unset.
pub fn invalid_position(settings: &Map<String, Value>) -> Option<ValidationIssue> {
    let value = settings.get("position").filter(|v| is_truthy(v))?;
    if value.as_str().is_some_and(|s| VALID_POSITIONS.contains(&s)) {
        return None;
    }
    let shown = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(ValidationIssue::error(
        format!("Invalid position value: {shown}"),
        format!("Set position to one of: {}", VALID_POSITIONS.join(", ")),
    ))
}

/// A present `field` must be a JSON number; `null` is not a number.
pub fn non_numeric(
    settings: &Map<String, Value>,
    field: &str,
    message: &str,
    fix: &str,
) -> Option<ValidationIssue> {
    settings
        .get(field)
        .filter(|v| !v.is_number())
        .map(|_| ValidationIssue::error(message, fix))
}

/// JavaScript truthiness of a JSON value.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
