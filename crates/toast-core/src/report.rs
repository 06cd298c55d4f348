//! Validation report types
//!
//! A report is built up while checks run: issues are appended in check
//! order, checklist flags are raised as expectations are met, and the
//! suggestions are derived from the issue counts at the end.

use serde::{Deserialize, Serialize};

/// Suggestion given when no issues were found
pub const ALL_GOOD_SUGGESTION: &str =
    "✓ Your configuration looks great! The Toast Notification Module is properly configured.";

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Info,
}

/// A problem found in the project configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    /// Concrete change that resolves the issue
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<String>,
}

impl ValidationIssue {
    pub fn new(kind: IssueKind, message: impl Into<String>, fix: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            fix: Some(fix.into()),
        }
    }

    pub fn error(message: impl Into<String>, fix: impl Into<String>) -> Self {
        Self::new(IssueKind::Error, message, fix)
    }

    pub fn warning(message: impl Into<String>, fix: impl Into<String>) -> Self {
        Self::new(IssueKind::Warning, message, fix)
    }
}

/// One structural expectation tracked in the [`Checklist`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChecklistItem {
    AppConfig,
    ToastConfigJson,
    HttpLoaderFactory,
    ToastModuleImport,
    ProvideHttpClient,
    ToastModuleProvider,
    ValidToastConfigSchema,
}

impl ChecklistItem {
    pub const ALL: [ChecklistItem; 7] = [
        Self::AppConfig,
        Self::ToastConfigJson,
        Self::HttpLoaderFactory,
        Self::ToastModuleImport,
        Self::ProvideHttpClient,
        Self::ToastModuleProvider,
        Self::ValidToastConfigSchema,
    ];
}

/// Presence flags, all false until the matching check passes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub has_app_config: bool,
    pub has_toast_config_json: bool,
    pub has_http_loader_factory: bool,
    pub has_toast_module_import: bool,
    pub has_provide_http_client: bool,
    pub has_toast_module_provider: bool,
    pub has_valid_toast_config_schema: bool,
}

impl Checklist {
    fn slot(&mut self, item: ChecklistItem) -> &mut bool {
        match item {
            ChecklistItem::AppConfig => &mut self.has_app_config,
            ChecklistItem::ToastConfigJson => &mut self.has_toast_config_json,
            ChecklistItem::HttpLoaderFactory => &mut self.has_http_loader_factory,
            ChecklistItem::ToastModuleImport => &mut self.has_toast_module_import,
            ChecklistItem::ProvideHttpClient => &mut self.has_provide_http_client,
            ChecklistItem::ToastModuleProvider => &mut self.has_toast_module_provider,
            ChecklistItem::ValidToastConfigSchema => &mut self.has_valid_toast_config_schema,
        }
    }

    pub fn set(&mut self, item: ChecklistItem, value: bool) {
        *self.slot(item) = value;
    }

    pub fn get(&self, item: ChecklistItem) -> bool {
        match item {
            ChecklistItem::AppConfig => self.has_app_config,
            ChecklistItem::ToastConfigJson => self.has_toast_config_json,
            ChecklistItem::HttpLoaderFactory => self.has_http_loader_factory,
            ChecklistItem::ToastModuleImport => self.has_toast_module_import,
            ChecklistItem::ProvideHttpClient => self.has_provide_http_client,
            ChecklistItem::ToastModuleProvider => self.has_toast_module_provider,
            ChecklistItem::ValidToastConfigSchema => self.has_valid_toast_config_schema,
        }
    }

    /// Whether every expectation is met.
    pub fn all(&self) -> bool {
        ChecklistItem::ALL.iter().all(|item| self.get(*item))
    }
}

/// Where the validator looked for each file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetails {
    pub app_config_location: String,
    pub toast_config_location: String,
}

/// Outcome of one validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// False when a file is missing or unreadable, or the run failed
    pub success: bool,
    pub issues: Vec<ValidationIssue>,
    pub suggestions: Vec<String>,
    pub checklist: Checklist,
    pub details: ReportDetails,
}

impl ValidationReport {
    pub fn new(details: ReportDetails) -> Self {
        Self {
            success: true,
            issues: Vec::new(),
            suggestions: Vec::new(),
            checklist: Checklist::default(),
            details,
        }
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.issues.iter().filter(|i| i.kind == kind).count()
    }

    /// Derive the suggestions from the issues found so far.
    pub fn summarize(&mut self) {
        if self.issues.is_empty() {
            self.suggestions.push(ALL_GOOD_SUGGESTION.to_string());
            return;
        }

        let errors = self.count(IssueKind::Error);
        if errors > 0 {
            self.suggestions.push(format!(
                "Found {errors} error(s) that need to be fixed for the toast notifications to work correctly. \
                 Please review the errors above and apply the suggested fixes."
            ));
        }
        let warnings = self.count(IssueKind::Warning);
        if warnings > 0 {
            self.suggestions.push(format!(
                "Found {warnings} warning(s) that may improve your configuration."
            ));
        }
    }

    /// Replace the issues with a single error after the run itself failed.
    pub fn degrade(mut self, message: impl Into<String>) -> Self {
        self.success = false;
        self.issues = vec![ValidationIssue {
            kind: IssueKind::Error,
            message: message.into(),
            fix: None,
        }];
        self
    }
}
