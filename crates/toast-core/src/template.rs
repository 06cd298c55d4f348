//! Static setup material returned alongside extracted documentation

use serde::{Deserialize, Serialize};

/// Ordered setup steps for wiring the library into an Angular app.
pub const SETUP_INSTRUCTIONS: [&str; 6] = [
    "1. Create toast-config.json in src/assets/config/",
    "2. Import ToastNotificationModule in app.config.ts",
    "3. Create httpLoaderFactoryToast function to load JSON config",
    "4. Add environment-specific overrides (production vs development)",
    "5. Register module with importProvidersFrom(ToastNotificationModule.forRootWithProvider(httpLoaderFactoryToast))",
    "6. Inject ToastService in components where needed",
];

/// Default contents for a new `toast-config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationTemplate {
    pub position: String,
    pub duration: u64,
    pub max_toasts: u32,
    pub animation_duration: u64,
    pub show_progress_bar: bool,
    pub pause_on_hover: bool,
    pub enable_sound: bool,
    pub default_type: String,
    pub allowed_origins: Vec<String>,
}

impl Default for ConfigurationTemplate {
    fn default() -> Self {
        Self {
            position: "top-right".to_string(),
            duration: 3000,
            max_toasts: 5,
            animation_duration: 300,
            show_progress_bar: true,
            pause_on_hover: true,
            enable_sound: false,
            default_type: "info".to_string(),
            allowed_origins: vec!["https://api.myapp.com".to_string()],
        }
    }
}

/// Snippets showing the toast service in a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageExamples {
    pub basic: String,
    pub custom: String,
    pub with_callback: String,
}

impl Default for UsageExamples {
    fn default() -> Self {
        Self {
            basic: "this.toastService.success('Operation completed!');".to_string(),
            custom: "this.toastService.show({ title: 'Success', message: 'Done!', type: ToastType.Success });"
                .to_string(),
            with_callback: "this.http.post('/api/data', data).subscribe({ next: () => this.toastService.success('Saved!'), error: () => this.toastService.error('Failed!') });"
                .to_string(),
        }
    }
}
