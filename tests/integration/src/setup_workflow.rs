//! End-to-end setup workflow
//!
//! An assistant asks the server how to configure the library, applies the
//! returned template and loader to a fresh Angular workspace, then asks the
//! server to verify the result.

use std::fs;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;
use toast_core::{ConfigurationTemplate, Validator};
use toast_fs::{ConfigFile, ConfigLocator};
use toast_mcp::{ServerConfig, ToastMcpServer};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONFIGURATION_DOC: &str = r#"# Configuration

```typescript
export interface ToastConfig {
  position: ToastPosition;
  duration: number;
}
```

- **`position`**: Corner or edge where toasts appear.

- **`duration`**: Display time in milliseconds.

```typescript
export const httpLoaderFactoryToast = (httpClient: HttpClient): Observable<ToastConfig> => {
  return httpClient.get<ToastConfig>('/assets/config/toast-config.json');
};
```
"#;

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Workspace {
    temp: TempDir,
}

impl Workspace {
    /// An Angular workspace nested under `client-app/`
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("client-app/src/app")).unwrap();
        Self { temp }
    }

    fn root(&self) -> &Path {
        self.temp.path()
    }

    fn write(&self, file: ConfigFile, content: &str) {
        let path = self.root().join("client-app").join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

async fn github_with_doc() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/toast-demo/contents/doc/configuration.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "configuration.md",
            "path": "doc/configuration.md",
            "type": "file",
            "size": CONFIGURATION_DOC.len(),
            "sha": "9f1c2e",
            "html_url": "https://github.com/acme/toast-demo/blob/main/doc/configuration.md",
            "content": STANDARD.encode(CONFIGURATION_DOC),
            "encoding": "base64"
        })))
        .mount(&server)
        .await;
    server
}

fn server(api_base: &str, root: &Path) -> ToastMcpServer {
    ToastMcpServer::new(ServerConfig {
        github_token: None,
        github_owner: Some("acme".to_string()),
        github_repo: Some("toast-demo".to_string()),
        api_base: api_base.to_string(),
        root: root.to_path_buf(),
        config_doc: "doc/configuration.md".to_string(),
        branch: "main".to_string(),
    })
    .unwrap()
}

async fn call(server: &ToastMcpServer, name: &str) -> Value {
    let request = json!({
        "jsonrpc": "2.0",
        "id": name,
        "method": "tools/call",
        "params": {"name": name, "arguments": {}}
    })
    .to_string();
    let response: Value = serde_json::from_str(&server.handle_message(&request).await.unwrap()).unwrap();
    assert_eq!(response["id"], name);
    serde_json::from_str(response["result"]["content"][0]["text"].as_str().unwrap()).unwrap()
}

/// An `app.config.ts` built around the loader returned by the server
fn app_config_with(loader: &str) -> String {
    format!(
        r#"import {{ ApplicationConfig, importProvidersFrom }} from '@angular/core';
import {{ provideHttpClient, HttpClient }} from '@angular/common/http';
import {{ Observable }} from 'rxjs';
import {{ ToastConfig, ToastNotificationModule }} from 'angular-toast-notifications';

{loader}

export const appConfig: ApplicationConfig = {{
  providers: [
    provideHttpClient(),
    importProvidersFrom(ToastNotificationModule.forRootWithProvider(httpLoaderFactoryToast)),
  ],
}};
"#
    )
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn configure_then_verify_reaches_a_clean_report() {
    let github = github_with_doc().await;
    let workspace = Workspace::new();
    let server = server(&github.uri(), workspace.root());

    // Before setup nothing is found.
    let before = call(&server, "cdd-verify_config").await;
    assert_eq!(before["success"], false);

    let guidance = call(&server, "cdd-configure_angular_app").await;
    assert_eq!(guidance["success"], true);
    assert_eq!(
        guidance["configuration"]["descriptions"]["duration"],
        "Display time in milliseconds."
    );

    let template: ConfigurationTemplate =
        serde_json::from_value(guidance["configurationTemplate"].clone()).unwrap();
    workspace.write(
        ConfigFile::ToastConfigJson,
        &serde_json::to_string_pretty(&template).unwrap(),
    );
    let loader = guidance["configuration"]["implementation"]["httpLoader"]
        .as_str()
        .unwrap();
    workspace.write(ConfigFile::AppConfig, &app_config_with(loader));

    let after = call(&server, "cdd-verify_config").await;
    assert_eq!(after["success"], true);
    assert_eq!(after["issues"], json!([]));
    assert_eq!(
        after["suggestions"],
        json!(["✓ Your configuration looks great! The Toast Notification Module is properly configured."])
    );
    assert!(
        after["details"]["appConfigLocation"]
            .as_str()
            .unwrap()
            .contains("client-app")
    );
}

#[tokio::test]
async fn missing_loader_is_the_only_error_left() {
    let workspace = Workspace::new();
    workspace.write(
        ConfigFile::ToastConfigJson,
        &serde_json::to_string(&ConfigurationTemplate::default()).unwrap(),
    );
    workspace.write(ConfigFile::AppConfig, &app_config_with("// loader goes here"));
    let server = server("http://127.0.0.1:1", workspace.root());

    let report = call(&server, "cdd-verify_config").await;

    let errors: Vec<&str> = report["issues"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|i| i["type"] == "error")
        .map(|i| i["message"].as_str().unwrap())
        .collect();
    assert_eq!(errors, vec!["httpLoaderFactoryToast function is not defined"]);
    assert_eq!(report["checklist"]["hasHttpLoaderFactory"], false);
    assert_eq!(report["checklist"]["hasToastModuleProvider"], true);
}

#[test]
fn tool_and_library_agree_on_locations() {
    let workspace = Workspace::new();
    workspace.write(ConfigFile::AppConfig, "export const appConfig = {};");

    let locations = ConfigLocator::new(workspace.root()).find_config_files(None, None);
    let report = Validator::new(workspace.root()).verify(None, None);

    let app = locations.get(ConfigFile::AppConfig).unwrap();
    assert_eq!(report.details.app_config_location, app.display().to_string());
    assert!(locations.get(ConfigFile::ToastConfigJson).is_none());
    assert_eq!(
        report.details.toast_config_location,
        "src/assets/config/toast-config.json (not found)"
    );
}
