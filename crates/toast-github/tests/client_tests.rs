//! GitHub client against a mock API server

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use pretty_assertions::assert_eq;
use serde_json::json;
use toast_github::{ContentListing, Error, GitHubClient, GitHubSettings};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, token: Option<&str>) -> GitHubClient {
    GitHubClient::new(GitHubSettings {
        api_base: server.uri(),
        token: token.map(str::to_string),
        owner: Some("acme".to_string()),
        repo: Some("toast-demo".to_string()),
        ..GitHubSettings::default()
    })
    .unwrap()
}

fn entry(name: &str, path: &str, kind: &str) -> serde_json::Value {
    json!({
        "name": name,
        "path": path,
        "type": kind,
        "size": 10,
        "html_url": format!("https://github.com/acme/toast-demo/blob/main/{path}"),
        "sha": "abc"
    })
}

#[tokio::test]
async fn repository_info_sends_auth_and_version_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/toast-demo"))
        .and(header("authorization", "Bearer secret"))
        .and(header("accept", "application/vnd.github+json"))
        .and(header("x-github-api-version", "2022-11-28"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "toast-demo",
            "description": "Angular toast notifications",
            "stargazers_count": 12,
            "forks_count": 3,
            "open_issues_count": 4,
            "language": "TypeScript",
            "html_url": "https://github.com/acme/toast-demo",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-06-01T12:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let info = client_for(&server, Some("secret")).repository_info().await.unwrap();

    assert_eq!(info.name, "toast-demo");
    assert_eq!(info.stars, 12);
    assert_eq!(info.forks, 3);
    assert_eq!(info.open_issues, 4);
    assert_eq!(info.language.as_deref(), Some("TypeScript"));
}

#[tokio::test]
async fn api_error_uses_message_from_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/toast-demo"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let err = client_for(&server, None).repository_info().await.unwrap_err();

    assert!(matches!(err, Error::Api { status: 404, .. }));
    assert_eq!(err.to_string(), "GitHub API Error: Not Found");
}

#[tokio::test]
async fn api_error_without_body_uses_status_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server, None).repository_info().await.unwrap_err();
    assert_eq!(err.to_string(), "GitHub API Error: Service Unavailable");
}

#[tokio::test]
async fn directory_listing_hides_restricted_entries() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/toast-demo/contents/"))
        .and(query_param("ref", "main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            entry("doc", "doc", "dir"),
            entry("cdd-toast", "cdd-toast", "dir"),
            entry("cdd-toast-mcp", "cdd-toast-mcp", "dir"),
            entry("README.md", "README.md", "file"),
        ])))
        .mount(&server)
        .await;

    let listing = client_for(&server, None).list_contents("", "main").await.unwrap();

    let ContentListing::Directory(entries) = listing else {
        panic!("expected a directory listing");
    };
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["doc", "README.md"]);
    assert_eq!(entries[0].kind, "dir");
}

#[tokio::test]
async fn listing_a_file_describes_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/toast-demo/contents/README.md"))
        .and(query_param("ref", "develop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(entry("README.md", "README.md", "file")))
        .mount(&server)
        .await;

    let listing = client_for(&server, None)
        .list_contents("README.md", "develop")
        .await
        .unwrap();

    assert!(matches!(listing, ContentListing::File(ref e) if e.path == "README.md"));
}

#[tokio::test]
async fn restricted_path_is_refused_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, None);
    let err = client.file_contents("cdd-toast-mcp/src/index.ts", "main").await.unwrap_err();
    assert!(matches!(err, Error::Restricted { .. }));

    let err = client.list_contents("cdd-toast-mcp", "main").await.unwrap_err();
    assert!(matches!(err, Error::Restricted { .. }));
}

#[tokio::test]
async fn file_contents_decodes_wrapped_base64() {
    let server = MockServer::start().await;
    let text = "# Configuration\n\n- **`position`**: Where toasts appear.\n";
    let encoded = STANDARD.encode(text);
    let (head, tail) = encoded.split_at(20);

    let mut body = entry("configuration.md", "doc/configuration.md", "file");
    body["content"] = json!(format!("{head}\n{tail}\n"));
    body["encoding"] = json!("base64");

    Mock::given(method("GET"))
        .and(path("/repos/acme/toast-demo/contents/doc/configuration.md"))
        .and(query_param("ref", "main"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let file = client_for(&server, None)
        .file_contents("doc/configuration.md", "main")
        .await
        .unwrap();

    assert_eq!(file.content, text);
    assert_eq!(file.name, "configuration.md");
    assert_eq!(file.sha, "abc");
}

#[tokio::test]
async fn file_request_for_directory_is_unexpected_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/toast-demo/contents/doc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([entry("a.md", "doc/a.md", "file")])))
        .mount(&server)
        .await;

    let err = client_for(&server, None).file_contents("doc", "main").await.unwrap_err();
    assert!(matches!(err, Error::Unexpected { .. }));
}

#[tokio::test]
async fn missing_repository_settings_fail_before_request() {
    let client = GitHubClient::new(GitHubSettings {
        owner: Some("acme".to_string()),
        ..GitHubSettings::default()
    })
    .unwrap();

    let err = client.repository_info().await.unwrap_err();
    assert_eq!(err.to_string(), "GITHUB_REPO is not set");
}
