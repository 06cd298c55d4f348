//! Documentation extraction
//!
//! The library's `configuration.md` is semi-structured: a TypeScript
//! interface, one bullet per option, a loader factory and a JSON example.
//! Each section is pulled out with its own pattern; a section that is not
//! found is reported as `None` and never fails the extraction.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::template::{ConfigurationTemplate, SETUP_INSTRUCTIONS, UsageExamples};

/// Options whose bullet descriptions are extracted, in document order.
pub const DESCRIBED_FIELDS: [&str; 5] = [
    "position",
    "duration",
    "maxToasts",
    "showProgressBar",
    "enableSound",
];

static INTERFACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)export interface ToastConfig \{.*?\}").unwrap());

/// One pattern per described field: text after ``- **`field`**:`` up to the
/// next blank-line separated bullet or the end of the document.
static FIELD_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    DESCRIBED_FIELDS
        .iter()
        .map(|field| {
            let pattern = format!(
                r"(?s)- \*\*`{}`\*\*:(.*?)(?:\n\n- \*\*|\z)",
                regex::escape(field)
            );
            (*field, Regex::new(&pattern).unwrap())
        })
        .collect()
});

static HTTP_LOADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)export const httpLoaderFactoryToast = \(httpClient: HttpClient\).*?\};")
        .unwrap()
});

static JSON_CONFIG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*\{(.*?)\}\s*```").unwrap());

/// Where the documentation came from; only used to build a link back to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSource {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub path: String,
}

impl DocumentSource {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
            path: path.into(),
        }
    }

    /// Browser URL of the document on GitHub.
    pub fn documentation_url(&self) -> String {
        format!(
            "https://github.com/{}/{}/blob/{}/{}",
            self.owner, self.repo, self.branch, self.path
        )
    }
}

/// Code examples found in the documentation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Implementation {
    /// The `httpLoaderFactoryToast` example, signature through closing `};`
    pub http_loader: Option<String>,
    /// Body of the first fenced `json` block, without its outer braces
    pub json_config: Option<String>,
}

/// Extracted documentation plus the static setup material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// The `ToastConfig` interface block
    pub interface: Option<String>,
    /// Description per entry of [`DESCRIBED_FIELDS`]; every field is present
    pub descriptions: BTreeMap<String, Option<String>>,
    pub implementation: Implementation,
    pub instructions: Vec<String>,
    pub configuration_template: ConfigurationTemplate,
    pub usage_examples: UsageExamples,
    pub documentation_url: String,
}

impl ExtractionResult {
    /// Description of one option, if it was found.
    pub fn description(&self, field: &str) -> Option<&str> {
        self.descriptions.get(field).and_then(|d| d.as_deref())
    }
}

/// Extract the known sections from configuration documentation.
pub fn extract(content: &str, source: &DocumentSource) -> ExtractionResult {
    let descriptions: BTreeMap<String, Option<String>> = FIELD_PATTERNS
        .iter()
        .map(|(field, pattern)| (field.to_string(), capture_group(pattern, content)))
        .collect();

    let result = ExtractionResult {
        interface: whole_match(&INTERFACE_PATTERN, content),
        descriptions,
        implementation: Implementation {
            http_loader: whole_match(&HTTP_LOADER_PATTERN, content),
            json_config: capture_group(&JSON_CONFIG_PATTERN, content),
        },
        instructions: SETUP_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
        configuration_template: ConfigurationTemplate::default(),
        usage_examples: UsageExamples::default(),
        documentation_url: source.documentation_url(),
    };

    debug!(
        interface = result.interface.is_some(),
        descriptions = result.descriptions.values().filter(|d| d.is_some()).count(),
        http_loader = result.implementation.http_loader.is_some(),
        json_config = result.implementation.json_config.is_some(),
        "Extracted configuration documentation"
    );

    result
}

fn whole_match(pattern: &Regex, content: &str) -> Option<String> {
    pattern.find(content).map(|m| m.as_str().trim().to_string())
}

fn capture_group(pattern: &Regex, content: &str) -> Option<String> {
    pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
