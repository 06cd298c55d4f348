//! Core logic for the toast configurator
//!
//! Two stateless engines:
//!
//! - [`extract`] pulls the known sections out of the library's configuration
//!   documentation and pairs them with a ready-to-use setup template.
//! - [`Validator`] inspects a local Angular project's `app.config.ts` and
//!   `toast-config.json` and reports what is missing or malformed.

pub mod checks;
pub mod error;
pub mod extract;
pub mod report;
pub mod template;
pub mod verify;

pub use error::{Error, Result};
pub use extract::{DocumentSource, ExtractionResult, Implementation, extract};
pub use report::{Checklist, ChecklistItem, IssueKind, ReportDetails, ValidationIssue, ValidationReport};
pub use template::{ConfigurationTemplate, UsageExamples};
pub use verify::Validator;
