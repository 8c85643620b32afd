//! Entry points for the host test runner.
//!
//! Wire a [`Blueprint`] into the runner's lifecycle hooks:
//!
//! ```ignore
//! let blueprint = Blueprint::new(BlueprintConfig::for_project(env!("CARGO_MANIFEST_DIR")));
//!
//! // once, before the first test
//! blueprint.before_suite()?;
//!
//! // after every request test
//! match blueprint.after_each(&ctx)? {
//!     Outcome::Written(path) => println!("documented in {}", path.display()),
//!     Outcome::Skipped(reason) => println!("not documented: {reason}"),
//! }
//! ```
//!
//! `after_each` never fails because of the test itself (naming mismatch,
//! filtered status, unparseable body); only a failed file write is an error,
//! and it concerns that single test case.
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::BlueprintConfig;
use crate::document::{ContentBlockBuilder, Document};
use crate::errors::BlueprintError;
use crate::naming;
use crate::net::{HttpRequest, HttpResponse};
use crate::output::OutputWriter;

/// What the host runner knows about a finished test case.
#[derive(Debug, Clone)]
pub struct TestCaseContext {
    /// Nested group descriptions, outermost first.
    pub descriptions: Vec<String>,
    pub request: HttpRequest,
    /// `None` when the test never produced a response.
    pub response: Option<HttpResponse>,
}

impl TestCaseContext {
    pub fn new<I, S>(descriptions: I, request: HttpRequest, response: Option<HttpResponse>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            descriptions: descriptions.into_iter().map(Into::into).collect(),
            request,
            response,
        }
    }
}

/// Why a test case did not produce a document.
#[derive(Debug)]
pub enum SkipReason {
    NoResponse,
    ExcludedStatus(u16),
    Naming(BlueprintError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoResponse => write!(f, "no response was captured"),
            SkipReason::ExcludedStatus(status) => write!(f, "response status {status} is excluded"),
            SkipReason::Naming(err) => write!(f, "{err}"),
        }
    }
}

#[derive(Debug)]
pub enum Outcome {
    Written(PathBuf),
    Skipped(SkipReason),
}

impl Outcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Outcome::Written(_))
    }
}

/// Documentation session for one test run.
///
/// Holds only immutable configuration, so it can be shared between test threads.
#[derive(Debug, Clone)]
pub struct Blueprint {
    config: BlueprintConfig,
    builder: ContentBlockBuilder,
    writer: OutputWriter,
}

impl Blueprint {
    pub fn new(config: BlueprintConfig) -> Self {
        let builder = ContentBlockBuilder::new(config.json_media_type.clone());
        let writer = OutputWriter::new(config.docs_root.clone(), config.file_extension.clone())
            .atomic(config.atomic_writes);

        Self { config, builder, writer }
    }

    /// Builds a session from a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, BlueprintError> {
        Ok(Self::new(BlueprintConfig::from_json_file(path)?))
    }

    pub fn config(&self) -> &BlueprintConfig {
        &self.config
    }

    pub fn writer(&self) -> &OutputWriter {
        &self.writer
    }

    /// Empties the documentation directory. Call once before any test case runs.
    pub fn before_suite(&self) -> Result<(), BlueprintError> {
        log::info!("Preparing API documentation in {}", self.writer.root().display());
        self.writer.reset()
    }

    /// Builds the document for a test case without touching the disk.
    ///
    /// Filtered out and misnamed test cases come back as the reason they are skipped.
    pub fn document(&self, ctx: &TestCaseContext) -> Result<Document, SkipReason> {
        let response = match &ctx.response {
            Some(response) => response,
            None => return Err(SkipReason::NoResponse),
        };
        if self.config.is_excluded(response.status()) {
            return Err(SkipReason::ExcludedStatus(response.status()));
        }

        let naming = naming::resolve(ctx.descriptions.as_slice()).map_err(SkipReason::Naming)?;
        Ok(self.builder.build(&naming, &ctx.request, response))
    }

    /// Documents one finished test case.
    pub fn after_each(&self, ctx: &TestCaseContext) -> Result<Outcome, BlueprintError> {
        let document = match self.document(ctx) {
            Ok(document) => document,
            Err(reason) => {
                match &reason {
                    SkipReason::Naming(_) => log::warn!("Skipping documentation: {reason}"),
                    _ => log::debug!("Skipping documentation: {reason}"),
                }
                return Ok(Outcome::Skipped(reason));
            }
        };

        let path = self.writer.write(document.file_identifier(), &document.render())?;
        log::info!("Documented {:?} in {}", naming::action(ctx.descriptions.as_slice()), path.display());
        Ok(Outcome::Written(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn session() -> (tempfile::TempDir, Blueprint) {
        init_logger();
        let tmp = tempfile::tempdir().unwrap();
        let blueprint = Blueprint::new(BlueprintConfig::builder().docs_root(tmp.path().join("api_docs")).build().unwrap());
        blueprint.before_suite().unwrap();
        (tmp, blueprint)
    }

    fn json_exchange(status: u16) -> (HttpRequest, Option<HttpResponse>) {
        (
            HttpRequest::new("application/json", r#"{"name":"a"}"#, Some("Bearer t")),
            Some(HttpResponse::new(status, "application/json", r#"{"id":1}"#)),
        )
    }

    #[test]
    fn documents_full_exchange() {
        let (_tmp, blueprint) = session();
        let (request, response) = json_exchange(201);
        let ctx = TestCaseContext::new(["UsersController", "Create User", "Create User Requests"], request, response);

        let outcome = blueprint.after_each(&ctx).unwrap();
        let path = match outcome {
            Outcome::Written(path) => path,
            other => panic!("expected a written document, got {other:?}"),
        };
        assert_eq!(path, blueprint.writer().root().join("create_user.txt"));

        let content = fs::read_to_string(path).unwrap();
        let expected = "# Create User\n\n\
            + Request application/json\n\n    \
            + Headers\n    Authorization: Bearer t\n\n    \
            + Body\n\n            {\n              \"name\": \"a\"\n            }\n\n\
            + Response 201 application/json\n\n        {\n          \"id\": 1\n        }\n\n";
        assert_eq!(content, expected);
    }

    #[test]
    fn two_level_chain_uses_outer_description_as_action() {
        let (_tmp, blueprint) = session();
        let (request, response) = json_exchange(201);
        let ctx = TestCaseContext::new(["UsersController", "Create User Requests"], request, response);

        blueprint.after_each(&ctx).unwrap();
        let content = fs::read_to_string(blueprint.writer().path_for("create_user")).unwrap();
        assert!(content.starts_with("# UsersController\n\n"));
    }

    #[test]
    fn minimal_exchange_has_header_and_response_line_only() {
        let (_tmp, blueprint) = session();
        let ctx = TestCaseContext::new(
            ["Create User", "Create User Requests"],
            HttpRequest::new("", "", None),
            Some(HttpResponse::new(200, "text/html", "")),
        );

        assert!(blueprint.after_each(&ctx).unwrap().is_written());
        let content = fs::read_to_string(blueprint.writer().path_for("create_user")).unwrap();
        assert_eq!(content, "# Create User\n\n+ Response 200 text/html\n\n");
    }

    #[test]
    fn excluded_statuses_write_nothing() {
        let (_tmp, blueprint) = session();
        for status in [401, 301, 403] {
            let (request, response) = json_exchange(status);
            let ctx = TestCaseContext::new(["Create User", "Create User Requests"], request, response);

            match blueprint.after_each(&ctx).unwrap() {
                Outcome::Skipped(SkipReason::ExcludedStatus(s)) => assert_eq!(s, status),
                other => panic!("expected skip for {status}, got {other:?}"),
            }
        }
        assert_eq!(fs::read_dir(blueprint.writer().root()).unwrap().count(), 0);
    }

    #[test]
    fn missing_response_writes_nothing() {
        let (_tmp, blueprint) = session();
        let ctx = TestCaseContext::new(["Create User", "Create User Requests"], HttpRequest::default(), None);

        assert!(matches!(
            blueprint.after_each(&ctx).unwrap(),
            Outcome::Skipped(SkipReason::NoResponse)
        ));
        assert_eq!(fs::read_dir(blueprint.writer().root()).unwrap().count(), 0);
    }

    #[test]
    fn naming_violation_is_skipped_and_run_continues() {
        let (_tmp, blueprint) = session();
        let (request, response) = json_exchange(200);
        let bad = TestCaseContext::new(["UsersController", "Nonsense"], request.clone(), response.clone());

        match blueprint.after_each(&bad).unwrap() {
            Outcome::Skipped(SkipReason::Naming(BlueprintError::NamingConventionViolation { description })) => {
                assert_eq!(description, "Nonsense")
            }
            other => panic!("expected naming skip, got {other:?}"),
        }
        assert_eq!(fs::read_dir(blueprint.writer().root()).unwrap().count(), 0);

        let good = TestCaseContext::new(["List Users", "Users Requests"], request, response);
        assert!(blueprint.after_each(&good).unwrap().is_written());
        assert!(blueprint.writer().path_for("users").is_file());
    }

    #[test]
    fn same_identifier_last_write_wins() {
        let (_tmp, blueprint) = session();
        let first = TestCaseContext::new(
            ["List Users", "Users Requests"],
            HttpRequest::default(),
            Some(HttpResponse::new(200, "text/plain", "")),
        );
        let second = TestCaseContext::new(
            ["Create User", "Users Requests"],
            HttpRequest::default(),
            Some(HttpResponse::new(201, "text/plain", "")),
        );

        blueprint.after_each(&first).unwrap();
        blueprint.after_each(&second).unwrap();

        let content = fs::read_to_string(blueprint.writer().path_for("users")).unwrap();
        assert_eq!(content, "# Create User\n\n+ Response 201 text/plain\n\n");
    }

    #[test]
    fn before_suite_clears_previous_run() {
        let (_tmp, blueprint) = session();
        let ctx = TestCaseContext::new(
            ["List Users", "Users Requests"],
            HttpRequest::default(),
            Some(HttpResponse::new(200, "text/plain", "")),
        );
        blueprint.after_each(&ctx).unwrap();
        assert_eq!(fs::read_dir(blueprint.writer().root()).unwrap().count(), 1);

        blueprint.before_suite().unwrap();
        assert_eq!(fs::read_dir(blueprint.writer().root()).unwrap().count(), 0);
    }

    #[test]
    fn write_failure_is_returned_for_that_case_only() {
        init_logger();
        let tmp = tempfile::tempdir().unwrap();
        let blueprint = Blueprint::new(BlueprintConfig::builder().docs_root(tmp.path().join("never_created")).build().unwrap());
        let ctx = TestCaseContext::new(
            ["List Users", "Users Requests"],
            HttpRequest::default(),
            Some(HttpResponse::new(200, "text/plain", "")),
        );

        assert!(matches!(blueprint.after_each(&ctx), Err(BlueprintError::Write { .. })));
    }

    #[test]
    fn document_rendering_is_idempotent() {
        let (_tmp, blueprint) = session();
        let (request, response) = json_exchange(200);
        let ctx = TestCaseContext::new(["Show User", "Users Requests"], request, response);

        let a = blueprint.document(&ctx).unwrap().render();
        let b = blueprint.document(&ctx).unwrap().render();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_config_file_is_a_blueprint_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("blueprint.json");
        fs::write(&path, r#"{ "file_extension": "" }"#).unwrap();

        assert!(matches!(
            Blueprint::from_json_file(&path),
            Err(BlueprintError::InvalidConfig(crate::config::ConfigError::EmptyExtension))
        ));
    }

    #[test]
    fn blueprint_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Blueprint>();
    }
}
