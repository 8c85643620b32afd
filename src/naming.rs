//! Action and file names derived from a test's description chain.
//!
//! A documented request test is expected to be nested like this:
//!
//! ```text
//! UsersController          <- any outer groups
//!   Create User            <- action (second-to-last)
//!     Create User Requests <- file identifier source (last)
//! ```
//!
//! The last description must end with `<word(s)> Requests`; the words in front
//! of `Requests` become the snake-cased file identifier.
use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::BlueprintError;

lazy_static! {
    static ref REQUESTS_SUFFIX: Regex = Regex::new(r"(?i)(\w+(?:\s+\w+)*?)\s+Requests\b").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref ACRONYM_BOUNDARY: Regex = Regex::new(r"([A-Z\d]+)([A-Z][a-z])").unwrap();
    static ref CAMEL_BOUNDARY: Regex = Regex::new(r"([a-z\d])([A-Z])").unwrap();
}

/// Names resolved for a single test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    /// Heading of the document.
    pub action: String,
    /// Output file name, without directory or extension.
    pub file_identifier: String,
}

/// Resolves both names from the description chain (outermost first).
pub fn resolve<S: AsRef<str>>(descriptions: &[S]) -> Result<Naming, BlueprintError> {
    let last: &str = descriptions.last().map(|d| d.as_ref()).unwrap_or("");

    Ok(Naming {
        action: action(descriptions),
        file_identifier: file_identifier(last)?,
    })
}

/// The second-to-last description, or an empty string when the chain is too short.
pub fn action<S: AsRef<str>>(descriptions: &[S]) -> String {
    descriptions
        .len()
        .checked_sub(2)
        .and_then(|idx| descriptions.get(idx))
        .map(|d| d.as_ref().to_string())
        .unwrap_or_default()
}

/// Extracts the snake-cased identifier from a `"<words> Requests"` description.
pub fn file_identifier(description: &str) -> Result<String, BlueprintError> {
    let words = REQUESTS_SUFFIX
        .captures(description)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| BlueprintError::NamingConventionViolation {
            description: description.to_string(),
        })?;

    let joined = WHITESPACE.replace_all(words.as_str(), "_");
    Ok(underscore(&joined))
}

/// Converts a mixed-case identifier into its lowercase, underscore separated form.
///
/// `"CreateUser"` becomes `"create_user"`, `"HTTPRequest"` becomes
/// `"http_request"` and `"Admin::Users"` becomes `"admin/users"`.
pub fn underscore(word: &str) -> String {
    let word = word.replace("::", "/");
    let word = ACRONYM_BOUNDARY.replace_all(&word, "${1}_${2}");
    let word = CAMEL_BOUNDARY.replace_all(&word, "${1}_${2}");
    word.replace('-', "_").to_lowercase()
}
