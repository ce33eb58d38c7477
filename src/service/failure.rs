//! Classification of non-success responses.
//!
//! The service reports failures as JSON carrying an `errorMessage`. For its
//! internal errors (HTTP 500) `errors` is an object with a nested `message`;
//! for request problems it is a list of `{field, message}` records naming the
//! offending query parameter.

use crate::transport::TransportResponse;
use serde::Deserialize;
use std::fmt;

/// Status the service uses for its own internal failures.
pub const SERVER_ERROR_STATUS: u16 = 500;

/// Query parameter names mapped to the command-line argument that sets them.
pub const FIELD_ARGUMENTS: &[(&str, &str)] = &[("startDate", "start"), ("endDate", "end")];

/// The command-line argument behind a service query field, if any.
pub fn argument_for_field(field: &str) -> Option<&'static str> {
    FIELD_ARGUMENTS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, argument)| *argument)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureDetail {
    /// Internal service error with its nested detail message.
    Server(Option<String>),
    /// Request rejected because of specific query fields.
    Fields(Vec<FieldError>),
    None,
}

/// A non-success response, decoded as far as the body allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceFailure {
    pub status: u16,
    pub message: String,
    pub detail: FailureDetail,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error_message: Option<String>,
    errors: Option<ErrorDetails>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorDetails {
    Fields(Vec<FieldError>),
    Nested { message: Option<String> },
}

const MAX_RAW_MESSAGE: usize = 300;

impl ServiceFailure {
    pub fn classify(response: &TransportResponse) -> Self {
        let body: Option<ErrorBody> = serde_json::from_str(&response.body).ok();
        let (message, details) = match body {
            Some(body) => (body.error_message, body.errors),
            None => (None, None),
        };
        let message = message.unwrap_or_else(|| fallback_message(&response.body));

        let detail = if response.status == SERVER_ERROR_STATUS {
            let nested = match details {
                Some(ErrorDetails::Nested { message }) => message,
                Some(ErrorDetails::Fields(fields)) => {
                    fields.into_iter().next().map(|field| field.message)
                }
                None => None,
            };
            FailureDetail::Server(nested)
        } else {
            match details {
                Some(ErrorDetails::Fields(fields)) if !fields.is_empty() => {
                    FailureDetail::Fields(fields)
                }
                _ => FailureDetail::None,
            }
        };

        Self {
            status: response.status,
            message,
            detail,
        }
    }

    /// Whether the service blamed a specific query field.
    pub fn is_field_error(&self) -> bool {
        matches!(self.detail, FailureDetail::Fields(_))
    }

    /// User-facing lines describing the failure, most general first.
    pub fn diagnostics(&self) -> Vec<String> {
        let mut lines = vec![format!("{}: {}", self.status, self.message)];
        match &self.detail {
            FailureDetail::Server(Some(nested)) => lines.push(nested.clone()),
            FailureDetail::Server(None) | FailureDetail::None => {}
            FailureDetail::Fields(fields) => {
                for error in fields {
                    lines.push(match argument_for_field(&error.field) {
                        Some(argument) => format!(
                            "Error in field {argument}: check input argument(s) '{argument}' and try again."
                        ),
                        None => format!(
                            "Error in field {}: {}. Check station ID.",
                            error.field,
                            error.message.trim_end_matches('.')
                        ),
                    });
                }
            }
        }
        lines
    }
}

fn fallback_message(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return "no error message returned".to_string();
    }
    match body.char_indices().nth(MAX_RAW_MESSAGE) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

impl fmt::Display for ServiceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagnostics().join(" "))
    }
}
