use serde_json::{Map, Value};
use thiserror::Error;

use crate::modules::rbga_requests::core::constants::{
    DEFAULT_SOURCE_SYSTEM, FIELD_APPROVER1, FIELD_DESCRIPTION, FIELD_TERM_CHECK,
    FIELD_WORKFLOW_TYPE, ISSUE_TYPE, PRIORITY, PROJECT_KEY, TERM_CHECK_OPTIONS,
    WORKFLOW_TYPE_OPTIONS,
};

const FULL_REQUIRED_FIELDS: [&str; 7] = [
    "summary",
    "pkey",
    "issuetype",
    "applicant",
    "priority",
    "sourceSystem",
    "data",
];
const DRAFT_REQUIRED_FIELDS: [&str; 3] = ["summary", "pkey", "applicant"];
const RBGA_REQUIRED_FIELDS: [&str; 4] = [
    FIELD_TERM_CHECK,
    FIELD_DESCRIPTION,
    FIELD_WORKFLOW_TYPE,
    FIELD_APPROVER1,
];
const APPROVER_REQUIRED_FIELDS: [&str; 2] = ["userid", "description"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request body is required")]
    MissingBody,

    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field {0} must be a string")]
    NotAString(&'static str),

    #[error("pkey must be 'RBGA'")]
    InvalidProjectKey,

    #[error("issuetype must be 'rbga.issuetype.default'")]
    InvalidIssueType,

    #[error("priority must be 'default'")]
    InvalidPriority,

    #[error("data must be an object")]
    DataNotAnObject,

    #[error("Missing required RBGA field: {0}")]
    MissingRbgaField(&'static str),

    #[error("rbga.field.termCheck must be 'yes' or 'no'")]
    InvalidTermCheck,

    #[error("rbga.field.workflowType must be 'Parallel' or 'Serial'")]
    InvalidWorkflowType,

    #[error("rbga.field.approver1 must contain 'approvers' array")]
    MissingApprovers,

    #[error("rbga.field.approver1.approvers must be a non-empty array")]
    EmptyApprovers,

    #[error("Approver {0} must be an object")]
    ApproverNotAnObject(usize),

    #[error("Approver {index} missing required field: {field}")]
    ApproverMissingField { index: usize, field: &'static str },
}

/// A payload that passed validation, with defaults filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub summary: String,
    pub pkey: String,
    pub issuetype: String,
    pub applicant: String,
    pub priority: String,
    pub source_system: String,
    pub data: Map<String, Value>,
}

/// Full validation for `PUT /createrequest/create`. Stops at the first failure.
pub fn validate_full(payload: &Value) -> Result<Submission, ValidationError> {
    let body = request_body(payload)?;
    require_fields(body, &FULL_REQUIRED_FIELDS)?;
    require_project_key(body)?;
    if body.get("issuetype").and_then(Value::as_str) != Some(ISSUE_TYPE) {
        return Err(ValidationError::InvalidIssueType);
    }
    if body.get("priority").and_then(Value::as_str) != Some(PRIORITY) {
        return Err(ValidationError::InvalidPriority);
    }

    let submission = Submission {
        summary: text(body, "summary")?,
        pkey: PROJECT_KEY.to_string(),
        issuetype: ISSUE_TYPE.to_string(),
        applicant: text(body, "applicant")?,
        priority: PRIORITY.to_string(),
        source_system: text(body, "sourceSystem")?,
        data: data(body)?,
    };
    validate_rbga_data(&submission.data)?;
    Ok(submission)
}

/// Relaxed validation for `PUT /createdraftrequest/draft`.
///
/// Only presence of `summary`, `pkey`, `applicant` and the project key are checked;
/// nothing inside `data` is inspected.
pub fn validate_draft(payload: &Value) -> Result<Submission, ValidationError> {
    let body = request_body(payload)?;
    require_fields(body, &DRAFT_REQUIRED_FIELDS)?;
    require_project_key(body)?;

    Ok(Submission {
        summary: text(body, "summary")?,
        pkey: PROJECT_KEY.to_string(),
        issuetype: text_or(body, "issuetype", ISSUE_TYPE)?,
        applicant: text(body, "applicant")?,
        priority: text_or(body, "priority", PRIORITY)?,
        source_system: text_or(body, "sourceSystem", DEFAULT_SOURCE_SYSTEM)?,
        data: match body.get("data") {
            None | Some(Value::Null) => Map::new(),
            Some(_) => data(body)?,
        },
    })
}

fn validate_rbga_data(data: &Map<String, Value>) -> Result<(), ValidationError> {
    for field in RBGA_REQUIRED_FIELDS {
        if !data.contains_key(field) {
            return Err(ValidationError::MissingRbgaField(field));
        }
    }

    let term_check = data.get(FIELD_TERM_CHECK).and_then(Value::as_str);
    if !term_check.is_some_and(|v| TERM_CHECK_OPTIONS.contains(&v)) {
        return Err(ValidationError::InvalidTermCheck);
    }

    let workflow_type = data.get(FIELD_WORKFLOW_TYPE).and_then(Value::as_str);
    if !workflow_type.is_some_and(|v| WORKFLOW_TYPE_OPTIONS.contains(&v)) {
        return Err(ValidationError::InvalidWorkflowType);
    }

    let approvers = data
        .get(FIELD_APPROVER1)
        .and_then(Value::as_object)
        .and_then(|block| block.get("approvers"))
        .ok_or(ValidationError::MissingApprovers)?;
    let approvers = approvers
        .as_array()
        .filter(|list| !list.is_empty())
        .ok_or(ValidationError::EmptyApprovers)?;

    for (index, approver) in approvers.iter().enumerate() {
        let approver = approver
            .as_object()
            .ok_or(ValidationError::ApproverNotAnObject(index))?;
        for field in APPROVER_REQUIRED_FIELDS {
            if !approver.contains_key(field) {
                return Err(ValidationError::ApproverMissingField { index, field });
            }
        }
    }
    Ok(())
}

/// An empty object counts as no body at all.
fn request_body(payload: &Value) -> Result<&Map<String, Value>, ValidationError> {
    payload
        .as_object()
        .filter(|body| !body.is_empty())
        .ok_or(ValidationError::MissingBody)
}

fn require_fields(
    body: &Map<String, Value>,
    fields: &[&'static str],
) -> Result<(), ValidationError> {
    match fields.iter().find(|field| !body.contains_key(**field)) {
        Some(field) => Err(ValidationError::MissingField(*field)),
        None => Ok(()),
    }
}

fn require_project_key(body: &Map<String, Value>) -> Result<(), ValidationError> {
    if body.get("pkey").and_then(Value::as_str) == Some(PROJECT_KEY) {
        Ok(())
    } else {
        Err(ValidationError::InvalidProjectKey)
    }
}

fn text(body: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
    match body.get(field) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(ValidationError::NotAString(field)),
        None => Err(ValidationError::MissingField(field)),
    }
}

fn text_or(
    body: &Map<String, Value>,
    field: &'static str,
    default: &str,
) -> Result<String, ValidationError> {
    match body.get(field) {
        None | Some(Value::Null) => Ok(default.to_string()),
        Some(_) => text(body, field),
    }
}

fn data(body: &Map<String, Value>) -> Result<Map<String, Value>, ValidationError> {
    body.get("data")
        .and_then(Value::as_object)
        .cloned()
        .ok_or(ValidationError::DataNotAnObject)
}
