// Static description of the RBGA template: field catalogue and a sample payload.

use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::modules::rbga_requests::core::constants::{
    DEFAULT_SOURCE_SYSTEM, ISSUE_TYPE, PRIORITY, PROJECT_KEY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Enum,
    Array,
    Object,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    #[serde(skip)]
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "has_no_options")]
    pub options: &'static [&'static str],
    pub required: bool,
}

fn has_no_options(options: &&'static [&'static str]) -> bool {
    options.is_empty()
}

const fn field(name: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        options: &[],
        required,
    }
}

const fn choice(
    name: &'static str,
    options: &'static [&'static str],
    required: bool,
) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Enum,
        options,
        required,
    }
}

const WORKFLOW: &[&str] = &["Parallel", "Serial"];
const PARALLEL_SELECTION: &[&str] = &[
    "One approver approves the request",
    "All the Approvers has to approve",
];

pub const RBGA_FIELDS: [FieldSpec; 21] = [
    field("common.field.employee.firstname", FieldKind::String, false),
    field("common.field.employee.lastname", FieldKind::String, false),
    field("common.field.employee.department", FieldKind::String, false),
    field("common.field.employee.costcenter", FieldKind::String, false),
    field("common.field.employee.location", FieldKind::String, false),
    choice("rbga.field.termCheck", &["yes", "no"], true),
    field("rbga.field.description", FieldKind::String, true),
    field("rbga.field.comments", FieldKind::String, false),
    choice("rbga.field.workflowType", WORKFLOW, true),
    choice("rbga.field.wf2", WORKFLOW, false),
    choice("rbga.field.wf3", WORKFLOW, false),
    choice("rbga.field.parallelWorkflowSel", PARALLEL_SELECTION, false),
    choice("rbga.field.parallelWorkflowSel2", PARALLEL_SELECTION, false),
    choice("rbga.field.parallelWorkflowSel3", PARALLEL_SELECTION, false),
    choice("rbga.field.tempNew", &["New Request"], false),
    choice(
        "rbga.field.approvalstep",
        &["One Step Approval", "Multi Step Approval"],
        false,
    ),
    field("rbga.field.additionalFields", FieldKind::Array, false),
    field("rbga.field.approver1", FieldKind::Object, true),
    field("rbga.field.attach", FieldKind::Array, false),
    field("rbga.field.item", FieldKind::Array, false),
    field("rbga.field.grid", FieldKind::Array, false),
];

pub fn data_fields() -> Map<String, Value> {
    RBGA_FIELDS
        .iter()
        .map(|spec| {
            (
                spec.name.to_string(),
                serde_json::to_value(spec).unwrap_or(Value::Null),
            )
        })
        .collect()
}

pub fn sample_payload() -> Value {
    json!({
        "summary": "Request for Substitution",
        "pkey": PROJECT_KEY,
        "issuetype": ISSUE_TYPE,
        "applicant": "ntid",
        "priority": PRIORITY,
        "sourceSystem": DEFAULT_SOURCE_SYSTEM,
        "data": {
            "common.field.employee.firstname": "firstName",
            "common.field.employee.lastname": "lastname",
            "common.field.employee.department": "department",
            "common.field.employee.costcenter": "costcenter",
            "common.field.employee.location": "location",
            "rbga.field.termCheck": "yes",
            "rbga.field.description": "Detailed Description for the request",
            "rbga.field.comments": "Comments",
            "rbga.field.workflowType": "Parallel",
            "rbga.field.wf2": "Serial",
            "rbga.field.wf3": "Serial",
            "rbga.field.parallelWorkflowSel": "One approver approves the request",
            "rbga.field.parallelWorkflowSel2": "All the Approvers has to approve",
            "rbga.field.parallelWorkflowSel3": "All the Approvers has to approve",
            "rbga.field.tempNew": "New Request",
            "rbga.field.approvalstep": "One Step Approval",
            "rbga.field.additionalFields": [{"fields": "fieldname", "details": "value"}],
            "rbga.field.approver1": {
                "approvers": [{
                    "addAfterEnabled": true,
                    "deleteFlag": "Yes",
                    "description": "Manager",
                    "fixed": false,
                    "removable": true,
                    "userid": "ntid",
                    "ccList": "ntid"
                }],
                "checkDuplicate": "false",
                "maxApprover": "20",
                "type": "1"
            },
            "rbga.field.attach": [{"filename": "example.pdf", "file": "Base64EncodedString"}]
        }
    })
}

pub fn template_description() -> Value {
    json!({
        "template_name": PROJECT_KEY,
        "description": "Request for Budget, Governance & Approval template",
        "version": "1.0",
        "application_key": PROJECT_KEY,
        "issue_type": ISSUE_TYPE,
        "required_fields": {
            "summary": {"type": "string", "description": "Summary of the Workitem"},
            "pkey": {"type": "string", "value": PROJECT_KEY, "description": "Application Key"},
            "issuetype": {"type": "string", "value": ISSUE_TYPE, "description": "IssueType of Workitem"},
            "applicant": {
                "type": "string",
                "description": "NT id of the applicant who creates the request in lower case"
            },
            "priority": {"type": "string", "value": PRIORITY, "description": "Priority of Workitem : default in workon"},
            "sourceSystem": {"type": "string", "description": "Your System Name (which calls this API)"}
        },
        "data_fields": data_fields(),
        "sample_payload": sample_payload(),
    })
}
