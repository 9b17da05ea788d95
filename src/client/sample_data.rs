use serde_json::{Map, Value, json};

fn approver_block(userids: &[&str]) -> Value {
    let approvers: Vec<Value> = userids
        .iter()
        .map(|userid| {
            json!({
                "addAfterEnabled": true,
                "deleteFlag": "Yes",
                "description": "",
                "fixed": false,
                "removable": true,
                "userid": userid,
                "ccList": ""
            })
        })
        .collect();
    json!({
        "approvers": approvers,
        "checkDuplicate": "false",
        "maxApprover": "20",
        "type": "1"
    })
}

/// A complete RBGA `data` map that passes full validation.
pub fn sample_rbga_data() -> Map<String, Value> {
    let data = json!({
        "common.field.employee.firstname": "John",
        "common.field.employee.lastname": "Doe",
        "common.field.employee.department": "IT",
        "common.field.employee.costcenter": "CC001",
        "common.field.employee.location": "Stuttgart",
        "rbga.field.termCheck": "yes",
        "rbga.field.description": "Request for new software licenses",
        "rbga.field.comments": "Urgent approval needed for project",
        "rbga.field.workflowType": "Serial",
        "rbga.field.wf2": "Serial",
        "rbga.field.wf3": "Serial",
        "rbga.field.parallelWorkflowSel": "Only one Approver has to approve",
        "rbga.field.parallelWorkflowSel2": "Only one Approver has to approve",
        "rbga.field.parallelWorkflowSel3": "Only one Approver has to approve",
        "rbga.field.tempNew": "New Request",
        "rbga.field.approvalstep": "One Step Approval",
        "rbga.field.externalLink": "https://www.example.com",
        "rbga.field.additionalFields": [
            {"fields": "Target revision", "details": "Value1"},
            {"fields": "Preview link", "details": "https://www.example.com"}
        ],
        "rbga.field.attach": [{"filename": "filename.ext", "file": "Base64EncodedString"}],
        "rbga.field.approver1": approver_block(&["approver.one", "approver.two"]),
        "rbga.field.whenApproved": approver_block(&["approver.one"]),
        "rbga.field.whenDeclined": approver_block(&["approver.one"])
    });
    data.as_object().cloned().unwrap_or_default()
}

/// Input document understood by `workon create`.
pub fn sample_input_document(source_system: &str) -> Value {
    json!({
        "summary": "Request for Software License Approval",
        "applicant": "john.doe",
        "sourceSystem": source_system,
        "data": sample_rbga_data()
    })
}
