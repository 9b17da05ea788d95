// Fixed values of the RBGA template.

pub const PROJECT_KEY: &str = "RBGA";
pub const ISSUE_TYPE: &str = "rbga.issuetype.default";
pub const PRIORITY: &str = "default";
pub const DEFAULT_SOURCE_SYSTEM: &str = "WorkON";
pub const APPROVAL_HISTORY_YES: &str = "yes";

pub const FIELD_TERM_CHECK: &str = "rbga.field.termCheck";
pub const FIELD_DESCRIPTION: &str = "rbga.field.description";
pub const FIELD_WORKFLOW_TYPE: &str = "rbga.field.workflowType";
pub const FIELD_APPROVER1: &str = "rbga.field.approver1";
pub const FIELD_ATTACH: &str = "rbga.field.attach";

pub const TERM_CHECK_OPTIONS: [&str; 2] = ["yes", "no"];
pub const WORKFLOW_TYPE_OPTIONS: [&str; 2] = ["Parallel", "Serial"];
