use chrono::Duration;
use serde_json::json;

use crate::modules::rbga_requests::adapters::outbound::request_store_in_memory::InMemoryRequestStore;
use crate::modules::rbga_requests::core::constants::{
    DEFAULT_SOURCE_SYSTEM, ISSUE_TYPE, PRIORITY, PROJECT_KEY,
};
use crate::modules::rbga_requests::core::request::{ApprovalAction, RequestRecord, RequestStatus};
use crate::shared::core::primitives::now;

pub const SAMPLE_REQUEST_KEY: &str = "RBGA-1";

/// A request already under manager review, with one history entry.
pub fn sample_request() -> RequestRecord {
    let updated_at = now();
    let created_at = updated_at - Duration::hours(2);
    let data = json!({
        "common.field.employee.firstname": "John",
        "common.field.employee.lastname": "Doe",
        "common.field.employee.department": "IT",
        "common.field.employee.costcenter": "CC001",
        "common.field.employee.location": "Stuttgart",
        "rbga.field.termCheck": "yes",
        "rbga.field.description": "Sample RBGA request for testing mock server",
        "rbga.field.comments": "This is a test request",
        "rbga.field.workflowType": "Parallel",
        "rbga.field.approver1": {
            "approvers": [{
                "addAfterEnabled": true,
                "deleteFlag": "Yes",
                "description": "Test Manager",
                "fixed": false,
                "removable": true,
                "userid": "manager.test",
                "ccList": "cc.test"
            }],
            "checkDuplicate": "false",
            "maxApprover": "20",
            "type": "1"
        }
    });

    RequestRecord {
        key: SAMPLE_REQUEST_KEY.to_string(),
        summary: "Sample RBGA Request for Testing".to_string(),
        pkey: PROJECT_KEY.to_string(),
        issuetype: ISSUE_TYPE.to_string(),
        applicant: "test.user".to_string(),
        priority: PRIORITY.to_string(),
        source_system: DEFAULT_SOURCE_SYSTEM.to_string(),
        data: data.as_object().cloned().unwrap_or_default(),
        created_at,
        updated_at,
        status: RequestStatus::InReview,
        resolution: None,
        workflow_stage: "Manager Approval".to_string(),
        approvals: vec![ApprovalAction {
            action: "submit".to_string(),
            user: "test.user".to_string(),
            comment: "Initial submission".to_string(),
            timestamp: created_at,
        }],
        attachment_ids: None,
        is_draft: false,
    }
}

pub async fn seed_sample_request(store: &InMemoryRequestStore) {
    store.seed(sample_request()).await;
    tracing::info!(key = SAMPLE_REQUEST_KEY, "sample request seeded");
}

#[cfg(test)]
mod sample_seed_tests {
    use super::*;
    use crate::modules::rbga_requests::adapters::outbound::request_store::RequestStore;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_seed_a_request_in_review_with_history() {
        let store = InMemoryRequestStore::new();
        seed_sample_request(&store).await;

        let record = store.get(SAMPLE_REQUEST_KEY).await.unwrap().unwrap();
        assert_eq!(record.status, RequestStatus::InReview);
        assert_eq!(record.workflow_stage, "Manager Approval");
        assert_eq!(record.approvals.len(), 1);
        assert_eq!(record.approvals[0].action, "submit");
        assert!(record.created_at < record.updated_at);
    }
}
