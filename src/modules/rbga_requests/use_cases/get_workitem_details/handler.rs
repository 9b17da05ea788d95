use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::modules::rbga_requests::adapters::outbound::request_store::RequestStore;
use crate::modules::rbga_requests::core::constants::APPROVAL_HISTORY_YES;
use crate::modules::rbga_requests::core::request::{ApprovalAction, RequestStatus};
use crate::modules::rbga_requests::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::{Timestamp, deserialize_text, deserialize_text_list};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailQuery {
    #[serde(
        rename = "approvalHistory",
        default,
        deserialize_with = "deserialize_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub approval_history: Option<String>,
    #[serde(
        rename = "customFields",
        default,
        deserialize_with = "deserialize_text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_fields: Option<Vec<String>>,
    /// Accepted for compatibility with the real API; the mock ignores it.
    #[serde(
        rename = "systemFields",
        default,
        deserialize_with = "deserialize_text_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub system_fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItemDetail {
    pub key: String,
    pub summary: String,
    pub status: RequestStatus,
    pub resolution: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(rename = "approvalHistory", skip_serializing_if = "Option::is_none")]
    pub approval_history: Option<Vec<ApprovalAction>>,
    #[serde(rename = "customFields", skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
}

pub async fn get_workitem_detail(
    store: &dyn RequestStore,
    key: &str,
    query: &DetailQuery,
) -> Result<WorkItemDetail, ApplicationError> {
    let record = store
        .get(key)
        .await?
        .ok_or_else(|| ApplicationError::RequestNotFound(key.to_string()))?;

    let approval_history = (query.approval_history.as_deref() == Some(APPROVAL_HISTORY_YES))
        .then(|| record.approvals.clone());

    // A non-empty field selection replaces the full data map; unknown names are dropped.
    let (custom_fields, data) = match query.custom_fields.as_deref() {
        Some(fields) if !fields.is_empty() => {
            let selected = fields
                .iter()
                .filter_map(|field| {
                    record
                        .data
                        .get(field)
                        .map(|value| (field.clone(), value.clone()))
                })
                .collect();
            (Some(selected), None)
        }
        _ => (None, Some(record.data)),
    };

    Ok(WorkItemDetail {
        key: record.key,
        summary: record.summary,
        status: record.status,
        resolution: record.resolution,
        created_at: record.created_at,
        updated_at: record.updated_at,
        approval_history,
        custom_fields,
        data,
    })
}

#[cfg(test)]
mod get_workitem_detail_handler_tests {
    use super::*;
    use crate::modules::rbga_requests::adapters::outbound::request_store_in_memory::InMemoryRequestStore;
    use crate::modules::rbga_requests::adapters::outbound::sample_seed::{
        SAMPLE_REQUEST_KEY, seed_sample_request,
    };
    use crate::tests::fixtures::requests::NewRequestBuilder;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    async fn seeded_store() -> InMemoryRequestStore {
        let store = InMemoryRequestStore::new();
        seed_sample_request(&store).await;
        store
    }

    fn query(approval_history: Option<&str>, custom_fields: Option<Vec<&str>>) -> DetailQuery {
        DetailQuery {
            approval_history: approval_history.map(str::to_string),
            custom_fields: custom_fields
                .map(|fields| fields.into_iter().map(str::to_string).collect()),
            system_fields: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_full_data_map_by_default(
        #[future] seeded_store: InMemoryRequestStore,
    ) {
        let store = seeded_store.await;
        let detail = get_workitem_detail(&store, SAMPLE_REQUEST_KEY, &DetailQuery::default())
            .await
            .unwrap();

        assert_eq!(detail.key, SAMPLE_REQUEST_KEY);
        assert_eq!(detail.status, RequestStatus::InReview);
        assert!(detail.approval_history.is_none());
        assert!(detail.custom_fields.is_none());
        assert_eq!(detail.data.unwrap()["common.field.employee.location"], "Stuttgart");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_include_history_only_when_asked_with_yes(
        #[future] seeded_store: InMemoryRequestStore,
    ) {
        let store = seeded_store.await;
        let with = get_workitem_detail(&store, SAMPLE_REQUEST_KEY, &query(Some("yes"), None))
            .await
            .unwrap();
        let without = get_workitem_detail(&store, SAMPLE_REQUEST_KEY, &query(Some("no"), None))
            .await
            .unwrap();

        assert_eq!(with.approval_history.unwrap()[0].comment, "Initial submission");
        assert!(without.approval_history.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_select_only_present_custom_fields(
        #[future] seeded_store: InMemoryRequestStore,
    ) {
        let store = seeded_store.await;
        let fields = vec!["rbga.field.description", "common.field.employee.companycode"];
        let detail = get_workitem_detail(&store, SAMPLE_REQUEST_KEY, &query(None, Some(fields)))
            .await
            .unwrap();

        let custom = detail.custom_fields.unwrap();
        assert_eq!(custom.len(), 1);
        assert_eq!(
            custom["rbga.field.description"],
            json!("Sample RBGA request for testing mock server")
        );
        assert!(detail.data.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_an_empty_selection_when_the_field_is_absent() {
        let store = InMemoryRequestStore::new();
        let record = store
            .create(NewRequestBuilder::new().draft().build())
            .await
            .unwrap();

        let fields = vec!["rbga.field.description"];
        let detail = get_workitem_detail(&store, &record.key, &query(None, Some(fields)))
            .await
            .unwrap();
        assert_eq!(detail.custom_fields, Some(Map::new()));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_treat_an_empty_selection_as_no_selection(
        #[future] seeded_store: InMemoryRequestStore,
    ) {
        let store = seeded_store.await;
        let detail = get_workitem_detail(&store, SAMPLE_REQUEST_KEY, &query(None, Some(vec![])))
            .await
            .unwrap();
        assert!(detail.custom_fields.is_none());
        assert!(detail.data.is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_unknown_key() {
        let store = InMemoryRequestStore::new();
        let result = get_workitem_detail(&store, "RBGA-2", &DetailQuery::default()).await;
        assert_eq!(result, Err(ApplicationError::RequestNotFound("RBGA-2".into())));
    }
}
