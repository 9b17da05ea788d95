use serde::{Deserialize, Serialize};

use crate::modules::rbga_requests::adapters::outbound::request_store::{
    AttachmentStore, RequestStore,
};
use crate::modules::rbga_requests::core::attachment::AttachmentView;
use crate::modules::rbga_requests::use_cases::errors::ApplicationError;
use crate::shared::core::primitives::{deserialize_flag, deserialize_text};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AttachmentQuery {
    /// NT id of the caller; recorded in logs only.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub user: Option<String>,
    #[serde(rename = "sendAll", default, deserialize_with = "deserialize_flag")]
    pub send_all: bool,
    #[serde(rename = "attachmentName", default, deserialize_with = "deserialize_text")]
    pub attachment_name: Option<String>,
    #[serde(rename = "attachmentId", default, deserialize_with = "deserialize_text")]
    pub attachment_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttachmentsResponse {
    All {
        attachments: Vec<AttachmentView>,
        count: usize,
    },
    One {
        attachment: AttachmentView,
    },
}

pub async fn get_workitem_attachments(
    requests: &dyn RequestStore,
    attachments: &dyn AttachmentStore,
    key: &str,
    query: &AttachmentQuery,
) -> Result<AttachmentsResponse, ApplicationError> {
    if requests.get(key).await?.is_none() {
        return Err(ApplicationError::RequestNotFound(key.to_string()));
    }
    tracing::debug!(key, user = ?query.user, send_all = query.send_all, "attachments requested");

    if query.send_all {
        let all: Vec<AttachmentView> = attachments
            .list_for(key)
            .await?
            .into_iter()
            .map(AttachmentView::from)
            .collect();
        return Ok(AttachmentsResponse::All {
            count: all.len(),
            attachments: all,
        });
    }

    attachments
        .find_by_name_or_id(
            key,
            query.attachment_name.as_deref(),
            query.attachment_id.as_deref(),
        )
        .await?
        .map(|attachment| AttachmentsResponse::One {
            attachment: attachment.into(),
        })
        .ok_or(ApplicationError::AttachmentNotFound)
}

#[cfg(test)]
mod get_workitem_attachments_handler_tests {
    use super::*;
    use crate::modules::rbga_requests::adapters::outbound::request_store_in_memory::InMemoryRequestStore;
    use crate::modules::rbga_requests::core::request::NewAttachment;
    use crate::tests::fixtures::requests::NewRequestBuilder;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (InMemoryRequestStore, String);

    #[fixture]
    async fn before_each() -> BeforeEachReturn {
        let store = InMemoryRequestStore::new();
        let record = store
            .create(
                NewRequestBuilder::new()
                    .attachments(vec![
                        NewAttachment {
                            filename: "offer.pdf".into(),
                            file: "T0ZGRVI=".into(),
                        },
                        NewAttachment {
                            filename: "cv.pdf".into(),
                            file: "Q1Y=".into(),
                        },
                    ])
                    .build(),
            )
            .await
            .unwrap();
        (store, record.key)
    }

    fn by_name(name: &str) -> AttachmentQuery {
        AttachmentQuery {
            attachment_name: Some(name.to_string()),
            ..AttachmentQuery::default()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_every_attachment_with_a_count(
        #[future] before_each: BeforeEachReturn,
    ) {
        let (store, key) = before_each.await;
        let query = AttachmentQuery {
            send_all: true,
            ..AttachmentQuery::default()
        };

        match get_workitem_attachments(&store, &store, &key, &query).await.unwrap() {
            AttachmentsResponse::All { attachments, count } => {
                assert_eq!(count, 2);
                assert_eq!(attachments[0].filename, "offer.pdf");
                assert_eq!(attachments[1].filename, "cv.pdf");
            }
            other => panic!("expected All, got {other:?}"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_an_empty_list_when_nothing_is_attached() {
        let store = InMemoryRequestStore::new();
        let record = store.create(NewRequestBuilder::new().build()).await.unwrap();
        let query = AttachmentQuery {
            send_all: true,
            ..AttachmentQuery::default()
        };

        let response = get_workitem_attachments(&store, &store, &record.key, &query)
            .await
            .unwrap();
        assert_eq!(
            response,
            AttachmentsResponse::All {
                attachments: vec![],
                count: 0
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_a_single_attachment_by_name_or_id(
        #[future] before_each: BeforeEachReturn,
    ) {
        let (store, key) = before_each.await;

        let by_name = get_workitem_attachments(&store, &store, &key, &by_name("cv.pdf"))
            .await
            .unwrap();
        let AttachmentsResponse::One { attachment } = by_name else {
            panic!("expected One");
        };
        assert_eq!(attachment.file, "Q1Y=");

        let by_id = AttachmentQuery {
            attachment_id: Some(attachment.id.clone()),
            ..AttachmentQuery::default()
        };
        let found = get_workitem_attachments(&store, &store, &key, &by_id)
            .await
            .unwrap();
        assert_eq!(found, AttachmentsResponse::One { attachment });
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_missing_attachment(#[future] before_each: BeforeEachReturn) {
        let (store, key) = before_each.await;

        let missing = get_workitem_attachments(&store, &store, &key, &by_name("nope.pdf")).await;
        assert_eq!(missing, Err(ApplicationError::AttachmentNotFound));

        let no_criteria =
            get_workitem_attachments(&store, &store, &key, &AttachmentQuery::default()).await;
        assert_eq!(no_criteria, Err(ApplicationError::AttachmentNotFound));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_an_unknown_request() {
        let store = InMemoryRequestStore::new();
        let result =
            get_workitem_attachments(&store, &store, "RBGA-3", &AttachmentQuery::default()).await;
        assert_eq!(result, Err(ApplicationError::RequestNotFound("RBGA-3".into())));
    }
}
