use serde::{Deserialize, Serialize};

use crate::shared::core::primitives::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentRecord {
    pub id: String,
    pub filename: String,
    pub file: String,
    pub request_key: String,
    pub created_at: Timestamp,
}

/// Attachment shape returned to API callers (no owning key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentView {
    pub id: String,
    pub filename: String,
    pub file: String,
    pub created_at: Timestamp,
}

impl From<AttachmentRecord> for AttachmentView {
    fn from(record: AttachmentRecord) -> Self {
        Self {
            id: record.id,
            filename: record.filename,
            file: record.file,
            created_at: record.created_at,
        }
    }
}

/// First attachment, in insertion order, whose filename equals `name` or whose id equals `id`.
/// Empty criteria match nothing.
pub fn find_by_name_or_id<'a>(
    attachments: impl IntoIterator<Item = &'a AttachmentRecord>,
    name: Option<&str>,
    id: Option<&str>,
) -> Option<&'a AttachmentRecord> {
    let name = name.filter(|name| !name.is_empty());
    let id = id.filter(|id| !id.is_empty());
    attachments.into_iter().find(|attachment| {
        name.is_some_and(|name| attachment.filename == name)
            || id.is_some_and(|id| attachment.id == id)
    })
}
