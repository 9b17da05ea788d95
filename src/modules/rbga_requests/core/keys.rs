use uuid::Uuid;

use crate::modules::rbga_requests::core::constants::PROJECT_KEY;

const DRAFT_TOKEN_LEN: usize = 8;

/// Next sequential key: one past the highest numeric suffix among `existing`.
///
/// Only keys of the form `RBGA-<integer>` count; draft keys and anything else
/// with a non-numeric remainder are ignored.
pub fn next_key<'a>(existing: impl IntoIterator<Item = &'a str>) -> String {
    let prefix = format!("{PROJECT_KEY}-");
    let max = existing
        .into_iter()
        .filter_map(|key| key.strip_prefix(prefix.as_str()))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{prefix}{}", max + 1)
}

/// `RBGA-DRAFT-` followed by eight random uppercase hex characters.
pub fn draft_key() -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!(
        "{PROJECT_KEY}-DRAFT-{}",
        token[..DRAFT_TOKEN_LEN].to_ascii_uppercase()
    )
}
