use serde::{Deserialize, Serialize};

/// The mock answers every status lookup with this table, whatever the request's state.
pub const LOCALIZED_STATUS: [(&str, &str); 5] = [
    ("es_ES", "Cerrado"),
    ("ja_JP", "クローズ済み"),
    ("ko_KR", "종료"),
    ("en_UK", "Closed"),
    ("de_DE", "Abgeschlossen"),
];

pub const STATUS_RESOLUTION: &str = "Approved";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedStatus {
    #[serde(rename = "i8nValue")]
    pub i8n_value: String,
    #[serde(rename = "localeName")]
    pub locale_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Vec<LocalizedStatus>,
    #[serde(rename = "requestKey")]
    pub request_key: String,
    pub resolution: String,
}

impl StatusResponse {
    pub fn for_request(request_key: impl Into<String>) -> Self {
        Self {
            status: LOCALIZED_STATUS
                .iter()
                .map(|(locale, value)| LocalizedStatus {
                    i8n_value: value.to_string(),
                    locale_name: locale.to_string(),
                })
                .collect(),
            request_key: request_key.into(),
            resolution: STATUS_RESOLUTION.to_string(),
        }
    }
}
