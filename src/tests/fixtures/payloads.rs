use serde_json::{Map, Value, json};

const CREATE_RBGA_REQUEST: &str = include_str!("json/create_rbga_request.json");

/// Builds JSON bodies for the create endpoints, starting from a payload that passes full validation.
pub struct RbgaPayloadBuilder {
    inner: Map<String, Value>,
}

impl Default for RbgaPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RbgaPayloadBuilder {
    pub fn new() -> Self {
        let inner = serde_json::from_str(CREATE_RBGA_REQUEST).unwrap();
        Self { inner }
    }

    pub fn with(mut self, field: &str, value: Value) -> Self {
        self.inner.insert(field.to_string(), value);
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        self.inner.shift_remove(field);
        self
    }

    pub fn with_data(mut self, field: &str, value: Value) -> Self {
        self.data_mut().insert(field.to_string(), value);
        self
    }

    pub fn without_data(mut self, field: &str) -> Self {
        self.data_mut().shift_remove(field);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.inner)
    }

    fn data_mut(&mut self) -> &mut Map<String, Value> {
        self.inner
            .entry("data")
            .or_insert_with(|| json!({}))
            .as_object_mut()
            .unwrap()
    }
}

/// The smallest body the draft endpoint accepts.
pub fn draft_payload() -> Value {
    json!({
        "summary": "Draft budget request",
        "pkey": "RBGA",
        "applicant": "john.doe"
    })
}
