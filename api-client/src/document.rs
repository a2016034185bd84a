use rest_client::{json_body, Serializable, ServiceError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schemaless JSON resource, for endpoints without a dedicated model type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(pub Value);

impl Document {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(Self(serde_json::from_str(text)?))
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl Serializable for Document {
    fn to_body(&self) -> Result<String, ServiceError> {
        json_body(&self.0)
    }
}
