//! JSON-file backed option store.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use faqdesk_core::error::AppError;
use faqdesk_core::result::AppResult;
use faqdesk_core::traits::OptionStore;

/// Option records read once from a JSON object of `name → value`.
#[derive(Debug, Clone, Default)]
pub struct JsonOptionStore {
    /// Records by option name.
    records: HashMap<String, Value>,
}

impl JsonOptionStore {
    /// Creates a store with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a store from a JSON object.
    pub fn from_value(value: Value) -> AppResult<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                records: map.into_iter().collect(),
            }),
            other => Err(AppError::validation(format!(
                "Options document must be a JSON object, got {}",
                kind_name(&other)
            ))),
        }
    }

    /// Loads the store from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::read_failed("options", path, e))?;

        let store = Self::from_value(serde_json::from_str(&raw)?)?;
        info!(path = %path.display(), records = store.records.len(), "Loaded option records");
        Ok(store)
    }

    /// Sets a record, replacing any previous value.
    pub fn with_record(mut self, name: impl Into<String>, value: Value) -> Self {
        self.records.insert(name.into(), value);
        self
    }
}

#[async_trait]
impl OptionStore for JsonOptionStore {
    async fn get_option(&self, name: &str) -> AppResult<Option<Value>> {
        Ok(self.records.get(name).cloned())
    }
}

/// Short JSON type name for error messages.
fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
