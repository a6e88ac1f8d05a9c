//! Settings store trait.

use async_trait::async_trait;
use serde_json::Value;

use crate::result::AppResult;

/// Read-only access to named option records held by the host platform.
///
/// A record is an arbitrary JSON value; the legacy plugin settings live in a
/// single record holding an object of key/value pairs.
#[async_trait]
pub trait OptionStore: Send + Sync + 'static {
    /// Fetch an option record by name. `Ok(None)` means it does not exist.
    async fn get_option(&self, name: &str) -> AppResult<Option<Value>>;
}
