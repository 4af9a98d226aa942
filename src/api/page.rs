//! List response normalization
//!
//! Collection endpoints answer either with a paginated envelope
//! `{count, next, previous, results}` or with a bare array. Both shapes are
//! reduced to the plain sequence of records; only the first page is read.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AccountsError, AccountsResult};

/// Metadata of a paginated envelope, kept for logging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub count: Option<u64>,
    pub has_next: bool,
}

/// Reduce a list body to its records
///
/// A `null` body, an envelope without `results`, and `results: null` all
/// normalize to an empty list. Anything else that is not an array or an
/// object is a JSON error.
pub fn normalize_list<T: DeserializeOwned>(body: Value) -> AccountsResult<(Vec<T>, PageInfo)> {
    match body {
        Value::Null => Ok((Vec::new(), PageInfo::default())),
        Value::Array(_) => Ok((serde_json::from_value(body)?, PageInfo::default())),
        Value::Object(mut envelope) => {
            let info = PageInfo {
                count: envelope.get("count").and_then(Value::as_u64),
                has_next: envelope.get("next").is_some_and(|next| !next.is_null()),
            };
            let records = match envelope.remove("results") {
                None | Some(Value::Null) => Vec::new(),
                Some(results) => serde_json::from_value(results)?,
            };
            Ok((records, info))
        }
        other => Err(AccountsError::Json(format!(
            "Expected a list or a paginated envelope, got: {}",
            other
        ))),
    }
}
