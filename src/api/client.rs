//! HTTP client for the bookkeeping REST API
//!
//! Every resource follows the same conventions: `GET {resource}/` lists,
//! `POST {resource}/` creates, and `{resource}/{id}/` addresses one record.
//! Trailing slashes are part of the routes.

use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::page::normalize_list;
use crate::config::Settings;
use crate::error::{AccountsError, AccountsResult};
use crate::models::{
    Entity, EntityId, EntityKind, EntityPayload, Transaction, TransactionId, TransactionPatch,
    TransactionPayload,
};

const TRANSACTIONS: &str = "transactions";

#[derive(Debug, Deserialize)]
struct Created {
    id: TransactionId,
}

/// Client for the bookkeeping backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client rooted at `base_url` (e.g. `http://127.0.0.1:8000/api/`)
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AccountsResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AccountsError::Config(format!("Failed to build HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Creates a client from the user's settings
    pub fn from_settings(settings: &Settings) -> AccountsResult<Self> {
        settings.validate()?;
        Self::new(
            settings.api_url.clone(),
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, resource: &str) -> String {
        format!("{}/{}/", self.base_url, resource)
    }

    fn item_url(&self, resource: &str, id: u64) -> String {
        format!("{}/{}/{}/", self.base_url, resource, id)
    }

    async fn get_list<T: DeserializeOwned>(&self, resource: &str) -> AccountsResult<Vec<T>> {
        let url = self.collection_url(resource);
        tracing::debug!(%url, "GET");

        let response = check_status(self.client.get(&url).send().await?).await?;
        let body: Value = response.json().await?;
        let (records, page) = normalize_list(body)?;

        if page.has_next {
            tracing::debug!(
                resource,
                count = ?page.count,
                received = records.len(),
                "only the first page of results was read"
            );
        }
        Ok(records)
    }

    async fn get_item<T: DeserializeOwned>(&self, resource: &str, id: u64) -> AccountsResult<T> {
        let url = self.item_url(resource, id);
        tracing::debug!(%url, "GET");

        let response = check_status(self.client.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn send_json<B, T>(&self, method: Method, url: String, body: &B) -> AccountsResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(%url, %method, "sending");
        let response = self.client.request(method, &url).json(body).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, resource: &str, id: u64) -> AccountsResult<()> {
        let url = self.item_url(resource, id);
        tracing::debug!(%url, "DELETE");

        check_status(self.client.delete(&url).send().await?).await?;
        Ok(())
    }

    // Reference entities

    pub async fn list_entities(&self, kind: EntityKind) -> AccountsResult<Vec<Entity>> {
        self.get_list(kind.resource()).await
    }

    pub async fn get_entity(&self, kind: EntityKind, id: EntityId) -> AccountsResult<Entity> {
        self.get_item(kind.resource(), id.get())
            .await
            .map_err(|e| not_found_as(e, kind.label(), id.to_string()))
    }

    pub async fn create_entity(
        &self,
        kind: EntityKind,
        payload: &EntityPayload,
    ) -> AccountsResult<Entity> {
        let entity: Entity = self
            .send_json(Method::POST, self.collection_url(kind.resource()), payload)
            .await?;
        tracing::info!(kind = %kind, id = %entity.id, "created");
        Ok(entity)
    }

    pub async fn update_entity(
        &self,
        kind: EntityKind,
        id: EntityId,
        payload: &EntityPayload,
    ) -> AccountsResult<Entity> {
        let entity: Entity = self
            .send_json(Method::PUT, self.item_url(kind.resource(), id.get()), payload)
            .await
            .map_err(|e| not_found_as(e, kind.label(), id.to_string()))?;
        tracing::info!(kind = %kind, %id, "updated");
        Ok(entity)
    }

    pub async fn delete_entity(&self, kind: EntityKind, id: EntityId) -> AccountsResult<()> {
        self.delete(kind.resource(), id.get())
            .await
            .map_err(|e| not_found_as(e, kind.label(), id.to_string()))?;
        tracing::info!(kind = %kind, %id, "deleted");
        Ok(())
    }

    // Transactions

    pub async fn list_transactions(&self) -> AccountsResult<Vec<Transaction>> {
        self.get_list(TRANSACTIONS).await
    }

    pub async fn get_transaction(&self, id: TransactionId) -> AccountsResult<Transaction> {
        self.get_item(TRANSACTIONS, id.get())
            .await
            .map_err(|e| not_found_as(e, "Transaction", id.to_string()))
    }

    /// Create a transaction and return the id the backend assigned
    pub async fn create_transaction(
        &self,
        payload: &TransactionPayload,
    ) -> AccountsResult<TransactionId> {
        let created: Created = self
            .send_json(Method::POST, self.collection_url(TRANSACTIONS), payload)
            .await?;
        tracing::info!(id = %created.id, "transaction created");
        Ok(created.id)
    }

    pub async fn update_transaction(
        &self,
        id: TransactionId,
        patch: &TransactionPatch,
    ) -> AccountsResult<()> {
        let _: Value = self
            .send_json(Method::PATCH, self.item_url(TRANSACTIONS, id.get()), patch)
            .await
            .map_err(|e| not_found_as(e, "Transaction", id.to_string()))?;
        tracing::info!(%id, "transaction updated");
        Ok(())
    }

    pub async fn delete_transaction(&self, id: TransactionId) -> AccountsResult<()> {
        self.delete(TRANSACTIONS, id.get())
            .await
            .map_err(|e| not_found_as(e, "Transaction", id.to_string()))?;
        tracing::info!(%id, "transaction deleted");
        Ok(())
    }
}

fn not_found_as(err: AccountsError, entity_type: &'static str, identifier: String) -> AccountsError {
    match err {
        AccountsError::Api { status: 404, .. } => AccountsError::NotFound {
            entity_type,
            identifier,
        },
        other => other,
    }
}

/// Turn a non-success response into an error
///
/// A 400 with a JSON object body is a field-level rejection and is
/// flattened into `field: message, field: message`.
async fn check_status(response: Response) -> AccountsResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let parsed: Option<Value> = serde_json::from_str(&text).ok();

    if status == StatusCode::BAD_REQUEST {
        if let Some(Value::Object(fields)) = &parsed {
            let message = flatten_field_errors(fields);
            tracing::warn!(%status, %message, "request rejected");
            return Err(AccountsError::Rejected(message));
        }
    }

    let message = parsed
        .as_ref()
        .and_then(|v| v.get("detail"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                text.trim().to_string()
            }
        });

    tracing::warn!(%status, %message, "request failed");
    Err(AccountsError::Api {
        status: status.as_u16(),
        message,
    })
}

fn flatten_field_errors(fields: &serde_json::Map<String, Value>) -> String {
    fields
        .iter()
        .map(|(field, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
                other => other.to_string(),
            };
            format!("{}: {}", field, text)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
