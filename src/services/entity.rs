//! Reference entity service
//!
//! Businesses, ledgers, heads, modes and types all share one shape, so one
//! service handles every kind. Records are addressed by a reference string:
//! `#12` always means the id, `12` means the id when such a record exists,
//! and anything else is matched against names exactly.

use crate::api::ApiClient;
use crate::error::{AccountsError, AccountsResult};
use crate::models::{Entity, EntityId, EntityKind, EntityPayload};

/// Service for reference entity management
pub struct EntityService<'a> {
    client: &'a ApiClient,
    kind: EntityKind,
}

impl<'a> EntityService<'a> {
    /// Create a new service for one entity kind
    pub fn new(client: &'a ApiClient, kind: EntityKind) -> Self {
        Self { client, kind }
    }

    /// List all records of this kind, in backend order
    pub async fn list(&self) -> AccountsResult<Vec<Entity>> {
        self.client.list_entities(self.kind).await
    }

    /// Find a record by reference
    pub async fn resolve(&self, reference: &str) -> AccountsResult<Entity> {
        let reference = reference.trim();
        if reference.starts_with('#') {
            let id = parse_explicit_id(self.kind, reference)?;
            return self.client.get_entity(self.kind, id).await;
        }

        let entities = self.list().await?;
        resolve_in(self.kind, &entities, reference)
    }

    /// Create a record
    pub async fn create(&self, name: &str) -> AccountsResult<Entity> {
        let payload =
            EntityPayload::new(name).map_err(|e| AccountsError::Validation(e.to_string()))?;
        self.client.create_entity(self.kind, &payload).await
    }

    /// Rename the record a reference points at
    pub async fn rename(&self, reference: &str, new_name: &str) -> AccountsResult<Entity> {
        let payload =
            EntityPayload::new(new_name).map_err(|e| AccountsError::Validation(e.to_string()))?;
        let entity = self.resolve(reference).await?;
        self.client
            .update_entity(self.kind, entity.id, &payload)
            .await
    }

    /// Delete a record previously found with [`resolve`](Self::resolve)
    pub async fn delete(&self, entity: &Entity) -> AccountsResult<()> {
        self.client.delete_entity(self.kind, entity.id).await
    }
}

fn parse_explicit_id(kind: EntityKind, reference: &str) -> AccountsResult<EntityId> {
    reference.parse().map_err(|_| {
        AccountsError::Validation(format!(
            "'{}' is not a valid {} id",
            reference,
            kind.label().to_lowercase()
        ))
    })
}

/// Resolve a reference against an already-fetched list
///
/// Duplicate names are reported as ambiguous instead of picking one.
pub fn resolve_in(kind: EntityKind, entities: &[Entity], reference: &str) -> AccountsResult<Entity> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(AccountsError::Validation(format!(
            "{} cannot be empty",
            kind.label()
        )));
    }

    if reference.starts_with('#') {
        let id = parse_explicit_id(kind, reference)?;
        return entities
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| not_found(kind, reference));
    }

    if let Ok(id) = reference.parse::<EntityId>() {
        if let Some(entity) = entities.iter().find(|e| e.id == id) {
            return Ok(entity.clone());
        }
    }

    let mut matches = entities.iter().filter(|e| e.name == reference);
    match (matches.next(), matches.count()) {
        (None, _) => Err(not_found(kind, reference)),
        (Some(entity), 0) => Ok(entity.clone()),
        (Some(_), rest) => Err(AccountsError::Ambiguous {
            entity_type: kind.label(),
            name: reference.to_string(),
            count: rest + 1,
        }),
    }
}

fn not_found(kind: EntityKind, reference: &str) -> AccountsError {
    AccountsError::NotFound {
        entity_type: kind.label(),
        identifier: reference.to_string(),
    }
}
