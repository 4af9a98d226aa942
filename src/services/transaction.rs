//! Transaction service
//!
//! Turns user-facing transaction input, where reference entities are named,
//! into the id-based bodies the backend accepts.

use chrono::NaiveDate;

use super::entity::resolve_in;
use crate::api::ApiClient;
use crate::error::{AccountsError, AccountsResult};
use crate::models::{
    DrOrCr, Entity, EntityId, EntityKind, Gst, Money, Transaction, TransactionId,
    TransactionPatch, TransactionPayload,
};

/// A new transaction with its references given by name or id
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub business: String,
    pub txn_type: String,
    pub ledger: String,
    pub head: String,
    pub mode: String,
    pub amount: Money,
    pub dr_or_cr: DrOrCr,
    pub discount_amount: Money,
    pub gst: Gst,
    pub description: String,
}

/// Changes to an existing transaction; unset fields are left alone
#[derive(Debug, Clone, Default)]
pub struct TransactionEdit {
    pub date: Option<NaiveDate>,
    pub business: Option<String>,
    pub txn_type: Option<String>,
    pub ledger: Option<String>,
    pub head: Option<String>,
    pub mode: Option<String>,
    pub amount: Option<Money>,
    pub dr_or_cr: Option<DrOrCr>,
    pub discount_amount: Option<Money>,
    pub gst: Option<Gst>,
    pub description: Option<String>,
}

impl TransactionEdit {
    fn references(&self) -> [(EntityKind, Option<&str>); 5] {
        [
            (EntityKind::Business, self.business.as_deref()),
            (EntityKind::Type, self.txn_type.as_deref()),
            (EntityKind::Ledger, self.ledger.as_deref()),
            (EntityKind::Head, self.head.as_deref()),
            (EntityKind::Mode, self.mode.as_deref()),
        ]
    }

    fn changes_references(&self) -> bool {
        self.references().iter().any(|(_, r)| r.is_some())
    }
}

/// All five reference lists, fetched together
#[derive(Debug, Clone, Default)]
pub struct ReferenceLists {
    pub businesses: Vec<Entity>,
    pub types: Vec<Entity>,
    pub ledgers: Vec<Entity>,
    pub heads: Vec<Entity>,
    pub modes: Vec<Entity>,
}

impl ReferenceLists {
    /// Fetch every list concurrently; the first failure aborts the rest
    pub async fn load(client: &ApiClient) -> AccountsResult<Self> {
        let (businesses, types, ledgers, heads, modes) = tokio::try_join!(
            client.list_entities(EntityKind::Business),
            client.list_entities(EntityKind::Type),
            client.list_entities(EntityKind::Ledger),
            client.list_entities(EntityKind::Head),
            client.list_entities(EntityKind::Mode),
        )?;

        Ok(Self {
            businesses,
            types,
            ledgers,
            heads,
            modes,
        })
    }

    pub fn get(&self, kind: EntityKind) -> &[Entity] {
        match kind {
            EntityKind::Business => &self.businesses,
            EntityKind::Type => &self.types,
            EntityKind::Ledger => &self.ledgers,
            EntityKind::Head => &self.heads,
            EntityKind::Mode => &self.modes,
        }
    }

    pub fn resolve(&self, kind: EntityKind, reference: &str) -> AccountsResult<EntityId> {
        resolve_in(kind, self.get(kind), reference).map(|e| e.id)
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    client: &'a ApiClient,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> AccountsResult<Vec<Transaction>> {
        self.client.list_transactions().await
    }

    pub async fn get(&self, id: TransactionId) -> AccountsResult<Transaction> {
        self.client.get_transaction(id).await
    }

    /// Resolve references and create the transaction
    pub async fn add(&self, input: NewTransaction) -> AccountsResult<TransactionId> {
        let refs = ReferenceLists::load(self.client).await?;
        let payload = build_payload(&refs, input)?;
        self.client.create_transaction(&payload).await
    }

    /// Apply a partial update
    ///
    /// Reference lists are only fetched when a reference is being changed.
    pub async fn edit(&self, id: TransactionId, edit: TransactionEdit) -> AccountsResult<()> {
        let refs = if edit.changes_references() {
            ReferenceLists::load(self.client).await?
        } else {
            ReferenceLists::default()
        };
        let patch = build_patch(&refs, edit)?;
        self.client.update_transaction(id, &patch).await
    }

    pub async fn delete(&self, id: TransactionId) -> AccountsResult<()> {
        self.client.delete_transaction(id).await
    }
}

fn build_payload(refs: &ReferenceLists, input: NewTransaction) -> AccountsResult<TransactionPayload> {
    let payload = TransactionPayload {
        transaction_date: input.date,
        business: refs.resolve(EntityKind::Business, &input.business)?,
        txn_type: refs.resolve(EntityKind::Type, &input.txn_type)?,
        ledger: refs.resolve(EntityKind::Ledger, &input.ledger)?,
        head: refs.resolve(EntityKind::Head, &input.head)?,
        mode: refs.resolve(EntityKind::Mode, &input.mode)?,
        amount: input.amount,
        dr_or_cr: input.dr_or_cr,
        discount_amount: input.discount_amount,
        gst: input.gst,
        description: input.description.trim().to_string(),
    };

    payload
        .validate()
        .map_err(|e| AccountsError::Validation(e.to_string()))?;
    Ok(payload)
}

fn build_patch(refs: &ReferenceLists, edit: TransactionEdit) -> AccountsResult<TransactionPatch> {
    let resolve = |kind: EntityKind, reference: Option<&str>| {
        reference.map(|r| refs.resolve(kind, r)).transpose()
    };

    let patch = TransactionPatch {
        transaction_date: edit.date,
        business: resolve(EntityKind::Business, edit.business.as_deref())?,
        txn_type: resolve(EntityKind::Type, edit.txn_type.as_deref())?,
        ledger: resolve(EntityKind::Ledger, edit.ledger.as_deref())?,
        head: resolve(EntityKind::Head, edit.head.as_deref())?,
        mode: resolve(EntityKind::Mode, edit.mode.as_deref())?,
        amount: edit.amount,
        dr_or_cr: edit.dr_or_cr,
        discount_amount: edit.discount_amount,
        gst: edit.gst,
        description: edit.description.map(|d| d.trim().to_string()),
    };

    patch
        .validate()
        .map_err(|e| AccountsError::Validation(e.to_string()))?;
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use std::time::Duration;

    fn refs() -> ReferenceLists {
        ReferenceLists {
            businesses: vec![Entity::new(1, "Retail"), Entity::new(2, "Wholesale")],
            types: vec![Entity::new(1, "Expense"), Entity::new(2, "Income")],
            ledgers: vec![Entity::new(4, "Ops")],
            heads: vec![Entity::new(5, "Rent")],
            modes: vec![Entity::new(1, "Cash"), Entity::new(2, "Bank")],
        }
    }

    fn draft() -> NewTransaction {
        NewTransaction {
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            business: "Wholesale".into(),
            txn_type: "Expense".into(),
            ledger: "Ops".into(),
            head: "#5".into(),
            mode: "Bank".into(),
            amount: Money::from_cents(1_250_000),
            dr_or_cr: DrOrCr::Dr,
            discount_amount: Money::zero(),
            gst: Gst::WithGst,
            description: " April rent ".into(),
        }
    }

    #[test]
    fn test_build_payload_resolves_names() {
        let payload = build_payload(&refs(), draft()).unwrap();
        assert_eq!(payload.business, EntityId::new(2));
        assert_eq!(payload.txn_type, EntityId::new(1));
        assert_eq!(payload.head, EntityId::new(5));
        assert_eq!(payload.mode, EntityId::new(2));
        assert_eq!(payload.description, "April rent");
    }

    #[test]
    fn test_build_payload_unknown_reference() {
        let mut input = draft();
        input.ledger = "Payroll".into();
        let err = build_payload(&refs(), input).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_build_payload_negative_amount() {
        let mut input = draft();
        input.amount = Money::from_cents(-100);
        let err = build_payload(&refs(), input).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_build_patch_only_sets_given_fields() {
        let edit = TransactionEdit {
            mode: Some("Cash".into()),
            amount: Some(Money::from_cents(500)),
            ..Default::default()
        };
        let patch = build_patch(&refs(), edit).unwrap();

        assert_eq!(patch.mode, Some(EntityId::new(1)));
        assert_eq!(patch.amount, Some(Money::from_cents(500)));
        assert!(patch.business.is_none());
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"mode": 1, "amount": "5.00"})
        );
    }

    #[test]
    fn test_empty_edit_is_rejected() {
        let err = build_patch(&ReferenceLists::default(), TransactionEdit::default()).unwrap_err();
        assert!(err.is_validation());
    }

    fn client_for(server: &mockito::ServerGuard) -> ApiClient {
        ApiClient::new(format!("{}/api/", server.url()), Duration::from_secs(5)).unwrap()
    }

    async fn mock_list(server: &mut mockito::ServerGuard, resource: &str, body: &str) -> mockito::Mock {
        server
            .mock("GET", format!("/api/{}/", resource).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    #[tokio::test]
    async fn test_add_posts_resolved_ids() {
        let mut server = mockito::Server::new_async().await;
        let _b = mock_list(&mut server, "businesses", r#"[{"id": 2, "name": "Wholesale"}]"#).await;
        let _t = mock_list(&mut server, "types", r#"[{"id": 1, "name": "Expense"}]"#).await;
        let _l = mock_list(&mut server, "ledgers", r#"[{"id": 4, "name": "Ops"}]"#).await;
        let _h = mock_list(&mut server, "heads", r#"[{"id": 5, "name": "Rent"}]"#).await;
        let _m = mock_list(&mut server, "modes", r#"{"count": 1, "results": [{"id": 2, "name": "Bank"}]}"#).await;
        let create = server
            .mock("POST", "/api/transactions/")
            .match_body(Matcher::PartialJson(json!({
                "transaction_date": "2024-04-01",
                "business": 2,
                "type": 1,
                "ledger": 4,
                "head": 5,
                "mode": 2,
                "amount": "12500.00",
                "dr_or_cr": "Dr",
                "gst": "With GST",
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 31}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let id = TransactionService::new(&client).add(draft()).await.unwrap();

        assert_eq!(id, TransactionId::new(31));
        create.assert_async().await;
    }

    #[tokio::test]
    async fn test_edit_without_references_skips_lookups() {
        let mut server = mockito::Server::new_async().await;
        let lookups = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let patch = server
            .mock("PATCH", "/api/transactions/9/")
            .match_body(Matcher::Json(json!({"description": "Corrected"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 9}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let edit = TransactionEdit {
            description: Some("Corrected".into()),
            ..Default::default()
        };
        TransactionService::new(&client)
            .edit(TransactionId::new(9), edit)
            .await
            .unwrap();

        patch.assert_async().await;
        lookups.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_rejected_by_server() {
        let mut server = mockito::Server::new_async().await;
        let _b = mock_list(&mut server, "businesses", r#"[{"id": 2, "name": "Wholesale"}]"#).await;
        let _t = mock_list(&mut server, "types", r#"[{"id": 1, "name": "Expense"}]"#).await;
        let _l = mock_list(&mut server, "ledgers", r#"[{"id": 4, "name": "Ops"}]"#).await;
        let _h = mock_list(&mut server, "heads", r#"[{"id": 5, "name": "Rent"}]"#).await;
        let _m = mock_list(&mut server, "modes", r#"[{"id": 2, "name": "Bank"}]"#).await;
        let _create = server
            .mock("POST", "/api/transactions/")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"amount": ["Ensure that there are no more than 10 digits in total."]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = TransactionService::new(&client).add(draft()).await.unwrap_err();

        assert!(matches!(err, AccountsError::Rejected(ref msg) if msg.starts_with("amount:")));
    }
}
