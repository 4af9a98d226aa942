//! Transaction model
//!
//! Transactions as the backend lists them carry the *names* of their
//! reference entities, while writes carry their ids. The two shapes are kept
//! apart: [`Transaction`] for reads, [`TransactionPayload`] and
//! [`TransactionPatch`] for writes.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::ids::{EntityId, TransactionId};
use super::money::Money;

/// Debit or credit indicator
///
/// Unknown tags from the backend are preserved rather than rejected; the
/// report counts anything that is not exactly `Dr` on the credit side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DrOrCr {
    Dr,
    Cr,
    Other(String),
}

impl DrOrCr {
    pub fn is_debit(&self) -> bool {
        matches!(self, Self::Dr)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Dr => "Dr",
            Self::Cr => "Cr",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for DrOrCr {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Dr" => Self::Dr,
            "Cr" => Self::Cr,
            _ => Self::Other(tag),
        }
    }
}

impl From<DrOrCr> for String {
    fn from(value: DrOrCr) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for DrOrCr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrOrCr {
    type Err = String;

    /// Parses user input; only the two real indicators are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dr" | "debit" => Ok(Self::Dr),
            "cr" | "credit" => Ok(Self::Cr),
            other => Err(format!("expected Dr or Cr, got '{}'", other)),
        }
    }
}

/// Tax-inclusion flag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gst {
    WithGst,
    WithoutGst,
    Other(String),
}

impl Gst {
    pub fn as_str(&self) -> &str {
        match self {
            Self::WithGst => "With GST",
            Self::WithoutGst => "Without GST",
            Self::Other(value) => value,
        }
    }
}

impl Default for Gst {
    fn default() -> Self {
        Self::WithGst
    }
}

impl From<String> for Gst {
    fn from(value: String) -> Self {
        match value.as_str() {
            "With GST" => Self::WithGst,
            "Without GST" => Self::WithoutGst,
            _ => Self::Other(value),
        }
    }
}

impl From<Gst> for String {
    fn from(value: Gst) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Gst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gst {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "with" | "with gst" | "with-gst" | "yes" => Ok(Self::WithGst),
            "without" | "without gst" | "without-gst" | "no" => Ok(Self::WithoutGst),
            other => Err(format!("expected 'With GST' or 'Without GST', got '{}'", other)),
        }
    }
}

/// A transaction as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    pub transaction_date: NaiveDate,

    /// Reference entities, denormalized to their display names
    pub business: String,
    #[serde(rename = "type")]
    pub txn_type: String,
    pub ledger: String,
    pub head: String,
    pub mode: String,

    /// Decimal string as received; numbers are kept in their JSON spelling
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: String,

    pub dr_or_cr: DrOrCr,

    #[serde(default, deserialize_with = "lenient_amount")]
    pub discount_amount: String,

    pub gst: Gst,

    #[serde(default)]
    pub description: Option<String>,
}

/// Accept an amount as a string, a bare number or null
///
/// Anything that is neither becomes an empty string, which the report
/// counts as zero. One odd record must not sink the whole listing.
fn lenient_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

impl Transaction {
    /// The amount as a number; unparseable amounts count as zero
    pub fn amount_value(&self) -> Money {
        Money::parse_or_zero(&self.amount)
    }

    pub fn is_debit(&self) -> bool {
        self.dr_or_cr.is_debit()
    }

    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Body for creating a transaction; references travel as ids
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPayload {
    pub transaction_date: NaiveDate,
    pub business: EntityId,
    #[serde(rename = "type")]
    pub txn_type: EntityId,
    pub ledger: EntityId,
    pub head: EntityId,
    pub mode: EntityId,
    pub amount: Money,
    pub dr_or_cr: DrOrCr,
    pub discount_amount: Money,
    pub gst: Gst,
    pub description: String,
}

impl TransactionPayload {
    /// Check the amounts before anything is sent
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        validate_amounts(Some(self.amount), Some(self.discount_amount))?;
        if let DrOrCr::Other(tag) = &self.dr_or_cr {
            return Err(TransactionValidationError::UnknownIndicator(tag.clone()));
        }
        Ok(())
    }
}

/// Partial update; only the fields that are set are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransactionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<EntityId>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub txn_type: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dr_or_cr: Option<DrOrCr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gst: Option<Gst>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.is_empty() {
            return Err(TransactionValidationError::NothingToUpdate);
        }
        validate_amounts(self.amount, self.discount_amount)
    }
}

fn validate_amounts(
    amount: Option<Money>,
    discount: Option<Money>,
) -> Result<(), TransactionValidationError> {
    if amount.is_some_and(|a| a.is_negative()) {
        return Err(TransactionValidationError::NegativeAmount("amount"));
    }
    if discount.is_some_and(|d| d.is_negative()) {
        return Err(TransactionValidationError::NegativeAmount("discount amount"));
    }
    Ok(())
}

/// Validation errors for transaction writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(&'static str),
    UnknownIndicator(String),
    NothingToUpdate,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(field) => write!(f, "The {} cannot be negative", field),
            Self::UnknownIndicator(tag) => write!(f, "Unknown Dr/Cr indicator '{}'", tag),
            Self::NothingToUpdate => write!(f, "No changes specified"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "id": 9,
        "transaction_date": "2024-03-15",
        "business": "Retail",
        "type": "Expense",
        "ledger": "Operations",
        "head": "Rent",
        "mode": "Bank",
        "amount": "12500.00",
        "dr_or_cr": "Dr",
        "discount_amount": "0.00",
        "gst": "With GST",
        "description": null
    }"#;

    #[test]
    fn test_deserialize_listing() {
        let txn: Transaction = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(txn.id, TransactionId::new(9));
        assert_eq!(txn.transaction_date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(txn.txn_type, "Expense");
        assert_eq!(txn.amount_value().cents(), 1_250_000);
        assert!(txn.is_debit());
        assert_eq!(txn.gst, Gst::WithGst);
        assert_eq!(txn.description_or_empty(), "");
    }

    #[test]
    fn test_null_and_numeric_amounts_are_tolerated() {
        let body = serde_json::json!([
            serde_json::from_str::<Value>(&SAMPLE.replace("\"12500.00\"", "null")).unwrap(),
            serde_json::from_str::<Value>(&SAMPLE.replace("\"12500.00\"", "12.5")).unwrap(),
            serde_json::from_str::<Value>(&SAMPLE.replace("\"0.00\"", "3")).unwrap(),
        ]);
        let (list, _): (Vec<Transaction>, _) = crate::api::normalize_list(body).unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(list[0].amount, "");
        assert!(list[0].amount_value().is_zero());
        assert_eq!(list[1].amount_value().cents(), 1250);
        assert_eq!(list[2].discount_amount, "3");
    }

    #[test]
    fn test_missing_amount_defaults_to_empty() {
        let mut value: Value = serde_json::from_str(SAMPLE).unwrap();
        value.as_object_mut().unwrap().remove("amount");
        let txn: Transaction = serde_json::from_value(value).unwrap();
        assert!(txn.amount_value().is_zero());
    }

    #[test]
    fn test_unknown_tags_are_preserved() {
        let json = SAMPLE
            .replace("\"Dr\"", "\"DR\"")
            .replace("With GST", "Exempt");
        let txn: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.dr_or_cr, DrOrCr::Other("DR".into()));
        assert!(!txn.is_debit());
        assert_eq!(txn.gst.as_str(), "Exempt");

        let back = serde_json::to_value(&txn).unwrap();
        assert_eq!(back["dr_or_cr"], "DR");
    }

    #[test]
    fn test_parse_user_indicators() {
        assert_eq!("dr".parse::<DrOrCr>().unwrap(), DrOrCr::Dr);
        assert_eq!("Credit".parse::<DrOrCr>().unwrap(), DrOrCr::Cr);
        assert!("both".parse::<DrOrCr>().is_err());
        assert_eq!("without".parse::<Gst>().unwrap(), Gst::WithoutGst);
    }

    #[test]
    fn test_payload_serializes_ids_and_decimal_strings() {
        let payload = TransactionPayload {
            transaction_date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            business: EntityId::new(1),
            txn_type: EntityId::new(2),
            ledger: EntityId::new(3),
            head: EntityId::new(4),
            mode: EntityId::new(5),
            amount: Money::from_cents(10000),
            dr_or_cr: DrOrCr::Cr,
            discount_amount: Money::zero(),
            gst: Gst::WithoutGst,
            description: String::new(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], 2);
        assert_eq!(value["amount"], "100.00");
        assert_eq!(value["discount_amount"], "0.00");
        assert_eq!(value["gst"], "Without GST");
        assert_eq!(value["transaction_date"], "2024-01-02");
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_patch_only_sends_set_fields() {
        let patch = TransactionPatch {
            amount: Some(Money::from_cents(550)),
            ..Default::default()
        };
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, serde_json::json!({ "amount": "5.50" }));
    }

    #[test]
    fn test_patch_validation() {
        assert_eq!(
            TransactionPatch::default().validate().unwrap_err(),
            TransactionValidationError::NothingToUpdate
        );
        let negative = TransactionPatch {
            discount_amount: Some(Money::from_cents(-1)),
            ..Default::default()
        };
        assert_eq!(
            negative.validate().unwrap_err(),
            TransactionValidationError::NegativeAmount("discount amount")
        );
    }
}
