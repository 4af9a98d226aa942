//! Report filters
//!
//! Filter controls are built from the values that actually occur in the
//! loaded transactions, and a selection narrows the list by exact,
//! case-sensitive match on the chosen fields.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::models::Transaction;

/// A transaction field the report can be filtered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Business,
    Type,
    Ledger,
    Head,
    Mode,
}

impl FilterField {
    /// All filterable fields, in display order
    pub const ALL: [FilterField; 5] = [
        FilterField::Business,
        FilterField::Type,
        FilterField::Ledger,
        FilterField::Head,
        FilterField::Mode,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Type => "type",
            Self::Ledger => "ledger",
            Self::Head => "head",
            Self::Mode => "mode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Type => "Type",
            Self::Ledger => "Ledger",
            Self::Head => "Head",
            Self::Mode => "Mode",
        }
    }

    /// The transaction's display name for this field
    pub fn value_of<'a>(&self, txn: &'a Transaction) -> &'a str {
        match self {
            Self::Business => &txn.business,
            Self::Type => &txn.txn_type,
            Self::Ledger => &txn.ledger,
            Self::Head => &txn.head,
            Self::Mode => &txn.mode,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown filter field '{}'", s))
    }
}

/// The user's current filter choices
///
/// A field that is absent, or set to an empty string, means "show all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterSelection {
    values: BTreeMap<FilterField, String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a value for a field; an empty value clears the field
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&field);
        } else {
            self.values.insert(field, value);
        }
    }

    /// Builder form of [`FilterSelection::set`]
    pub fn with(mut self, field: FilterField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Active (field, value) pairs in field order
    pub fn active(&self) -> impl Iterator<Item = (FilterField, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Whether a transaction satisfies every active constraint
    pub fn matches(&self, txn: &Transaction) -> bool {
        self.active()
            .all(|(field, value)| field.value_of(txn) == value)
    }
}

/// Distinct values per filterable field, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub business: Vec<String>,
    #[serde(rename = "type")]
    pub txn_type: Vec<String>,
    pub ledger: Vec<String>,
    pub head: Vec<String>,
    pub mode: Vec<String>,
}

impl FilterOptions {
    pub fn get(&self, field: FilterField) -> &[String] {
        match field {
            FilterField::Business => &self.business,
            FilterField::Type => &self.txn_type,
            FilterField::Ledger => &self.ledger,
            FilterField::Head => &self.head,
            FilterField::Mode => &self.mode,
        }
    }

    fn get_mut(&mut self, field: FilterField) -> &mut Vec<String> {
        match field {
            FilterField::Business => &mut self.business,
            FilterField::Type => &mut self.txn_type,
            FilterField::Ledger => &mut self.ledger,
            FilterField::Head => &mut self.head,
            FilterField::Mode => &mut self.mode,
        }
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Collect the distinct values of every filterable field
pub fn derive_filter_options(transactions: &[Transaction]) -> FilterOptions {
    let mut options = FilterOptions::default();

    for field in FilterField::ALL {
        let mut seen = HashSet::new();
        let values = options.get_mut(field);
        for txn in transactions {
            let value = field.value_of(txn);
            if seen.insert(value) {
                values.push(value.to_string());
            }
        }
    }

    options
}

/// Keep the transactions matching the selection, in their original order
pub fn apply_filters<'a>(
    transactions: &'a [Transaction],
    selection: &FilterSelection,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|txn| selection.matches(txn))
        .collect()
}
