//! Accounts, ledger entries and holds

use crate::decode::string_f64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A trading account for one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub currency: String,
    /// Total funds in the account
    #[serde(with = "string_f64")]
    pub balance: f64,
    /// Funds available to trade or withdraw
    #[serde(with = "string_f64")]
    pub available: f64,
    /// Funds on hold; the single-account endpoint spells it `holds`
    #[serde(with = "string_f64", alias = "holds")]
    pub hold: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<Uuid>,
}

/// Kind of ledger activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Transfer,
    Match,
    Fee,
    Rebate,
    #[serde(other)]
    Other,
}

/// Extra context for a ledger entry, depending on its type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_type: Option<String>,
}

/// One activity that changed an account's balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: u64,
    pub created_at: DateTime<Utc>,
    #[serde(with = "string_f64")]
    pub amount: f64,
    /// Balance after this entry
    #[serde(with = "string_f64")]
    pub balance: f64,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    #[serde(default)]
    pub details: LedgerDetails,
}

/// Reason funds are on hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoldType {
    Order,
    Transfer,
}

/// Funds reserved by an open order or a pending withdrawal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hold {
    pub id: Uuid,
    pub account_id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(with = "string_f64")]
    pub amount: f64,
    #[serde(rename = "type")]
    pub hold_type: HoldType,
    /// Id of the order or transfer that created the hold
    #[serde(rename = "ref")]
    pub reference: Uuid,
}
