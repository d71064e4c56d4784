//! Billing Models

use serde::{Deserialize, Serialize};

/// Minutes consumed in one month (`YYYY-MM`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageRow {
    pub date: String,
    pub minutes: u32,
}

/// A past minutes purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: i64,
    pub date: String,
    pub purchase_id: String,
    /// Dollars
    pub amount: f64,
    pub minutes: u32,
}

/// A saved card; only the last four digits are kept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: i64,
    pub cardholder_name: String,
    /// e.g. `•••• 4242`
    pub masked_number: String,
    pub expiry_date: String,
}
