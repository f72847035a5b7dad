//! Bank account responses.

use chrono::{DateTime, Utc};
use inkpost_id::BankAccountId;
use serde::Deserialize;

use super::AddressResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct BankAccountResponse {
    pub id: BankAccountId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub routing_number: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub bank_address: Option<AddressResponse>,
    #[serde(default)]
    pub account_address: Option<AddressResponse>,
    #[serde(default)]
    pub signatory: Option<String>,
    /// False until the two micro-deposit amounts are confirmed via the
    /// verify endpoint.
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub object: String,
}
