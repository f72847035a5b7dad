//! Check responses.

use chrono::{DateTime, Utc};
use inkpost_id::CheckId;
use serde::Deserialize;

use crate::money::Money;

use super::{AddressResponse, BankAccountResponse};

#[derive(Debug, Clone, Deserialize)]
pub struct CheckResponse {
    pub id: CheckId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub check_number: Option<i64>,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub amount: Option<Money>,
    #[serde(default)]
    pub bank_account: Option<BankAccountResponse>,
    #[serde(default)]
    pub to: Option<AddressResponse>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub expected_delivery_date: Option<String>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub object: String,
}
