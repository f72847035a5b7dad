//! Postcard responses.

use chrono::{DateTime, Utc};
use inkpost_id::PostcardId;
use serde::Deserialize;

use crate::money::Money;

use super::AddressResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct PostcardResponse {
    pub id: PostcardId,
    #[serde(default)]
    pub name: Option<String>,
    pub to: AddressResponse,
    #[serde(default)]
    pub from: Option<AddressResponse>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub front: Option<String>,
    #[serde(default)]
    pub back: Option<String>,
    #[serde(default)]
    pub full_bleed: Option<bool>,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub object: String,
}
