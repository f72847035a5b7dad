//! Area-mail campaign responses.

use chrono::{DateTime, Utc};
use inkpost_id::AreaMailId;
use serde::Deserialize;

use crate::money::Money;

use super::ZipCodeRouteResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct AreaMailResponse {
    pub id: AreaMailId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub front: Option<String>,
    #[serde(default)]
    pub back: Option<String>,
    #[serde(default)]
    pub routes: Vec<ZipCodeRouteResponse>,
    #[serde(default)]
    pub target_type: Option<String>,
    #[serde(default)]
    pub full_bleed: Option<bool>,
    #[serde(default)]
    pub addresses: Option<i64>,
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
