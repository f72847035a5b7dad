//! Job responses.

use chrono::{DateTime, Utc};
use inkpost_id::JobId;
use serde::Deserialize;

use crate::money::Money;

use super::{AddressResponse, ObjectResponse};

#[derive(Debug, Clone, Deserialize)]
pub struct JobResponse {
    pub id: JobId,
    #[serde(default)]
    pub name: Option<String>,
    pub to: AddressResponse,
    pub from: AddressResponse,
    #[serde(default)]
    pub objects: Vec<ObjectResponse>,
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
