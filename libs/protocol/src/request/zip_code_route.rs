//! Zip-code route lookup requests.

use crate::error::ValidationError;
use crate::params::{HasFileParams, ParamMap, ParamMapBuilder, ToParamMap};

/// Looks up the carrier routes for a set of 5-digit zip codes. Sent as
/// query parameters on a GET, repeated under `zip_codes[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipCodeRouteRequest {
    pub zip_codes: Vec<String>,
}

impl ZipCodeRouteRequest {
    pub fn builder() -> ZipCodeRouteRequestBuilder {
        ZipCodeRouteRequestBuilder::default()
    }
}

impl ToParamMap for ZipCodeRouteRequest {
    fn to_param_map(&self) -> ParamMap {
        ParamMapBuilder::new()
            .put_repeated("zip_codes[]", &self.zip_codes)
            .build()
    }
}

impl HasFileParams for ZipCodeRouteRequest {}

#[derive(Debug, Clone, Default)]
pub struct ZipCodeRouteRequestBuilder {
    zip_codes: Vec<String>,
}

impl ZipCodeRouteRequestBuilder {
    /// Adds one zip code to the lookup.
    pub fn add_zip(mut self, zip: impl Into<String>) -> Self {
        self.zip_codes.push(zip.into());
        self
    }

    /// Replaces the zip code list.
    pub fn zip_codes(mut self, zips: impl IntoIterator<Item = String>) -> Self {
        self.zip_codes = zips.into_iter().collect();
        self
    }

    /// A pre-populated copy of this builder for partial mutation.
    pub fn but_with(&self) -> Self {
        self.clone()
    }

    pub fn build(self) -> Result<ZipCodeRouteRequest, ValidationError> {
        if self.zip_codes.is_empty() {
            return Err(ValidationError::invalid(
                "zip_codes",
                "at least one zip code is required",
            ));
        }
        for zip in &self.zip_codes {
            if zip.len() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
                return Err(ValidationError::invalid(
                    "zip_codes",
                    format!("'{zip}' is not a 5-digit zip code"),
                ));
            }
        }

        Ok(ZipCodeRouteRequest {
            zip_codes: self.zip_codes,
        })
    }
}
