//! Read-only catalog operations: settings, services, countries, states,
//! packagings, and zip-code route lookups.

use inkpost_id::SettingId;
use inkpost_protocol::params::to_pairs;
use inkpost_protocol::request::ZipCodeRouteRequest;
use inkpost_protocol::response::{
    CountryResponse, PackagingResponse, ResponseList, ServiceResponse, SettingResponse,
    StateResponse, ZipCodeRouteResponse,
};
use inkpost_protocol::ToParamMap;

use crate::{routes, Client, Error};

impl Client {
    pub async fn list_settings(&self) -> Result<ResponseList<SettingResponse>, Error> {
        self.get_json(routes::SETTINGS, &[]).await
    }

    pub async fn get_setting(&self, id: SettingId) -> Result<SettingResponse, Error> {
        self.get_json(&format!("{}/{}", routes::SETTINGS, id.value()), &[])
            .await
    }

    pub async fn list_services(&self) -> Result<ResponseList<ServiceResponse>, Error> {
        self.get_json(routes::SERVICES, &[]).await
    }

    pub async fn list_countries(&self) -> Result<ResponseList<CountryResponse>, Error> {
        self.get_json(routes::COUNTRIES, &[]).await
    }

    pub async fn list_states(&self) -> Result<ResponseList<StateResponse>, Error> {
        self.get_json(routes::STATES, &[]).await
    }

    pub async fn list_packagings(&self) -> Result<ResponseList<PackagingResponse>, Error> {
        self.get_json(routes::PACKAGINGS, &[]).await
    }

    /// Looks up carrier routes for a set of zip codes. The request encodes
    /// as repeated `zip_codes[]` query parameters on a GET.
    pub async fn list_zip_code_routes(
        &self,
        request: &ZipCodeRouteRequest,
    ) -> Result<ResponseList<ZipCodeRouteResponse>, Error> {
        let query = to_pairs(&request.to_param_map());
        self.get_json(routes::ZIP_CODE_ROUTES, &query).await
    }
}
