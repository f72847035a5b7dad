//! Read-only catalog responses: settings, services, countries, states,
//! packagings, and zip-code routes.

use inkpost_id::{PackagingId, ServiceId, SettingId};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SettingResponse {
    pub id: SettingId,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub object: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceResponse {
    pub id: ServiceId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub object: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryResponse {
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub object: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateResponse {
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub object: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackagingResponse {
    pub id: PackagingId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub object: String,
}

/// The carrier routes available within one zip code.
#[derive(Debug, Clone, Deserialize)]
pub struct ZipCodeRouteResponse {
    pub zip_code: String,
    #[serde(default)]
    pub routes: Vec<RouteResponse>,
    #[serde(default)]
    pub object: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteResponse {
    pub route: String,
    #[serde(default)]
    pub object: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_country() {
        let json = r#"{"name": "United States", "short_name": "US", "object": "country"}"#;
        let response: CountryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.short_name, "US");
    }

    #[test]
    fn test_deserialize_zip_code_routes() {
        let json = r#"{
            "zip_code": "94158",
            "routes": [{"route": "C001", "object": "route"}],
            "object": "zip_code_routes"
        }"#;
        let response: ZipCodeRouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.zip_code, "94158");
        assert_eq!(response.routes[0].route, "C001");
    }
}
