//! Print object responses.

use chrono::{DateTime, Utc};
use inkpost_id::ObjectId;
use serde::Deserialize;

use super::SettingResponse;

#[derive(Debug, Clone, Deserialize)]
pub struct ObjectResponse {
    pub id: ObjectId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub double_sided: Option<bool>,
    #[serde(default)]
    pub full_bleed: Option<bool>,
    #[serde(default)]
    pub template: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub setting: Option<SettingResponse>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
    #[serde(default)]
    pub object: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpost_id::SettingId;

    #[test]
    fn test_deserialize_with_setting() {
        let json = r#"{
            "id": "obj_7ca5f80b42b6dfca",
            "name": "myObject",
            "quantity": 1,
            "template": true,
            "setting": {"id": 100, "description": "black and white document"},
            "object": "object"
        }"#;
        let response: ObjectResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.id.value(), "obj_7ca5f80b42b6dfca");
        assert_eq!(
            response.setting.unwrap().id,
            SettingId::BLACK_AND_WHITE_DOCUMENT
        );
        assert_eq!(response.template, Some(true));
        assert!(response.double_sided.is_none());
    }
}
