//! Print object creation requests.

use std::path::PathBuf;

use inkpost_id::SettingId;

use crate::error::ValidationError;
use crate::file::FileParam;
use crate::params::{HasFileParams, ParamMap, ParamMapBuilder, ToParamMap};

/// A print object: the artwork plus the mail setting it will be produced
/// under.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRequest {
    pub name: Option<String>,
    pub file: FileParam,
    pub setting: SettingId,
    pub quantity: Option<i64>,
    pub double_sided: Option<bool>,
    pub full_bleed: Option<bool>,
    pub template: Option<bool>,
}

impl ObjectRequest {
    pub fn builder() -> ObjectRequestBuilder {
        ObjectRequestBuilder::default()
    }
}

impl ToParamMap for ObjectRequest {
    fn to_param_map(&self) -> ParamMap {
        ParamMapBuilder::new()
            .put("name", self.name.as_deref())
            .put("setting", Some(self.setting))
            .put("quantity", self.quantity)
            .put("double_sided", self.double_sided)
            .put("full_bleed", self.full_bleed)
            .put("template", self.template)
            .build()
    }
}

impl HasFileParams for ObjectRequest {
    fn file_params(&self) -> Vec<&FileParam> {
        vec![&self.file]
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObjectRequestBuilder {
    name: Option<String>,
    file: Option<FileParam>,
    setting: Option<SettingId>,
    quantity: Option<i64>,
    double_sided: Option<bool>,
    full_bleed: Option<bool>,
    template: Option<bool>,
}

impl ObjectRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Artwork fetched by the server from a URL.
    pub fn file(mut self, url: impl Into<String>) -> Self {
        self.file = Some(FileParam::url("file", url));
        self
    }

    /// Artwork uploaded from a local file.
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(FileParam::path("file", path));
        self
    }

    pub fn setting(mut self, setting: SettingId) -> Self {
        self.setting = Some(setting);
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = Some(double_sided);
        self
    }

    pub fn full_bleed(mut self, full_bleed: bool) -> Self {
        self.full_bleed = Some(full_bleed);
        self
    }

    pub fn template(mut self, template: bool) -> Self {
        self.template = Some(template);
        self
    }

    /// A pre-populated copy of this builder for partial mutation.
    pub fn but_with(&self) -> Self {
        self.clone()
    }

    pub fn build(self) -> Result<ObjectRequest, ValidationError> {
        Ok(ObjectRequest {
            name: self.name,
            file: self.file.ok_or(ValidationError::MissingField("file"))?,
            setting: self.setting.ok_or(ValidationError::MissingField("setting"))?,
            quantity: self.quantity,
            double_sided: self.double_sided,
            full_bleed: self.full_bleed,
            template: self.template,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_map_shape() {
        let request = ObjectRequest::builder()
            .file("https://cdn.example.com/goblue.pdf")
            .name("myObject")
            .setting(SettingId::BLACK_AND_WHITE_DOCUMENT)
            .template(true)
            .build()
            .unwrap();
        let map = request.to_param_map();

        assert_eq!(map["name"], vec!["myObject"]);
        assert_eq!(map["setting"], vec!["100"]);
        assert_eq!(map["template"], vec!["true"]);
        assert!(!map.contains_key("file"));
        assert!(!map.contains_key("double_sided"));
    }

    #[test]
    fn test_explicit_false_survives_encoding() {
        let request = ObjectRequest::builder()
            .file("https://cdn.example.com/goblue.pdf")
            .setting(SettingId::COLOR_DOCUMENT)
            .double_sided(false)
            .build()
            .unwrap();

        assert_eq!(request.to_param_map()["double_sided"], vec!["false"]);
    }

    #[test]
    fn test_setting_required() {
        let result = ObjectRequest::builder()
            .file("https://cdn.example.com/goblue.pdf")
            .build();
        assert_eq!(
            result.unwrap_err(),
            ValidationError::MissingField("setting")
        );
    }

    #[test]
    fn test_but_with_no_overrides_builds_equal_value() {
        let builder = ObjectRequest::builder()
            .file("https://cdn.example.com/goblue.pdf")
            .setting(SettingId::BLACK_AND_WHITE_DOCUMENT)
            .quantity(4)
            .full_bleed(false);
        assert_eq!(
            builder.but_with().build().unwrap(),
            builder.build().unwrap()
        );
    }
}
