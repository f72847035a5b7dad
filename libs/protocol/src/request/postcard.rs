//! Postcard creation requests.

use std::path::PathBuf;

use inkpost_id::SettingId;

use crate::error::ValidationError;
use crate::file::FileParam;
use crate::params::{HasFileParams, ParamMap, ParamMapBuilder, ToParamMap};

use super::AddressParam;

#[derive(Debug, Clone, PartialEq)]
pub struct PostcardRequest {
    pub name: Option<String>,
    pub to: AddressParam,
    pub from: Option<AddressParam>,
    pub message: Option<String>,
    pub front: FileParam,
    pub back: Option<FileParam>,
    pub full_bleed: Option<bool>,
    pub setting: Option<SettingId>,
}

impl PostcardRequest {
    pub fn builder() -> PostcardRequestBuilder {
        PostcardRequestBuilder::default()
    }
}

impl ToParamMap for PostcardRequest {
    fn to_param_map(&self) -> ParamMap {
        let builder = ParamMapBuilder::new()
            .put("name", self.name.as_deref())
            .put("message", self.message.as_deref())
            .put("full_bleed", self.full_bleed)
            .put("setting", self.setting);
        let builder = self.to.encode("to", builder);
        match &self.from {
            Some(from) => from.encode("from", builder),
            None => builder,
        }
        .build()
    }
}

impl HasFileParams for PostcardRequest {
    fn file_params(&self) -> Vec<&FileParam> {
        let mut params = vec![&self.front];
        if let Some(back) = &self.back {
            params.push(back);
        }
        params
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostcardRequestBuilder {
    name: Option<String>,
    to: Option<AddressParam>,
    from: Option<AddressParam>,
    message: Option<String>,
    front: Option<FileParam>,
    back: Option<FileParam>,
    full_bleed: Option<bool>,
    setting: Option<SettingId>,
}

impl PostcardRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn to(mut self, to: impl Into<AddressParam>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn from(mut self, from: impl Into<AddressParam>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Front artwork fetched by the server from a URL.
    pub fn front(mut self, url: impl Into<String>) -> Self {
        self.front = Some(FileParam::url("front", url));
        self
    }

    /// Front artwork uploaded from a local file.
    pub fn front_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.front = Some(FileParam::path("front", path));
        self
    }

    /// Back artwork fetched by the server from a URL.
    pub fn back(mut self, url: impl Into<String>) -> Self {
        self.back = Some(FileParam::url("back", url));
        self
    }

    /// Back artwork uploaded from a local file.
    pub fn back_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.back = Some(FileParam::path("back", path));
        self
    }

    pub fn full_bleed(mut self, full_bleed: bool) -> Self {
        self.full_bleed = Some(full_bleed);
        self
    }

    pub fn setting(mut self, setting: SettingId) -> Self {
        self.setting = Some(setting);
        self
    }

    /// A pre-populated copy of this builder for partial mutation.
    pub fn but_with(&self) -> Self {
        self.clone()
    }

    pub fn build(self) -> Result<PostcardRequest, ValidationError> {
        Ok(PostcardRequest {
            name: self.name,
            to: self.to.ok_or(ValidationError::MissingField("to"))?,
            from: self.from,
            message: self.message,
            front: self.front.ok_or(ValidationError::MissingField("front"))?,
            back: self.back,
            full_bleed: self.full_bleed,
            setting: self.setting,
        })
    }
}
