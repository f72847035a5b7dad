//! Area-mail campaign requests: one piece delivered to every stop on a set
//! of carrier routes.

use std::path::PathBuf;

use inkpost_id::ZipCodeRouteId;

use crate::error::ValidationError;
use crate::file::FileParam;
use crate::params::{HasFileParams, ParamMap, ParamMapBuilder, ToParamMap};

/// Which stops on the selected routes receive mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    All,
    Residential,
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Residential => "residential",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AreaMailRequest {
    pub name: Option<String>,
    pub front: FileParam,
    pub back: FileParam,
    pub routes: Vec<ZipCodeRouteId>,
    pub target_type: Option<TargetType>,
    pub full_bleed: Option<bool>,
}

impl AreaMailRequest {
    pub fn builder() -> AreaMailRequestBuilder {
        AreaMailRequestBuilder::default()
    }
}

impl ToParamMap for AreaMailRequest {
    fn to_param_map(&self) -> ParamMap {
        ParamMapBuilder::new()
            .put("name", self.name.as_deref())
            .put_joined("routes", &self.routes)
            .put("target_type", self.target_type)
            .put("full_bleed", self.full_bleed)
            .build()
    }
}

impl HasFileParams for AreaMailRequest {
    fn file_params(&self) -> Vec<&FileParam> {
        vec![&self.front, &self.back]
    }
}

#[derive(Debug, Clone, Default)]
pub struct AreaMailRequestBuilder {
    name: Option<String>,
    front: Option<FileParam>,
    back: Option<FileParam>,
    routes: Vec<ZipCodeRouteId>,
    target_type: Option<TargetType>,
    full_bleed: Option<bool>,
}

impl AreaMailRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
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

    /// Replaces the route list.
    pub fn routes(mut self, routes: impl IntoIterator<Item = ZipCodeRouteId>) -> Self {
        self.routes = routes.into_iter().collect();
        self
    }

    pub fn target_type(mut self, target_type: TargetType) -> Self {
        self.target_type = Some(target_type);
        self
    }

    pub fn full_bleed(mut self, full_bleed: bool) -> Self {
        self.full_bleed = Some(full_bleed);
        self
    }

    /// A pre-populated copy of this builder for partial mutation.
    pub fn but_with(&self) -> Self {
        self.clone()
    }

    pub fn build(self) -> Result<AreaMailRequest, ValidationError> {
        if self.routes.is_empty() {
            return Err(ValidationError::invalid(
                "routes",
                "at least one route is required",
            ));
        }

        Ok(AreaMailRequest {
            name: self.name,
            front: self.front.ok_or(ValidationError::MissingField("front"))?,
            back: self.back.ok_or(ValidationError::MissingField("back"))?,
            routes: self.routes,
            target_type: self.target_type,
            full_bleed: self.full_bleed,
        })
    }
}
