//! Job creation requests.

use inkpost_id::{ObjectId, PackagingId, ServiceId};

use crate::error::ValidationError;
use crate::params::{HasFileParams, ParamMap, ParamMapBuilder, ToParamMap};

use super::AddressParam;

/// A mail job: one print object sent from one address to another.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRequest {
    pub name: Option<String>,
    pub to: AddressParam,
    pub from: AddressParam,
    pub object: ObjectId,
    pub packaging: Option<PackagingId>,
    pub service: Option<ServiceId>,
}

impl JobRequest {
    pub fn builder() -> JobRequestBuilder {
        JobRequestBuilder::default()
    }
}

impl ToParamMap for JobRequest {
    fn to_param_map(&self) -> ParamMap {
        let builder = ParamMapBuilder::new()
            .put("name", self.name.as_deref())
            .put("object", Some(&self.object))
            .put("packaging", self.packaging)
            .put("service", self.service);
        let builder = self.to.encode("to", builder);
        self.from.encode("from", builder).build()
    }
}

impl HasFileParams for JobRequest {}

#[derive(Debug, Clone, Default)]
pub struct JobRequestBuilder {
    name: Option<String>,
    to: Option<AddressParam>,
    from: Option<AddressParam>,
    object: Option<ObjectId>,
    packaging: Option<PackagingId>,
    service: Option<ServiceId>,
}

impl JobRequestBuilder {
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

    pub fn object(mut self, object: ObjectId) -> Self {
        self.object = Some(object);
        self
    }

    pub fn packaging(mut self, packaging: PackagingId) -> Self {
        self.packaging = Some(packaging);
        self
    }

    pub fn service(mut self, service: ServiceId) -> Self {
        self.service = Some(service);
        self
    }

    /// A pre-populated copy of this builder for partial mutation.
    pub fn but_with(&self) -> Self {
        self.clone()
    }

    pub fn build(self) -> Result<JobRequest, ValidationError> {
        Ok(JobRequest {
            name: self.name,
            to: self.to.ok_or(ValidationError::MissingField("to"))?,
            from: self.from.ok_or(ValidationError::MissingField("from"))?,
            object: self.object.ok_or(ValidationError::MissingField("object"))?,
            packaging: self.packaging,
            service: self.service,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::AddressRequest;
    use inkpost_id::AddressId;

    #[test]
    fn test_param_map_with_ids() {
        let request = JobRequest::builder()
            .to(AddressId::parse("adr_43769b47aed248c2").unwrap())
            .from(AddressId::parse("adr_7f9ece71fbca3796").unwrap())
            .object(ObjectId::parse("obj_7ca5f80b42b6dfca").unwrap())
            .build()
            .unwrap();
        let map = request.to_param_map();

        assert_eq!(map["to"], vec!["adr_43769b47aed248c2"]);
        assert_eq!(map["from"], vec!["adr_7f9ece71fbca3796"]);
        assert_eq!(map["object"], vec!["obj_7ca5f80b42b6dfca"]);
        assert!(!map.contains_key("name"));
        assert!(!map.contains_key("packaging"));
    }

    #[test]
    fn test_param_map_with_inline_address() {
        let to = AddressRequest::builder()
            .name("eric")
            .line1("123 main st")
            .build()
            .unwrap();
        let request = JobRequest::builder()
            .name("Michigan fan letter")
            .to(to)
            .from(AddressId::parse("adr_7f9ece71fbca3796").unwrap())
            .object(ObjectId::parse("obj_7ca5f80b42b6dfca").unwrap())
            .build()
            .unwrap();
        let map = request.to_param_map();

        assert_eq!(map["name"], vec!["Michigan fan letter"]);
        assert_eq!(map["to[name]"], vec!["eric"]);
        assert_eq!(map["to[line1]"], vec!["123 main st"]);
        assert!(!map.contains_key("to"));
    }

    #[test]
    fn test_required_fields() {
        let result = JobRequest::builder()
            .to(AddressId::parse("adr_43769b47aed248c2").unwrap())
            .build();
        assert_eq!(result.unwrap_err(), ValidationError::MissingField("from"));
    }
}
