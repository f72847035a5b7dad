//! Address creation requests.

use crate::error::ValidationError;
use crate::params::{HasFileParams, ParamMap, ParamMapBuilder, ToParamMap};

/// A stored-address creation request, also usable inline inside other
/// requests via [`super::AddressParam`].
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRequest {
    pub name: Option<String>,
    pub line1: String,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl AddressRequest {
    pub fn builder() -> AddressRequestBuilder {
        AddressRequestBuilder::default()
    }
}

impl ToParamMap for AddressRequest {
    fn to_param_map(&self) -> ParamMap {
        ParamMapBuilder::new()
            .put("name", self.name.as_deref())
            .put("line1", Some(&self.line1))
            .put("line2", self.line2.as_deref())
            .put("city", self.city.as_deref())
            .put("state", self.state.as_deref())
            .put("zip", self.zip.as_deref())
            .put("country", self.country.as_deref())
            .put("email", self.email.as_deref())
            .put("phone", self.phone.as_deref())
            .build()
    }
}

impl HasFileParams for AddressRequest {}

#[derive(Debug, Clone, Default)]
pub struct AddressRequestBuilder {
    name: Option<String>,
    line1: Option<String>,
    line2: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    country: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl AddressRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn line1(mut self, line1: impl Into<String>) -> Self {
        self.line1 = Some(line1.into());
        self
    }

    pub fn line2(mut self, line2: impl Into<String>) -> Self {
        self.line2 = Some(line2.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = Some(zip.into());
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// A pre-populated copy of this builder for partial mutation.
    pub fn but_with(&self) -> Self {
        self.clone()
    }

    pub fn build(self) -> Result<AddressRequest, ValidationError> {
        Ok(AddressRequest {
            name: self.name,
            line1: self.line1.ok_or(ValidationError::MissingField("line1"))?,
            line2: self.line2,
            city: self.city,
            state: self.state,
            zip: self.zip,
            country: self.country,
            email: self.email,
            phone: self.phone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_builder() -> AddressRequestBuilder {
        AddressRequest::builder()
            .name("eric")
            .line1("123 main st")
            .city("san francisco")
            .state("ca")
            .zip("94107")
            .country("US")
    }

    #[test]
    fn test_param_map_omits_unset() {
        let request = base_builder().build().unwrap();
        let map = request.to_param_map();

        assert_eq!(map["line1"], vec!["123 main st"]);
        assert_eq!(map["country"], vec!["US"]);
        assert!(!map.contains_key("line2"));
        assert!(!map.contains_key("email"));
    }

    #[test]
    fn test_line1_required() {
        let result = AddressRequest::builder().name("eric").build();
        assert_eq!(
            result.unwrap_err(),
            ValidationError::MissingField("line1")
        );
    }

    #[test]
    fn test_but_with_overrides_only_named_fields() {
        let original = base_builder();
        let variant = original.but_with().name("peter").line1("850 Berry");

        let original = original.build().unwrap();
        let variant = variant.build().unwrap();

        assert_eq!(variant.name.as_deref(), Some("peter"));
        assert_eq!(variant.line1, "850 Berry");
        assert_eq!(variant.city, original.city);
        assert_eq!(variant.zip, original.zip);
    }

    #[test]
    fn test_but_with_no_overrides_is_identical() {
        let builder = base_builder();
        assert_eq!(
            builder.but_with().build().unwrap(),
            builder.build().unwrap()
        );
    }
}
