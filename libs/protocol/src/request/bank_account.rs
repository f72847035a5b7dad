//! Bank account creation and verification requests.

use inkpost_id::BankAccountId;

use crate::error::ValidationError;
use crate::params::{HasFileParams, ParamMap, ParamMapBuilder, ToParamMap};

use super::AddressParam;

#[derive(Debug, Clone, PartialEq)]
pub struct BankAccountRequest {
    pub name: Option<String>,
    pub routing_number: String,
    pub account_number: String,
    pub bank_address: AddressParam,
    pub account_address: AddressParam,
    pub signatory: String,
}

impl BankAccountRequest {
    pub fn builder() -> BankAccountRequestBuilder {
        BankAccountRequestBuilder::default()
    }
}

impl ToParamMap for BankAccountRequest {
    fn to_param_map(&self) -> ParamMap {
        let builder = ParamMapBuilder::new()
            .put("name", self.name.as_deref())
            .put("routing_number", Some(&self.routing_number))
            .put("account_number", Some(&self.account_number))
            .put("signatory", Some(&self.signatory));
        let builder = self.bank_address.encode("bank_address", builder);
        self.account_address
            .encode("account_address", builder)
            .build()
    }
}

impl HasFileParams for BankAccountRequest {}

#[derive(Debug, Clone, Default)]
pub struct BankAccountRequestBuilder {
    name: Option<String>,
    routing_number: Option<String>,
    account_number: Option<String>,
    bank_address: Option<AddressParam>,
    account_address: Option<AddressParam>,
    signatory: Option<String>,
}

impl BankAccountRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn routing_number(mut self, routing_number: impl Into<String>) -> Self {
        self.routing_number = Some(routing_number.into());
        self
    }

    pub fn account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    pub fn bank_address(mut self, bank_address: impl Into<AddressParam>) -> Self {
        self.bank_address = Some(bank_address.into());
        self
    }

    pub fn account_address(mut self, account_address: impl Into<AddressParam>) -> Self {
        self.account_address = Some(account_address.into());
        self
    }

    pub fn signatory(mut self, signatory: impl Into<String>) -> Self {
        self.signatory = Some(signatory.into());
        self
    }

    /// A pre-populated copy of this builder for partial mutation.
    pub fn but_with(&self) -> Self {
        self.clone()
    }

    pub fn build(self) -> Result<BankAccountRequest, ValidationError> {
        Ok(BankAccountRequest {
            name: self.name,
            routing_number: self
                .routing_number
                .ok_or(ValidationError::MissingField("routing_number"))?,
            account_number: self
                .account_number
                .ok_or(ValidationError::MissingField("account_number"))?,
            bank_address: self
                .bank_address
                .ok_or(ValidationError::MissingField("bank_address"))?,
            account_address: self
                .account_address
                .ok_or(ValidationError::MissingField("account_address"))?,
            signatory: self
                .signatory
                .ok_or(ValidationError::MissingField("signatory"))?,
        })
    }
}

/// Verification of a bank account with the two micro-deposit amounts, in
/// cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankAccountVerifyRequest {
    pub id: BankAccountId,
    pub amounts: [i64; 2],
}

impl BankAccountVerifyRequest {
    pub fn builder() -> BankAccountVerifyRequestBuilder {
        BankAccountVerifyRequestBuilder::default()
    }
}

impl ToParamMap for BankAccountVerifyRequest {
    fn to_param_map(&self) -> ParamMap {
        ParamMapBuilder::new()
            .put_repeated("amounts[]", &self.amounts)
            .build()
    }
}

impl HasFileParams for BankAccountVerifyRequest {}

#[derive(Debug, Clone, Default)]
pub struct BankAccountVerifyRequestBuilder {
    id: Option<BankAccountId>,
    amounts: Option<[i64; 2]>,
}

impl BankAccountVerifyRequestBuilder {
    pub fn id(mut self, id: BankAccountId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn amounts(mut self, first: i64, second: i64) -> Self {
        self.amounts = Some([first, second]);
        self
    }

    /// A pre-populated copy of this builder for partial mutation.
    pub fn but_with(&self) -> Self {
        self.clone()
    }

    pub fn build(self) -> Result<BankAccountVerifyRequest, ValidationError> {
        Ok(BankAccountVerifyRequest {
            id: self.id.ok_or(ValidationError::MissingField("id"))?,
            amounts: self
                .amounts
                .ok_or(ValidationError::MissingField("amounts"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::AddressRequest;
    use inkpost_id::AddressId;

    #[test]
    fn test_inline_addresses_use_bracketed_keys() {
        let bank_address = AddressRequest::builder()
            .name("Chase Bank")
            .line1("185 Berry Street")
            .build()
            .unwrap();
        let request = BankAccountRequest::builder()
            .routing_number("122100024")
            .account_number("123456789")
            .bank_address(bank_address)
            .account_address(AddressId::parse("adr_43769b47aed248c2").unwrap())
            .signatory("John Doe")
            .build()
            .unwrap();
        let map = request.to_param_map();

        assert_eq!(map["bank_address[name]"], vec!["Chase Bank"]);
        assert_eq!(map["bank_address[line1]"], vec!["185 Berry Street"]);
        assert_eq!(map["account_address"], vec!["adr_43769b47aed248c2"]);
        assert_eq!(map["routing_number"], vec!["122100024"]);
    }

    #[test]
    fn test_signatory_required() {
        let result = BankAccountRequest::builder()
            .routing_number("122100024")
            .account_number("123456789")
            .bank_address(AddressId::parse("adr_43769b47aed248c2").unwrap())
            .account_address(AddressId::parse("adr_43769b47aed248c2").unwrap())
            .build();
        assert_eq!(
            result.unwrap_err(),
            ValidationError::MissingField("signatory")
        );
    }

    #[test]
    fn test_verify_amounts_repeat_key() {
        let request = BankAccountVerifyRequest::builder()
            .id(BankAccountId::parse("bnk_7f9ece71fbca3796").unwrap())
            .amounts(20, 40)
            .build()
            .unwrap();
        let map = request.to_param_map();

        assert_eq!(map["amounts[]"], vec!["20", "40"]);
    }
}
