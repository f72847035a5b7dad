//! Check creation requests.

use std::path::PathBuf;

use inkpost_id::BankAccountId;

use crate::error::ValidationError;
use crate::file::FileParam;
use crate::money::Money;
use crate::params::{HasFileParams, ParamMap, ParamMapBuilder, ToParamMap};

use super::AddressParam;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckRequest {
    pub name: Option<String>,
    pub to: AddressParam,
    pub bank_account: BankAccountId,
    pub amount: Money,
    pub memo: Option<String>,
    pub logo: Option<FileParam>,
}

impl CheckRequest {
    pub fn builder() -> CheckRequestBuilder {
        CheckRequestBuilder::default()
    }
}

impl ToParamMap for CheckRequest {
    fn to_param_map(&self) -> ParamMap {
        let builder = ParamMapBuilder::new()
            .put("name", self.name.as_deref())
            .put("bank_account", Some(&self.bank_account))
            .put("amount", Some(&self.amount))
            .put("memo", self.memo.as_deref());
        self.to.encode("to", builder).build()
    }
}

impl HasFileParams for CheckRequest {
    fn file_params(&self) -> Vec<&FileParam> {
        self.logo.iter().collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckRequestBuilder {
    name: Option<String>,
    to: Option<AddressParam>,
    bank_account: Option<BankAccountId>,
    amount: Option<Money>,
    memo: Option<String>,
    logo: Option<FileParam>,
}

impl CheckRequestBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn to(mut self, to: impl Into<AddressParam>) -> Self {
        self.to = Some(to.into());
        self
    }

    pub fn bank_account(mut self, bank_account: BankAccountId) -> Self {
        self.bank_account = Some(bank_account);
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Check logo fetched by the server from a URL.
    pub fn logo(mut self, url: impl Into<String>) -> Self {
        self.logo = Some(FileParam::url("logo", url));
        self
    }

    /// Check logo uploaded from a local file.
    pub fn logo_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logo = Some(FileParam::path("logo", path));
        self
    }

    /// A pre-populated copy of this builder for partial mutation.
    pub fn but_with(&self) -> Self {
        self.clone()
    }

    pub fn build(self) -> Result<CheckRequest, ValidationError> {
        Ok(CheckRequest {
            name: self.name,
            to: self.to.ok_or(ValidationError::MissingField("to"))?,
            bank_account: self
                .bank_account
                .ok_or(ValidationError::MissingField("bank_account"))?,
            amount: self.amount.ok_or(ValidationError::MissingField("amount"))?,
            memo: self.memo,
            logo: self.logo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpost_id::AddressId;
    use rust_decimal::Decimal;

    #[test]
    fn test_amount_encodes_as_decimal_string() {
        let request = CheckRequest::builder()
            .name("test check")
            .to(AddressId::parse("adr_43769b47aed248c2").unwrap())
            .bank_account(BankAccountId::parse("bnk_7f9ece71fbca3796").unwrap())
            .amount(Money::usd(Decimal::new(2000, 2)))
            .memo("rent")
            .build()
            .unwrap();
        let map = request.to_param_map();

        assert_eq!(map["amount"], vec!["20.00"]);
        assert_eq!(map["bank_account"], vec!["bnk_7f9ece71fbca3796"]);
        assert_eq!(map["memo"], vec!["rent"]);
    }

    #[test]
    fn test_amount_required() {
        let result = CheckRequest::builder()
            .to(AddressId::parse("adr_43769b47aed248c2").unwrap())
            .bank_account(BankAccountId::parse("bnk_7f9ece71fbca3796").unwrap())
            .build();
        assert_eq!(result.unwrap_err(), ValidationError::MissingField("amount"));
    }
}
