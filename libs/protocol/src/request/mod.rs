//! Request value objects.
//!
//! Each resource has an immutable request record plus a builder. Builders
//! hold every field as an `Option`, validate required fields in `build()`
//! (synchronously, before any network call), and expose `but_with()` — a
//! pre-populated copy of the builder so near-identical variants don't
//! repeat every unrelated field.

mod address;
mod area_mail;
mod bank_account;
mod check;
mod job;
mod object;
mod postcard;
mod zip_code_route;

pub use address::{AddressRequest, AddressRequestBuilder};
pub use area_mail::{AreaMailRequest, AreaMailRequestBuilder, TargetType};
pub use bank_account::{
    BankAccountRequest, BankAccountRequestBuilder, BankAccountVerifyRequest,
    BankAccountVerifyRequestBuilder,
};
pub use check::{CheckRequest, CheckRequestBuilder};
pub use job::{JobRequest, JobRequestBuilder};
pub use object::{ObjectRequest, ObjectRequestBuilder};
pub use postcard::{PostcardRequest, PostcardRequestBuilder};
pub use zip_code_route::{ZipCodeRouteRequest, ZipCodeRouteRequestBuilder};

use inkpost_id::AddressId;

use crate::params::{ParamMapBuilder, ToParamMap};

/// An address-valued field: either the id of a stored address or an inline
/// address created alongside the parent resource.
#[derive(Debug, Clone, PartialEq)]
pub enum AddressParam {
    Id(AddressId),
    Inline(AddressRequest),
}

impl AddressParam {
    /// Encodes onto `builder`: ids as a single `key=<id>` value, inline
    /// addresses as bracketed `key[field]` subkeys.
    pub(crate) fn encode(&self, key: &str, builder: ParamMapBuilder) -> ParamMapBuilder {
        match self {
            Self::Id(id) => builder.put(key, Some(id)),
            Self::Inline(address) => builder.put_nested(key, address.to_param_map()),
        }
    }
}

impl From<AddressId> for AddressParam {
    fn from(id: AddressId) -> Self {
        Self::Id(id)
    }
}

impl From<AddressRequest> for AddressParam {
    fn from(request: AddressRequest) -> Self {
        Self::Inline(request)
    }
}
