//! Response value objects.
//!
//! Everything here derives `Deserialize` and ignores unknown JSON fields,
//! so new server-side fields never break older clients. Fields the server
//! may omit or null out are `Option` with a serde default.

mod address;
mod area_mail;
mod bank_account;
mod catalog;
mod check;
mod job;
mod list;
mod object;
mod postcard;

pub use address::AddressResponse;
pub use area_mail::AreaMailResponse;
pub use bank_account::BankAccountResponse;
pub use catalog::{
    CountryResponse, PackagingResponse, RouteResponse, ServiceResponse, SettingResponse,
    StateResponse, ZipCodeRouteResponse,
};
pub use check::CheckResponse;
pub use job::JobResponse;
pub use list::{DeleteResponse, ResponseList};
pub use object::ObjectResponse;
pub use postcard::PostcardResponse;
