//! # inkpost-protocol
//!
//! Wire-level value objects for the inkpost print API: typed request
//! records with builders, parameter-map encoding for form submission, and
//! JSON response records.
//!
//! Requests encode to a flat string multimap (`ParamMap`) suitable for an
//! `application/x-www-form-urlencoded` body; fields that may carry an
//! uploaded file are kept out of the string map and surfaced through
//! [`HasFileParams`] so the transport can attach them as multipart parts.
//! Responses deserialize tolerantly: unknown JSON fields are ignored.

pub mod error;
pub mod file;
pub mod money;
pub mod params;
pub mod request;
pub mod response;

pub use error::ValidationError;
pub use file::{FileParam, FileSource};
pub use money::Money;
pub use params::{HasFileParams, ParamMap, ParamMapBuilder, ToParamMap};
